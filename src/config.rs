//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use crate::catalog::SectionKey;
use crate::constants::APP_BINARY_NAME;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "PATTERNDEX_CONFIG_DIR";

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Name as shown in `config show`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => anyhow::bail!("Invalid theme mode '{other}'. Valid values: auto, dark, light"),
        }
    }
}

/// Catalog browsing preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Section opened on startup (canonical key, e.g., "patterns")
    #[serde(default = "default_section")]
    pub default_section: String,
}

fn default_section() -> String {
    SectionKey::Patterns.as_str().to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_section: default_section(),
        }
    }
}

impl CatalogConfig {
    /// Parsed default section, falling back to patterns.
    #[must_use]
    pub fn section(&self) -> SectionKey {
        self.default_section.parse().unwrap_or(SectionKey::Patterns)
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Web server defaults; command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3001
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/patterndex/config.toml`
/// - macOS: `~/Library/Application Support/patterndex/config.toml`
/// - Windows: `%APPDATA%\patterndex\config.toml`
///
/// `PATTERNDEX_CONFIG_DIR` replaces the directory on every platform.
///
/// # Validation
///
/// - `default_section` must be a catalog section key
/// - `web.host` must not be empty
/// - `web.port` must not be 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Catalog preferences
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Web server defaults
    #[serde(default)]
    pub web: WebConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Uses `PATTERNDEX_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `patterndex`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_BINARY_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Gets the full path to the persisted state file (consent flag).
    pub fn state_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("state.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        match self.catalog.default_section.parse::<SectionKey>() {
            Ok(section) if section.is_catalog() => {}
            _ => anyhow::bail!(
                "Invalid default_section '{}'. Valid values: {}",
                self.catalog.default_section,
                SectionKey::catalog_sections()
                    .map(SectionKey::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }

        if self.web.host.trim().is_empty() {
            anyhow::bail!("web.host must not be empty");
        }
        if self.web.port == 0 {
            anyhow::bail!("web.port must not be 0");
        }

        Ok(())
    }

    /// Sets the default section with validation.
    ///
    /// Accepts either a canonical key or a route segment.
    pub fn set_default_section(&mut self, name: &str) -> Result<()> {
        let section = SectionKey::lookup(name)
            .with_context(|| format!("Unknown section: {name}"))?;
        self.catalog.default_section = section.as_str().to_string();
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.catalog.default_section, "patterns");
        assert_eq!(config.catalog.section(), SectionKey::Patterns);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.web.host, "127.0.0.1");
        assert_eq!(config.web.port, 3001);
    }

    #[test]
    fn test_config_validate() {
        let config = Config::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_rejects_architecture_and_unknown() {
        let mut config = Config::new();
        config.catalog.default_section = "architecture".to_string();
        assert!(config.validate().is_err());
        config.catalog.default_section = "classic".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_web() {
        let mut config = Config::new();
        config.web.port = 0;
        assert!(config.validate().is_err());
        config.web.port = 8080;
        config.web.host = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_set_default_section_accepts_segment() {
        let mut config = Config::new();
        config.set_default_section("classic").unwrap();
        assert_eq!(config.catalog.default_section, "classic-patterns");
        assert!(config.set_default_section("nope").is_err());
    }

    #[test]
    fn test_theme_mode_from_str() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Light;
        config.web.port = 8088;

        // Manually save to temp location for testing
        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let loaded: Config = toml::from_str("[ui]\ntheme_mode = \"Dark\"\n").unwrap();
        assert_eq!(loaded.ui.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.catalog, CatalogConfig::default());
        assert_eq!(loaded.web, WebConfig::default());
    }
}
