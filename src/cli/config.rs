//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Section opened on startup (key or route segment)
    #[arg(long, value_name = "SECTION")]
    default_section: Option<String>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Web server bind address
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Web server port
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    path: String,
    catalog: CatalogOutput<'a>,
    ui: UiOutput,
    web: WebOutput<'a>,
}

#[derive(Serialize, Debug)]
struct CatalogOutput<'a> {
    default_section: &'a str,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: &'static str,
}

#[derive(Serialize, Debug)]
struct WebOutput<'a> {
    host: &'a str,
    port: u16,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate config file: {e}")))?;

        let output = ConfigOutput {
            path: path.to_string_lossy().to_string(),
            catalog: CatalogOutput {
                default_section: &config.catalog.default_section,
            },
            ui: UiOutput {
                theme: config.ui.theme_mode.as_str(),
            },
            web: WebOutput {
                host: &config.web.host,
                port: config.web.port,
            },
        };

        if self.json {
            return print_json(&output);
        }

        println!("Config file: {}", output.path);
        println!();
        println!("[catalog]");
        println!("  default_section = {}", output.catalog.default_section);
        println!("[ui]");
        println!("  theme           = {}", output.ui.theme);
        println!("[web]");
        println!("  host            = {}", output.web.host);
        println!("  port            = {}", output.web.port);

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.default_section.is_none()
            && self.theme.is_none()
            && self.host.is_none()
            && self.port.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --default-section, --theme, --host, or --port",
            ));
        }

        // Load current configuration
        let mut config = Config::load().unwrap_or_default();

        if let Some(section) = &self.default_section {
            config
                .set_default_section(section)
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(theme) = &self.theme {
            config.ui.theme_mode = theme
                .parse::<ThemeMode>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(host) = &self.host {
            config.web.host.clone_from(host);
        }

        if let Some(port) = self.port {
            config.web.port = port;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}
