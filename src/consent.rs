//! Cookie-consent flag persisted across runs.
//!
//! The flag lives in `state.toml` in the config directory under the key
//! `cookie-consent`. Other keys in that file are preserved on write.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// Key the consent flag is stored under.
pub const STORAGE_KEY: &str = "cookie-consent";

/// User decision on optional analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentState {
    /// No decision yet; the banner is shown
    #[default]
    Pending,
    /// Analytics allowed
    Accepted,
    /// Analytics refused
    Rejected,
}

impl ConsentState {
    /// Stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Reads a stored value. Anything unrecognized counts as no decision.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for ConsentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsentState {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            other => anyhow::bail!(
                "Invalid consent state '{other}'. Valid values: pending, accepted, rejected"
            ),
        }
    }
}

/// Consent flag backed by a TOML state file.
#[derive(Debug, Clone)]
pub struct ConsentStore {
    path: PathBuf,
    state: ConsentState,
}

impl ConsentStore {
    /// Reads the flag from `path`.
    ///
    /// A missing file, a missing key, or an unrecognized value all yield
    /// [`ConsentState::Pending`].
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let table = read_table(&path)?;
        let state = table
            .get(STORAGE_KEY)
            .and_then(toml::Value::as_str)
            .map(ConsentState::from_stored)
            .unwrap_or_default();

        debug!(path = %path.display(), %state, "consent state loaded");
        Ok(Self { path, state })
    }

    /// In-memory store that is never written; used where no config
    /// directory is available.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            path: PathBuf::new(),
            state: ConsentState::Pending,
        }
    }

    /// Current decision.
    #[must_use]
    pub const fn state(&self) -> ConsentState {
        self.state
    }

    /// Returns true while the user has not decided.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state == ConsentState::Pending
    }

    /// Returns true if optional analytics may run.
    #[must_use]
    pub fn analytics_enabled(&self) -> bool {
        self.state == ConsentState::Accepted
    }

    /// Records acceptance and persists it.
    pub fn accept(&mut self) -> Result<()> {
        self.set(ConsentState::Accepted)
    }

    /// Records rejection and persists it.
    pub fn reject(&mut self) -> Result<()> {
        self.set(ConsentState::Rejected)
    }

    /// Startup hook: reports whether analytics should be initialized for a
    /// decision stored by an earlier run.
    pub fn initialize_if_consented(&self) -> bool {
        let enabled = self.analytics_enabled();
        if enabled {
            info!("analytics consent on record");
        }
        enabled
    }

    /// Sets and persists a decision.
    ///
    /// Setting `Pending` clears an earlier decision.
    pub fn set(&mut self, state: ConsentState) -> Result<()> {
        if !self.path.as_os_str().is_empty() {
            write_state(&self.path, state)?;
        }
        self.state = state;
        info!(%state, "consent updated");
        Ok(())
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_table(path: &Path) -> Result<toml::Table> {
    if !path.exists() {
        return Ok(toml::Table::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file: {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse state file: {}", path.display()))
}

fn write_state(path: &Path, state: ConsentState) -> Result<()> {
    let mut table = read_table(path)?;
    table.insert(
        STORAGE_KEY.to_string(),
        toml::Value::String(state.as_str().to_string()),
    );

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create state directory: {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(&table).context("Failed to serialize state")?;
    let temp_path = path.with_extension("toml.tmp");

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp state file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp state file to: {}", path.display()))?;

    Ok(())
}
