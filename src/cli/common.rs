//! Shared CLI plumbing: error type, exit codes, and catalog access.

use crate::catalog::{CatalogLoader, DataSet, SectionKey};
use serde::Serialize;
use std::fmt;

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// I/O or internal failure
    IoError = 1,
    /// Invalid input, unknown section, or failed content validation
    ValidationError = 2,
    /// Requested record does not exist
    NotFound = 3,
}

/// Error returned by CLI commands; carries its exit code.
#[derive(Debug)]
pub struct CliError {
    /// Exit code category
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// I/O or internal failure (exit code 1).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Invalid input or content (exit code 2).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Missing record (exit code 3).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::NotFound,
            message: message.into(),
        }
    }

    /// Numeric process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind as i32
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Resolves a section name given on the command line.
///
/// Accepts route segments (`classic`) as well as canonical keys
/// (`classic-patterns`).
pub fn parse_section(name: &str) -> CliResult<SectionKey> {
    SectionKey::lookup(name).ok_or_else(|| {
        CliError::validation(format!(
            "Unknown section: {name}. Run 'patterndex sections' to list sections."
        ))
    })
}

/// Loads one section through a fresh loader on a current-thread runtime.
pub fn load_section(section: SectionKey) -> CliResult<DataSet> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .map_err(|e| CliError::io(format!("Failed to start async runtime: {e}")))?;

    let loader = CatalogLoader::embedded();
    runtime
        .block_on(loader.load(section.as_str()))
        .map_err(|e| CliError::validation(e.to_string()))
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
