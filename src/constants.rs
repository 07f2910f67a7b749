//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and version information.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Patterndex";

/// The binary name of the application (used in command examples and as the
/// config directory name).
pub const APP_BINARY_NAME: &str = "patterndex";

/// Crate version, reported by `/health` and `--version`.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
