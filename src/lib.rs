//! Patterndex Library
//!
//! This library provides the core of the Patterndex catalog browser: the
//! section catalog with its lazy loader, list and detail views, URL routing,
//! the persisted consent flag, and the terminal and web front ends built on
//! top of them.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod config;
pub mod consent;
pub mod constants;
pub mod loading;
pub mod routes;
#[cfg(feature = "ratatui")]
pub mod tui;
#[cfg(feature = "web")]
pub mod web;

/// Installs the stderr `tracing` subscriber used by the binaries.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` applies, raised to
/// `debug` when `verbose` is set.
pub fn init_tracing(default_level: &str, verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = if verbose { "debug" } else { default_level };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
