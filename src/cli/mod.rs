//! CLI command handlers for Patterndex.
//!
//! This module provides headless, scriptable access to the catalog for
//! automation, testing, and CI integration.

pub mod common;
pub mod config;
pub mod consent;
pub mod list;
pub mod open;
pub mod sections;
pub mod show;
pub mod validate;

use clap::Subcommand;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use consent::ConsentArgs;
pub use list::{CategoriesArgs, ListArgs};
pub use open::OpenArgs;
pub use sections::SectionsArgs;
pub use show::ShowArgs;
pub use validate::ValidateArgs;

/// Headless subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all sections
    Sections(SectionsArgs),
    /// List the records of a section
    List(ListArgs),
    /// List the categories of a section
    Categories(CategoriesArgs),
    /// Show one record in full
    Show(ShowArgs),
    /// Open a page by URL path
    Open(OpenArgs),
    /// Validate catalog content
    Validate(ValidateArgs),
    /// Read or record the analytics consent decision
    Consent(ConsentArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    /// Runs the subcommand.
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Self::Sections(args) => args.execute(),
            Self::List(args) => args.execute(),
            Self::Categories(args) => args.execute(),
            Self::Show(args) => args.execute(),
            Self::Open(args) => args.execute(),
            Self::Validate(args) => args.execute(),
            Self::Consent(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}
