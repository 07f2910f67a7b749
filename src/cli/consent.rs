//! Cookie-consent commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::consent::{ConsentState, ConsentStore};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Read or record the analytics consent decision
#[derive(Args, Debug)]
pub struct ConsentArgs {
    #[command(subcommand)]
    command: ConsentCommand,
}

#[derive(Subcommand, Debug)]
enum ConsentCommand {
    /// Display the current decision
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Allow optional analytics
    Accept,
    /// Refuse optional analytics
    Reject,
}

#[derive(Serialize, Debug)]
struct ConsentOutput {
    state: ConsentState,
    analytics_enabled: bool,
    path: String,
}

impl ConsentArgs {
    /// Execute consent subcommand
    pub fn execute(&self) -> CliResult<()> {
        let path = Config::state_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate state file: {e}")))?;
        let mut store = ConsentStore::load(&path)
            .map_err(|e| CliError::io(format!("Failed to load consent state: {e}")))?;

        match &self.command {
            ConsentCommand::Show { json } => {
                let output = ConsentOutput {
                    state: store.state(),
                    analytics_enabled: store.analytics_enabled(),
                    path: path.to_string_lossy().to_string(),
                };
                if *json {
                    return print_json(&output);
                }
                println!("Consent: {}", output.state);
                println!("State file: {}", output.path);
            }
            ConsentCommand::Accept => {
                store
                    .accept()
                    .map_err(|e| CliError::io(format!("Failed to save consent: {e}")))?;
                println!("Consent: accepted");
            }
            ConsentCommand::Reject => {
                store
                    .reject()
                    .map_err(|e| CliError::io(format!("Failed to save consent: {e}")))?;
                println!("Consent: rejected");
            }
        }

        Ok(())
    }
}
