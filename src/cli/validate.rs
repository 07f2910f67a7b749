//! Validation command for the embedded catalog content.

use crate::catalog::{self, SectionKey, ValidationIssue};
use crate::cli::common::{print_json, CliError, CliResult};
use clap::Args;
use serde::Serialize;

/// Validate catalog content (unique, URL-safe ids and non-empty fields)
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ValidationResponse<'a> {
    valid: bool,
    sections: usize,
    issues: &'a [ValidationIssue],
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let issues = catalog::validate_embedded()
            .map_err(|e| CliError::validation(format!("Content failed to load: {e}")))?;

        let response = ValidationResponse {
            valid: issues.is_empty(),
            sections: SectionKey::catalog_sections().count(),
            issues: &issues,
        };

        if self.json {
            print_json(&response)?;
        } else if response.valid {
            println!("✓ Validation passed ({} sections)", response.sections);
        } else {
            println!("✗ Validation failed\n\nIssues:");
            for issue in &issues {
                println!("  ✗ {issue}");
            }
        }

        if !response.valid {
            return Err(CliError::validation(format!(
                "{} content issue(s) found",
                issues.len()
            )));
        }

        Ok(())
    }
}
