//! `sections` command: lists every section.

use crate::catalog::SectionKey;
use crate::cli::common::{load_section, print_json, CliResult};
use clap::Args;
use serde::Serialize;

/// List all sections
#[derive(Debug, Clone, Args)]
pub struct SectionsArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SectionItem {
    key: &'static str,
    segment: &'static str,
    title: &'static str,
    records: usize,
}

#[derive(Debug, Serialize)]
struct SectionsResponse {
    sections: Vec<SectionItem>,
    count: usize,
}

impl SectionsArgs {
    /// Execute the sections command
    pub fn execute(&self) -> CliResult<()> {
        let sections = SectionKey::ALL
            .into_iter()
            .map(|section| -> CliResult<SectionItem> {
                Ok(SectionItem {
                    key: section.as_str(),
                    segment: section.route_segment(),
                    title: section.title(),
                    records: load_section(section)?.len(),
                })
            })
            .collect::<CliResult<Vec<_>>>()?;

        let response = SectionsResponse {
            count: sections.len(),
            sections,
        };

        if self.json {
            return print_json(&response);
        }

        println!("Sections ({}):\n", response.count);
        for item in &response.sections {
            println!(
                "  {:<22} /{:<22} {:>3}  {}",
                item.key, item.segment, item.records, item.title
            );
        }

        Ok(())
    }
}
