//! `show` command: the detail view of one record.

use crate::catalog::{resolve, CatalogRecord, SectionKey};
use crate::cli::common::{load_section, parse_section, print_json, CliError, CliResult};
use crate::routes::Route;
use clap::Args;
use serde::Serialize;

/// Show one record in full
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Section key or route segment
    #[arg(value_name = "SECTION")]
    pub section: String,

    /// Record id (e.g., "singleton")
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct DetailResponse<'a> {
    section: &'static str,
    back: String,
    #[serde(flatten)]
    record: &'a CatalogRecord,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let section = parse_section(&self.section)?;
        show_record(section, &self.id, self.json)
    }
}

/// Loads `section`, resolves `id` and prints the detail view.
///
/// A missing record is a not-found error (exit code 3).
pub fn show_record(section: SectionKey, id: &str, json: bool) -> CliResult<()> {
    let data = load_section(section)?;
    let record = resolve(&data, Some(id)).ok_or_else(|| {
        CliError::not_found(format!("Not found: no entry '{id}' in {}", section.as_str()))
    })?;

    let back = Route::List { section }.path();

    if json {
        return print_json(&DetailResponse {
            section: section.as_str(),
            back,
            record,
        });
    }

    match record.letter {
        Some(letter) => println!("{letter}  {}", record.name),
        None => println!("{}", record.name),
    }
    println!("Category: {}", record.category);
    if let Some(rating) = record.rating {
        println!("Rating:   {} ({rating})", rating.stars());
    }
    println!();
    println!("{}", record.short_description);
    println!();
    println!("{}", record.description);

    if let Some(code) = &record.code_example {
        println!("\nCode:\n");
        print_indented(code);
    }
    if let Some(markup) = &record.markup_example {
        println!("\nMarkup:\n");
        print_indented(markup);
    }

    println!("\nBack: {back}");
    Ok(())
}

fn print_indented(text: &str) {
    for line in text.lines() {
        println!("    {line}");
    }
}
