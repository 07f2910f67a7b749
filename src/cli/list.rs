//! `list` and `categories` commands: the list view of a section.

use crate::catalog::{parse_category_filter, CatalogRecord, ListViewModel, SectionKey};
use crate::cli::common::{load_section, parse_section, print_json, CliResult};
use clap::Args;
use serde::Serialize;

/// List the records of a section
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Section key or route segment (e.g., "solid", "classic")
    #[arg(value_name = "SECTION")]
    pub section: String,

    /// Only show records in this category ("all" for every record)
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// List the distinct categories of a section
#[derive(Debug, Clone, Args)]
pub struct CategoriesArgs {
    /// Section key or route segment
    #[arg(value_name = "SECTION")]
    pub section: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ListItem<'a> {
    id: &'a str,
    name: &'a str,
    category: &'a str,
    short_description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    letter: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rating: Option<u8>,
}

#[derive(Debug, Serialize)]
struct ListResponse<'a> {
    section: &'static str,
    title: &'static str,
    category: Option<&'a str>,
    categories: Vec<&'a str>,
    items: Vec<ListItem<'a>>,
    count: usize,
}

#[derive(Debug, Serialize)]
struct CategoriesResponse<'a> {
    section: &'static str,
    categories: Vec<&'a str>,
    count: usize,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let section = parse_section(&self.section)?;
        let mut view = ListViewModel::new(load_section(section)?);
        view.select(self.category.as_deref().and_then(parse_category_filter));
        print_list(section, &view, self.json)
    }
}

impl CategoriesArgs {
    /// Execute the categories command
    pub fn execute(&self) -> CliResult<()> {
        let section = parse_section(&self.section)?;
        let view = ListViewModel::new(load_section(section)?);
        let categories = view.categories();

        if self.json {
            return print_json(&CategoriesResponse {
                section: section.as_str(),
                count: categories.len(),
                categories,
            });
        }

        if categories.is_empty() {
            println!("No categories in {}.", section.title());
        }
        for category in categories {
            println!("{category}");
        }
        Ok(())
    }
}

/// Prints a section's list view, human-readable or as JSON.
pub fn print_list(section: SectionKey, view: &ListViewModel, json: bool) -> CliResult<()> {
    let items = view.filtered_items();

    if json {
        return print_json(&ListResponse {
            section: section.as_str(),
            title: section.title(),
            category: view.selected_category(),
            categories: view.categories(),
            count: items.len(),
            items: items.iter().copied().map(list_item).collect(),
        });
    }

    println!("{}", section.title());
    println!("{}", section.intro());
    if let Some(extra) = section.intro_extra() {
        println!("{extra}");
    }
    println!();

    let categories = view.categories();
    if !categories.is_empty() {
        let active = view.selected_category().unwrap_or("All");
        println!("Categories: All, {}  [showing: {active}]", categories.join(", "));
        println!();
    }

    if items.is_empty() {
        println!("No entries.");
        return Ok(());
    }

    for record in items {
        let badge = match (record.letter, record.rating) {
            (Some(letter), _) => format!("[{letter}] "),
            (None, Some(rating)) => format!("{} ", rating.stars()),
            (None, None) => String::new(),
        };
        println!("  {:<28} {badge}{}", record.id, record.name);
        println!("  {:<28} {}: {}", "", record.category, record.short_description);
    }

    Ok(())
}

fn list_item(record: &CatalogRecord) -> ListItem<'_> {
    ListItem {
        id: &record.id,
        name: &record.name,
        category: &record.category,
        short_description: &record.short_description,
        letter: record.letter,
        rating: record.rating.map(|rating| rating.value()),
    }
}
