//! `open` command: resolves a URL path and prints the page it routes to.

use crate::catalog::{ListViewModel, SectionKey};
use crate::cli::common::{load_section, print_json, CliResult};
use crate::cli::list::print_list;
use crate::cli::show::show_record;
use crate::routes::{self, Route};
use clap::Args;
use serde::Serialize;

/// Open a page by URL path (e.g., "/classic/singleton")
#[derive(Debug, Clone, Args)]
pub struct OpenArgs {
    /// URL path
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Only print the resolved route
    #[arg(long)]
    pub resolve_only: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RouteResponse<'a> {
    requested: &'a str,
    path: String,
    redirected: bool,
    route: &'a Route,
}

impl OpenArgs {
    /// Execute the open command
    pub fn execute(&self) -> CliResult<()> {
        let route = routes::resolve(&self.path);

        if self.resolve_only {
            let path = route.path();
            let response = RouteResponse {
                requested: &self.path,
                redirected: normalize(&self.path) != path,
                path,
                route: &route,
            };
            if self.json {
                return print_json(&response);
            }
            println!("{}", response.path);
            return Ok(());
        }

        match &route {
            Route::List { section } => {
                let view = ListViewModel::new(load_section(*section)?);
                print_list(*section, &view, self.json)
            }
            Route::Detail { section, id } => show_record(*section, id, self.json),
            Route::Architecture => {
                let section = SectionKey::Architecture;
                if self.json {
                    return print_json(&serde_json::json!({
                        "section": section.as_str(),
                        "title": section.title(),
                        "intro": section.intro(),
                    }));
                }
                println!("{}", section.title());
                println!("{}", section.intro());
                Ok(())
            }
        }
    }
}

fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    format!("/{}", path.trim_matches('/'))
}
