//! Patterndex - Terminal browser for design patterns and principles
//!
//! Without a subcommand this opens the interactive browser. Subcommands give
//! headless, scriptable access to the same catalog.

use anyhow::Result;
use clap::Parser;

use patterndex::cli::Command;
use patterndex::config::Config;
#[cfg(feature = "ratatui")]
use patterndex::consent::ConsentStore;
#[cfg(feature = "ratatui")]
use patterndex::routes::{self, Route};

/// Patterndex - Browse a catalog of design patterns and principles
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Page to open in the browser (e.g., /classic/singleton)
    #[arg(long, value_name = "PATH")]
    open: Option<String>,

    /// Enable verbose logging for subcommands
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        patterndex::init_tracing("warn", cli.verbose);
        if let Err(e) = command.execute() {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
        return Ok(());
    }

    // Load or create default config
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config, using defaults: {e:#}");
        Config::default()
    });

    run_browser(config, cli.open.as_deref())
}

#[cfg(feature = "ratatui")]
fn run_browser(config: Config, open: Option<&str>) -> Result<()> {
    use patterndex::tui;

    let consent = match Config::state_file_path().and_then(ConsentStore::load) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Warning: Consent state unavailable, asking again this session: {e:#}");
            ConsentStore::detached()
        }
    };
    consent.initialize_if_consented();

    let route = open.map_or_else(
        || Route::List {
            section: config.catalog.section(),
        },
        routes::resolve,
    );

    // Initialize TUI
    let mut app_state = tui::AppState::new(config, consent)?;
    app_state.navigate(route);

    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    result
}

#[cfg(not(feature = "ratatui"))]
fn run_browser(_config: Config, _open: Option<&str>) -> Result<()> {
    anyhow::bail!(
        "{} was built without the terminal browser; use a subcommand (see --help)",
        patterndex::constants::APP_BINARY_NAME
    )
}
