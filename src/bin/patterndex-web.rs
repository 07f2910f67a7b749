//! Patterndex Web Server Binary
//!
//! This binary starts the Patterndex web server that provides a REST API
//! over the catalog for a browser frontend.
//!
//! # Usage
//!
//! ```bash
//! # Start with the configured host and port (127.0.0.1:3001 by default)
//! patterndex-web
//!
//! # Override the port
//! patterndex-web --port 8080
//! ```

use std::net::SocketAddr;

use clap::Parser;
use tracing::warn;

use patterndex::config::Config;
use patterndex::web;

/// Patterndex Web Server - REST API for the catalog
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (defaults to `[web] port` from the config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (defaults to `[web] host` from the config)
    #[arg(long)]
    host: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    patterndex::init_tracing("info", args.verbose);

    // Load configuration, falling back to defaults
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Using default configuration: {e:#}");
        Config::default()
    });

    let host = args.host.unwrap_or_else(|| config.web.host.clone());
    let port = args.port.unwrap_or(config.web.port);

    // Build socket address
    let addr: SocketAddr = format!("{host}:{port}").parse()?;

    // Start the server
    web::run_server(config, addr).await
}
