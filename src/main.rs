//! wsclient - an interactive WebSocket client
//!
//! Usage: `wsclient <host>/<path>` or `wsclient --local`.

use clap::Parser;
use wsclient::cli;
use wsclient::commands::Cli;
use wsclient::common::{config::Config, logging};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Held until exit so the log file is flushed
    let _log_guard = logging::init_cli(&config.logging);

    if let Err(e) = cli::dispatch(cli, &config).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
