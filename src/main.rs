//! Gomoku terminal client.
//!
//! Thin entry point: everything testable lives in the library.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use gomoku_tui::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (e.g. GOMOKU_SERVER_URL).
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    gomoku_tui::tui::run_tui(cli.server_url, &cli.log_file).await
}
