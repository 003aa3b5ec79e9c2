//! Command-line interface for the Gomoku client.

use clap::Parser;
use std::path::PathBuf;

/// Gomoku terminal client - play against a remote AI opponent
#[derive(Parser, Debug)]
#[command(name = "gomoku_tui")]
#[command(about = "Terminal client for a Gomoku game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game server URL
    #[arg(long, default_value = "http://127.0.0.1:5000", env = "GOMOKU_SERVER_URL")]
    pub server_url: String,

    /// Log file path (the TUI owns the terminal, so logs go to a file)
    #[arg(long, default_value = "gomoku_tui.log")]
    pub log_file: PathBuf,
}
