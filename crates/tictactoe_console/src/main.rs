//! Tic-tac-toe console
//!
//! Plays one human against the computer in the terminal.

#![warn(missing_docs)]

mod app;
mod cli;
mod input;
mod scheduler;
mod view;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // stdout belongs to the game
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.engine_config()?;
    info!(?config, json = cli.json, "Starting tictactoe console");

    app::run(config, cli.json).await
}
