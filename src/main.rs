//! Tic-tac-toe - terminal client

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe::{Cli, Config};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    initialize_tracing(&config)?;
    info!(config = ?config, "Configuration loaded");

    tictactoe::run(&config)
}

/// Sends logs to a file so they never draw over the UI.
#[instrument(skip(config))]
fn initialize_tracing(config: &Config) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Tracing initialized");
    Ok(())
}
