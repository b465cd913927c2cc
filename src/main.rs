//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `page_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Starting the analysis HTTP service
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use page_audit::initialization::init_logger_with;
use page_audit::{serve, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the service using the library
    if let Err(e) = serve(config).await {
        eprintln!("page_audit error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
