//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `recon_gateway` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line/environment parsing and validation
//! - Logger initialization
//!
//! All request handling is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use recon_gateway::{init_logger_with, start_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), then try next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = config.validate() {
        eprintln!("recon_gateway error: {}", e);
        process::exit(2);
    }

    if let Err(e) = start_server(config).await {
        eprintln!("recon_gateway error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
