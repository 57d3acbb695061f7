//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `airport_console` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger and HTTP client initialization
//! - User-facing error formatting and the process exit code
//!
//! All page and client functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process;

use airport_console::initialization::{init_client, init_logger_with};
use airport_console::{pages, ApiClient, Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env (if it exists); try the current
    // directory first, then next to the executable.
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

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let http = init_client(cli.timeout_seconds).context("Failed to build HTTP client")?;
    let client = ApiClient::new(http, cli.base_url.clone());

    // No subcommand lands on the airports list, the console's root page.
    let command = cli.command.unwrap_or(Command::Airports { filter: None });

    match pages::run(command, &client).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("{}", format!("{e:#}").red());
            process::exit(1);
        }
    }
}
