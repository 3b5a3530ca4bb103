//! finpack command-line tool
//!
//! Main entry point for the `br-fin` finance agent pack.

mod cli;
mod commands;
mod input;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use finpack_shared::{AppConfig, AppError};
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match try_main(cli) {
        Ok(code) => code,
        Err(err) => {
            let app_error = err.downcast_ref::<AppError>();
            error!(code = app_error.map_or("UNKNOWN", AppError::error_code), "{err:#}");
            eprintln!("error: {err:#}");
            app_error
                .and_then(|app| u8::try_from(app.exit_code()).ok())
                .map_or(ExitCode::FAILURE, ExitCode::from)
        }
    }
}

fn try_main(cli: Cli) -> anyhow::Result<ExitCode> {
    // Load configuration
    let config = AppConfig::load()
        .map_err(AppError::from)
        .context("Failed to load configuration")?;

    init_tracing(&config.logging.level, cli.json_logs || config.logging.json);
    debug!(?config, "configuration loaded");

    Ok(commands::run(cli.command, &config)?)
}

/// Logs go to stderr so stdout stays clean for command output.
fn init_tracing(default_filter: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
