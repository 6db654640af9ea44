//! Barchart to Schwab bar file converter.

mod cli;

use anyhow::{Context, Result};
use barconv_config::load_config;
use barconv_monitor::setup_logging;
use clap::Parser;
use cli::{Cli, Commands};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {:?}", cli.config))?;

    // Setup logging
    let log_level = cli
        .log_level
        .as_ref()
        .map(|l| l.as_str())
        .unwrap_or(config.logging.level.as_str());
    let json = cli.json_logs || config.logging.is_json();
    setup_logging(log_level, json, config.logging.file.as_deref());
    info!("Starting {}", config.app.banner());

    // Execute command
    match cli.command {
        Commands::Convert(args) => cli::commands::convert::run(args, &config),
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config, &config),
    }
}
