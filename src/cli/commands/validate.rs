//! Validate configuration command.

use anyhow::{Context, Result};
use barconv_config::AppConfig;
use std::path::Path;

pub fn run(config_path: &Path, config: &AppConfig) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);
    if !config_path.exists() {
        println!("(file not found, using defaults and environment)");
    }

    let correction = config
        .conversion
        .correction()
        .context("Invalid clock correction")?;

    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.banner());
    println!("Source: {}", config.paths.source().display());
    println!("Archive: {}", config.paths.archive().display());
    println!("Destination: {}", config.paths.destination().display());
    println!("Clock correction: {}", correction);
    println!();
    println!("{}", config.to_toml().context("Failed to render configuration")?);

    Ok(())
}
