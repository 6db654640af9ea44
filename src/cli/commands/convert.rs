//! Convert command implementation.

use anyhow::{Context, Result};
use barconv_config::AppConfig;
use barconv_data::{ConvertOptions, Converter};
use tracing::info;

use crate::cli::{ConvertArgs, OutputFormat};

pub fn run(args: ConvertArgs, config: &AppConfig) -> Result<()> {
    let options = build_options(&args, config)?;
    info!(
        "Converting {} -> {} (archive: {})",
        options.source_dir.display(),
        options.destination_dir.display(),
        options.archive_dir.display()
    );

    let converter = Converter::new(options);
    let summary = converter.run().context("Conversion run failed")?;

    match args.output {
        OutputFormat::Json => println!("{}", summary.to_json()?),
        OutputFormat::Text => println!("{}", summary.summary()),
    }

    if !summary.is_clean() {
        anyhow::bail!(
            "{} of {} file(s) were skipped",
            summary.skipped.len(),
            summary.total()
        );
    }

    Ok(())
}

/// Merge CLI overrides into the configured layout.
fn build_options(args: &ConvertArgs, config: &AppConfig) -> Result<ConvertOptions> {
    let mut paths = config.paths.clone();
    if let Some(root) = &args.root {
        paths.root = root.clone();
    }

    let source_dir = args.source.clone().unwrap_or_else(|| paths.source());
    let archive_dir = source_dir.join(&paths.archive_dir);
    let destination_dir = args.dest.clone().unwrap_or_else(|| paths.destination());

    let conversion = &config.conversion;
    Ok(ConvertOptions {
        source_dir,
        archive_dir,
        destination_dir,
        extension: conversion.extension.clone(),
        footer_rows: conversion.footer_rows,
        time_format: conversion.time_format.clone(),
        output_prefix: conversion.output_prefix.clone(),
        correction: conversion
            .correction()
            .context("Invalid clock correction")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn args(root: Option<&str>, source: Option<&str>, dest: Option<&str>) -> ConvertArgs {
        ConvertArgs {
            root: root.map(PathBuf::from),
            source: source.map(PathBuf::from),
            dest: dest.map(PathBuf::from),
            output: OutputFormat::Text,
        }
    }

    #[test]
    fn test_root_override() {
        let options = build_options(&args(Some("/data"), None, None), &AppConfig::default()).unwrap();
        assert_eq!(options.source_dir, Path::new("/data/barchart_data"));
        assert_eq!(options.archive_dir, Path::new("/data/barchart_data/converted"));
        assert_eq!(options.destination_dir, Path::new("/data"));
        assert_eq!(options.footer_rows, 1);
    }

    #[test]
    fn test_source_and_dest_overrides() {
        let options = build_options(
            &args(None, Some("/drop"), Some("/out")),
            &AppConfig::default(),
        )
        .unwrap();
        assert_eq!(options.source_dir, Path::new("/drop"));
        assert_eq!(options.archive_dir, Path::new("/drop/converted"));
        assert_eq!(options.destination_dir, Path::new("/out"));
    }

    #[test]
    fn test_invalid_correction() {
        let mut config = AppConfig::default();
        config.conversion.utc_offset_minutes = 5000;
        assert!(build_options(&args(None, None, None), &config).is_err());
    }
}
