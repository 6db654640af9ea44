//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "barconv")]
#[command(author, version, about = "Convert Barchart bar exports into Schwab market data files")]
pub struct Cli {
    /// Configuration file path (optional; defaults apply when absent)
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the configuration file)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert every file in the vendor drop folder
    Convert(ConvertArgs),
    /// Validate configuration and print the effective settings
    ValidateConfig,
}

#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Root directory; outputs are written here
    #[arg(short, long, env = "BARCONV_ROOT")]
    pub root: Option<PathBuf>,

    /// Vendor drop folder (overrides root/source_dir)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Output directory (overrides root)
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Summary format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}
