//! Configuration structures.

use barconv_core::{ClockCorrection, CorrectionError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub paths: PathSettings,
    #[serde(default)]
    pub conversion: ConversionSettings,
}

impl AppConfig {
    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl AppSettings {
    /// Label identifying this deployment in logs, e.g. `barconv (production)`.
    pub fn banner(&self) -> String {
        format!("{} ({})", self.name, self.environment)
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "barconv".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Whether log lines should be emitted as JSON.
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Filesystem layout.
///
/// Outputs go to `root`; vendor files are read from `root/source_dir` and
/// moved to `root/source_dir/archive_dir`. Absolute `source_dir` or
/// `archive_dir` values are used as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    pub root: PathBuf,
    pub source_dir: String,
    pub archive_dir: String,
}

impl PathSettings {
    /// Directory converted files are written to.
    pub fn destination(&self) -> PathBuf {
        self.root.clone()
    }

    /// Vendor drop folder.
    pub fn source(&self) -> PathBuf {
        self.root.join(&self.source_dir)
    }

    /// Archive for consumed vendor files.
    pub fn archive(&self) -> PathBuf {
        self.source().join(&self.archive_dir)
    }
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("stock_data"),
            source_dir: "barchart_data".to_string(),
            archive_dir: "converted".to_string(),
        }
    }
}

/// Conversion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionSettings {
    /// Required filename suffix of input files
    pub extension: String,
    /// Trailing rows discarded from every input
    pub footer_rows: usize,
    /// chrono format of vendor timestamps
    pub time_format: String,
    /// Minutes added to every vendor timestamp
    pub shift_minutes: i64,
    /// UTC offset written after corrected timestamps, in minutes
    pub utc_offset_minutes: i32,
    /// Output filename prefix
    pub output_prefix: String,
}

impl ConversionSettings {
    /// Build the clock correction described by these settings.
    pub fn correction(&self) -> Result<ClockCorrection, CorrectionError> {
        ClockCorrection::new(self.shift_minutes, self.utc_offset_minutes)
    }
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            extension: ".csv".to_string(),
            footer_rows: 1,
            time_format: "%m/%d/%Y %H:%M".to_string(),
            shift_minutes: -60,
            utc_offset_minutes: -300,
            output_prefix: "market_data_day".to_string(),
        }
    }
}
