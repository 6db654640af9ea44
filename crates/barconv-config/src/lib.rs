//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, ConversionSettings, LoggingConfig, PathSettings};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("invalid clock correction: {0}")]
    Correction(#[from] barconv_core::CorrectionError),

    #[error("failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Load configuration from an optional file and the environment.
///
/// Environment variables use the `BARCONV` prefix and `__` as the section
/// separator, e.g. `BARCONV__PATHS__ROOT=/data/stock_data`.
pub fn load_config(path: &Path) -> Result<AppConfig, SettingsError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("BARCONV")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: AppConfig = config.try_deserialize()?;
    config.conversion.correction()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.paths.source_dir, "barchart_data");
        assert_eq!(config.conversion.footer_rows, 1);
        assert_eq!(config.conversion.shift_minutes, -60);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("barconv.toml");
        fs::write(
            &path,
            r#"
[app]
environment = "production"

[paths]
root = "/srv/stock_data"

[conversion]
footer_rows = 2
utc_offset_minutes = -360
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.paths.root.to_str(), Some("/srv/stock_data"));
        assert_eq!(config.paths.archive_dir, "converted");
        assert_eq!(config.app.banner(), "barconv (production)");
        assert_eq!(config.conversion.footer_rows, 2);
        assert_eq!(
            config.conversion.correction().unwrap().target().local_minus_utc(),
            -6 * 3600
        );
    }

    #[test]
    fn test_invalid_offset_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("barconv.toml");
        fs::write(&path, "[conversion]\nutc_offset_minutes = 1500\n").unwrap();

        assert!(matches!(
            load_config(&path),
            Err(SettingsError::Correction(_))
        ));
    }
}
