//! Canonical output writing and input archiving.

use barconv_core::{CanonicalBar, ConvertError, FileIdentity, CANONICAL_COLUMNS};
use csv::WriterBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of every output filename.
pub const DEFAULT_OUTPUT_PREFIX: &str = "market_data_day";

/// Output filename for a converted table.
///
/// The date comes from the last bar, after clock correction:
/// `market_data_day_AAPL_ohlc_20240102.csv`.
pub fn output_filename(prefix: &str, identity: &FileIdentity, last: &CanonicalBar) -> String {
    format!(
        "{}_{}_{}_{}.csv",
        prefix,
        identity.symbol,
        identity.timeframe,
        last.date_stamp()
    )
}

/// Write bars with a header row and no index column, replacing any
/// existing file at `path`.
pub fn write_table(path: &Path, bars: &[CanonicalBar]) -> Result<(), ConvertError> {
    let to_error = |source: std::io::Error| ConvertError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| to_error(e.into()))?;

    writer
        .write_record(CANONICAL_COLUMNS)
        .map_err(|e| to_error(e.into()))?;
    for bar in bars {
        writer
            .write_record(bar.to_record())
            .map_err(|e| to_error(e.into()))?;
    }
    writer.flush().map_err(to_error)?;

    Ok(())
}

/// Move `input` into `archive_dir`, keeping its file name.
pub fn archive_input(input: &Path, archive_dir: &Path) -> Result<PathBuf, ConvertError> {
    let name = input.file_name().ok_or_else(|| ConvertError::ArchiveMove {
        path: archive_dir.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "input has no file name"),
    })?;
    let target = archive_dir.join(name);

    fs::rename(input, &target).map_err(|source| ConvertError::ArchiveMove {
        path: target.clone(),
        source,
    })?;

    Ok(target)
}
