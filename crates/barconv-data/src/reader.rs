//! Vendor table loading.

use barconv_core::ConvertError;
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;
use tracing::debug;

/// Header and data rows of a vendor file, footer already removed.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: StringRecord,
    pub rows: Vec<StringRecord>,
}

impl RawTable {
    /// Position of a column by exact, case-sensitive name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Load a vendor CSV file and drop its trailing `footer_rows` rows.
///
/// The footer is removed unconditionally, whatever it contains. Rows may
/// have differing field counts, since vendor footers rarely match the
/// header width.
pub fn read_table(path: &Path, footer_rows: usize) -> Result<RawTable, ConvertError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| ConvertError::TableRead(e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| ConvertError::TableRead(e.to_string()))?
        .clone();

    let mut rows = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ConvertError::TableRead(e.to_string()))?;

    if rows.len() <= footer_rows {
        return Err(ConvertError::EmptyTable { footer_rows });
    }
    rows.truncate(rows.len() - footer_rows);

    debug!(
        "Loaded {} rows from {} ({} footer row(s) dropped)",
        rows.len(),
        path.display(),
        footer_rows
    );

    Ok(RawTable { headers, rows })
}
