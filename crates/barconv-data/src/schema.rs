//! Vendor-to-canonical column mapping.

use barconv_core::{ConvertError, Value, VendorBar};
use csv::StringRecord;

use crate::reader::RawTable;

/// Vendor column names, in canonical output order.
///
/// Maps to `datetime, open, high, low, close, volume` respectively.
pub const VENDOR_COLUMNS: [&str; 6] = ["Time", "Open", "High", "Low", "Last", "Volume"];

/// Select the six vendor columns from `table`, discarding all others.
///
/// Column names must match exactly. Cell contents are not validated:
/// numeric cells keep their scale, while blank or non-numeric cells are
/// carried through as text. A row too short to reach a column yields a
/// blank cell for it.
pub fn map_schema(table: &RawTable) -> Result<Vec<VendorBar>, ConvertError> {
    let positions: Vec<Option<usize>> = VENDOR_COLUMNS.iter().map(|c| table.column(c)).collect();

    let missing: Vec<String> = VENDOR_COLUMNS
        .iter()
        .zip(&positions)
        .filter(|(_, pos)| pos.is_none())
        .map(|(name, _)| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ConvertError::SchemaMismatch { missing });
    }

    let idx: Vec<usize> = positions.into_iter().flatten().collect();

    Ok(table
        .rows
        .iter()
        .map(|record| VendorBar {
            time: cell(record, idx[0]).to_string(),
            open: Value::parse(cell(record, idx[1])),
            high: Value::parse(cell(record, idx[2])),
            low: Value::parse(cell(record, idx[3])),
            close: Value::parse(cell(record, idx[4])),
            volume: Value::parse(cell(record, idx[5])),
        })
        .collect())
}

fn cell(record: &StringRecord, pos: usize) -> &str {
    record.get(pos).unwrap_or("")
}
