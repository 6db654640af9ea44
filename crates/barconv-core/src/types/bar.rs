//! Vendor and canonical bar records.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::Value;

/// Output column order expected by the target platform.
pub const CANONICAL_COLUMNS: [&str; 6] = ["datetime", "open", "high", "low", "close", "volume"];

/// A vendor row after column mapping, before its timestamp is normalized.
///
/// Cells keep the exact text of the vendor file: numeric cells their scale,
/// blank or non-numeric cells their original content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorBar {
    /// Raw vendor timestamp text
    pub time: String,
    /// Opening price
    pub open: Value,
    /// Highest price
    pub high: Value,
    /// Lowest price
    pub low: Value,
    /// Last (closing) price
    pub close: Value,
    /// Trading volume
    pub volume: Value,
}

/// One row of the canonical output table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalBar {
    /// Corrected timestamp carrying the target UTC offset
    pub datetime: DateTime<FixedOffset>,
    /// Opening price
    pub open: Value,
    /// Highest price
    pub high: Value,
    /// Lowest price
    pub low: Value,
    /// Closing price
    pub close: Value,
    /// Trading volume
    pub volume: Value,
}

impl CanonicalBar {
    /// Build a canonical bar from a mapped vendor row and its corrected time.
    pub fn from_vendor(bar: &VendorBar, datetime: DateTime<FixedOffset>) -> Self {
        Self {
            datetime,
            open: bar.open.clone(),
            high: bar.high.clone(),
            low: bar.low.clone(),
            close: bar.close.clone(),
            volume: bar.volume.clone(),
        }
    }

    /// Timestamp as written to the output file, e.g. `2024-01-02 08:31:00-05:00`.
    pub fn datetime_string(&self) -> String {
        self.datetime.format("%Y-%m-%d %H:%M:%S%:z").to_string()
    }

    /// Calendar date of the bar as `YYYYMMDD`, in the target offset.
    pub fn date_stamp(&self) -> String {
        self.datetime.format("%Y%m%d").to_string()
    }

    /// Output cells in canonical column order.
    pub fn to_record(&self) -> [String; 6] {
        [
            self.datetime_string(),
            self.open.to_string(),
            self.high.to_string(),
            self.low.to_string(),
            self.close.to_string(),
            self.volume.to_string(),
        ]
    }
}
