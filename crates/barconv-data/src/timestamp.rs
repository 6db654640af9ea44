//! Vendor timestamp normalization.

use barconv_core::{CanonicalBar, ClockCorrection, ConvertError, VendorBar};
use chrono::NaiveDateTime;

/// Vendor timestamp layout, e.g. `01/02/2024 09:31`.
pub const DEFAULT_TIME_FORMAT: &str = "%m/%d/%Y %H:%M";

/// Parses vendor timestamps and applies the clock correction.
#[derive(Debug, Clone)]
pub struct TimestampNormalizer {
    format: String,
    correction: ClockCorrection,
}

impl TimestampNormalizer {
    pub fn new(format: impl Into<String>, correction: ClockCorrection) -> Self {
        Self {
            format: format.into(),
            correction,
        }
    }

    /// Convert every mapped row, keeping row order.
    ///
    /// A single unparseable timestamp fails the whole table.
    pub fn normalize(&self, bars: &[VendorBar]) -> Result<Vec<CanonicalBar>, ConvertError> {
        bars.iter()
            .enumerate()
            .map(|(i, bar)| {
                let corrected = NaiveDateTime::parse_from_str(bar.time.trim(), &self.format)
                    .ok()
                    .and_then(|naive| self.correction.apply(naive))
                    .ok_or_else(|| ConvertError::TimestampParse {
                        row: i + 1,
                        value: bar.time.clone(),
                    })?;
                Ok(CanonicalBar::from_vendor(bar, corrected))
            })
            .collect()
    }
}

impl Default for TimestampNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_FORMAT, ClockCorrection::default())
    }
}
