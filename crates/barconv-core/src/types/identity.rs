//! Identity parsed from a vendor filename.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbol and timeframe embedded in a vendor filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileIdentity {
    /// Uppercased ticker symbol
    pub symbol: String,
    /// Timeframe label, taken verbatim from the filename
    pub timeframe: String,
}

impl FileIdentity {
    pub fn new(symbol: impl Into<String>, timeframe: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            timeframe: timeframe.into(),
        }
    }
}

impl fmt::Display for FileIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol, self.timeframe)
    }
}
