//! Symbol and timeframe extraction from vendor filenames.

use barconv_core::{ConvertError, FileIdentity};

/// Minimum number of `_`-separated tokens in a vendor filename.
const MIN_TOKENS: usize = 3;

/// Marker identifying the token that carries the timeframe.
const TIMEFRAME_MARKER: &str = "min";

/// Parse `file_name` into a symbol and timeframe.
///
/// The extension is stripped first, then the stem is split on `_`:
/// the first token is the symbol, and the first token containing `min`
/// supplies the timeframe as whatever follows its last `-`.
///
/// `aapl_barchart_5min-ohlc.csv` parses to `AAPL` / `ohlc`.
pub fn parse_filename(file_name: &str, extension: &str) -> Result<FileIdentity, ConvertError> {
    let stem = file_name.strip_suffix(extension).unwrap_or(file_name);
    let tokens: Vec<&str> = stem.split('_').collect();

    if tokens.len() < MIN_TOKENS {
        return Err(ConvertError::UnrecognizedFilenameShape {
            found: tokens.len(),
        });
    }

    let symbol = tokens[0].to_uppercase();

    let timeframe = tokens
        .iter()
        .find(|token| token.contains(TIMEFRAME_MARKER))
        .and_then(|token| token.rsplit('-').next())
        .ok_or_else(|| ConvertError::UnrecognizedTimeframe {
            stem: stem.to_string(),
        })?;

    Ok(FileIdentity::new(symbol, timeframe))
}
