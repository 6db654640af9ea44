//! Error types for the bar converter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::Stage;

/// Error raised while converting a single file.
///
/// Every variant is scoped to one input file: the batch logs it, leaves the
/// input in place and moves on to the next file.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("expected at least 3 '_'-separated tokens, found {found}")]
    UnrecognizedFilenameShape { found: usize },

    #[error("no token containing \"min\" in '{stem}'")]
    UnrecognizedTimeframe { stem: String },

    #[error("failed to read table: {0}")]
    TableRead(String),

    #[error("no data rows left after stripping {footer_rows} footer row(s)")]
    EmptyTable { footer_rows: usize },

    #[error("missing required column(s): {}", missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    #[error("unparseable timestamp '{value}' in row {row}")]
    TimestampParse { row: usize, value: String },

    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to move input to {path}: {source}")]
    ArchiveMove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Classify the error for reporting.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::UnrecognizedFilenameShape { .. } => ErrorKind::UnrecognizedFilenameShape,
            ConvertError::UnrecognizedTimeframe { .. } => ErrorKind::UnrecognizedTimeframe,
            ConvertError::TableRead(_) => ErrorKind::TableReadFailure,
            ConvertError::EmptyTable { .. } => ErrorKind::EmptyTable,
            ConvertError::SchemaMismatch { .. } => ErrorKind::SchemaMismatch,
            ConvertError::TimestampParse { .. } => ErrorKind::TimestampParseFailure,
            ConvertError::OutputWrite { .. } => ErrorKind::OutputWriteFailure,
            ConvertError::ArchiveMove { .. } => ErrorKind::ArchiveMoveFailure,
        }
    }

    /// The last stage the file reached before failing.
    pub fn stage(&self) -> Stage {
        self.kind().stage()
    }
}

/// Reportable classification of a [`ConvertError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnrecognizedFilenameShape,
    UnrecognizedTimeframe,
    TableReadFailure,
    EmptyTable,
    SchemaMismatch,
    TimestampParseFailure,
    OutputWriteFailure,
    ArchiveMoveFailure,
}

impl ErrorKind {
    /// Stage the file had completed when this error occurred.
    pub fn stage(&self) -> Stage {
        match self {
            ErrorKind::UnrecognizedFilenameShape | ErrorKind::UnrecognizedTimeframe => {
                Stage::Discovered
            }
            ErrorKind::TableReadFailure | ErrorKind::EmptyTable => Stage::Parsed,
            ErrorKind::SchemaMismatch => Stage::Loaded,
            ErrorKind::TimestampParseFailure => Stage::Mapped,
            ErrorKind::OutputWriteFailure => Stage::Normalized,
            ErrorKind::ArchiveMoveFailure => Stage::Written,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::UnrecognizedFilenameShape => "unrecognized filename shape",
            ErrorKind::UnrecognizedTimeframe => "unrecognized timeframe",
            ErrorKind::TableReadFailure => "table read failure",
            ErrorKind::EmptyTable => "empty table",
            ErrorKind::SchemaMismatch => "schema mismatch",
            ErrorKind::TimestampParseFailure => "timestamp parse failure",
            ErrorKind::OutputWriteFailure => "output write failure",
            ErrorKind::ArchiveMoveFailure => "archive move failure",
        };
        write!(f, "{}", s)
    }
}

/// Errors that abort a whole batch before any file is processed.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("source directory not found: {0}")]
    SourceMissing(PathBuf),

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Clock correction parameters out of range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorrectionError {
    #[error("UTC offset of {0} minutes is out of range")]
    OffsetOutOfRange(i32),

    #[error("shift of {0} minutes is out of range")]
    ShiftOutOfRange(i64),
}

/// Result type alias for per-file conversion.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_stage() {
        let err = ConvertError::UnrecognizedFilenameShape { found: 2 };
        assert_eq!(err.kind(), ErrorKind::UnrecognizedFilenameShape);
        assert_eq!(err.stage(), Stage::Discovered);

        let err = ConvertError::ArchiveMove {
            path: PathBuf::from("converted/x.csv"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.kind(), ErrorKind::ArchiveMoveFailure);
        assert_eq!(err.stage(), Stage::Written);
    }

    #[test]
    fn test_schema_mismatch_message() {
        let err = ConvertError::SchemaMismatch {
            missing: vec!["Last".to_string(), "Volume".to_string()],
        };
        assert_eq!(err.to_string(), "missing required column(s): Last, Volume");
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::TimestampParseFailure).unwrap();
        assert_eq!(json, "\"timestamp_parse_failure\"");
    }
}
