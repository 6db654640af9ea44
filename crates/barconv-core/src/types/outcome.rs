//! Per-file outcomes and the batch summary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::error::{ConvertError, ErrorKind};

/// Progress of a single file through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Discovered,
    Parsed,
    Loaded,
    Mapped,
    Normalized,
    Written,
    Archived,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Discovered => "discovered",
            Stage::Parsed => "parsed",
            Stage::Loaded => "loaded",
            Stage::Mapped => "mapped",
            Stage::Normalized => "normalized",
            Stage::Written => "written",
            Stage::Archived => "archived",
        };
        write!(f, "{}", s)
    }
}

/// A successfully converted and archived input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileOutcome {
    /// Original input path
    pub input: PathBuf,
    /// Written output path
    pub output: PathBuf,
    /// Where the input was moved to
    pub archived: PathBuf,
    /// Ticker symbol
    pub symbol: String,
    /// Timeframe label
    pub timeframe: String,
    /// Number of bars written
    pub rows: usize,
}

/// An input file that was skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedFile {
    /// Input file name
    pub file: String,
    /// Error classification
    pub kind: ErrorKind,
    /// Last stage completed before the failure
    pub stage: Stage,
    /// Human-readable reason
    pub reason: String,
}

/// Aggregated result of one batch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    pub converted: Vec<FileOutcome>,
    pub skipped: Vec<SkippedFile>,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a converted file.
    pub fn record_converted(&mut self, outcome: FileOutcome) {
        self.converted.push(outcome);
    }

    /// Record a skipped file and the reason it was skipped.
    pub fn record_skipped(&mut self, file: impl Into<String>, error: &ConvertError) {
        self.skipped.push(SkippedFile {
            file: file.into(),
            kind: error.kind(),
            stage: error.stage(),
            reason: error.to_string(),
        });
    }

    /// Number of candidate files seen.
    pub fn total(&self) -> usize {
        self.converted.len() + self.skipped.len()
    }

    /// True when no file was skipped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Number of skipped files with the given kind.
    pub fn count_of(&self, kind: ErrorKind) -> usize {
        self.skipped.iter().filter(|s| s.kind == kind).count()
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str("                   CONVERSION SUMMARY                       \n");
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str(&format!("  Files Seen:          {}\n", self.total()));
        s.push_str(&format!("  Converted:           {}\n", self.converted.len()));
        s.push_str(&format!("  Skipped:             {}\n", self.skipped.len()));
        s.push('\n');

        if !self.converted.is_empty() {
            s.push_str("CONVERTED\n");
            s.push_str("───────────────────────────────────────────────────────────\n");
            for outcome in &self.converted {
                let name = outcome
                    .output
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                s.push_str(&format!("  {} ({} rows)\n", name, outcome.rows));
            }
            s.push('\n');
        }

        if !self.skipped.is_empty() {
            s.push_str("SKIPPED\n");
            s.push_str("───────────────────────────────────────────────────────────\n");
            for skipped in &self.skipped {
                s.push_str(&format!(
                    "  {} [{}, after {}]: {}\n",
                    skipped.file, skipped.kind, skipped.stage, skipped.reason
                ));
            }
            s.push('\n');
        }

        s.push_str("═══════════════════════════════════════════════════════════\n");

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
