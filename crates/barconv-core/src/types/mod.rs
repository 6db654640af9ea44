//! Core data types for the bar converter.

mod bar;
mod clock;
mod identity;
mod outcome;
mod value;

pub use bar::{CanonicalBar, VendorBar, CANONICAL_COLUMNS};
pub use clock::ClockCorrection;
pub use identity::FileIdentity;
pub use outcome::{BatchSummary, FileOutcome, SkippedFile, Stage};
pub use value::Value;
