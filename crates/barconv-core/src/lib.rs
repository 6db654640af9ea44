//! Core types and errors for the bar converter.
//!
//! This crate provides the building blocks shared by the pipeline:
//! - File identity parsed from vendor filenames
//! - Vendor and canonical bar records
//! - The source-to-target clock correction
//! - Per-file outcomes and the batch summary

pub mod error;
pub mod types;

pub use error::{BatchError, ConvertError, ConvertResult, CorrectionError, ErrorKind};
pub use types::*;
