//! Logging setup for the bar converter.

mod logging;

pub use logging::setup_logging;
