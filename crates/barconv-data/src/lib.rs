//! Barchart file scanning, parsing and Schwab output writing.

mod filename;
mod pipeline;
mod reader;
mod scanner;
mod schema;
mod timestamp;
mod writer;

pub use filename::parse_filename;
pub use pipeline::{ConvertOptions, Converter};
pub use reader::{read_table, RawTable};
pub use scanner::scan_directory;
pub use schema::{map_schema, VENDOR_COLUMNS};
pub use timestamp::{TimestampNormalizer, DEFAULT_TIME_FORMAT};
pub use writer::{archive_input, output_filename, write_table, DEFAULT_OUTPUT_PREFIX};
