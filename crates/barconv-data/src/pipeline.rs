//! Batch conversion of a vendor drop folder.

use barconv_core::{BatchError, BatchSummary, ClockCorrection, ConvertError, FileOutcome, Stage};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::filename::parse_filename;
use crate::reader::read_table;
use crate::scanner::scan_directory;
use crate::schema::map_schema;
use crate::timestamp::{TimestampNormalizer, DEFAULT_TIME_FORMAT};
use crate::writer::{archive_input, output_filename, write_table, DEFAULT_OUTPUT_PREFIX};

/// Everything a conversion run needs to know.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Vendor drop folder
    pub source_dir: PathBuf,
    /// Where consumed inputs are moved
    pub archive_dir: PathBuf,
    /// Where converted files are written
    pub destination_dir: PathBuf,
    /// Required filename suffix of input files
    pub extension: String,
    /// Trailing rows discarded from every input
    pub footer_rows: usize,
    /// Vendor timestamp format
    pub time_format: String,
    /// Output filename prefix
    pub output_prefix: String,
    /// Vendor-to-target clock correction
    pub correction: ClockCorrection,
}

impl ConvertOptions {
    /// Default options for the layout `root/barchart_data/converted`, with
    /// outputs written to `root`.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let source_dir = root.join("barchart_data");
        Self {
            archive_dir: source_dir.join("converted"),
            source_dir,
            destination_dir: root,
            extension: ".csv".to_string(),
            footer_rows: 1,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            correction: ClockCorrection::default(),
        }
    }
}

/// Converts every candidate file in the source directory, one at a time.
pub struct Converter {
    options: ConvertOptions,
    normalizer: TimestampNormalizer,
}

impl Converter {
    /// Create a new converter.
    pub fn new(options: ConvertOptions) -> Self {
        let normalizer = TimestampNormalizer::new(options.time_format.clone(), options.correction);
        Self {
            options,
            normalizer,
        }
    }

    /// Get the options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Check the source directory and create the destination and archive
    /// directories if they are missing.
    pub fn prepare(&self) -> Result<(), BatchError> {
        if !self.options.source_dir.is_dir() {
            return Err(BatchError::SourceMissing(self.options.source_dir.clone()));
        }
        for dir in [&self.options.destination_dir, &self.options.archive_dir] {
            fs::create_dir_all(dir).map_err(|source| BatchError::Io {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Run one batch over the current contents of the source directory.
    ///
    /// File errors are logged and collected; only directory-level problems
    /// abort the run.
    pub fn run(&self) -> Result<BatchSummary, BatchError> {
        self.prepare()?;

        let candidates = scan_directory(&self.options.source_dir, &self.options.extension)
            .map_err(|source| BatchError::Io {
                path: self.options.source_dir.clone(),
                source,
            })?;
        info!(
            "Found {} candidate file(s) in {}",
            candidates.len(),
            self.options.source_dir.display()
        );

        let mut summary = BatchSummary::new();
        for path in candidates {
            let name = display_name(&path);
            match self.convert_file(&path) {
                Ok(outcome) => {
                    info!(
                        "Converted {} -> {}, moved to {}",
                        name,
                        outcome.output.display(),
                        outcome.archived.display()
                    );
                    summary.record_converted(outcome);
                }
                Err(e) => {
                    warn!("Skipping {} ({}): {}", name, e.kind(), e);
                    summary.record_skipped(name, &e);
                }
            }
        }

        info!(
            "Batch complete: {} converted, {} skipped",
            summary.converted.len(),
            summary.skipped.len()
        );
        Ok(summary)
    }

    /// Convert one input file and archive it.
    ///
    /// The input is moved only after the output has been written. If the
    /// move fails the output is left in place.
    pub fn convert_file(&self, path: &Path) -> Result<FileOutcome, ConvertError> {
        let name = display_name(path);
        let opts = &self.options;

        let identity = parse_filename(&name, &opts.extension)?;
        debug!("{}: {} ({})", name, Stage::Parsed, identity);

        let table = read_table(path, opts.footer_rows)?;
        debug!("{}: {} ({} rows)", name, Stage::Loaded, table.len());

        let vendor = map_schema(&table)?;
        debug!("{}: {}", name, Stage::Mapped);

        let bars = self.normalizer.normalize(&vendor)?;
        debug!("{}: {}", name, Stage::Normalized);

        // read_table guarantees at least one data row
        let last = bars.last().ok_or(ConvertError::EmptyTable {
            footer_rows: opts.footer_rows,
        })?;
        let output = opts
            .destination_dir
            .join(output_filename(&opts.output_prefix, &identity, last));
        if output.exists() {
            warn!("Overwriting existing output {}", output.display());
        }
        write_table(&output, &bars)?;
        debug!("{}: {} ({})", name, Stage::Written, output.display());

        let archived = archive_input(path, &opts.archive_dir)?;
        debug!("{}: {}", name, Stage::Archived);

        Ok(FileOutcome {
            input: path.to_path_buf(),
            output,
            archived,
            symbol: identity.symbol,
            timeframe: identity.timeframe,
            rows: bars.len(),
        })
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use barconv_core::ErrorKind;
    use tempfile::TempDir;

    const AAPL: &str = "Time,Open,High,Low,Last,Change,%Chg,Volume\n\
        01/02/2024 09:30,99.5,100.2,99.1,100,+0.5,+0.50%,1200\n\
        01/02/2024 09:31,100,101,99,100.5,+0.5,+0.50%,500\n\
        \"Downloaded from Barchart.com as of 01-02-2024 04:05pm CST\"\n";

    fn setup() -> (TempDir, Converter) {
        let root = TempDir::new().unwrap();
        let options = ConvertOptions::for_root(root.path());
        fs::create_dir_all(&options.source_dir).unwrap();
        (root, Converter::new(options))
    }

    fn drop_file(converter: &Converter, name: &str, content: &str) -> PathBuf {
        let path = converter.options().source_dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_converts_and_archives() {
        let (root, converter) = setup();
        let input = drop_file(&converter, "aapl_barchart_5min-ohlc.csv", AAPL);

        let summary = converter.run().unwrap();

        assert!(summary.is_clean());
        assert_eq!(summary.converted.len(), 1);
        let outcome = &summary.converted[0];
        assert_eq!(outcome.symbol, "AAPL");
        assert_eq!(outcome.timeframe, "ohlc");
        assert_eq!(outcome.rows, 2);

        let output = root.path().join("market_data_day_AAPL_ohlc_20240102.csv");
        assert_eq!(outcome.output, output);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "datetime,open,high,low,close,volume\n\
             2024-01-02 08:30:00-05:00,99.5,100.2,99.1,100,1200\n\
             2024-01-02 08:31:00-05:00,100,101,99,100.5,500\n"
        );

        assert!(!input.exists());
        assert!(converter
            .options()
            .archive_dir
            .join("aapl_barchart_5min-ohlc.csv")
            .exists());
    }

    #[test]
    fn test_exactly_one_output_per_input() {
        let (root, converter) = setup();
        drop_file(&converter, "aapl_barchart_5min-ohlc.csv", AAPL);

        converter.run().unwrap();

        let outputs: Vec<_> = fs::read_dir(root.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .collect();
        assert_eq!(outputs.len(), 1);
    }

    #[test]
    fn test_output_date_follows_correction() {
        let (root, converter) = setup();
        drop_file(
            &converter,
            "es_barchart_1min-es.csv",
            "Time,Open,High,Low,Last,Volume\n\
             01/02/2024 23:59,1,1,1,1,1\n\
             01/03/2024 00:30,1,1,1,1,1\n\
             footer\n",
        );

        converter.run().unwrap();

        assert!(root.path().join("market_data_day_ES_es_20240102.csv").exists());
    }

    #[test]
    fn test_bad_filename_left_in_place() {
        let (_root, converter) = setup();
        let input = drop_file(&converter, "aapl_5min-ohlc.csv", AAPL);

        let summary = converter.run().unwrap();

        assert_eq!(summary.converted.len(), 0);
        assert_eq!(summary.count_of(ErrorKind::UnrecognizedFilenameShape), 1);
        assert!(input.exists());
    }

    #[test]
    fn test_failures_do_not_abort_batch() {
        let (_root, converter) = setup();
        let bad_time = drop_file(
            &converter,
            "msft_barchart_5min-ohlc.csv",
            "Time,Open,High,Low,Last,Volume\n2024-01-02 09:30,1,1,1,1,1\nfooter\n",
        );
        let bad_schema = drop_file(
            &converter,
            "nvda_barchart_5min-ohlc.csv",
            "Time,Open,High,Low,Close,Volume\n01/02/2024 09:30,1,1,1,1,1\nfooter\n",
        );
        let no_timeframe = drop_file(&converter, "qqq_barchart_daily.csv", AAPL);
        let good = drop_file(&converter, "aapl_barchart_5min-ohlc.csv", AAPL);

        let summary = converter.run().unwrap();

        assert_eq!(summary.converted.len(), 1);
        assert_eq!(summary.skipped.len(), 3);
        assert_eq!(summary.count_of(ErrorKind::TimestampParseFailure), 1);
        assert_eq!(summary.count_of(ErrorKind::SchemaMismatch), 1);
        assert_eq!(summary.count_of(ErrorKind::UnrecognizedTimeframe), 1);
        assert!(bad_time.exists());
        assert!(bad_schema.exists());
        assert!(no_timeframe.exists());
        assert!(!good.exists());
    }

    #[test]
    fn test_rerun_does_not_reprocess() {
        let (_root, converter) = setup();
        drop_file(&converter, "aapl_barchart_5min-ohlc.csv", AAPL);

        assert_eq!(converter.run().unwrap().converted.len(), 1);
        assert_eq!(converter.run().unwrap().total(), 0);
    }

    #[test]
    fn test_colliding_outputs_overwrite() {
        let (root, converter) = setup();
        drop_file(&converter, "aapl_barchart_5min-ohlc.csv", AAPL);
        drop_file(
            &converter,
            "aapl_other_5min-ohlc.csv",
            "Time,Open,High,Low,Last,Volume\n01/02/2024 15:00,7,7,7,7,7\nfooter\n",
        );

        let summary = converter.run().unwrap();

        assert_eq!(summary.converted.len(), 2);
        let content =
            fs::read_to_string(root.path().join("market_data_day_AAPL_ohlc_20240102.csv"))
                .unwrap();
        // "aapl_other..." sorts after "aapl_barchart..." and wins.
        assert!(content.contains("2024-01-02 14:00:00-05:00,7,7,7,7,7"));
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_write_failure_skips_move() {
        let (root, base) = setup();
        let mut options = base.options().clone();
        options.destination_dir = root.path().join("missing").join("nested");
        let converter = Converter::new(options);
        let input = drop_file(&converter, "aapl_barchart_5min-ohlc.csv", AAPL);

        // No prepare(): the destination does not exist.
        let err = converter.convert_file(&input).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::OutputWriteFailure);
        assert!(input.exists());
    }

    #[test]
    fn test_blank_volume_written_as_empty_field() {
        let (root, converter) = setup();
        let input = drop_file(
            &converter,
            "aapl_barchart_5min-ohlc.csv",
            "Time,Open,High,Low,Last,Volume\n\
             01/02/2024 09:30,1,1,1,1,\n\
             01/02/2024 09:31,100,101,99,100.5,500\n\
             footer\n",
        );
        converter.prepare().unwrap();

        let outcome = converter.convert_file(&input).unwrap();

        assert_eq!(outcome.rows, 2);
        assert_eq!(
            fs::read_to_string(root.path().join("market_data_day_AAPL_ohlc_20240102.csv"))
                .unwrap(),
            "datetime,open,high,low,close,volume\n\
             2024-01-02 08:30:00-05:00,1,1,1,1,\n\
             2024-01-02 08:31:00-05:00,100,101,99,100.5,500\n"
        );
        assert!(!input.exists());
    }

    #[test]
    fn test_archive_failure_keeps_output_and_input() {
        let (root, base) = setup();
        let mut options = base.options().clone();
        options.archive_dir = root.path().join("missing").join("converted");
        let converter = Converter::new(options);
        let input = drop_file(&converter, "aapl_barchart_5min-ohlc.csv", AAPL);

        // No prepare(): the archive directory does not exist.
        let err = converter.convert_file(&input).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ArchiveMoveFailure);
        assert!(root
            .path()
            .join("market_data_day_AAPL_ohlc_20240102.csv")
            .exists());
        assert!(input.exists());
    }

    #[test]
    fn test_missing_source_directory() {
        let root = TempDir::new().unwrap();
        let converter = Converter::new(ConvertOptions::for_root(root.path()));

        assert!(matches!(converter.run(), Err(BatchError::SourceMissing(_))));
    }

    #[test]
    fn test_prepare_creates_archive() {
        let (_root, converter) = setup();
        converter.prepare().unwrap();
        assert!(converter.options().archive_dir.is_dir());
    }
}
