//! Main application orchestrator.
//!
//! Coordinates a conversion:
//! 1. Checks the input argument and, if requested, initializes the log file.
//! 2. Validates the input path.
//! 3. Reads the table row by row, delegating each row to `processing::process_row`,
//!    which grows the tree and streams new DOT statements to stdout.
//! 4. Writes the footer and logs the totals.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing::{self, ConversionSummary};
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::config::DotConfig;
use crate::dotgen::DotWriter;
use crate::table_loader;
use crate::tree::TreeBuilder;
use std::io::{self, Write};
use std::path::Path;

/// Runs the converter for parsed command-line arguments, writing DOT to stdout.
///
/// # Errors
/// Returns `AppError::Usage` when no input file was given, and any I/O or
/// table error met along the way.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let input_path = cli.input_file.as_deref().ok_or(AppError::Usage)?;
    let quiet_mode = cli.quiet();

    if let Some(log_path) = cli.log_file.as_deref() {
        if let Err(e) = logger::init_global_logger(log_path) {
            // Conversion still runs; only the log is lost.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}",
                log_path.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                log_path.display()
            );
        }
    }

    let config = cli.dot_config();
    let stdout = io::stdout();
    let result = file_handler::validate_input_file(input_path, quiet_mode)
        .and_then(|()| convert_file(input_path, &config, stdout.lock(), quiet_mode));

    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "[ERROR] Conversion failed: {}", e);
    }
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!("[WARNING] Failed to perform final flush of the log: {}", e);
        }
    }

    result.map(|_| ())
}

/// Converts one tree CSV file into DOT, streaming statements to `out`.
///
/// # Errors
/// Returns `AppError::TableLoad` if the file cannot be opened or a row cannot
/// be read, and `AppError::Io` if writing fails. Statements written before the
/// failure stay written.
pub fn convert_file<W: Write>(
    input_path: &Path,
    config: &DotConfig,
    out: W,
    quiet_mode: bool,
) -> Result<ConversionSummary, AppError> {
    verbose_println!(quiet_mode, "Processing File: {}", input_path.display());

    let rows = table_loader::open_table(input_path)?;
    let mut builder = TreeBuilder::new();
    let mut writer = DotWriter::new(out, config);
    let mut summary = ConversionSummary::default();

    for (index, row) in rows.enumerate() {
        let row = row?;
        processing::process_row(
            &row,
            index + 1,
            &mut builder,
            &mut writer,
            &mut summary,
            quiet_mode,
        )?;
    }

    if summary.title.is_none() {
        verbose_println!(
            quiet_mode,
            "[WARNING] No title row found in {}",
            input_path.display()
        );
    }
    writer.write_footer()?;
    writer.flush()?;

    verbose_println!(
        quiet_mode,
        "Done: {} row(s) read, {} data row(s), {} node(s), {} edge(s).",
        summary.rows,
        summary.data_rows,
        summary.nodes,
        summary.edges
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_is_a_usage_error() {
        let cli = Cli {
            input_file: None,
            id_prefix: "id".to_string(),
            id_digits: 4,
            record_ids: false,
            log_file: None,
        };
        let err = run_app(cli).expect_err("no input given");
        assert!(matches!(err, AppError::Usage));
        assert_eq!(err.to_string(), "need an argument of input file.");
    }

    #[test]
    fn summary_counts_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tree.csv");
        std::fs::write(&path, "# header\nTitle\n,\na,b\n ,c\n").expect("write fixture");

        let mut out = Vec::new();
        let summary = convert_file(&path, &DotConfig::default(), &mut out, true)
            .expect("conversion succeeds");

        assert_eq!(summary.title.as_deref(), Some("Title"));
        assert_eq!(summary.rows, 5);
        assert_eq!(summary.comment_rows, 1);
        assert_eq!(summary.blank_rows, 1);
        assert_eq!(summary.data_rows, 2);
        assert_eq!(summary.nodes, 3);
        assert_eq!(summary.edges, 2);
    }
}
