//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - fetches the daily CSV (or reads it from a local file)
//! - parses and filters the rows
//! - writes the report to stdout

use std::fs;
use std::io::Write;

use clap::Parser;

use crate::cli::Cli;
use crate::data::UpstreamClient;
use crate::domain::Calendar;
use crate::error::{AppError, ErrorKind};

/// Entry point for the `covidcal` binary.
///
/// The whole input is parsed before anything is written: on any error the
/// process produces no report output at all.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let calendar = Calendar::new();

    let csv_text = match &cli.input {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorKind::Io,
                format!("Failed to read CSV '{}': {e}", path.display()),
            )
        })?,
        None => UpstreamClient::new().fetch_daily_csv()?,
    };

    let records = crate::io::ingest::parse_records(csv_text.as_bytes(), calendar.tz)?;
    let report = crate::report::format_daily_counts(&records);

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to write report: {e}")))?;

    Ok(())
}
