//! Command-line parsing for the daily report binary.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! fetch/parse/render code.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "covidcal",
    version,
    about = "Daily COVID-19 case report for Tokyo from the Toyo Keizai dataset"
)]
pub struct Cli {
    /// Read the daily CSV from a local file instead of fetching it.
    #[arg(long, value_name = "CSV")]
    pub input: Option<PathBuf>,
}
