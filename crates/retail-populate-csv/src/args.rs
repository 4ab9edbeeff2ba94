//! CLI argument definitions for the CSV writer.

use clap::Args;
use std::path::PathBuf;

/// CSV output arguments.
#[derive(Args, Clone, Debug)]
pub struct CSVOutputArgs {
    /// Output directory for CSV files (one file per table)
    #[arg(long, short = 'o', default_value = "data")]
    pub out: PathBuf,
}
