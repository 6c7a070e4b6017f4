//! Command-line interface definitions for nvbench-compare.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Compare two nvbench JSON result files.
///
/// Rows pair each benchmark state of COMPARE ("New") with the same state
/// of REFERENCE ("Old"). Unmatched entries are left out.
#[derive(Parser)]
#[command(name = "nvbench-compare", version, about)]
pub struct Cli {
    /// Reference (old) result file.
    pub reference: PathBuf,

    /// Comparison (new) result file.
    pub compare: PathBuf,

    /// Output format for the comparison.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Report skipped benchmarks, states and summaries on stderr.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned plain-text table.
    Table,
    /// JSON array of rows.
    Json,
}
