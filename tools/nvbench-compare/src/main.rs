//! nvbench result comparison tool.
//!
//! Pipeline: parse arguments → load both documents → check devices →
//!           match benchmark states → print the report.

mod cli;
mod verbose;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use nvbench_perf::{CompareError, loader, output};

use verbose::vprintln;

/// Exit status for bad usage and for device mismatches.
const EXIT_FAILURE: u8 = 1;

fn main() -> Result<ExitCode> {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(err) => {
            eprint!("{err}");
            print_usage();
            return Ok(ExitCode::from(EXIT_FAILURE));
        }
    };

    verbose::init(cli.verbose);
    cmd_compare(&cli)
}

/// Print the short usage line on stdout.
fn print_usage() {
    let program = std::env::args().next().unwrap_or_else(|| "nvbench-compare".into());
    println!("Usage: {program} reference.json compare.json\n");
}

/// Load, match and report.
fn cmd_compare(cli: &cli::Cli) -> Result<ExitCode> {
    let loaded = {
        let _t = verbose::Timer::start("load");
        loader::load_pair(&cli.reference, &cli.compare)
    };

    let (reference, compare) = match loaded {
        Ok(pair) => pair,
        Err(err @ CompareError::DeviceMismatch) => {
            println!("{err}");
            return Ok(ExitCode::from(EXIT_FAILURE));
        }
        Err(err) => return Err(err).context("loading benchmark results"),
    };

    vprintln!(
        "  reference: {} benchmarks, compare: {} benchmarks",
        reference.benchmarks.len(),
        compare.benchmarks.len()
    );

    let mut log = verbose::SkipLog::default();
    let rows = nvbench_perf::compare_documents_with(&reference, &compare, &mut log)
        .context("matching benchmark results")?;
    log.finish();

    match cli.format {
        cli::Format::Table => output::print_table(&rows),
        cli::Format::Json => {
            let json = output::render_json(&rows).context("serializing rows to JSON")?;
            println!("{json}");
        }
    }

    Ok(ExitCode::SUCCESS)
}
