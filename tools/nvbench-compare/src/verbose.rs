//! Diagnostic output for comparison runs.
//!
//! Two output levels controlled by CLI flags:
//! - **Default** (no flag): the report, plus fatal errors on stderr
//! - **Verbose** (`-v`): also every skipped benchmark, state and summary,
//!   load timings and a match count
//!
//! Diagnostics go to stderr so the report on stdout stays clean.

use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Instant;

use nvbench_perf::{Benchmark, ComparisonRow, MatchObserver, Side};

/// Output verbosity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Default = 0,
    Verbose = 1,
}

/// Global verbosity level, set once at startup.
static VERBOSITY: AtomicU8 = AtomicU8::new(0); // Default

/// Initialize the verbosity level for the current process.
pub fn init(verbose: bool) {
    let level = if verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Default
    };
    VERBOSITY.store(level as u8, Ordering::Relaxed);
}

/// Returns the current verbosity level.
pub fn verbosity() -> Verbosity {
    match VERBOSITY.load(Ordering::Relaxed) {
        1 => Verbosity::Verbose,
        _ => Verbosity::Default,
    }
}

/// Returns `true` if verbose mode is active.
pub fn is_verbose() -> bool {
    verbosity() == Verbosity::Verbose
}

/// Print a message to stderr only when verbose mode is enabled.
///
/// Usage mirrors `eprintln!`:
/// ```ignore
/// vprintln!("loaded {} benchmarks", count);
/// ```
macro_rules! vprintln {
    ($($arg:tt)*) => {
        if $crate::verbose::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use vprintln;

/// RAII timer that prints elapsed duration on drop when verbose mode is active.
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    /// Begin timing a labeled operation.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if is_verbose() {
            let elapsed = self.start.elapsed();
            eprintln!("  {}: {:.1?}", self.label, elapsed);
        }
    }
}

/// Logs every matcher skip in verbose mode and counts the outcome.
#[derive(Default)]
pub struct SkipLog {
    /// Rows produced.
    pub matched: usize,
    /// Comparison benchmarks without a reference counterpart.
    pub unmatched_benchmarks: usize,
    /// Comparison states without a reference counterpart.
    pub unmatched_states: usize,
}

impl SkipLog {
    /// Print the match count.
    pub fn finish(&self) {
        vprintln!(
            "  {} rows, {} unmatched benchmarks, {} unmatched states",
            self.matched,
            self.unmatched_benchmarks,
            self.unmatched_states
        );
    }
}

impl MatchObserver for SkipLog {
    fn unmatched_benchmark(&mut self, benchmark: &Benchmark) {
        self.unmatched_benchmarks += 1;
        vprintln!("  skip {}: no reference benchmark with the same axes", benchmark.name);
    }

    fn unmatched_state(&mut self, benchmark: &Benchmark, state: &str) {
        self.unmatched_states += 1;
        vprintln!("  skip {} [{state}]: state not in reference", benchmark.name);
    }

    fn no_summaries(&mut self, benchmark: &Benchmark, state: &str, side: Side) {
        vprintln!("  skip {} [{state}]: {side} state has no summaries", benchmark.name);
    }

    fn missing_summary(&mut self, benchmark: &Benchmark, state: &str, summary: &str, side: Side) {
        vprintln!("  skip {} [{state}]: {side} lacks '{summary}'", benchmark.name);
    }

    fn matched(&mut self, _row: &ComparisonRow) {
        self.matched += 1;
    }
}
