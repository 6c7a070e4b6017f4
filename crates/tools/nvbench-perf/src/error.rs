//! Error types for result loading and comparison.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for comparison operations.
pub type Result<T> = std::result::Result<T, CompareError>;

/// Fatal comparison errors.
///
/// Missing benchmarks, states, or summaries are not errors; they are skipped
/// by the matcher.
#[derive(Error, Debug)]
pub enum CompareError {
    /// A result file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A result file is not a valid nvbench document.
    #[error("failed to parse {}", path.display())]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },

    /// The two documents were produced on different devices.
    #[error("Device sections do not match.")]
    DeviceMismatch,

    /// A required summary exists but carries no numeric `value.value`.
    #[error("summary '{summary}' of {benchmark} [{state}] has no numeric value")]
    MalformedSummary {
        /// Benchmark name.
        benchmark: String,
        /// State description.
        state: String,
        /// Summary name.
        summary: &'static str,
    },
}
