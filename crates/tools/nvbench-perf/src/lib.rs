//! Comparison of nvbench result documents.
//!
//! Provides the typed model of an nvbench JSON result file, loading with the
//! device-equality check, matching of benchmark/state pairs across a
//! reference and a comparison run, and terminal/JSON output of the matched
//! rows.
//!
//! Used by the `nvbench-compare` command-line tool.

pub mod error;
pub mod loader;
pub mod matcher;
pub mod model;
pub mod output;

pub use error::{CompareError, Result};
pub use matcher::{ComparisonRow, MatchObserver, Side, compare_documents, compare_documents_with};
pub use model::{Benchmark, ResultDocument, State, Summary};
