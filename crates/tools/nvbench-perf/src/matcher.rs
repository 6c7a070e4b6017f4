//! Matching of benchmark/state pairs across two result documents.
//!
//! Walks the comparison document in order. Each benchmark is paired with the
//! first reference benchmark of the same case, then each of its states with
//! the reference state of the same description. Pairs lacking any of the
//! required summaries are dropped without error.

use std::fmt;

use crate::error::{CompareError, Result};
use crate::model::{Benchmark, ResultDocument, Summary};

/// Summary holding the mean cold GPU time.
pub const TIME_SUMMARY: &str = "Average GPU Time (Cold)";

/// Summary holding the relative standard deviation of cold GPU time.
pub const NOISE_SUMMARY: &str = "GPU Relative Standard Deviation (Cold)";

/// Which input document a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The reference ("old") run.
    Reference,
    /// The comparison ("new") run.
    Compare,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Reference => f.write_str("reference"),
            Side::Compare => f.write_str("compare"),
        }
    }
}

/// One matched state pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Benchmark name.
    pub name: String,
    /// State description.
    pub parameters: String,
    /// Reference time.
    pub reference_time: f64,
    /// Comparison time.
    pub compare_time: f64,
    /// Reference relative standard deviation.
    pub reference_noise: f64,
    /// Comparison relative standard deviation.
    pub compare_noise: f64,
}

impl ComparisonRow {
    /// Comparison time minus reference time.
    pub fn delta(&self) -> f64 {
        self.compare_time - self.reference_time
    }
}

/// Receives notifications about everything the matcher skips.
///
/// All methods default to doing nothing.
pub trait MatchObserver {
    /// No reference benchmark has the same name and axes.
    fn unmatched_benchmark(&mut self, _benchmark: &Benchmark) {}

    /// The matched reference benchmark has no state with this description.
    fn unmatched_state(&mut self, _benchmark: &Benchmark, _state: &str) {}

    /// The state on `side` has no summaries at all.
    fn no_summaries(&mut self, _benchmark: &Benchmark, _state: &str, _side: Side) {}

    /// The state on `side` lacks the named summary.
    fn missing_summary(&mut self, _benchmark: &Benchmark, _state: &str, _summary: &str, _side: Side) {}

    /// A row was produced.
    fn matched(&mut self, _row: &ComparisonRow) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl MatchObserver for Silent {}

/// Find the first benchmark in `haystack` describing the same case as `needle`.
///
/// Duplicates in `haystack` are not an error; the earliest one wins.
pub fn find_matching_benchmark<'a>(needle: &Benchmark, haystack: &'a [Benchmark]) -> Option<&'a Benchmark> {
    haystack.iter().find(|hay| hay.same_case(needle))
}

/// Match `compare` against `reference` and collect the reportable rows.
///
/// # Errors
///
/// Returns [`CompareError::MalformedSummary`] if a required summary is present
/// but has no numeric value.
pub fn compare_documents(reference: &ResultDocument, compare: &ResultDocument) -> Result<Vec<ComparisonRow>> {
    compare_documents_with(reference, compare, &mut Silent)
}

/// Like [`compare_documents`], reporting every skip to `observer`.
///
/// Rows follow the comparison document: benchmark order, then state order.
///
/// # Errors
///
/// See [`compare_documents`].
pub fn compare_documents_with(
    reference: &ResultDocument,
    compare: &ResultDocument,
    observer: &mut dyn MatchObserver,
) -> Result<Vec<ComparisonRow>> {
    // TODO: surface unmatched benchmark/state counts in the default report so
    // an empty table can be told apart from a run with no overlap.
    let mut rows = Vec::new();

    for cmp_bench in &compare.benchmarks {
        let Some(ref_bench) = find_matching_benchmark(cmp_bench, &reference.benchmarks) else {
            observer.unmatched_benchmark(cmp_bench);
            continue;
        };

        for (description, cmp_state) in cmp_bench.states.iter() {
            let Some(ref_state) = ref_bench.states.get(description) else {
                observer.unmatched_state(cmp_bench, description);
                continue;
            };

            let (Some(cmp_summaries), Some(ref_summaries)) = (cmp_state.summaries(), ref_state.summaries()) else {
                if cmp_state.summaries().is_none() {
                    observer.no_summaries(cmp_bench, description, Side::Compare);
                }
                if ref_state.summaries().is_none() {
                    observer.no_summaries(cmp_bench, description, Side::Reference);
                }
                continue;
            };

            let lookups = [
                (Side::Compare, TIME_SUMMARY, cmp_summaries.get(TIME_SUMMARY)),
                (Side::Reference, TIME_SUMMARY, ref_summaries.get(TIME_SUMMARY)),
                (Side::Compare, NOISE_SUMMARY, cmp_summaries.get(NOISE_SUMMARY)),
                (Side::Reference, NOISE_SUMMARY, ref_summaries.get(NOISE_SUMMARY)),
            ];

            let mut complete = true;
            for (side, summary, found) in &lookups {
                if found.is_none() {
                    observer.missing_summary(cmp_bench, description, summary, *side);
                    complete = false;
                }
            }
            if !complete {
                continue;
            }

            let [cmp_time, ref_time, cmp_noise, ref_noise] =
                lookups.map(|(_, summary, found)| (summary, found));

            let row = ComparisonRow {
                name: cmp_bench.name.clone(),
                parameters: description.to_string(),
                reference_time: value_of(ref_time, cmp_bench, description)?,
                compare_time: value_of(cmp_time, cmp_bench, description)?,
                reference_noise: value_of(ref_noise, cmp_bench, description)?,
                compare_noise: value_of(cmp_noise, cmp_bench, description)?,
            };
            observer.matched(&row);
            rows.push(row);
        }
    }

    Ok(rows)
}

/// Extract the numeric value of a required summary known to be present.
fn value_of(
    (summary, found): (&'static str, Option<&Summary>),
    benchmark: &Benchmark,
    state: &str,
) -> Result<f64> {
    found
        .and_then(Summary::number)
        .ok_or_else(|| CompareError::MalformedSummary {
            benchmark: benchmark.name.clone(),
            state: state.to_string(),
            summary,
        })
}
