use std::collections::{BTreeSet, HashMap};

use crate::results::{BenchmarkResult, RunDocument};

/// Threshold applied when the caller does not supply one.
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComparisonStatus {
    New,
    Removed,
    Regression,
    Improvement,
    Unchanged,
}

/// Per-benchmark comparison record. Immutable once produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub name: String,
    pub status: ComparisonStatus,
    pub baseline: Option<BenchmarkResult>,
    pub current: Option<BenchmarkResult>,
    pub change_percent: f64,
}

impl Comparison {
    pub fn summary(&self) -> String {
        match self.status {
            ComparisonStatus::New => format!("{}: new", self.name),
            ComparisonStatus::Removed => format!("{}: removed", self.name),
            _ => format!("{}: {:+.1}%", self.name, self.change_percent),
        }
    }
}

/// Percentage change from baseline to current (positive = slower).
/// A zero baseline yields 0 rather than dividing by zero.
pub fn percent_change(baseline_ns: f64, current_ns: f64) -> f64 {
    if baseline_ns == 0.0 {
        return 0.0;
    }
    (current_ns - baseline_ns) / baseline_ns * 100.0
}

/// Compares two runs and returns one record per benchmark name in the union
/// of both runs, in ascending lexicographic order. The ordering is part of
/// the contract: reports stay deterministic and diffable.
///
/// Threshold comparison is strict on both sides; a change exactly equal to
/// the threshold stays `Unchanged`. Duplicate names within one run resolve
/// last-wins.
pub fn compare(baseline: &RunDocument, current: &RunDocument, threshold: f64) -> Vec<Comparison> {
    let baseline_by_name = index_by_name(&baseline.benchmarks);
    let current_by_name = index_by_name(&current.benchmarks);

    let names: BTreeSet<&str> = baseline_by_name
        .keys()
        .chain(current_by_name.keys())
        .copied()
        .collect();

    let mut comparisons = Vec::with_capacity(names.len());
    for name in names {
        let comparison = match (baseline_by_name.get(name), current_by_name.get(name)) {
            (None, Some(curr)) => Comparison {
                name: name.to_string(),
                status: ComparisonStatus::New,
                baseline: None,
                current: Some((*curr).clone()),
                change_percent: 0.0,
            },
            (Some(base), None) => Comparison {
                name: name.to_string(),
                status: ComparisonStatus::Removed,
                baseline: Some((*base).clone()),
                current: None,
                change_percent: 0.0,
            },
            (Some(base), Some(curr)) => {
                let change = percent_change(base.mean_ns, curr.mean_ns);
                let status = if change > threshold {
                    ComparisonStatus::Regression
                } else if change < -threshold {
                    ComparisonStatus::Improvement
                } else {
                    ComparisonStatus::Unchanged
                };
                Comparison {
                    name: name.to_string(),
                    status,
                    baseline: Some((*base).clone()),
                    current: Some((*curr).clone()),
                    change_percent: change,
                }
            }
            (None, None) => continue,
        };
        comparisons.push(comparison);
    }
    comparisons
}

fn index_by_name(benchmarks: &[BenchmarkResult]) -> HashMap<&str, &BenchmarkResult> {
    let mut by_name = HashMap::with_capacity(benchmarks.len());
    for benchmark in benchmarks {
        by_name.insert(benchmark.name.as_str(), benchmark);
    }
    by_name
}
