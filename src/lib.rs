//! Benchmark comparison reporting for CI runs.
//! Loads two benchmark result documents, classifies per-benchmark deltas against a
//! percentage threshold, and renders a Markdown report.

pub mod cli;
pub mod compare;
pub mod errors;
pub mod report;
pub mod results;
pub mod units;

pub use crate::cli::CommandLineConfig;
pub use crate::compare::{
    Comparison, ComparisonStatus, DEFAULT_THRESHOLD_PERCENT, compare, percent_change,
};
pub use crate::errors::BenchDiffError;
pub use crate::report::{render_markdown, write_report_to_path};
pub use crate::results::{
    BenchmarkResult, RunDocument, load_results_from_path, load_results_from_reader,
};
pub use crate::units::{format_duration, format_throughput};
