use std::{fs, path::Path};

use crate::compare::{Comparison, ComparisonStatus};
use crate::errors::BenchDiffError;
use crate::results::RunDocument;
use crate::units::format_duration;

/// Renders the comparison report as Markdown: summary counts, a detail
/// table in comparator order, and a collapsible run-metadata footer.
///
/// Removed benchmarks appear in the table but get no summary headline;
/// the summary surfaces regressions, improvements, unchanged, and new.
pub fn render_markdown(
    comparisons: &[Comparison],
    baseline: &RunDocument,
    current: &RunDocument,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    let regressions = count_status(comparisons, ComparisonStatus::Regression);
    let improvements = count_status(comparisons, ComparisonStatus::Improvement);
    let unchanged = count_status(comparisons, ComparisonStatus::Unchanged);
    let new_benchmarks = count_status(comparisons, ComparisonStatus::New);

    lines.push("### Summary".to_string());
    lines.push(String::new());
    if regressions > 0 {
        lines.push(format!("🔴 **{regressions} regressions detected**"));
    }
    if improvements > 0 {
        lines.push(format!("🟢 **{improvements} improvements**"));
    }
    lines.push(format!("⚪ {unchanged} unchanged"));
    if new_benchmarks > 0 {
        lines.push(format!("🆕 {new_benchmarks} new benchmarks"));
    }
    lines.push(String::new());

    lines.push("### Details".to_string());
    lines.push(String::new());
    lines.push("| Benchmark | Baseline | Current | Change |".to_string());
    lines.push("|-----------|----------|---------|--------|".to_string());
    for comparison in comparisons {
        lines.push(detail_row(comparison));
    }
    lines.push(String::new());

    lines.push("<details>".to_string());
    lines.push("<summary>Run Information</summary>".to_string());
    lines.push(String::new());
    lines.push(format!("- Baseline: {}", run_label(baseline)));
    lines.push(format!("- Current: {}", run_label(current)));
    lines.push(String::new());
    lines.push("</details>".to_string());

    lines.join("\n")
}

pub fn write_report_to_path<P: AsRef<Path>>(path: P, report: &str) -> Result<(), BenchDiffError> {
    fs::write(path.as_ref(), report).map_err(|e| {
        BenchDiffError::io(format!("unable to write {}: {e}", path.as_ref().display()))
    })
}

fn detail_row(comparison: &Comparison) -> String {
    let name = &comparison.name;
    let baseline_mean = comparison.baseline.as_ref().map_or(0.0, |b| b.mean_ns);
    let current_mean = comparison.current.as_ref().map_or(0.0, |c| c.mean_ns);
    match comparison.status {
        ComparisonStatus::New => {
            format!("| {name} | - | {} | 🆕 NEW |", format_duration(current_mean))
        }
        ComparisonStatus::Removed => {
            format!(
                "| {name} | {} | - | ❌ REMOVED |",
                format_duration(baseline_mean)
            )
        }
        status => {
            let change = comparison.change_percent;
            let (change_str, marker) = match status {
                ComparisonStatus::Regression => (format!("+{change:.1}%"), "🔴 REGRESSION"),
                ComparisonStatus::Improvement => (format!("{change:.1}%"), "🟢"),
                _ => (format!("{change:+.1}%"), ""),
            };
            format!(
                "| {name} | {} | {} | {change_str} {marker} |",
                format_duration(baseline_mean),
                format_duration(current_mean)
            )
        }
    }
}

fn run_label(run: &RunDocument) -> String {
    format!(
        "{} @ {}",
        run.version.as_deref().unwrap_or("unknown"),
        run.timestamp.as_deref().unwrap_or("unknown")
    )
}

fn count_status(comparisons: &[Comparison], status: ComparisonStatus) -> usize {
    comparisons
        .iter()
        .filter(|comparison| comparison.status == status)
        .count()
}
