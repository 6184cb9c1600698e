use std::fs;

use benchdiff::{
    BenchDiffError, BenchmarkResult, RunDocument, compare, render_markdown, write_report_to_path,
};

fn sample_runs() -> (RunDocument, RunDocument) {
    let baseline = RunDocument {
        version: Some("1.2.0".to_string()),
        timestamp: Some("2024-05-01T10:00:00Z".to_string()),
        benchmarks: vec![
            BenchmarkResult::new("fast", 1_000_000.0),
            BenchmarkResult::new("gone", 500_000.0),
            BenchmarkResult::new("same", 1_000_000.0),
            BenchmarkResult::new("slow", 1_000_000.0),
        ],
    };
    let current = RunDocument {
        version: Some("1.3.0".to_string()),
        timestamp: Some("2024-05-02T10:00:00Z".to_string()),
        benchmarks: vec![
            BenchmarkResult::new("fast", 500_000.0),
            BenchmarkResult::new("fresh", 2_000_000.0),
            BenchmarkResult::new("same", 1_000_000.0),
            BenchmarkResult::new("slow", 1_500_000.0),
        ],
    };
    (baseline, current)
}

#[test]
fn test_report_summary_counts() {
    let (baseline, current) = sample_runs();
    let report = render_markdown(&compare(&baseline, &current, 10.0), &baseline, &current);
    assert!(report.contains("### Summary"));
    assert!(report.contains("🔴 **1 regressions detected**"));
    assert!(report.contains("🟢 **1 improvements**"));
    assert!(report.contains("⚪ 1 unchanged"));
    assert!(report.contains("🆕 1 new benchmarks"));
}

#[test]
fn test_report_detail_rows_per_status() {
    let (baseline, current) = sample_runs();
    let report = render_markdown(&compare(&baseline, &current, 10.0), &baseline, &current);
    assert!(report.contains("| Benchmark | Baseline | Current | Change |"));
    assert!(report.contains("| fast | 1.00ms | 500.00µs | -50.0% 🟢 |"));
    assert!(report.contains("| fresh | - | 2.00ms | 🆕 NEW |"));
    assert!(report.contains("| gone | 500.00µs | - | ❌ REMOVED |"));
    assert!(report.contains("| same | 1.00ms | 1.00ms | +0.0%  |"));
    assert!(report.contains("| slow | 1.00ms | 1.50ms | +50.0% 🔴 REGRESSION |"));
}

#[test]
fn test_report_rows_follow_comparator_order() {
    let (baseline, current) = sample_runs();
    let report = render_markdown(&compare(&baseline, &current, 10.0), &baseline, &current);
    let positions: Vec<usize> = ["| fast |", "| fresh |", "| gone |", "| same |", "| slow |"]
        .iter()
        .map(|row| report.find(row).expect("row present"))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_report_omits_empty_summary_lines() {
    let baseline = RunDocument {
        benchmarks: vec![
            BenchmarkResult::new("a", 100.0),
            BenchmarkResult::new("b", 100.0),
        ],
        ..RunDocument::default()
    };
    let current = baseline.clone();
    let report = render_markdown(&compare(&baseline, &current, 10.0), &baseline, &current);
    assert!(report.contains("⚪ 2 unchanged"));
    assert!(!report.contains("regressions detected"));
    assert!(!report.contains("improvements"));
    assert!(!report.contains("new benchmarks"));
}

#[test]
fn test_report_metadata_footer() {
    let (baseline, current) = sample_runs();
    let report = render_markdown(&compare(&baseline, &current, 10.0), &baseline, &current);
    assert!(report.contains("<details>"));
    assert!(report.contains("<summary>Run Information</summary>"));
    assert!(report.contains("- Baseline: 1.2.0 @ 2024-05-01T10:00:00Z"));
    assert!(report.contains("- Current: 1.3.0 @ 2024-05-02T10:00:00Z"));
    assert!(report.ends_with("</details>"));
}

#[test]
fn test_report_metadata_falls_back_to_unknown() {
    let baseline = RunDocument::default();
    let current = RunDocument::default();
    let report = render_markdown(&compare(&baseline, &current, 10.0), &baseline, &current);
    assert!(report.contains("- Baseline: unknown @ unknown"));
    assert!(report.contains("- Current: unknown @ unknown"));
}

#[test]
fn test_report_render_is_deterministic() {
    let (baseline, current) = sample_runs();
    let comparisons = compare(&baseline, &current, 10.0);
    let first = render_markdown(&comparisons, &baseline, &current);
    let second = render_markdown(&compare(&baseline, &current, 10.0), &baseline, &current);
    assert_eq!(first, second);
}

#[test]
fn test_write_report_to_path_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("comparison.md");
    let (baseline, current) = sample_runs();
    let report = render_markdown(&compare(&baseline, &current, 10.0), &baseline, &current);
    write_report_to_path(&path, &report).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), report);
}

#[test]
fn test_write_report_to_unwritable_path_is_io_error() {
    let err = write_report_to_path("/nonexistent/dir/comparison.md", "report").unwrap_err();
    assert!(matches!(err, BenchDiffError::IoError(_)));
}
