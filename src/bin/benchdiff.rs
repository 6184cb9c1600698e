use std::{env, process};

use benchdiff::{
    BenchDiffError, CommandLineConfig, Comparison, ComparisonStatus, compare,
    load_results_from_path, render_markdown, write_report_to_path,
};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let comparisons = match run_comparison(&config) {
        Ok(comparisons) => comparisons,
        Err(err) => {
            eprintln!("comparison failed: {err}");
            process::exit(1);
        }
    };

    let regressions = regression_summaries(&comparisons);
    if config.fail_on_regression && !regressions.is_empty() {
        eprintln!("warning: {} regressions detected", regressions.len());
        for summary in &regressions {
            eprintln!("  - {summary}");
        }
        process::exit(1);
    }
}

fn run_comparison(config: &CommandLineConfig) -> Result<Vec<Comparison>, BenchDiffError> {
    let baseline = load_results_from_path(&config.baseline)?;
    let current = load_results_from_path(&config.current)?;
    let comparisons = compare(&baseline, &current, config.threshold);
    let report = render_markdown(&comparisons, &baseline, &current);
    write_report_to_path(&config.output, &report)?;
    println!("report_written=\"{}\"", config.output);
    Ok(comparisons)
}

fn regression_summaries(comparisons: &[Comparison]) -> Vec<String> {
    comparisons
        .iter()
        .filter(|comparison| comparison.status == ComparisonStatus::Regression)
        .map(Comparison::summary)
        .collect()
}
