use crate::compare::DEFAULT_THRESHOLD_PERCENT;

pub const DEFAULT_OUTPUT: &str = "comparison.md";

#[derive(Clone, Debug, PartialEq)]
pub struct CommandLineConfig {
    pub baseline: String,
    pub current: String,
    pub output: String,
    pub threshold: f64,
    pub fail_on_regression: bool,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut baseline = None;
        let mut current = None;
        let mut output = String::from(DEFAULT_OUTPUT);
        let mut threshold = DEFAULT_THRESHOLD_PERCENT;
        let mut fail_on_regression = false;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--baseline" => {
                    baseline = Some(
                        iter.next()
                            .ok_or_else(|| "--baseline requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--current" => {
                    current = Some(
                        iter.next()
                            .ok_or_else(|| "--current requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--output" => {
                    output = iter
                        .next()
                        .ok_or_else(|| "--output requires a value".to_string())?
                        .to_string();
                }
                "--threshold" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--threshold requires a value".to_string())?;
                    threshold = value
                        .parse()
                        .map_err(|_| format!("invalid threshold {value}"))?;
                }
                "--fail-on-regression" => {
                    fail_on_regression = true;
                }
                other => {
                    return Err(format!("unknown flag {other}"));
                }
            }
        }
        let baseline = baseline.ok_or_else(|| "--baseline is required".to_string())?;
        let current = current.ok_or_else(|| "--current is required".to_string())?;
        Ok(Self {
            baseline,
            current,
            output,
            threshold,
            fail_on_regression,
        })
    }

    pub fn help() -> &'static str {
        "Usage: benchdiff --baseline PATH --current PATH [--output PATH] [--threshold PERCENT] [--fail-on-regression]\n"
    }
}
