/// Formats a nanosecond duration with the largest unit it fills,
/// two decimals above the nanosecond tier.
pub fn format_duration(ns: f64) -> String {
    if ns >= 1e9 {
        format!("{:.2}s", ns / 1e9)
    } else if ns >= 1e6 {
        format!("{:.2}ms", ns / 1e6)
    } else if ns >= 1e3 {
        format!("{:.2}µs", ns / 1e3)
    } else {
        format!("{ns:.0}ns")
    }
}

/// Formats an operations-per-second rate with the same tiering as
/// [`format_duration`]. Not used by the default report; available for
/// callers with throughput-oriented data.
pub fn format_throughput(ops: f64) -> String {
    if ops >= 1e9 {
        format!("{:.2}G ops/s", ops / 1e9)
    } else if ops >= 1e6 {
        format!("{:.2}M ops/s", ops / 1e6)
    } else if ops >= 1e3 {
        format!("{:.2}K ops/s", ops / 1e3)
    } else {
        format!("{ops:.0} ops/s")
    }
}
