use chrono::{Local, TimeZone};

/// Render epoch seconds as a local date-time. Conversion happens at output
/// time only; the aggregate keeps raw timestamps.
pub fn fmt_epoch(secs: i64) -> String {
    match Local.timestamp_opt(secs, 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => secs.to_string(),
    }
}
