use chrono::{DateTime, Local};
use humansize::{format_size, DECIMAL};

/// Format a byte count in human-readable decimal units (kB, MB, GB)
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, DECIMAL)
}

/// Wall-clock time of day shown in the dashboard header (HH:MM:SS)
pub fn format_clock(time: DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Format a refresh period for display ("1s", "250ms")
pub fn format_interval(millis: u64) -> String {
    if millis >= 1000 && millis % 1000 == 0 {
        format!("{}s", millis / 1000)
    } else {
        format!("{}ms", millis)
    }
}
