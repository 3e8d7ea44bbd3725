use chrono::Duration;

/// `75s` → `1m 15s`; negative spans render as `0s`.
#[must_use]
pub fn format_duration(value: Duration) -> String {
    let seconds = value.num_seconds().max(0);
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    if minutes == 0 {
        format!("{remainder}s")
    } else {
        format!("{minutes}m {remainder:02}s")
    }
}
