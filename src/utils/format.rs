//! Stopwatch text formatting

use std::time::Duration;

/// Format a duration as "MM:SS.CC".
///
/// Minutes do not roll over into hours, and hundredths are truncated.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    let hundredths = elapsed.subsec_millis() / 10;
    format!("{:02}:{:02}.{:02}", minutes, seconds, hundredths)
}

/// Parse "M:S" text back into a duration.
///
/// Both sides are read as decimal numbers, so "02:05.50" is 125.5 seconds.
/// Returns `None` unless there are exactly two finite, non-negative parts.
pub fn parse_elapsed(text: &str) -> Option<Duration> {
    let mut parts = text.trim().split(':');
    let minutes = parse_part(parts.next()?)?;
    let seconds = parse_part(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }

    let total = minutes * 60.0 + seconds;
    Duration::try_from_secs_f64(total).ok()
}

fn parse_part(part: &str) -> Option<f64> {
    let value: f64 = part.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}
