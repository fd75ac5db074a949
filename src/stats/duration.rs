//! Human-readable duration formatting.

/// Formats a millisecond span for display, the same way response times and
/// the longest silence are shown.
///
/// Zero means "no samples" and renders as `N/A`.
///
/// # Example
///
/// ```
/// use chatlens::stats::format_duration;
///
/// assert_eq!(format_duration(0), "N/A");
/// assert_eq!(format_duration(42_000), "42 seg");
/// assert_eq!(format_duration(5 * 60_000), "5 min");
/// assert_eq!(format_duration(10 * 3_600_000), "10h 0m");
/// assert_eq!(format_duration(30 * 3_600_000), "1d 6h");
/// ```
pub fn format_duration(ms: i64) -> String {
    if ms == 0 {
        return "N/A".to_string();
    }
    let seconds = ms / 1000;
    if seconds < 60 {
        return format!("{seconds} seg");
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h {}m", minutes % 60);
    }
    let days = hours / 24;
    format!("{days}d {}h", hours % 24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_not_available() {
        assert_eq!(format_duration(0), "N/A");
    }

    #[test]
    fn test_sub_second_rounds_down() {
        assert_eq!(format_duration(999), "0 seg");
    }

    #[test]
    fn test_seconds() {
        assert_eq!(format_duration(1_000), "1 seg");
        assert_eq!(format_duration(59_999), "59 seg");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(format_duration(60_000), "1 min");
        assert_eq!(format_duration(59 * 60_000 + 59_000), "59 min");
    }

    #[test]
    fn test_hours_with_minute_remainder() {
        assert_eq!(format_duration(3_600_000), "1h 0m");
        assert_eq!(format_duration(90 * 60_000), "1h 30m");
        assert_eq!(format_duration(10 * 3_600_000), "10h 0m");
    }

    #[test]
    fn test_days_with_hour_remainder() {
        assert_eq!(format_duration(24 * 3_600_000), "1d 0h");
        assert_eq!(format_duration(36 * 3_600_000), "1d 12h");
    }
}
