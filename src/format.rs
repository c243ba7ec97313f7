//! Human-readable formatting for display

/// Format a number of seconds as `H:MM:SS`, or `M:SS` when under an hour.
///
/// ```
/// use ring_playlist::format::format_duration;
///
/// assert_eq!(format_duration(433), "7:13");
/// assert_eq!(format_duration(3725), "1:02:05");
/// ```
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let mins = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_only() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(433), "7:13");
        assert_eq!(format_duration(3599), "59:59");
    }

    #[test]
    fn test_with_hours() {
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(36_061), "10:01:01");
    }
}
