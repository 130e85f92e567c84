//! Time Formatting
//!
//! Helpers for showing and entering durations.

/// Seconds as `M:SS`, or `H:MM:SS` from one hour up
pub fn format_clock(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Split seconds into the (minutes, seconds) form inputs
pub fn split_minutes(total_seconds: u32) -> (u32, u32) {
    (total_seconds / 60, total_seconds % 60)
}

/// Combine form inputs into seconds. Blank fields count as zero;
/// anything non-numeric is rejected.
pub fn parse_duration(minutes: &str, seconds: &str) -> Option<u32> {
    fn field(raw: &str) -> Option<u32> {
        let raw = raw.trim();
        if raw.is_empty() {
            Some(0)
        } else {
            raw.parse().ok()
        }
    }
    field(minutes)?.checked_mul(60)?.checked_add(field(seconds)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(600), "10:00");
        assert_eq!(format_clock(3600), "1:00:00");
        assert_eq!(format_clock(3725), "1:02:05");
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("2", "30"), Some(150));
        assert_eq!(parse_duration("", "45"), Some(45));
        assert_eq!(parse_duration(" 1 ", ""), Some(60));
        assert_eq!(parse_duration("", ""), Some(0));
        assert_eq!(parse_duration("x", "1"), None);
        assert_eq!(parse_duration("-1", "0"), None);
    }

    #[test]
    fn test_split_minutes() {
        assert_eq!(split_minutes(150), (2, 30));
        assert_eq!(split_minutes(59), (0, 59));
    }
}
