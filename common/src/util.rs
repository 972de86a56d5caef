use chrono::NaiveTime;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Render a second count as `HH:MM:SS`. Wraps at 24 hours.
pub fn format_clock(seconds: u64) -> String {
    let seconds = (seconds % SECONDS_PER_DAY) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
        .unwrap_or(NaiveTime::MIN)
        .format("%H:%M:%S")
        .to_string()
}

/// Whole seconds contained in a millisecond offset
pub fn millis_to_seconds(millis: u64) -> u64 {
    millis / 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00:00");
        assert_eq!(format_clock(100), "00:01:40");
        assert_eq!(format_clock(3 * 3600 + 25 * 60 + 7), "03:25:07");
    }

    #[test]
    fn test_format_clock_wraps_at_midnight() {
        assert_eq!(format_clock(SECONDS_PER_DAY + 61), "00:01:01");
    }

    #[test]
    fn test_millis_truncate() {
        assert_eq!(millis_to_seconds(1999), 1);
        assert_eq!(millis_to_seconds(999), 0);
    }
}
