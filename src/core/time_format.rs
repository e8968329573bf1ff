const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Formats a millisecond duration as `HH:MM:SS`, or `MM:SS` below one hour.
///
/// Hours are padded to two digits and grow past that for long durations.
/// Negative durations format as `00:00`.
#[must_use]
pub fn format_duration(ms: i64) -> String {
    let ms = ms.max(0);
    let hour = ms / MS_PER_HOUR;
    let minute = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let second = (ms % MS_PER_MINUTE) / MS_PER_SECOND;

    if hour > 0 {
        format!("{hour:02}:{minute:02}:{second:02}")
    } else {
        format!("{minute:02}:{second:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_duration;

    #[test]
    fn hour_field_is_omitted_below_one_hour() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(999), "00:00");
        assert_eq!(format_duration(59_000), "00:59");
        assert_eq!(format_duration(3_599_999), "59:59");
    }

    #[test]
    fn hour_field_is_padded_and_grows() {
        assert_eq!(format_duration(3_600_000), "01:00:00");
        assert_eq!(format_duration(3_661_000), "01:01:01");
        assert_eq!(format_duration(36_000_000), "10:00:00");
        assert_eq!(format_duration(360_000_000), "100:00:00");
    }

    #[test]
    fn negative_duration_formats_as_zero() {
        assert_eq!(format_duration(-5_000), "00:00");
    }
}
