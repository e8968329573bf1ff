use proptest::prelude::*;
use range_seek::core::format_duration;

#[test]
fn short_durations_use_minutes_and_seconds() {
    assert_eq!(format_duration(0), "00:00");
    assert_eq!(format_duration(1_500), "00:01");
    assert_eq!(format_duration(59_000), "00:59");
    assert_eq!(format_duration(61_000), "01:01");
}

#[test]
fn hour_and_longer_durations_include_hours() {
    assert_eq!(format_duration(3_661_000), "01:01:01");
    assert_eq!(format_duration(86_399_000), "23:59:59");
    assert_eq!(format_duration(360_000_000), "100:00:00");
}

#[test]
fn negative_duration_clamps_to_zero() {
    assert_eq!(format_duration(-1), "00:00");
    assert_eq!(format_duration(i64::MIN), "00:00");
}

fn parse_label(label: &str) -> i64 {
    label
        .split(':')
        .map(|field| field.parse::<i64>().expect("numeric field"))
        .fold(0, |acc, field| acc * 60 + field)
}

proptest! {
    #[test]
    fn label_fields_sum_to_whole_seconds(ms in 0i64..1_000_000_000) {
        let label = format_duration(ms);
        let fields: Vec<&str> = label.split(':').collect();

        prop_assert_eq!(parse_label(&label), ms / 1_000);
        prop_assert_eq!(fields.len(), if ms >= 3_600_000 { 3 } else { 2 });
        for field in &fields[fields.len() - 2..] {
            prop_assert_eq!(field.len(), 2);
        }
    }
}
