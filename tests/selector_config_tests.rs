use range_seek::SeekError;
use range_seek::api::{RangeSelector, RangeSelectorConfig};
use range_seek::scheduler::ManualScheduler;

#[test]
fn selector_config_json_roundtrip() {
    let config = RangeSelectorConfig::new(480)
        .with_weights(200, 80)
        .with_handle_width_px(24)
        .with_progress_marker(9, 4)
        .with_fixed_inset_px(12)
        .with_tick_interval_ms(16)
        .with_min_duration_ms(2_000);

    let json = config
        .to_json_pretty()
        .expect("config should serialize to json");
    let restored = RangeSelectorConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let restored =
        RangeSelectorConfig::from_json_str(r#"{ "track_width_px": 400 }"#).expect("parse");

    assert_eq!(restored, RangeSelectorConfig::new(400));
    assert_eq!(restored.total_weight, 100);
    assert_eq!(restored.fixed_view_weight, 0);
    assert_eq!(restored.handle_width_px, 16);
    assert_eq!(restored.progress_width_px, 13);
    assert_eq!(restored.margin_px, 6);
    assert_eq!(restored.fixed_inset_px, 20);
    assert_eq!(restored.tick_interval_ms, 20);
    assert_eq!(restored.min_duration_ms, 0);
}

#[test]
fn malformed_json_is_invalid_config() {
    let err = RangeSelectorConfig::from_json_str("{ not json").expect_err("malformed");
    assert!(matches!(err, SeekError::InvalidConfig(_)));

    let err = RangeSelectorConfig::from_json_str(r#"{ "total_weight": 100 }"#)
        .expect_err("missing track width");
    assert!(matches!(err, SeekError::InvalidConfig(_)));
}

#[test]
fn selector_rejects_invalid_config() {
    let cases = [
        RangeSelectorConfig::new(20),
        RangeSelectorConfig::new(400).with_weights(0, 0),
        RangeSelectorConfig::new(400).with_weights(100, 101),
        RangeSelectorConfig::new(400).with_weights(100, -1),
        RangeSelectorConfig::new(400).with_handle_width_px(-1),
        RangeSelectorConfig::new(400).with_progress_marker(-1, 6),
        RangeSelectorConfig::new(400).with_fixed_inset_px(-5),
        RangeSelectorConfig::new(400).with_tick_interval_ms(0),
        RangeSelectorConfig::new(400).with_min_duration_ms(-1),
    ];

    for config in cases {
        let result = RangeSelector::new(ManualScheduler::new(), config);
        assert!(
            matches!(result, Err(SeekError::InvalidConfig(_))),
            "config should be rejected: {config:?}"
        );
    }
}

#[test]
fn selector_starts_without_range() {
    let config = RangeSelectorConfig::new(400).with_tick_interval_ms(16);
    let selector = RangeSelector::new(ManualScheduler::new(), config).expect("selector init");

    assert!(selector.layout().is_none());
    assert!(selector.left_time().is_none());
    assert!(selector.progress_time().is_none());
    assert!(!selector.is_animating());
    assert_eq!(selector.tick_interval_ms(), 16);
    assert_eq!(selector.geometry().usable_width_px(), 368);
}
