use range_seek::telemetry::{DEFAULT_FILTER, init_default_tracing, init_tracing_with_filter};

#[test]
fn default_filter_targets_crate() {
    assert_eq!(DEFAULT_FILTER, "range_seek=info");
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_helpers_are_inert_without_feature() {
    assert!(!init_default_tracing());
    assert!(!init_tracing_with_filter("range_seek=trace"));
}

#[cfg(feature = "telemetry")]
#[test]
fn only_first_subscriber_install_succeeds() {
    let first = init_tracing_with_filter("range_seek=trace");
    assert!(!init_default_tracing());
    let _ = first;
}
