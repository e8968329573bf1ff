use crate::core::{TrackGeometry, WeightConfig};
use crate::error::{SeekError, SeekResult};

use super::RangeSelectorConfig;

pub(super) fn validate_config(config: RangeSelectorConfig) -> SeekResult<RangeSelectorConfig> {
    validate_geometry(config.geometry())?;
    validate_weights(config.geometry(), config.weights())?;
    validate_min_duration(config.min_duration_ms)?;
    if config.tick_interval_ms == 0 {
        return Err(SeekError::InvalidConfig(
            "tick_interval_ms must be > 0".to_owned(),
        ));
    }
    Ok(config)
}

pub(super) fn validate_geometry(geometry: TrackGeometry) -> SeekResult<TrackGeometry> {
    if geometry.handle_width_px < 0
        || geometry.progress_width_px < 0
        || geometry.margin_px < 0
        || geometry.fixed_inset_px < 0
    {
        return Err(SeekError::InvalidConfig(
            "handle, progress, margin and inset widths must be >= 0".to_owned(),
        ));
    }
    Ok(geometry)
}

pub(super) fn validate_weights(
    geometry: TrackGeometry,
    weights: WeightConfig,
) -> SeekResult<WeightConfig> {
    if geometry.usable_width_px() <= 0 {
        return Err(SeekError::InvalidConfig(format!(
            "track width {}px leaves no room between two {}px handles",
            geometry.track_width_px, geometry.handle_width_px
        )));
    }
    if weights.total_weight <= 0 {
        return Err(SeekError::InvalidConfig(
            "total_weight must be > 0".to_owned(),
        ));
    }
    if weights.fixed_view_weight < 0 || weights.fixed_view_weight > weights.total_weight {
        return Err(SeekError::InvalidConfig(format!(
            "fixed_view_weight must be in [0, {}], got {}",
            weights.total_weight, weights.fixed_view_weight
        )));
    }
    Ok(weights)
}

pub(super) fn validate_min_duration(min_duration_ms: i64) -> SeekResult<i64> {
    if min_duration_ms < 0 {
        return Err(SeekError::InvalidConfig(format!(
            "min duration must be >= 0, got {min_duration_ms}"
        )));
    }
    Ok(min_duration_ms)
}
