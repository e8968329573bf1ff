use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::types::{TimeRange, TrackGeometry, WeightConfig};
use crate::error::{SeekError, SeekResult};

const MS_PER_SECOND: i64 = 1_000;
const SPEED_DECIMALS: u32 = 3;

/// Resolved pixel/time mapping for one configured time range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeLayout {
    pub time_range: TimeRange,
    pub handle_width_px: i32,
    pub selection_width_px: i32,
    pub left_bound_px: i32,
    pub right_bound_px: i32,
    /// Milliseconds per pixel.
    pub map_rate: f64,
    pub min_width_px: i32,
    pub speed_px_per_tick: f64,
}

impl RangeLayout {
    /// Pixel that maps to `start_time`: the left handle's right edge at rest.
    #[must_use]
    pub const fn origin_px(&self) -> i32 {
        self.left_bound_px + self.handle_width_px
    }

    /// Pixel that maps to `end_time`: the right handle's left edge at rest.
    #[must_use]
    pub const fn end_px(&self) -> i32 {
        self.right_bound_px - self.handle_width_px
    }

    /// Maps an inner-edge pixel to the nearest millisecond.
    #[must_use]
    pub fn pixel_to_time(&self, px: i32) -> i64 {
        let offset = f64::from(px) - f64::from(self.origin_px());
        self.time_range
            .start_time
            .saturating_add((offset * self.map_rate).round() as i64)
    }

    /// Maps a time to the nearest inner-edge pixel.
    #[must_use]
    pub fn time_to_pixel(&self, time: i64) -> i32 {
        let delta = time.saturating_sub(self.time_range.start_time) as f64;
        self.origin_px()
            .saturating_add((delta / self.map_rate).round() as i32)
    }
}

/// Owns track geometry and weight configuration and derives `RangeLayout`s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeMapper {
    geometry: TrackGeometry,
    weights: WeightConfig,
    tick_interval_ms: u64,
}

impl RangeMapper {
    #[must_use]
    pub fn new(geometry: TrackGeometry, weights: WeightConfig, tick_interval_ms: u64) -> Self {
        Self {
            geometry,
            weights,
            tick_interval_ms,
        }
    }

    #[must_use]
    pub fn geometry(&self) -> TrackGeometry {
        self.geometry
    }

    #[must_use]
    pub fn weights(&self) -> WeightConfig {
        self.weights
    }

    #[must_use]
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    pub fn configure(
        &mut self,
        track_width_px: i32,
        handle_width_px: i32,
        total_weight: i32,
        fixed_view_weight: i32,
    ) {
        self.geometry.track_width_px = track_width_px;
        self.geometry.handle_width_px = handle_width_px;
        self.weights = WeightConfig {
            total_weight,
            fixed_view_weight,
        };
    }

    #[must_use]
    pub fn unit_weight_width_px(&self) -> f64 {
        f64::from(self.geometry.usable_width_px()) / f64::from(self.weights.total_weight)
    }

    /// Resolves bounds, mapping rate, minimum width and marker speed.
    pub fn compute_layout(
        &self,
        start_time: i64,
        end_time: i64,
        min_duration_ms: i64,
    ) -> SeekResult<RangeLayout> {
        let time_range = TimeRange {
            start_time,
            end_time,
            min_duration_ms,
        };
        let span = match time_range.checked_span() {
            Some(span) if end_time > start_time && span >= min_duration_ms => span,
            _ => {
                return Err(SeekError::InvalidTimeRange {
                    start_time,
                    end_time,
                    min_duration_ms,
                });
            }
        };

        let selection_width_px = self.selection_width_px(span);
        if selection_width_px <= 0 {
            return Err(SeekError::DegenerateRange { selection_width_px });
        }

        let handle_width_px = self.geometry.handle_width_px;
        let (left_bound_px, right_bound_px) = self.track_bounds_px(selection_width_px)?;
        let map_rate = span as f64 / f64::from(selection_width_px);
        let min_width_px = (min_duration_ms as f64 / map_rate) as i32;
        let speed_px_per_tick = progress_speed_px_per_tick(
            selection_width_px,
            span,
            self.tick_interval_ms,
        );

        Ok(RangeLayout {
            time_range,
            handle_width_px,
            selection_width_px,
            left_bound_px,
            right_bound_px,
            map_rate,
            min_width_px,
            speed_px_per_tick,
        })
    }

    /// Outer handle bounds centered on the track, shifted by the fixed inset.
    fn track_bounds_px(&self, selection_width_px: i32) -> SeekResult<(i32, i32)> {
        let geometry = self.geometry;
        let left_bound_px = ((geometry.track_width_px - selection_width_px) / 2)
            .checked_add(geometry.fixed_inset_px);
        let right_bound_px = left_bound_px
            .and_then(|left| left.checked_add(selection_width_px))
            .zip(geometry.handle_width_px.checked_mul(2))
            .and_then(|(inner, handles)| inner.checked_add(handles));
        match (left_bound_px, right_bound_px) {
            (Some(left), Some(right)) => Ok((left, right)),
            _ => Err(SeekError::InvalidConfig(format!(
                "track of {}px with {}px inset overflows the pixel range",
                geometry.track_width_px, geometry.fixed_inset_px
            ))),
        }
    }

    fn selection_width_px(&self, span_ms: i64) -> i32 {
        let usable = f64::from(self.geometry.usable_width_px());
        if self.weights.is_fixed() {
            let fraction =
                f64::from(self.weights.fixed_view_weight) / f64::from(self.weights.total_weight);
            return (fraction * usable) as i32;
        }

        let seconds = span_ms / MS_PER_SECOND;
        let reference_scale = reference_scale(seconds);
        let (weight, unit_width) = self.rescaled_weight(seconds, reference_scale);
        let scale_rate = f64::from(weight) / reference_scale as f64;
        (seconds as f64 * scale_rate * unit_width) as i32
    }

    /// Halves the weight (and doubles the unit width) for ranges in the lower
    /// half of their power-of-ten bucket. Always derived from the base config.
    fn rescaled_weight(&self, seconds: i64, reference_scale: i64) -> (i32, f64) {
        let unit_width = self.unit_weight_width_px();
        if seconds < reference_scale / 2 {
            (self.weights.total_weight / 2, unit_width * 2.0)
        } else {
            (self.weights.total_weight, unit_width)
        }
    }
}

/// Number of decimal digits in `value`; zero counts as one digit.
#[must_use]
pub fn decimal_digit_count(value: i64) -> u32 {
    value.unsigned_abs().checked_ilog10().map_or(1, |log| log + 1)
}

fn reference_scale(seconds: i64) -> i64 {
    10_i64.saturating_pow(decimal_digit_count(seconds))
}

/// Pixels per tick so the marker crosses the selection in `span_ms` of
/// wall-clock time, rounded half-up to three decimals.
#[must_use]
pub fn progress_speed_px_per_tick(selection_width_px: i32, span_ms: i64, tick_ms: u64) -> f64 {
    if span_ms <= 0 {
        return 0.0;
    }
    let raw = f64::from(selection_width_px) / span_ms as f64 * tick_ms as f64;
    round_half_up(raw, SPEED_DECIMALS)
}

fn round_half_up(value: f64, decimals: u32) -> f64 {
    Decimal::from_f64(value)
        .map(|decimal| {
            decimal.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
        })
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or(value)
}
