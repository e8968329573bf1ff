use serde::{Deserialize, Serialize};

/// Horizontal pixel extent `[left, right]` of one slider region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelSpan {
    pub left: i32,
    pub right: i32,
}

impl PixelSpan {
    #[must_use]
    pub const fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }

    /// Builds a span of `width` pixels starting at `left`.
    #[must_use]
    pub const fn from_left(left: i32, width: i32) -> Self {
        Self {
            left,
            right: left + width,
        }
    }

    #[must_use]
    pub const fn width(self) -> i32 {
        self.right - self.left
    }

    #[must_use]
    pub const fn contains(self, x: i32) -> bool {
        x >= self.left && x <= self.right
    }
}

/// Static pixel geometry of the slider track.
///
/// All values are physical pixels; density conversion is the host's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackGeometry {
    pub track_width_px: i32,
    pub handle_width_px: i32,
    pub margin_px: i32,
    pub progress_width_px: i32,
    pub fixed_inset_px: i32,
}

impl TrackGeometry {
    /// Width left for the selection once both handles are subtracted.
    #[must_use]
    pub const fn usable_width_px(self) -> i32 {
        self.track_width_px
            .saturating_sub(self.handle_width_px.saturating_mul(2))
    }
}

/// Weight split of the usable track width.
///
/// `fixed_view_weight > 0` pins the selection to a fixed fraction of the
/// usable width; `0` derives the width from the time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightConfig {
    pub total_weight: i32,
    pub fixed_view_weight: i32,
}

impl WeightConfig {
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        self.fixed_view_weight > 0
    }
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            total_weight: 100,
            fixed_view_weight: 0,
        }
    }
}

/// Full selectable time range in milliseconds.
///
/// `start_time` is the axis origin; `end_time - start_time >= min_duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start_time: i64,
    pub end_time: i64,
    pub min_duration_ms: i64,
}

impl TimeRange {
    /// `end_time - start_time`, or `None` when it does not fit in `i64`.
    #[must_use]
    pub const fn checked_span(self) -> Option<i64> {
        self.end_time.checked_sub(self.start_time)
    }

    /// Saturating span; exact for any range accepted by `compute_layout`.
    #[must_use]
    pub const fn span(self) -> i64 {
        self.end_time.saturating_sub(self.start_time)
    }

    #[must_use]
    pub const fn min_end_time(self) -> i64 {
        self.start_time.saturating_add(self.min_duration_ms)
    }
}
