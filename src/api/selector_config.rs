use serde::{Deserialize, Serialize};

use crate::core::{TrackGeometry, WeightConfig};
use crate::error::{SeekError, SeekResult};

/// Public selector bootstrap configuration.
///
/// Serializable so hosts can keep slider setup next to their own settings.
/// All widths are physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSelectorConfig {
    pub track_width_px: i32,
    #[serde(default = "default_total_weight")]
    pub total_weight: i32,
    #[serde(default)]
    pub fixed_view_weight: i32,
    #[serde(default = "default_handle_width_px")]
    pub handle_width_px: i32,
    #[serde(default = "default_progress_width_px")]
    pub progress_width_px: i32,
    #[serde(default = "default_margin_px")]
    pub margin_px: i32,
    #[serde(default = "default_fixed_inset_px")]
    pub fixed_inset_px: i32,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default)]
    pub min_duration_ms: i64,
}

impl RangeSelectorConfig {
    /// Creates a config with default handle, marker and weight settings.
    #[must_use]
    pub fn new(track_width_px: i32) -> Self {
        Self {
            track_width_px,
            total_weight: default_total_weight(),
            fixed_view_weight: 0,
            handle_width_px: default_handle_width_px(),
            progress_width_px: default_progress_width_px(),
            margin_px: default_margin_px(),
            fixed_inset_px: default_fixed_inset_px(),
            tick_interval_ms: default_tick_interval_ms(),
            min_duration_ms: 0,
        }
    }

    /// Sets total weight and the fixed selection weight (`0` for auto width).
    #[must_use]
    pub fn with_weights(mut self, total_weight: i32, fixed_view_weight: i32) -> Self {
        self.total_weight = total_weight;
        self.fixed_view_weight = fixed_view_weight;
        self
    }

    #[must_use]
    pub fn with_handle_width_px(mut self, handle_width_px: i32) -> Self {
        self.handle_width_px = handle_width_px;
        self
    }

    /// Sets progress marker width and its overlap margin onto the handles.
    #[must_use]
    pub fn with_progress_marker(mut self, progress_width_px: i32, margin_px: i32) -> Self {
        self.progress_width_px = progress_width_px;
        self.margin_px = margin_px;
        self
    }

    #[must_use]
    pub fn with_fixed_inset_px(mut self, fixed_inset_px: i32) -> Self {
        self.fixed_inset_px = fixed_inset_px;
        self
    }

    #[must_use]
    pub fn with_tick_interval_ms(mut self, tick_interval_ms: u64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    #[must_use]
    pub fn with_min_duration_ms(mut self, min_duration_ms: i64) -> Self {
        self.min_duration_ms = min_duration_ms;
        self
    }

    #[must_use]
    pub fn geometry(self) -> TrackGeometry {
        TrackGeometry {
            track_width_px: self.track_width_px,
            handle_width_px: self.handle_width_px,
            margin_px: self.margin_px,
            progress_width_px: self.progress_width_px,
            fixed_inset_px: self.fixed_inset_px,
        }
    }

    #[must_use]
    pub fn weights(self) -> WeightConfig {
        WeightConfig {
            total_weight: self.total_weight,
            fixed_view_weight: self.fixed_view_weight,
        }
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> SeekResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| SeekError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> SeekResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| SeekError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_total_weight() -> i32 {
    100
}

fn default_handle_width_px() -> i32 {
    16
}

fn default_progress_width_px() -> i32 {
    13
}

fn default_margin_px() -> i32 {
    6
}

fn default_fixed_inset_px() -> i32 {
    20
}

fn default_tick_interval_ms() -> u64 {
    20
}
