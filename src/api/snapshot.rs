use serde::{Deserialize, Serialize};

use crate::core::{
    HandlePositions, HandleTimes, PixelSpan, ProgressState, RangeLayout, TrackGeometry,
    WeightConfig,
};
use crate::error::{SeekError, SeekResult};
use crate::interaction::DragState;
use crate::scheduler::Scheduler;

use super::RangeSelector;

/// Serializable state snapshot used by regression tests and debugging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorSnapshot {
    pub geometry: TrackGeometry,
    pub weights: WeightConfig,
    pub min_duration_ms: i64,
    pub layout: Option<RangeLayout>,
    pub handles: Option<HandlePositions>,
    pub central: Option<PixelSpan>,
    pub times: Option<HandleTimes>,
    pub progress: ProgressState,
    pub progress_time: Option<i64>,
    pub drag: DragState,
    pub released: bool,
}

impl<S: Scheduler> RangeSelector<S> {
    #[must_use]
    pub fn snapshot(&self) -> SelectorSnapshot {
        SelectorSnapshot {
            geometry: self.mapper.geometry(),
            weights: self.mapper.weights(),
            min_duration_ms: self.min_duration_ms,
            layout: self.layout(),
            handles: self.handle_positions(),
            central: self.central_span(),
            times: self.handle_times(),
            progress: self.progress.state(),
            progress_time: self.progress_time(),
            drag: self.interaction.drag(),
            released: self.released,
        }
    }

    pub fn snapshot_json_pretty(&self) -> SeekResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| SeekError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
