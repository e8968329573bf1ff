use tracing::{debug, warn};

use crate::core::{RangeLayout, RangeMapper, TimeRange, WeightConfig};
use crate::error::SeekResult;
use crate::scheduler::Scheduler;

use super::validation::{validate_min_duration, validate_weights};
use super::{RangeSelector, selector::SelectionState};

impl<S: Scheduler> RangeSelector<S> {
    /// Sets track width and weights.
    ///
    /// An established range is laid out again with the new geometry; when that
    /// fails the previous configuration stays in place.
    pub fn configure(
        &mut self,
        track_width_px: i32,
        total_weight: i32,
        fixed_view_weight: i32,
    ) -> SeekResult<()> {
        let mut geometry = self.mapper.geometry();
        geometry.track_width_px = track_width_px;
        let weights = WeightConfig {
            total_weight,
            fixed_view_weight,
        };
        validate_weights(geometry, weights)?;

        let mut mapper = self.mapper;
        mapper.configure(
            track_width_px,
            geometry.handle_width_px,
            total_weight,
            fixed_view_weight,
        );
        let layout = match self.selection {
            Some(selection) => Some(resolve_layout(&mapper, selection.layout.time_range)?),
            None => None,
        };

        debug!(track_width_px, total_weight, fixed_view_weight, "configure range selector");
        self.mapper = mapper;
        if let Some(layout) = layout {
            self.apply_layout(layout);
        }
        Ok(())
    }

    /// Sets the shortest selectable duration.
    ///
    /// An established range is laid out again so the minimum pixel width
    /// follows; a minimum longer than the range is rejected.
    pub fn set_min_duration_limit(&mut self, min_duration_ms: i64) -> SeekResult<()> {
        validate_min_duration(min_duration_ms)?;
        if let Some(selection) = self.selection {
            let range = TimeRange {
                min_duration_ms,
                ..selection.layout.time_range
            };
            let layout = resolve_layout(&self.mapper, range)?;
            self.apply_layout(layout);
        }
        debug!(min_duration_ms, "set min duration limit");
        self.min_duration_ms = min_duration_ms;
        Ok(())
    }

    /// Sets the selectable time range and parks both handles at its ends.
    pub fn set_range_time(&mut self, start_time: i64, end_time: i64) -> SeekResult<()> {
        let range = TimeRange {
            start_time,
            end_time,
            min_duration_ms: self.min_duration_ms,
        };
        let layout = resolve_layout(&self.mapper, range)?;
        debug!(
            start_time,
            end_time,
            selection_width_px = layout.selection_width_px,
            map_rate = layout.map_rate,
            min_width_px = layout.min_width_px,
            "set range time"
        );
        self.apply_layout(layout);
        Ok(())
    }

    /// Commits a layout: handles back to rest, marker reset, animation stopped.
    pub(super) fn apply_layout(&mut self, layout: RangeLayout) {
        self.scheduler.cancel_all();
        self.progress.stop();
        self.progress.set_speed(layout.speed_px_per_tick);
        self.interaction.cancel();

        let selection = SelectionState::from_layout(layout);
        self.progress.reset(&selection.handles, &self.mapper.geometry());
        self.selection = Some(selection);
    }
}

fn resolve_layout(mapper: &RangeMapper, range: TimeRange) -> SeekResult<RangeLayout> {
    mapper
        .compute_layout(range.start_time, range.end_time, range.min_duration_ms)
        .inspect_err(|err| {
            warn!(error = %err, "rejecting range layout; keeping previous state");
        })
}
