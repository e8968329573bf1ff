use indexmap::IndexMap;
use tracing::debug;

use crate::core::{
    HandlePositions, HandleTimes, PixelSpan, ProgressAnimator, RangeLayout, RangeMapper,
    TrackGeometry, WeightConfig,
};
use crate::error::SeekResult;
use crate::extensions::SelectorListener;
use crate::interaction::{DragTarget, InteractionState};
use crate::scheduler::{ScheduledTask, Scheduler};

use super::RangeSelectorConfig;
use super::validation::validate_config;

/// Layout plus the mutable handle state derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SelectionState {
    pub(super) layout: RangeLayout,
    pub(super) handles: HandlePositions,
    pub(super) times: HandleTimes,
}

impl SelectionState {
    pub(super) fn from_layout(layout: RangeLayout) -> Self {
        Self {
            layout,
            handles: HandlePositions::at_rest(&layout),
            times: HandleTimes::full(&layout),
        }
    }
}

/// Dual-handle time range selector with an animated progress marker.
///
/// `RangeSelector` owns the pixel/time mapping, both handles, the marker and
/// the drag state, and turns raw pointer and timer events into notifications
/// for registered listeners. Deferred work goes through the injected
/// [`Scheduler`].
pub struct RangeSelector<S: Scheduler> {
    pub(super) scheduler: S,
    pub(super) mapper: RangeMapper,
    pub(super) min_duration_ms: i64,
    pub(super) selection: Option<SelectionState>,
    pub(super) progress: ProgressAnimator,
    pub(super) interaction: InteractionState,
    pub(super) listeners: IndexMap<String, Box<dyn SelectorListener>>,
    pub(super) released: bool,
}

impl<S: Scheduler> RangeSelector<S> {
    /// Creates a selector with no time range yet. Call
    /// [`RangeSelector::set_range_time`] before routing pointer events.
    pub fn new(scheduler: S, config: RangeSelectorConfig) -> SeekResult<Self> {
        let config = validate_config(config)?;
        debug!(
            track_width_px = config.track_width_px,
            total_weight = config.total_weight,
            fixed_view_weight = config.fixed_view_weight,
            "create range selector"
        );
        Ok(Self {
            scheduler,
            mapper: RangeMapper::new(config.geometry(), config.weights(), config.tick_interval_ms),
            min_duration_ms: config.min_duration_ms,
            selection: None,
            progress: ProgressAnimator::default(),
            interaction: InteractionState::default(),
            listeners: IndexMap::new(),
            released: false,
        })
    }

    #[must_use]
    pub fn geometry(&self) -> TrackGeometry {
        self.mapper.geometry()
    }

    #[must_use]
    pub fn weights(&self) -> WeightConfig {
        self.mapper.weights()
    }

    #[must_use]
    pub fn tick_interval_ms(&self) -> u64 {
        self.mapper.tick_interval_ms()
    }

    #[must_use]
    pub fn min_duration_ms(&self) -> i64 {
        self.min_duration_ms
    }

    #[must_use]
    pub fn layout(&self) -> Option<RangeLayout> {
        self.selection.map(|selection| selection.layout)
    }

    #[must_use]
    pub fn handle_positions(&self) -> Option<HandlePositions> {
        self.selection.map(|selection| selection.handles)
    }

    #[must_use]
    pub fn central_span(&self) -> Option<PixelSpan> {
        self.selection.map(|selection| selection.handles.central())
    }

    #[must_use]
    pub fn progress_span(&self) -> PixelSpan {
        self.progress.span()
    }

    #[must_use]
    pub fn left_time(&self) -> Option<i64> {
        self.selection.map(|selection| selection.times.left_time)
    }

    #[must_use]
    pub fn right_time(&self) -> Option<i64> {
        self.selection.map(|selection| selection.times.right_time)
    }

    #[must_use]
    pub fn handle_times(&self) -> Option<HandleTimes> {
        self.selection.map(|selection| selection.times)
    }

    #[must_use]
    pub fn active_drag(&self) -> Option<DragTarget> {
        self.interaction.active_target()
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[must_use]
    pub fn into_scheduler(self) -> S {
        self.scheduler
    }

    /// Cancels all pending work and stops the animation.
    ///
    /// Safe to call repeatedly; tasks delivered afterwards are dropped.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.scheduler.cancel_all();
        self.progress.stop();
        self.interaction.cancel();
        self.released = true;
        debug!("release range selector");
    }

    pub(super) fn schedule(&mut self, task: ScheduledTask, delay_ms: u64) {
        if self.released {
            return;
        }
        self.scheduler.schedule(task, delay_ms);
    }
}
