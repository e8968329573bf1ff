use tracing::{debug, trace};

use crate::core::TickOutcome;
use crate::extensions::SelectorEvent;
use crate::interaction::DragTarget;
use crate::scheduler::{ManualScheduler, ScheduledTask, Scheduler};

use super::RangeSelector;

impl<S: Scheduler> RangeSelector<S> {
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.progress.is_animating()
    }

    /// Current marker speed in pixels per tick.
    #[must_use]
    pub fn progress_speed_px_per_tick(&self) -> f64 {
        self.progress.state().speed_px_per_tick
    }

    /// Time under the progress marker, clamped into the full range.
    ///
    /// The reading is taken at the marker's right edge less one margin. A
    /// marker placed at time `t` therefore reads
    /// `progress_width_px - 2 * margin_px` pixels later, one pixel with the
    /// default 13 px marker and 6 px margin.
    #[must_use]
    pub fn progress_time(&self) -> Option<i64> {
        let selection = self.selection?;
        let layout = selection.layout;
        let inner_px = self.progress.span().right - self.mapper.geometry().margin_px;
        Some(
            layout
                .pixel_to_time(inner_px)
                .clamp(layout.time_range.start_time, layout.time_range.end_time),
        )
    }

    /// Starts or pauses the marker animation.
    pub fn set_animating(&mut self, enabled: bool) {
        if enabled {
            self.start_animation();
        } else {
            self.pause_animation();
        }
    }

    fn start_animation(&mut self) {
        if self.released {
            trace!("ignoring animation start after release");
            return;
        }
        debug!("start progress animation");
        self.scheduler.cancel_all();
        self.progress.start();
        self.schedule(ScheduledTask::AdvanceProgress, 0);
    }

    fn pause_animation(&mut self) {
        debug!("pause progress animation");
        self.scheduler.cancel_all();
        self.progress.stop();
    }

    /// Moves the marker to `time` without animating. Times outside the
    /// handles are clamped to the nearer one.
    pub fn set_progress_position(&mut self, time: i64) {
        let Some(selection) = self.selection else {
            return;
        };
        let geometry = self.mapper.geometry();
        let time = time.clamp(selection.times.left_time, selection.times.right_time);
        let left_px = selection
            .layout
            .time_to_pixel(time)
            .saturating_sub(geometry.margin_px);
        self.progress.place_left_edge(left_px, &selection.handles, &geometry);
    }

    /// Cancels pending ticks, parks the marker against the left handle and
    /// reports its time.
    pub fn reset_progress(&mut self) {
        self.scheduler.cancel_all();
        let Some(selection) = self.selection else {
            return;
        };
        self.progress.reset(&selection.handles, &self.mapper.geometry());
        if let Some(current_time) = self.progress_time() {
            self.emit_event(SelectorEvent::ProgressTime { current_time });
        }
    }

    /// Runs one task previously handed to the scheduler.
    ///
    /// Tasks delivered after [`RangeSelector::release`] are dropped.
    pub fn dispatch(&mut self, task: ScheduledTask) {
        if self.released {
            trace!(?task, "dropping task delivered after release");
            return;
        }
        match task {
            ScheduledTask::AdvanceProgress => self.advance_progress(),
            ScheduledTask::ResetProgress => self.reset_progress(),
        }
    }

    fn advance_progress(&mut self) {
        if !self.progress.is_animating() {
            trace!("dropping progress tick while stopped");
            return;
        }
        let Some(selection) = self.selection else {
            trace!("stopping animation without a time range");
            self.progress.stop();
            return;
        };

        let interval_ms = self.mapper.tick_interval_ms();
        let outcome = self.progress.tick(&selection.handles, &self.mapper.geometry());
        if let Some(current_time) = self.progress_time() {
            self.emit_event(SelectorEvent::ProgressTime { current_time });
        }
        match outcome {
            TickOutcome::Advanced => self.schedule(ScheduledTask::AdvanceProgress, interval_ms),
            TickOutcome::Overshoot => {
                trace!("progress reached right handle");
                self.schedule(ScheduledTask::ResetProgress, interval_ms);
            }
        }
    }

    /// Presses the progress marker. Pending ticks are cancelled but the
    /// animation flag is kept for the release.
    pub fn progress_drag_start(&mut self, pointer_x: i32) {
        if self.selection.is_none() {
            return;
        }
        let down_x = pointer_x.saturating_sub(self.progress.span().left);
        self.interaction.on_drag_start(DragTarget::Progress, down_x);
        self.scheduler.cancel_all();
        self.emit_event(SelectorEvent::DragStarted {
            source: DragTarget::Progress.source(),
        });
    }

    /// Drags the marker, clamped between the handles, and reports its time.
    pub fn progress_drag_move(&mut self, pointer_x: i32) {
        let Some(down_x) = self.interaction.anchor(DragTarget::Progress) else {
            return;
        };
        let Some(selection) = self.selection else {
            return;
        };
        let offset_px = pointer_x
            .saturating_sub(self.progress.span().left)
            .saturating_sub(down_x);
        self.progress.drag_by(offset_px, &selection.handles, &self.mapper.geometry());
        if let Some(current_time) = self.progress_time() {
            self.emit_event(SelectorEvent::ProgressTime { current_time });
        }
    }

    /// Releases the marker, resuming the animation if it was running.
    pub fn progress_drag_end(&mut self, pointer_x: i32) {
        if !self.interaction.on_drag_end(DragTarget::Progress) {
            return;
        }
        trace!(pointer_x, "progress drag end");
        if self.progress.is_animating() {
            self.schedule(ScheduledTask::AdvanceProgress, 0);
        }
        if let Some(time) = self.progress_time() {
            self.emit_event(SelectorEvent::SelectionFinished {
                time,
                source: DragTarget::Progress.source(),
            });
        }
    }
}

impl RangeSelector<ManualScheduler> {
    /// Advances the virtual clock by `elapsed_ms`, delivering every task that
    /// falls due, including ones scheduled along the way.
    ///
    /// Returns the number of tasks delivered.
    pub fn advance_time(&mut self, elapsed_ms: u64) -> usize {
        let until_ms = self.scheduler.now_ms().saturating_add(elapsed_ms);
        let mut delivered = 0;
        while let Some(task) = self.scheduler.pop_due(until_ms) {
            self.dispatch(task);
            delivered += 1;
        }
        self.scheduler.set_now_ms(until_ms);
        delivered
    }
}
