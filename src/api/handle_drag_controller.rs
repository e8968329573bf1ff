use tracing::trace;

use crate::core::{HandleSide, move_left_handle, move_right_handle};
use crate::extensions::SelectorEvent;
use crate::interaction::DragTarget;
use crate::scheduler::Scheduler;

use super::RangeSelector;

impl<S: Scheduler> RangeSelector<S> {
    /// Presses a handle at track pixel `pointer_x`.
    ///
    /// Stops the animation and parks the progress marker against the left
    /// handle. Ignored until a time range is set.
    pub fn handle_drag_start(&mut self, side: HandleSide, pointer_x: i32) {
        let Some(selection) = self.selection else {
            trace!(?side, "ignoring handle press without a time range");
            return;
        };
        let down_x = pointer_x.saturating_sub(selection.handles.span(side).left);
        self.interaction.on_drag_start(DragTarget::from(side), down_x);
        self.emit_event(SelectorEvent::DragStarted {
            source: DragTarget::from(side).source(),
        });
        self.progress.stop();
        self.reset_progress();
    }

    /// Drags a pressed handle to track pixel `pointer_x`.
    ///
    /// The handle is clamped to the track bounds and kept `min_width_px` away
    /// from the other handle. Emits `RangeChanged` when anything moved.
    pub fn handle_drag_move(&mut self, side: HandleSide, pointer_x: i32) {
        let Some(down_x) = self.interaction.anchor(DragTarget::from(side)) else {
            return;
        };
        let Some(mut selection) = self.selection else {
            return;
        };

        let offset_px = pointer_x
            .saturating_sub(selection.handles.span(side).left)
            .saturating_sub(down_x);
        let moved = match side {
            HandleSide::Left => move_left_handle(
                &selection.handles,
                &selection.times,
                offset_px,
                &selection.layout,
            ),
            HandleSide::Right => move_right_handle(
                &selection.handles,
                &selection.times,
                offset_px,
                &selection.layout,
            ),
        };
        if moved.positions == selection.handles && moved.times == selection.times {
            return;
        }

        trace!(
            ?side,
            offset_px,
            left_time = moved.times.left_time,
            right_time = moved.times.right_time,
            "handle drag move"
        );
        selection.handles = moved.positions;
        selection.times = moved.times;
        self.selection = Some(selection);
        self.progress.reset(&selection.handles, &self.mapper.geometry());
        self.emit_event(SelectorEvent::RangeChanged {
            start_time: moved.times.left_time,
            end_time: moved.times.right_time,
            handle: side,
        });
    }

    /// Releases a pressed handle and reports its final time.
    pub fn handle_drag_end(&mut self, side: HandleSide, pointer_x: i32) {
        if !self.interaction.on_drag_end(DragTarget::from(side)) {
            return;
        }
        let Some(selection) = self.selection else {
            return;
        };
        trace!(?side, pointer_x, "handle drag end");
        self.reset_progress();
        self.emit_event(SelectorEvent::SelectionFinished {
            time: selection.times.time(side),
            source: DragTarget::from(side).source(),
        });
    }
}
