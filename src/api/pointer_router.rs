use crate::interaction::DragTarget;
use crate::scheduler::Scheduler;

use super::RangeSelector;

impl<S: Scheduler> RangeSelector<S> {
    /// Picks the region under track pixel `x`.
    ///
    /// The progress marker overlaps both handles' inner edges and wins ties.
    #[must_use]
    pub fn hit_test(&self, x: i32) -> Option<DragTarget> {
        let selection = self.selection?;
        if self.progress.span().contains(x) {
            Some(DragTarget::Progress)
        } else if selection.handles.left.contains(x) {
            Some(DragTarget::LeftHandle)
        } else if selection.handles.right.contains(x) {
            Some(DragTarget::RightHandle)
        } else {
            None
        }
    }

    /// Routes a press to the region under `x`. Returns the grabbed target.
    pub fn pointer_down(&mut self, x: i32) -> Option<DragTarget> {
        let target = self.hit_test(x)?;
        self.drag_start(target, x);
        Some(target)
    }

    /// Routes a move to whichever target is being dragged.
    pub fn pointer_move(&mut self, x: i32) {
        if let Some(target) = self.interaction.active_target() {
            self.drag_move(target, x);
        }
    }

    /// Routes a release to whichever target is being dragged.
    pub fn pointer_up(&mut self, x: i32) {
        if let Some(target) = self.interaction.active_target() {
            self.drag_end(target, x);
        }
    }

    pub fn drag_start(&mut self, target: DragTarget, x: i32) {
        match target.handle_side() {
            Some(side) => self.handle_drag_start(side, x),
            None => self.progress_drag_start(x),
        }
    }

    pub fn drag_move(&mut self, target: DragTarget, x: i32) {
        match target.handle_side() {
            Some(side) => self.handle_drag_move(side, x),
            None => self.progress_drag_move(x),
        }
    }

    pub fn drag_end(&mut self, target: DragTarget, x: i32) {
        match target.handle_side() {
            Some(side) => self.handle_drag_end(side, x),
            None => self.progress_drag_end(x),
        }
    }
}
