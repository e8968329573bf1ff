use tracing::trace;

use crate::extensions::{SelectorContext, SelectorEvent};
use crate::scheduler::Scheduler;

use super::RangeSelector;

impl<S: Scheduler> RangeSelector<S> {
    pub(super) fn selector_context(&self) -> SelectorContext {
        SelectorContext {
            left_time: self.left_time().unwrap_or_default(),
            right_time: self.right_time().unwrap_or_default(),
            progress_time: self.progress_time(),
            is_animating: self.progress.is_animating(),
            active_drag: self.interaction.active_target(),
        }
    }

    pub(super) fn emit_event(&mut self, event: SelectorEvent) {
        trace!(?event, listeners = self.listeners.len(), "emit selector event");
        let context = self.selector_context();
        for listener in self.listeners.values_mut() {
            listener.on_event(event, context);
        }
    }
}
