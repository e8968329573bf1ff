use serde::{Deserialize, Serialize};

use crate::core::HandleSide;
use crate::interaction::{DragSource, DragTarget};

/// Read-only state snapshot passed alongside every event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorContext {
    pub left_time: i64,
    pub right_time: i64,
    pub progress_time: Option<i64>,
    pub is_animating: bool,
    pub active_drag: Option<DragTarget>,
}

/// Notifications delivered to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectorEvent {
    /// A handle drag moved the selected range.
    RangeChanged {
        start_time: i64,
        end_time: i64,
        handle: HandleSide,
    },
    /// The progress marker was repositioned.
    ProgressTime { current_time: i64 },
    /// A drag was released.
    SelectionFinished { time: i64, source: DragSource },
    /// A drag began.
    DragStarted { source: DragSource },
}

/// Observer hook for selector notifications.
///
/// Listeners see events and context but cannot mutate the selector.
pub trait SelectorListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: SelectorEvent, context: SelectorContext);
}
