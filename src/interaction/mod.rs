use serde::{Deserialize, Serialize};

use crate::core::HandleSide;

/// Touch target a pointer can grab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragTarget {
    LeftHandle,
    RightHandle,
    Progress,
}

impl DragTarget {
    #[must_use]
    pub fn source(self) -> DragSource {
        match self {
            Self::LeftHandle | Self::RightHandle => DragSource::Handle,
            Self::Progress => DragSource::Progress,
        }
    }

    #[must_use]
    pub fn handle_side(self) -> Option<HandleSide> {
        match self {
            Self::LeftHandle => Some(HandleSide::Left),
            Self::RightHandle => Some(HandleSide::Right),
            Self::Progress => None,
        }
    }
}

impl From<HandleSide> for DragTarget {
    fn from(side: HandleSide) -> Self {
        match side {
            HandleSide::Left => Self::LeftHandle,
            HandleSide::Right => Self::RightHandle,
        }
    }
}

/// Source reported to listeners for drag and selection notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragSource {
    Handle,
    Progress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    /// `down_x` is the pointer offset from the grabbed region's left edge.
    Dragging { target: DragTarget, down_x: i32 },
}

/// Single-pointer drag tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    drag: DragState,
}

impl InteractionState {
    #[must_use]
    pub fn drag(self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn active_target(self) -> Option<DragTarget> {
        match self.drag {
            DragState::Idle => None,
            DragState::Dragging { target, .. } => Some(target),
        }
    }

    /// Anchor of the drag on `target`, if that target is being dragged.
    #[must_use]
    pub fn anchor(self, target: DragTarget) -> Option<i32> {
        match self.drag {
            DragState::Dragging {
                target: active,
                down_x,
            } if active == target => Some(down_x),
            _ => None,
        }
    }

    /// Begins a drag. A new press supersedes any drag still in progress.
    pub fn on_drag_start(&mut self, target: DragTarget, down_x: i32) {
        self.drag = DragState::Dragging { target, down_x };
    }

    /// Ends the drag on `target`. Returns `false` when `target` was not being
    /// dragged.
    pub fn on_drag_end(&mut self, target: DragTarget) -> bool {
        if self.anchor(target).is_none() {
            return false;
        }
        self.drag = DragState::Idle;
        true
    }

    pub fn cancel(&mut self) {
        self.drag = DragState::Idle;
    }
}
