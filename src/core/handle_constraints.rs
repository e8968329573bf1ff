//! Pure clamping rules for the two selection handles.
//!
//! Handle extents are pixel spans on the track. Every function takes the
//! current positions by reference and returns the clamped result; the caller
//! decides what to commit.

use serde::{Deserialize, Serialize};

use crate::core::range_mapper::RangeLayout;
use crate::core::types::PixelSpan;

/// Which handle a drag applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleSide {
    Left,
    Right,
}

/// Pixel extents of both handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlePositions {
    pub left: PixelSpan,
    pub right: PixelSpan,
}

impl HandlePositions {
    /// Handles parked at the outer bounds of the layout.
    #[must_use]
    pub fn at_rest(layout: &RangeLayout) -> Self {
        Self {
            left: PixelSpan::from_left(layout.left_bound_px, layout.handle_width_px),
            right: PixelSpan::new(layout.end_px(), layout.right_bound_px),
        }
    }

    /// Unselected region between the handles' inner edges.
    #[must_use]
    pub fn central(&self) -> PixelSpan {
        PixelSpan::new(self.left.right, self.right.left)
    }

    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.left.left <= self.left.right
            && self.left.right <= self.right.left
            && self.right.left <= self.right.right
    }

    #[must_use]
    pub fn span(&self, side: HandleSide) -> PixelSpan {
        match side {
            HandleSide::Left => self.left,
            HandleSide::Right => self.right,
        }
    }
}

/// Selected time values of the two handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleTimes {
    pub left_time: i64,
    pub right_time: i64,
}

impl HandleTimes {
    #[must_use]
    pub fn full(layout: &RangeLayout) -> Self {
        Self {
            left_time: layout.time_range.start_time,
            right_time: layout.time_range.end_time,
        }
    }

    #[must_use]
    pub fn time(&self, side: HandleSide) -> i64 {
        match side {
            HandleSide::Left => self.left_time,
            HandleSide::Right => self.right_time,
        }
    }
}

/// Result of applying one drag delta to a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleMove {
    pub positions: HandlePositions,
    pub times: HandleTimes,
}

/// Moves the left handle by `offset_px`, keeping it inside `left_bound_px`
/// and at least `min_width_px` away from the right handle.
#[must_use]
pub fn clamp_left_handle(
    positions: &HandlePositions,
    offset_px: i32,
    layout: &RangeLayout,
) -> PixelSpan {
    let handle = layout.handle_width_px;
    let upper = positions.right.left - handle - layout.min_width_px;
    let mut left = positions.left.left.saturating_add(offset_px);
    if left <= layout.left_bound_px {
        left = layout.left_bound_px;
    } else if left >= upper {
        left = upper;
    }
    PixelSpan::from_left(left, handle)
}

/// Mirror of [`clamp_left_handle`] for the right handle.
#[must_use]
pub fn clamp_right_handle(
    positions: &HandlePositions,
    offset_px: i32,
    layout: &RangeLayout,
) -> PixelSpan {
    let handle = layout.handle_width_px;
    let lower = positions.left.right + layout.min_width_px;
    let upper = layout.end_px();
    let mut left = positions.right.left.saturating_add(offset_px);
    if left <= lower {
        left = lower;
    } else if left >= upper {
        left = upper;
    }
    PixelSpan::from_left(left, handle)
}

/// Applies a left-handle drag and derives the new left time.
#[must_use]
pub fn move_left_handle(
    positions: &HandlePositions,
    times: &HandleTimes,
    offset_px: i32,
    layout: &RangeLayout,
) -> HandleMove {
    let range = layout.time_range;
    let left = clamp_left_handle(positions, offset_px, layout);
    let left_time = layout
        .pixel_to_time(left.right)
        .min(times.right_time - range.min_duration_ms)
        .max(range.start_time);

    HandleMove {
        positions: HandlePositions {
            left,
            right: positions.right,
        },
        times: HandleTimes {
            left_time,
            right_time: times.right_time,
        },
    }
}

/// Applies a right-handle drag and derives the new right time.
///
/// Dragging below `start_time + min_duration_ms` pins the right time to that
/// floor and sends the left handle back to the start of the range.
#[must_use]
pub fn move_right_handle(
    positions: &HandlePositions,
    times: &HandleTimes,
    offset_px: i32,
    layout: &RangeLayout,
) -> HandleMove {
    let range = layout.time_range;
    let right = clamp_right_handle(positions, offset_px, layout);
    let mut left = positions.left;
    let mut left_time = times.left_time;
    let mut right_time = layout.pixel_to_time(right.left).min(range.end_time);

    if right_time <= range.min_end_time() {
        right_time = range.min_end_time();
        left_time = range.start_time;
        left = PixelSpan::from_left(layout.left_bound_px, layout.handle_width_px);
    } else if right_time - left_time < range.min_duration_ms {
        right_time = left_time + range.min_duration_ms;
    }

    HandleMove {
        positions: HandlePositions { left, right },
        times: HandleTimes {
            left_time,
            right_time,
        },
    }
}
