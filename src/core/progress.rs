use serde::{Deserialize, Serialize};

use crate::core::handle_constraints::HandlePositions;
use crate::core::types::{PixelSpan, TrackGeometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationMode {
    #[default]
    Stopped,
    Running,
}

/// Position and motion of the progress marker.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressState {
    pub span: PixelSpan,
    /// Running right edge; `None` until the marker is first laid out.
    pub current_right_px: Option<f64>,
    pub speed_px_per_tick: f64,
    pub is_animating: bool,
}

/// Outcome of one animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Marker moved and another tick should follow.
    Advanced,
    /// Marker reached the right handle; a reset should follow.
    Overshoot,
}

/// Tick state machine for the progress marker.
///
/// The animator never schedules anything itself. Callers translate
/// [`TickOutcome`] into scheduled work.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressAnimator {
    state: ProgressState,
    mode: AnimationMode,
}

impl ProgressAnimator {
    #[must_use]
    pub fn state(&self) -> ProgressState {
        ProgressState {
            is_animating: self.mode == AnimationMode::Running,
            ..self.state
        }
    }

    #[must_use]
    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.mode == AnimationMode::Running
    }

    #[must_use]
    pub fn span(&self) -> PixelSpan {
        self.state.span
    }

    pub fn set_speed(&mut self, speed_px_per_tick: f64) {
        self.state.speed_px_per_tick = speed_px_per_tick;
    }

    pub fn start(&mut self) {
        self.mode = AnimationMode::Running;
    }

    pub fn stop(&mut self) {
        self.mode = AnimationMode::Stopped;
    }

    /// Leftmost marker position: just inside the left handle's right edge.
    #[must_use]
    pub fn rest_span(handles: &HandlePositions, geometry: &TrackGeometry) -> PixelSpan {
        PixelSpan::from_left(
            handles.left.right - geometry.margin_px,
            geometry.progress_width_px,
        )
    }

    /// Right edge limit of the marker.
    #[must_use]
    pub fn right_limit_px(handles: &HandlePositions, geometry: &TrackGeometry) -> i32 {
        handles.right.left + geometry.margin_px
    }

    /// Places the marker back against the left handle. Calling this twice is
    /// the same as calling it once.
    pub fn reset(&mut self, handles: &HandlePositions, geometry: &TrackGeometry) {
        self.place(Self::rest_span(handles, geometry));
    }

    /// Advances the marker by one tick of `speed_px_per_tick`.
    ///
    /// On overshoot the marker is clamped to the right limit and the animator
    /// stops.
    pub fn tick(&mut self, handles: &HandlePositions, geometry: &TrackGeometry) -> TickOutcome {
        let seed = f64::from(Self::rest_span(handles, geometry).right);
        let limit = f64::from(Self::right_limit_px(handles, geometry));
        let mut current =
            self.state.current_right_px.unwrap_or(seed) + self.state.speed_px_per_tick;

        let outcome = if current >= limit {
            current = limit;
            self.mode = AnimationMode::Stopped;
            TickOutcome::Overshoot
        } else {
            TickOutcome::Advanced
        };

        let progress_width = f64::from(geometry.progress_width_px);
        self.state.span = PixelSpan::new((current - progress_width) as i32, current as i32);
        self.state.current_right_px = Some(current);
        outcome
    }

    /// Moves the marker by a free drag delta, clamped between the handles.
    pub fn drag_by(
        &mut self,
        offset_px: i32,
        handles: &HandlePositions,
        geometry: &TrackGeometry,
    ) {
        let rest = Self::rest_span(handles, geometry);
        let limit = Self::right_limit_px(handles, geometry);
        let width = geometry.progress_width_px;

        let mut left = self.state.span.left.saturating_add(offset_px);
        if left <= rest.left {
            left = rest.left;
        } else if left >= limit - width {
            left = limit - width;
        }
        self.place(PixelSpan::from_left(left, width));
    }

    /// Places the marker so its left edge sits at `left_px`, never left of the
    /// rest position nor past the right limit.
    pub fn place_left_edge(
        &mut self,
        left_px: i32,
        handles: &HandlePositions,
        geometry: &TrackGeometry,
    ) {
        let rest = Self::rest_span(handles, geometry);
        let limit = Self::right_limit_px(handles, geometry);
        let width = geometry.progress_width_px;
        let left = left_px.max(rest.left).min(limit - width);
        self.place(PixelSpan::from_left(left, width));
    }

    fn place(&mut self, span: PixelSpan) {
        self.state.span = span;
        self.state.current_right_px = Some(f64::from(span.right));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> TrackGeometry {
        TrackGeometry {
            track_width_px: 400,
            handle_width_px: 16,
            margin_px: 6,
            progress_width_px: 13,
            fixed_inset_px: 20,
        }
    }

    fn handles() -> HandlePositions {
        HandlePositions {
            left: PixelSpan::new(20, 36),
            right: PixelSpan::new(136, 152),
        }
    }

    #[test]
    fn reset_places_marker_against_left_handle() {
        let mut animator = ProgressAnimator::default();
        animator.reset(&handles(), &geometry());
        assert_eq!(animator.span(), PixelSpan::new(30, 43));
        assert_eq!(animator.state().current_right_px, Some(43.0));
    }

    #[test]
    fn first_tick_seeds_from_left_handle() {
        let mut animator = ProgressAnimator::default();
        animator.set_speed(2.5);
        animator.start();
        assert_eq!(animator.tick(&handles(), &geometry()), TickOutcome::Advanced);
        assert_eq!(animator.state().current_right_px, Some(45.5));
        assert_eq!(animator.span(), PixelSpan::new(32, 45));
        assert!(animator.is_animating());
        assert_eq!(animator.mode(), AnimationMode::Running);
    }

    #[test]
    fn overshoot_clamps_and_stops() {
        let mut animator = ProgressAnimator::default();
        animator.set_speed(200.0);
        animator.start();
        animator.reset(&handles(), &geometry());
        assert_eq!(animator.tick(&handles(), &geometry()), TickOutcome::Overshoot);
        assert_eq!(animator.span(), PixelSpan::new(129, 142));
        assert!(!animator.is_animating());
        assert_eq!(animator.mode(), AnimationMode::Stopped);
    }

    #[test]
    fn drag_is_clamped_between_handles() {
        let mut animator = ProgressAnimator::default();
        animator.reset(&handles(), &geometry());
        animator.drag_by(-40, &handles(), &geometry());
        assert_eq!(animator.span(), PixelSpan::new(30, 43));
        animator.drag_by(500, &handles(), &geometry());
        assert_eq!(animator.span(), PixelSpan::new(129, 142));
        animator.drag_by(-50, &handles(), &geometry());
        assert_eq!(animator.span(), PixelSpan::new(79, 92));
    }

    #[test]
    fn extreme_drag_offsets_saturate_at_the_limits() {
        let mut animator = ProgressAnimator::default();
        animator.reset(&handles(), &geometry());
        animator.drag_by(i32::MAX, &handles(), &geometry());
        assert_eq!(animator.span(), PixelSpan::new(129, 142));
        animator.drag_by(i32::MIN, &handles(), &geometry());
        assert_eq!(animator.span(), PixelSpan::new(30, 43));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut animator = ProgressAnimator::default();
        animator.drag_by(30, &handles(), &geometry());
        animator.reset(&handles(), &geometry());
        let once = animator.state();
        animator.reset(&handles(), &geometry());
        assert_eq!(animator.state(), once);
    }
}
