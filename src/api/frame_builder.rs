use tracing::trace;

use crate::core::format_duration;
use crate::error::SeekResult;
use crate::render::{RectPrimitive, RegionRole, Renderer, SliderFrame, TextHAlign, TextPrimitive};
use crate::scheduler::Scheduler;

use super::RangeSelector;

impl<S: Scheduler> RangeSelector<S> {
    /// Materializes region geometry and time labels for a draw pass.
    ///
    /// The start label hangs right-aligned off the left handle's inner edge;
    /// the end label starts at the right handle's inner edge. Empty until a
    /// time range is set.
    #[must_use]
    pub fn build_frame(&self) -> SliderFrame {
        let frame = SliderFrame::new(self.mapper.geometry().track_width_px);
        let Some(selection) = self.selection else {
            return frame;
        };
        let handles = selection.handles;
        frame
            .with_rect(RectPrimitive::new(RegionRole::LeftHandle, handles.left))
            .with_rect(RectPrimitive::new(RegionRole::Central, handles.central()))
            .with_rect(RectPrimitive::new(RegionRole::RightHandle, handles.right))
            .with_rect(RectPrimitive::new(RegionRole::Progress, self.progress.span()))
            .with_text(TextPrimitive::new(
                format_duration(selection.times.left_time),
                handles.left.right,
                TextHAlign::Right,
            ))
            .with_text(TextPrimitive::new(
                format_duration(selection.times.right_time),
                handles.right.left,
                TextHAlign::Left,
            ))
    }

    /// Builds the current frame and hands it to `renderer`.
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> SeekResult<()> {
        let frame = self.build_frame();
        trace!(rects = frame.rects.len(), texts = frame.texts.len(), "render slider frame");
        renderer.render(&frame)
    }
}
