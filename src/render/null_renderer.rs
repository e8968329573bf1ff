use crate::error::SeekResult;
use crate::render::{Renderer, SliderFrame};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so tests catch inverted geometry.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SliderFrame) -> SeekResult<()> {
        frame.validate()?;
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        self.frames_rendered += 1;
        Ok(())
    }
}
