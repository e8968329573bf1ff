use smallvec::SmallVec;

use crate::error::{SeekError, SeekResult};
use crate::render::{RectPrimitive, RegionRole, TextPrimitive};

/// Backend-agnostic geometry for one slider draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderFrame {
    pub track_width_px: i32,
    pub rects: SmallVec<[RectPrimitive; 4]>,
    pub texts: SmallVec<[TextPrimitive; 2]>,
}

impl SliderFrame {
    #[must_use]
    pub fn new(track_width_px: i32) -> Self {
        Self {
            track_width_px,
            rects: SmallVec::new(),
            texts: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn rect(&self, role: RegionRole) -> Option<&RectPrimitive> {
        self.rects.iter().find(|rect| rect.role == role)
    }

    pub fn validate(&self) -> SeekResult<()> {
        if self.track_width_px <= 0 {
            return Err(SeekError::InvalidData(format!(
                "frame track width must be > 0, got {}",
                self.track_width_px
            )));
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.texts.is_empty()
    }
}
