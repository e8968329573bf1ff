use crate::core::PixelSpan;
use crate::error::{SeekError, SeekResult};

/// Slider region a rectangle describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionRole {
    LeftHandle,
    RightHandle,
    Central,
    Progress,
}

/// Horizontal extent of one region in track pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectPrimitive {
    pub role: RegionRole,
    pub span: PixelSpan,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(role: RegionRole, span: PixelSpan) -> Self {
        Self { role, span }
    }

    pub fn validate(self) -> SeekResult<()> {
        if self.span.left > self.span.right {
            return Err(SeekError::InvalidData(format!(
                "{:?} region is inverted: {} > {}",
                self.role, self.span.left, self.span.right
            )));
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Right,
}

/// One time label anchored at a track pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: i32,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: i32, h_align: TextHAlign) -> Self {
        Self {
            text: text.into(),
            x,
            h_align,
        }
    }

    pub fn validate(&self) -> SeekResult<()> {
        if self.text.is_empty() {
            return Err(SeekError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
