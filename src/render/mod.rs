mod frame;
mod null_renderer;
mod primitives;

pub use frame::SliderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{RectPrimitive, RegionRole, TextHAlign, TextPrimitive};

use crate::error::SeekResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `SliderFrame` so drawing code stays
/// isolated from mapping and drag logic.
pub trait Renderer {
    fn render(&mut self, frame: &SliderFrame) -> SeekResult<()>;
}
