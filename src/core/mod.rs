pub mod handle_constraints;
pub mod progress;
pub mod range_mapper;
pub mod time_format;
pub mod types;

pub use handle_constraints::{
    HandleMove, HandlePositions, HandleSide, HandleTimes, clamp_left_handle, clamp_right_handle,
    move_left_handle, move_right_handle,
};
pub use progress::{AnimationMode, ProgressAnimator, ProgressState, TickOutcome};
pub use range_mapper::{RangeLayout, RangeMapper, decimal_digit_count, progress_speed_px_per_tick};
pub use time_format::format_duration;
pub use types::{PixelSpan, TimeRange, TrackGeometry, WeightConfig};
