//! range-seek: dual-handle time range selector engine.
//!
//! The crate maps a fixed-width pixel track onto a millisecond time range,
//! clamps two selection handles against each other and the track, and drives an
//! animated progress marker through an injected scheduler. Drawing and input
//! capture stay with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod scheduler;
pub mod telemetry;

pub use api::{RangeSelector, RangeSelectorConfig};
pub use error::{SeekError, SeekResult};
