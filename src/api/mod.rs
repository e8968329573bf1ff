mod frame_builder;
mod handle_drag_controller;
mod listener_dispatch;
mod listener_registry;
mod pointer_router;
mod progress_controller;
mod range_controller;
mod selector;
mod selector_config;
mod snapshot;
mod validation;

pub use selector::RangeSelector;
pub use selector_config::RangeSelectorConfig;
pub use snapshot::SelectorSnapshot;
