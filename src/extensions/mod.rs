mod listeners;

pub use listeners::{SelectorContext, SelectorEvent, SelectorListener};
