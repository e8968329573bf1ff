use crate::error::{SeekError, SeekResult};
use crate::extensions::SelectorListener;
use crate::scheduler::Scheduler;

use super::RangeSelector;

impl<S: Scheduler> RangeSelector<S> {
    /// Registers a listener with a unique identifier.
    ///
    /// Listeners receive events in registration order.
    pub fn register_listener(&mut self, listener: Box<dyn SelectorListener>) -> SeekResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(SeekError::InvalidData(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.listeners.contains_key(&listener_id) {
            return Err(SeekError::InvalidData(format!(
                "listener with id `{listener_id}` is already registered"
            )));
        }
        self.listeners.insert(listener_id, listener);
        Ok(())
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        self.listeners.shift_remove(listener_id).is_some()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listeners.contains_key(listener_id)
    }
}
