//! Deferred-work seam between the selector and the host event loop.
//!
//! The selector never blocks or spawns. It hands [`ScheduledTask`]s to a
//! [`Scheduler`] and expects the host to deliver each one back through
//! `RangeSelector::dispatch` once its delay has elapsed.

mod manual;

pub use manual::ManualScheduler;

use serde::{Deserialize, Serialize};

/// Work item the progress animation asks to run later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduledTask {
    AdvanceProgress,
    ResetProgress,
}

/// Contract implemented by any timer or event-loop backend.
pub trait Scheduler {
    /// Queues `task` to be delivered after `delay_ms` milliseconds.
    fn schedule(&mut self, task: ScheduledTask, delay_ms: u64);

    /// Drops every task that has not been delivered yet.
    fn cancel_all(&mut self);
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
    fn schedule(&mut self, task: ScheduledTask, delay_ms: u64) {
        (**self).schedule(task, delay_ms);
    }

    fn cancel_all(&mut self) {
        (**self).cancel_all();
    }
}
