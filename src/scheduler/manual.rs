use super::{ScheduledTask, Scheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTask {
    due_ms: u64,
    seq: u64,
    task: ScheduledTask,
}

/// Deterministic scheduler driven by a virtual millisecond clock.
///
/// Used by headless hosts and tests. Nothing fires until the clock is advanced.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<PendingTask>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending tasks in delivery order with their due times.
    #[must_use]
    pub fn pending(&self) -> Vec<(u64, ScheduledTask)> {
        let mut pending = self.pending.clone();
        pending.sort_by_key(|entry| (entry.due_ms, entry.seq));
        pending.into_iter().map(|entry| (entry.due_ms, entry.task)).collect()
    }

    /// Removes and returns the earliest task due at or before `until_ms`,
    /// moving the clock to its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<ScheduledTask> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due_ms <= until_ms)
            .min_by_key(|(_, entry)| (entry.due_ms, entry.seq))
            .map(|(index, _)| index)?;
        let entry = self.pending.remove(index);
        self.now_ms = self.now_ms.max(entry.due_ms);
        Some(entry.task)
    }

    /// Moves the clock forward without delivering anything.
    pub fn set_now_ms(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, task: ScheduledTask, delay_ms: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(PendingTask {
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq,
            task,
        });
    }

    fn cancel_all(&mut self) {
        self.pending.clear();
    }
}
