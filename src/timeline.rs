//! Cooperative timeline
//!
//! Single-threaded queue of delayed tasks driven by an explicit clock.
//! Tasks fire in `(due time, scheduling order)` order, one at a time, so a
//! firing task can schedule or cancel others before the next one is
//! considered. Time is in milliseconds.

use std::collections::{BTreeMap, HashMap};

/// Handle for cancelling a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
pub struct Timeline<T> {
    now: u64,
    next_seq: u64,
    queue: BTreeMap<(u64, u64), T>,
    due_by_seq: HashMap<u64, u64>,
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_seq: 0,
            queue: BTreeMap::new(),
            due_by_seq: HashMap::new(),
        }
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    /// Queue `task` to fire `delay_ms` from now
    pub fn schedule(&mut self, delay_ms: u64, task: T) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        let due = self.now.saturating_add(delay_ms);
        self.queue.insert((due, seq), task);
        self.due_by_seq.insert(seq, due);
        TimerHandle(seq)
    }

    /// Drop a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.due_by_seq.remove(&handle.0) {
            Some(due) => self.queue.remove(&(due, handle.0)).is_some(),
            None => false,
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.due_by_seq.contains_key(&handle.0)
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Pop the earliest task due at or before `until`, moving the clock to its due time
    pub fn pop_due(&mut self, until: u64) -> Option<(TimerHandle, T)> {
        let (&(due, seq), _) = self.queue.first_key_value()?;
        if due > until {
            return None;
        }
        let task = self.queue.remove(&(due, seq))?;
        self.due_by_seq.remove(&seq);
        self.now = self.now.max(due);
        Some((TimerHandle(seq), task))
    }

    /// Move the clock forward without firing anything
    pub fn settle(&mut self, until: u64) {
        self.now = self.now.max(until);
    }
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod timeline_tests;
