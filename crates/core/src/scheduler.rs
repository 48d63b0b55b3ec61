//! Deterministic millisecond interval scheduler
//!
//! The host owns the clock and calls [`IntervalScheduler::advance_to`] with the
//! current time; each call hands back at most one due timer so the caller can
//! deliver it to the engine before the next one is considered. Tests drive it
//! with synthetic time.

use crate::hal::{Scheduler, TimerHandle, TimerKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    handle: TimerHandle,
    timer: TimerKind,
    interval_ms: u32,
    due_ms: u64,
}

#[derive(Debug, Clone, Default)]
pub struct IntervalScheduler {
    now_ms: u64,
    next_id: u32,
    entries: Vec<Entry>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time of the last `advance_to` call.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of live timers.
    pub fn active_count(&self) -> usize {
        self.entries.len()
    }

    /// Kinds of the live timers, in scheduling order.
    pub fn active_kinds(&self) -> impl Iterator<Item = TimerKind> + '_ {
        self.entries.iter().map(|e| e.timer)
    }

    pub fn is_active(&self, timer: TimerKind) -> bool {
        self.entries.iter().any(|e| e.timer == timer)
    }

    /// Earliest deadline among live timers.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.due_ms).min()
    }

    /// Move the clock to `now_ms` and pop the earliest due timer, if any.
    ///
    /// The popped timer is re-armed one interval later; if the host fell more
    /// than an interval behind, missed fires are skipped instead of replayed.
    pub fn advance_to(&mut self, now_ms: u64) -> Option<TimerKind> {
        self.now_ms = self.now_ms.max(now_ms);
        let now = self.now_ms;

        let entry = self
            .entries
            .iter_mut()
            .filter(|e| e.due_ms <= now)
            .min_by_key(|e| e.due_ms)?;

        entry.due_ms += entry.interval_ms as u64;
        if entry.due_ms <= now {
            entry.due_ms = now + entry.interval_ms as u64;
        }
        Some(entry.timer)
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule_repeating(&mut self, interval_ms: u32, timer: TimerKind) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let interval_ms = interval_ms.max(1);
        self.entries.push(Entry {
            handle,
            timer,
            interval_ms,
            due_ms: self.now_ms + interval_ms as u64,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.entries.retain(|e| e.handle != handle);
    }
}
