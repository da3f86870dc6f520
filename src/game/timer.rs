use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    CountdownTick,
    ClearFeedback,
}

/// A deferred one-shot callback. `generation` records which game it was
/// scheduled under; the controller drops entries from superseded games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEntry {
    pub deadline: Instant,
    pub generation: u64,
    pub kind: TimerKind,
}

/// Pending one-shot callbacks. There is no cancel: superseded entries are
/// drained and dropped by their generation tag.
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: Vec<TimerEntry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn schedule(&mut self, kind: TimerKind, generation: u64, deadline: Instant) {
        self.entries.push(TimerEntry {
            deadline,
            generation,
            kind,
        });
    }

    /// Earliest outstanding deadline, used to bound the event-loop sleep.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Remove and return every entry due at `now`, in deadline order.
    pub fn pop_due(&mut self, now: Instant) -> Vec<TimerEntry> {
        let mut due = Vec::new();
        self.entries.retain(|entry| {
            if entry.deadline <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|entry| entry.deadline);
        due
    }
}
