use std::time::Instant;

/// Each slot holds at most one pending timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    TransitionCommit,
    TransitionSettle,
    AutoHide,
    Announcement,
    Notice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    CommitTransition { target: usize },
    SettleTransition,
    AutoHideElapsed,
    ClearAnnouncement,
    ClearNotice,
}

impl TimerEvent {
    pub fn slot(self) -> TimerSlot {
        match self {
            Self::CommitTransition { .. } => TimerSlot::TransitionCommit,
            Self::SettleTransition => TimerSlot::TransitionSettle,
            Self::AutoHideElapsed => TimerSlot::AutoHide,
            Self::ClearAnnouncement => TimerSlot::Announcement,
            Self::ClearNotice => TimerSlot::Notice,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    deadline: Instant,
    seq: u64,
    event: TimerEvent,
}

/// Scheduled continuations for the single-threaded event loop.
///
/// Scheduling into an occupied slot replaces the pending entry, so the
/// latest timer wins. Time is always passed in by the caller, which lets
/// tests fast-forward without sleeping.
#[derive(Debug, Default)]
pub struct Timers {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, deadline: Instant, event: TimerEvent) {
        self.cancel(event.slot());
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.entries.push(Entry {
            deadline,
            seq,
            event,
        });
    }

    pub fn cancel(&mut self, slot: TimerSlot) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.event.slot() != slot);
        self.entries.len() != before
    }

    pub fn is_pending(&self, slot: TimerSlot) -> bool {
        self.entries.iter().any(|entry| entry.event.slot() == slot)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Removes and returns the earliest timer due at `now`, ties in
    /// scheduling order.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, TimerEvent)> {
        let (idx, _) = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.deadline <= now)
            .min_by_key(|(_, entry)| (entry.deadline, entry.seq))?;
        let entry = self.entries.swap_remove(idx);
        Some((entry.deadline, entry.event))
    }
}
