//! Scheduler - cooperative, single-threaded timed tasks
//!
//! Tasks are stamped with a due `Instant` and the id of the session that
//! scheduled them. Nothing runs on its own: the owner calls `pop_due` with the
//! current time and executes whatever comes back, so the whole drill stays on
//! one thread and tests can drive time by hand.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    time::Instant,
};

/// Identifies one run of the drill.
pub type SessionId = u64;

/// Work the drill defers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Recurring announce-loop tick.
    Announce,
    /// Sound the reference tone for a displayed pitch name.
    SoundTone { pitch: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub due: Instant,
    pub session: SessionId,
    pub task: Task,
    /// Insertion order, breaks ties between equal deadlines.
    seq: u64,
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due).then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Reverse<Scheduled>>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task due at `due`.
    pub fn enqueue(&mut self, due: Instant, session: SessionId, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Scheduled {
            due,
            session,
            task,
            seq,
        }));
    }

    /// Remove and return the earliest task if it is due at `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<Scheduled> {
        match self.queue.peek() {
            Some(Reverse(next)) if next.due <= now => self.queue.pop().map(|Reverse(s)| s),
            _ => None,
        }
    }

    /// Drop every pending task belonging to `session`.
    pub fn cancel(&mut self, session: SessionId) -> usize {
        let before = self.queue.len();
        self.queue.retain(|Reverse(s)| s.session != session);
        before - self.queue.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.peek().map(|Reverse(s)| s.due)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
