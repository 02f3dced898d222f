//! Cooperative delayed-work queue.
//!
//! Holds at most one pending deadline per [`WorkId`]. Re-scheduling a
//! pending item replaces its deadline, cancelling removes it, and
//! [`WorkQueue::pop_due`] hands items back one at a time in deadline
//! order. Nothing here runs a handler; the caller pops an id and
//! dispatches it, so exactly one handler is ever in flight.
//!
//! ```text
//!   reschedule(Poll, 100ms) ──┐
//!   reschedule(Blink, 250ms) ─┼──▶ [pending: (due, seq, id)] ──pop_due(t)──▶ id
//!   cancel(Breathe) ──────────┘
//! ```
//!
//! Time is whatever [`Instant`] the caller advances to. On the device it
//! tracks the monotonic clock; in tests it is stepped by hand.

use embassy_time::{Duration, Instant};
use heapless::Vec;
use log::{debug, warn};

// ═══════════════════════════════════════════════════════════════
//  Work identities
// ═══════════════════════════════════════════════════════════════

/// The three recurring activities that share the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkId {
    /// Layer/activity sampler.
    Poll,
    /// Blink toggler.
    Blink,
    /// Breathe ramp.
    Breathe,
}

impl WorkId {
    pub const COUNT: usize = 3;

    pub fn name(self) -> &'static str {
        match self {
            Self::Poll => "poll",
            Self::Blink => "blink",
            Self::Breathe => "breathe",
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Queue
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy)]
struct Pending {
    work: WorkId,
    due: Instant,
    /// Insertion order; breaks ties between equal deadlines.
    seq: u32,
}

/// Stack-allocated delayed-work queue.
pub struct WorkQueue {
    pending: Vec<Pending, { WorkId::COUNT }>,
    now: Instant,
    seq: u32,
}

impl WorkQueue {
    pub fn new(now: Instant) -> Self {
        Self {
            pending: Vec::new(),
            now,
            seq: 0,
        }
    }

    /// Time of the most recently dispatched item (or construction time).
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Arm `work` to run `delay` after the current queue time, replacing
    /// any deadline it already had.
    pub fn reschedule(&mut self, work: WorkId, delay: Duration) {
        let due = self.now + delay;
        let seq = self.next_seq();
        if let Some(entry) = self.pending.iter_mut().find(|p| p.work == work) {
            entry.due = due;
            entry.seq = seq;
        } else if self.pending.push(Pending { work, due, seq }).is_err() {
            // One slot per WorkId; only reachable if COUNT is wrong.
            warn!("WorkQueue: no slot for '{}'", work.name());
        }
    }

    /// Drop the pending deadline for `work`. Returns `true` if one existed.
    pub fn cancel(&mut self, work: WorkId) -> bool {
        match self.pending.iter().position(|p| p.work == work) {
            Some(idx) => {
                self.pending.swap_remove(idx);
                debug!("WorkQueue: cancelled '{}'", work.name());
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, work: WorkId) -> bool {
        self.pending.iter().any(|p| p.work == work)
    }

    /// Deadline of `work`, if armed.
    pub fn deadline(&self, work: WorkId) -> Option<Instant> {
        self.pending.iter().find(|p| p.work == work).map(|p| p.due)
    }

    /// Earliest pending deadline.
    pub fn next_due(&self) -> Option<Instant> {
        self.earliest().map(|p| p.due)
    }

    /// Remove and return the earliest item due at or before `until`,
    /// advancing queue time to its deadline.
    pub fn pop_due(&mut self, until: Instant) -> Option<WorkId> {
        let next = self.earliest().filter(|p| p.due <= until)?;
        let idx = self.pending.iter().position(|p| p.work == next.work)?;
        self.pending.swap_remove(idx);
        if next.due > self.now {
            self.now = next.due;
        }
        Some(next.work)
    }

    /// Move queue time forward without dispatching anything.
    pub fn advance_to(&mut self, until: Instant) {
        if until > self.now {
            self.now = until;
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn earliest(&self) -> Option<Pending> {
        self.pending
            .iter()
            .copied()
            .min_by_key(|p| (p.due, p.seq))
    }

    fn next_seq(&mut self) -> u32 {
        self.seq = self.seq.wrapping_add(1);
        self.seq
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
