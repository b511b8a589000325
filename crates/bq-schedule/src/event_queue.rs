//! `EventQueue`: the clock plus a min-heap of pending events.
//!
//! # Ordering
//!
//! Events are keyed by `(time, seq)` where `seq` is a per-queue insertion
//! counter.  Two events at the same simulated instant therefore pop in the
//! order they were scheduled, which keeps a seeded run reproducible.
//!
//! # Performance note
//!
//! `BinaryHeap` gives O(log E) push and pop where E is the number of pending
//! events.  A bank run keeps E small: one pending arrival plus at most one
//! service-end per busy teller.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bq_core::{SimClock, SimTime};

use crate::{ScheduleError, ScheduleResult};

// ── Heap entry ────────────────────────────────────────────────────────────────

struct Entry<P> {
    time:    SimTime,
    seq:     u64,
    payload: P,
}

impl<P> PartialEq for Entry<P> {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.seq == other.seq
    }
}

impl<P> Eq for Entry<P> {}

impl<P> PartialOrd for Entry<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Ord for Entry<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the earliest (time, seq) first.
        other
            .time
            .cmp(&self.time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

// ── UntilOutcome ──────────────────────────────────────────────────────────────

/// What [`EventQueue::run_until`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UntilOutcome {
    /// Events handed to the handler.
    pub executed:  u64,
    /// Events left past the horizon and dropped unexecuted.
    pub discarded: usize,
}

// ── EventQueue ────────────────────────────────────────────────────────────────

/// Simulated clock and pending-event set for one run.
pub struct EventQueue<P> {
    heap:     BinaryHeap<Entry<P>>,
    clock:    SimClock,
    next_seq: u64,
}

impl<P> Default for EventQueue<P> {
    fn default() -> Self {
        Self {
            heap:     BinaryHeap::new(),
            clock:    SimClock::new(),
            next_seq: 0,
        }
    }
}

impl<P> EventQueue<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    /// Schedule `payload` to resume `delay` units from now.
    ///
    /// A zero delay is allowed and lands after every event already queued
    /// for the current instant.  Returns the absolute fire time.
    pub fn schedule(&mut self, delay: f64, payload: P) -> ScheduleResult<SimTime> {
        if !(delay.is_finite() && delay >= 0.0) {
            return Err(ScheduleError::InvalidDelay(delay));
        }
        let time = self.clock.now().offset(delay);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { time, seq, payload });
        Ok(time)
    }

    /// Fire time of the earliest pending event, or `None` if empty.
    pub fn next_time(&self) -> Option<SimTime> {
        self.heap.peek().map(|e| e.time)
    }

    /// Pop the earliest event and move the clock to its time.
    pub fn advance(&mut self) -> Option<P> {
        let entry = self.heap.pop()?;
        self.clock.advance_to(entry.time);
        Some(entry.payload)
    }

    /// Drive the queue up to and including `horizon`.
    ///
    /// `handler` receives the queue (to schedule follow-up events) and each
    /// popped payload.  Events whose time is past `horizon` are never handed
    /// out; they are dropped when the loop stops and the clock is parked at
    /// `horizon`.  The first handler error aborts the loop and is returned
    /// unchanged, leaving the remaining events in place.
    pub fn run_until<E, F>(&mut self, horizon: SimTime, mut handler: F) -> Result<UntilOutcome, E>
    where
        F: FnMut(&mut Self, P) -> Result<(), E>,
    {
        let mut executed = 0u64;
        while self.next_time().is_some_and(|t| t <= horizon) {
            let Some(payload) = self.advance() else { break };
            handler(self, payload)?;
            executed += 1;
        }
        let discarded = self.heap.len();
        self.heap.clear();
        if horizon > self.clock.now() {
            self.clock.advance_to(horizon);
        }
        Ok(UntilOutcome { executed, discarded })
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
