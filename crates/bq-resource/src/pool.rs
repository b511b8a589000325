//! `ResourcePool`: a teller group with a first-come-first-served line.

use std::collections::VecDeque;

use bq_core::PoolId;

use crate::{ResourceError, ResourceResult};

/// Result of [`ResourcePool::request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A server was free and is now held by the requester.
    Granted,
    /// All servers busy; the requester sits at `position` (0 = head) of the
    /// waiting line.
    Queued { position: usize },
}

/// A group of `capacity` identical servers shared through one FIFO line.
///
/// Invariants, checked in debug builds after every mutation:
/// - `in_use <= capacity`
/// - `waiting` is non-empty only while `in_use == capacity`
///
/// `R` is whatever the caller needs back to resume a waiter (the engine uses
/// `CustomerId`).
#[derive(Debug, Clone)]
pub struct ResourcePool<R> {
    id:       PoolId,
    capacity: u32,
    in_use:   u32,
    waiting:  VecDeque<R>,
    /// Total grants handed out, immediate or from the line.
    grants:   u64,
    /// Longest the line has ever been.
    peak_len: usize,
}

impl<R> ResourcePool<R> {
    /// Create an idle pool.  `capacity` must be at least 1; the run
    /// config validation guarantees this before pools are built.
    pub fn new(id: PoolId, capacity: u32) -> Self {
        debug_assert!(capacity > 0, "{id} built with zero capacity");
        Self {
            id,
            capacity,
            in_use: 0,
            waiting: VecDeque::new(),
            grants: 0,
            peak_len: 0,
        }
    }

    /// Ask for a server.
    pub fn request(&mut self, requester: R) -> RequestOutcome {
        let outcome = if self.in_use < self.capacity {
            self.in_use += 1;
            self.grants += 1;
            RequestOutcome::Granted
        } else {
            self.waiting.push_back(requester);
            self.peak_len = self.peak_len.max(self.waiting.len());
            RequestOutcome::Queued { position: self.waiting.len() - 1 }
        };
        self.debug_check();
        outcome
    }

    /// Give a server back.
    ///
    /// If someone is waiting, the freed server goes straight to the head of
    /// the line and that requester is returned; the caller must resume it
    /// now.  `in_use` is unchanged in that case.
    pub fn release(&mut self) -> ResourceResult<Option<R>> {
        if self.in_use == 0 {
            return Err(ResourceError::ReleaseIdle(self.id));
        }
        self.in_use -= 1;
        let next = self.waiting.pop_front();
        if next.is_some() {
            self.in_use += 1;
            self.grants += 1;
        }
        self.debug_check();
        Ok(next)
    }

    #[inline]
    pub fn id(&self) -> PoolId {
        self.id
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn in_use(&self) -> u32 {
        self.in_use
    }

    /// Length of the waiting line right now.
    #[inline]
    pub fn queue_len(&self) -> usize {
        self.waiting.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.in_use == self.capacity
    }

    /// Waiters from head to tail.
    pub fn waiting(&self) -> impl Iterator<Item = &R> {
        self.waiting.iter()
    }

    pub fn grants(&self) -> u64 {
        self.grants
    }

    pub fn peak_queue_len(&self) -> usize {
        self.peak_len
    }

    /// `true` when both pool invariants hold.
    pub fn invariants_hold(&self) -> bool {
        self.in_use <= self.capacity && (self.waiting.is_empty() || self.in_use == self.capacity)
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(
            self.invariants_hold(),
            "{} invariant broken: in_use={} capacity={} waiting={}",
            self.id,
            self.in_use,
            self.capacity,
            self.waiting.len()
        );
    }
}
