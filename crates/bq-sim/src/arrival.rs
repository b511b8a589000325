//! The perpetual arrival process.

use bq_core::{CoreResult, CustomerId, Exponential, SimRng};

/// Poisson arrival stream: exponential gaps, sequential customer ids.
///
/// It never stops by itself.  The runner keeps exactly one pending
/// `WaitingArrival` event; the one that falls past the horizon is dropped
/// with the rest of the queue.
pub struct ArrivalGenerator {
    gaps:    Exponential,
    rng:     SimRng,
    next_id: CustomerId,
}

impl ArrivalGenerator {
    pub fn new(arrival_rate: f64, rng: SimRng) -> CoreResult<Self> {
        Ok(Self {
            gaps: Exponential::new(arrival_rate)?,
            rng,
            next_id: CustomerId(0),
        })
    }

    /// Time until the next arrival.
    pub fn next_gap(&mut self) -> f64 {
        self.gaps.sample(&mut self.rng)
    }

    /// Hand out the id for a newly arrived customer.
    pub fn spawn(&mut self) -> CustomerId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    /// Number of customers spawned so far.
    pub fn spawned(&self) -> u64 {
        self.next_id.0
    }

    pub fn rate(&self) -> f64 {
        self.gaps.rate()
    }
}
