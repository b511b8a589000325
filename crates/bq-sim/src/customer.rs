//! The customer record and its lifecycle.
//!
//! ```text
//! Arrived ──enqueue──▶ Queued ──start_service──▶ InService ──depart──▶ Departed
//! ```
//!
//! `wait_time` is set by `start_service` and `system_time` by `depart`, each
//! exactly once and in that order.  `depart` produces the immutable
//! [`CompletedCustomer`] that goes into the run statistics.

use std::fmt;

use bq_core::{CustomerId, PoolId, SimTime};

/// Which line a customer was routed to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClassLabel {
    /// Shared pool of the single-line topology.
    Single,
    /// Index of the chosen queue in the shortest-queue topology.
    RegularQueueIndex(u16),
    Express,
    Regular,
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassLabel::Single => write!(f, "single"),
            ClassLabel::RegularQueueIndex(i) => write!(f, "queue-{i}"),
            ClassLabel::Express => write!(f, "express"),
            ClassLabel::Regular => write!(f, "regular"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CustomerPhase {
    Arrived,
    Queued,
    InService,
    Departed,
}

/// An in-flight customer.
#[derive(Clone, Debug)]
pub struct Customer {
    pub id:           CustomerId,
    pub arrival_time: SimTime,
    pub class:        ClassLabel,
    pub pool:         PoolId,
    phase:            CustomerPhase,
    wait_time:        Option<f64>,
    system_time:      Option<f64>,
}

impl Customer {
    pub fn new(id: CustomerId, arrival_time: SimTime, pool: PoolId, class: ClassLabel) -> Self {
        Self {
            id,
            arrival_time,
            class,
            pool,
            phase: CustomerPhase::Arrived,
            wait_time: None,
            system_time: None,
        }
    }

    #[inline]
    pub fn phase(&self) -> CustomerPhase {
        self.phase
    }

    pub fn wait_time(&self) -> Option<f64> {
        self.wait_time
    }

    pub fn system_time(&self) -> Option<f64> {
        self.system_time
    }

    /// `Arrived → Queued`: the customer has asked its pool for a teller.
    pub fn enqueue(&mut self) {
        debug_assert_eq!(self.phase, CustomerPhase::Arrived, "{} enqueued twice", self.id);
        self.phase = CustomerPhase::Queued;
    }

    /// `Queued → InService`: a teller was granted at `now`.  Returns the wait.
    pub fn start_service(&mut self, now: SimTime) -> f64 {
        debug_assert_eq!(self.phase, CustomerPhase::Queued, "{} served out of order", self.id);
        let wait = now.since(self.arrival_time);
        self.wait_time = Some(wait);
        self.phase = CustomerPhase::InService;
        wait
    }

    /// `InService → Departed`: service ended at `now`.
    pub fn depart(&mut self, now: SimTime) -> CompletedCustomer {
        debug_assert_eq!(self.phase, CustomerPhase::InService, "{} departed early", self.id);
        let system_time = now.since(self.arrival_time);
        self.system_time = Some(system_time);
        self.phase = CustomerPhase::Departed;
        CompletedCustomer {
            id:           self.id,
            class:        self.class,
            pool:         self.pool,
            arrival_time: self.arrival_time,
            wait_time:    self.wait_time.unwrap_or(0.0),
            system_time,
        }
    }
}

/// A departed customer, as stored in the run statistics.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CompletedCustomer {
    pub id:           CustomerId,
    pub class:        ClassLabel,
    pub pool:         PoolId,
    pub arrival_time: SimTime,
    pub wait_time:    f64,
    pub system_time:  f64,
}

impl CompletedCustomer {
    /// Time spent at the teller.
    pub fn service_time(&self) -> f64 {
        (self.system_time - self.wait_time).max(0.0)
    }
}
