//! Observer hooks for tracing customer transitions.

use bq_core::CustomerId;
use bq_resource::ResourcePool;

use crate::{CompletedCustomer, Customer, RunStatistics};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as customers move
/// through the bank.
///
/// Every pool argument is the customer's pool *after* the transition was
/// applied.  All methods default to no-ops.
///
/// # Example: counting customers who had to queue
///
/// ```rust,ignore
/// struct QueuedCounter { queued: usize }
///
/// impl SimObserver for QueuedCounter {
///     fn on_arrival(&mut self, _c: &Customer, pool: &ResourcePool<CustomerId>) {
///         if pool.queue_len() > 0 {
///             self.queued += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// A customer arrived, was routed, and has requested a teller.
    fn on_arrival(&mut self, _customer: &Customer, _pool: &ResourcePool<CustomerId>) {}

    /// A customer was granted a teller; its wait time is now set.
    fn on_service_start(&mut self, _customer: &Customer, _pool: &ResourcePool<CustomerId>) {}

    /// A customer finished service and released its teller.
    fn on_departure(&mut self, _customer: &CompletedCustomer, _pool: &ResourcePool<CustomerId>) {}

    /// Called once, after the horizon, with the finished statistics.
    fn on_run_end(&mut self, _stats: &RunStatistics) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
