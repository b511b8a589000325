//! The `Sim` struct and its event loop.

use std::collections::HashMap;

use bq_core::{CustomerId, Exponential, PoolId, RunConfig, SimRng, SimTime};
use bq_resource::{RequestOutcome, ResourcePool};
use bq_schedule::{EventQueue, UntilOutcome};
use tracing::{debug, info, instrument, trace};

use crate::{
    ArrivalGenerator, CompletedCustomer, Customer, CustomerPhase, DispatchPolicy, RunStatistics,
    SimError, SimObserver, SimResult,
};

// ── Wake ──────────────────────────────────────────────────────────────────────

/// What a scheduled event resumes.
///
/// A customer suspends twice: in its pool's waiting line and during service.
/// Each suspension is one of these payloads sitting in the event queue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Wake {
    /// The arrival process: spawn the next customer.
    WaitingArrival,
    /// The customer holds a teller and resumes into service.
    WaitingResource(CustomerId),
    /// The customer's service time is up.
    WaitingServiceEnd(CustomerId),
}

// ── World ─────────────────────────────────────────────────────────────────────

/// Mutable run state, separate from the queue so the event handler can
/// borrow both.
pub(crate) struct World {
    pub(crate) pools:       Vec<ResourcePool<CustomerId>>,
    /// Service-time sampler per pool, indexed like `pools`.
    pub(crate) service:     Vec<Exponential>,
    pub(crate) dispatch:    DispatchPolicy,
    pub(crate) arrivals:    ArrivalGenerator,
    pub(crate) service_rng: SimRng,
    pub(crate) routing_rng: SimRng,
    pub(crate) in_flight:   HashMap<CustomerId, Customer>,
    pub(crate) stats:       RunStatistics,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// One ready-to-run simulation.
///
/// A `Sim` is consumed by [`run`](Sim::run); build a fresh one (same config,
/// same seed) to reproduce a run exactly.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub(crate) config: RunConfig,
    pub(crate) queue:  EventQueue<Wake>,
    pub(crate) world:  World,
}

impl Sim {
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// The pools as built, all idle.
    pub fn pools(&self) -> &[ResourcePool<CustomerId>] {
        &self.world.pools
    }

    pub fn dispatch(&self) -> DispatchPolicy {
        self.world.dispatch
    }

    /// Run from time zero to the horizon and return the statistics.
    ///
    /// Customers still waiting or in service at the horizon are excluded
    /// from the completed set and counted as dropped.
    #[instrument(skip_all, fields(topology = self.config.policy.topology(), seed = self.config.seed))]
    pub fn run<O: SimObserver>(self, observer: &mut O) -> SimResult<RunStatistics> {
        let Sim { config, mut queue, mut world } = self;
        info!(
            horizon = config.horizon,
            arrival_rate = config.rates.arrival_rate,
            pools = world.pools.len(),
            "run started"
        );

        let first = world.arrivals.next_gap();
        queue.schedule(first, Wake::WaitingArrival)?;

        let outcome = queue.run_until(SimTime(config.horizon), |queue, wake| {
            world.resume(queue, wake, &mut *observer)
        })?;

        let stats = world.finish(outcome);
        observer.on_run_end(&stats);
        info!(
            completed = stats.completed(),
            dropped = stats.dropped(),
            events = stats.events_executed(),
            mean_wait = stats.mean_wait().ok(),
            "run finished"
        );
        Ok(stats)
    }
}

impl World {
    fn resume<O: SimObserver>(
        &mut self,
        queue:    &mut EventQueue<Wake>,
        wake:     Wake,
        observer: &mut O,
    ) -> SimResult<()> {
        match wake {
            Wake::WaitingArrival => self.on_arrival(queue, observer),
            Wake::WaitingResource(id) => self.on_grant(queue, id, observer),
            Wake::WaitingServiceEnd(id) => self.on_service_end(queue, id, observer),
        }
    }

    /// `Arrived → Queued`, and keep the arrival process going.
    fn on_arrival<O: SimObserver>(
        &mut self,
        queue:    &mut EventQueue<Wake>,
        observer: &mut O,
    ) -> SimResult<()> {
        let now = queue.now();
        let id = self.arrivals.spawn();
        let (pool_id, class) = self.dispatch.select_pool(&self.pools, &mut self.routing_rng);

        let mut customer = Customer::new(id, now, pool_id, class);
        customer.enqueue();

        let pool = pool_mut(&mut self.pools, pool_id)?;
        match pool.request(id) {
            RequestOutcome::Granted => {
                queue.schedule(0.0, Wake::WaitingResource(id))?;
                trace!(%id, %class, pool = %pool_id, %now, "arrived, teller free");
            }
            RequestOutcome::Queued { position } => {
                trace!(%id, %class, pool = %pool_id, %now, position, "arrived, queued");
            }
        }
        observer.on_arrival(&customer, pool);
        self.in_flight.insert(id, customer);

        let gap = self.arrivals.next_gap();
        queue.schedule(gap, Wake::WaitingArrival)?;
        Ok(())
    }

    /// `Queued → InService`.
    fn on_grant<O: SimObserver>(
        &mut self,
        queue:    &mut EventQueue<Wake>,
        id:       CustomerId,
        observer: &mut O,
    ) -> SimResult<()> {
        let now = queue.now();
        let customer = self.in_flight.get_mut(&id).ok_or(SimError::UnknownCustomer(id))?;
        let wait = customer.start_service(now);

        let pool = pool_ref(&self.pools, customer.pool)?;
        self.stats.record_queue_sample(pool.id(), pool.queue_len());

        let service = self
            .service
            .get(pool.id().index())
            .ok_or(SimError::UnknownPool(pool.id()))?;
        let duration = service.sample(&mut self.service_rng);
        queue.schedule(duration, Wake::WaitingServiceEnd(id))?;

        trace!(%id, pool = %pool.id(), %now, wait, duration, "service started");
        observer.on_service_start(customer, pool);
        Ok(())
    }

    /// `InService → Departed`, handing the teller to the head of the line.
    fn on_service_end<O: SimObserver>(
        &mut self,
        queue:    &mut EventQueue<Wake>,
        id:       CustomerId,
        observer: &mut O,
    ) -> SimResult<()> {
        let now = queue.now();
        let mut customer = self.in_flight.remove(&id).ok_or(SimError::UnknownCustomer(id))?;

        let pool = pool_mut(&mut self.pools, customer.pool)?;
        if let Some(next) = pool.release()? {
            queue.schedule(0.0, Wake::WaitingResource(next))?;
        }

        let done: CompletedCustomer = customer.depart(now);
        trace!(%id, pool = %done.pool, %now, system_time = done.system_time, "departed");
        observer.on_departure(&done, pool);
        self.stats.record_departure(done);
        Ok(())
    }

    /// Close the books at the horizon.
    fn finish(mut self, outcome: UntilOutcome) -> RunStatistics {
        let (mut waiting, mut in_service) = (0u64, 0u64);
        for customer in self.in_flight.values() {
            match customer.phase() {
                CustomerPhase::InService => in_service += 1,
                CustomerPhase::Arrived | CustomerPhase::Queued => waiting += 1,
                CustomerPhase::Departed => {}
            }
        }
        debug!(
            arrived = self.arrivals.spawned(),
            dropped_waiting = waiting,
            dropped_in_service = in_service,
            discarded_events = outcome.discarded,
            "horizon reached"
        );
        self.stats.finish(self.arrivals.spawned(), waiting, in_service, outcome);
        self.stats
    }
}

fn pool_ref(
    pools: &[ResourcePool<CustomerId>],
    id:    PoolId,
) -> SimResult<&ResourcePool<CustomerId>> {
    pools.get(id.index()).ok_or(SimError::UnknownPool(id))
}

fn pool_mut(
    pools: &mut [ResourcePool<CustomerId>],
    id:    PoolId,
) -> SimResult<&mut ResourcePool<CustomerId>> {
    pools.get_mut(id.index()).ok_or(SimError::UnknownPool(id))
}
