//! Per-run statistics.
//!
//! The runner appends to a `RunStatistics` while events execute and hands it
//! back, finished, when the horizon is reached.  From then on it is read-only;
//! every query is a pure function of what was recorded, so asking twice gives
//! the same answer.
//!
//! # Recording points
//!
//! | When                  | What is recorded                                  |
//! |-----------------------|---------------------------------------------------|
//! | customer enters service | waiting-line length of its pool                 |
//! | customer departs      | the [`CompletedCustomer`] (wait, system time, class) |
//! | horizon reached       | arrivals, dropped-waiting, dropped-in-service     |

use std::collections::{BTreeMap, BTreeSet};

use bq_core::{PoolId, PoolSpec};
use bq_schedule::UntilOutcome;

use crate::{ClassLabel, CompletedCustomer, StatsError, StatsResult};

/// Everything one run observed.
#[derive(Clone, Debug, PartialEq)]
pub struct RunStatistics {
    horizon:       f64,
    arrival_rate:  f64,
    pools:         Vec<PoolSpec>,
    /// Departed customers, in completion order.
    completed:     Vec<CompletedCustomer>,
    /// Queue-length samples per pool.  Every pool of the run has an entry,
    /// possibly empty.
    queue_samples: BTreeMap<PoolId, Vec<usize>>,

    arrived:            u64,
    dropped_waiting:    u64,
    dropped_in_service: u64,
    events_executed:    u64,
    events_discarded:   usize,
}

impl RunStatistics {
    pub(crate) fn new(horizon: f64, arrival_rate: f64, pools: Vec<PoolSpec>) -> Self {
        let queue_samples = pools.iter().map(|p| (p.id, Vec::new())).collect();
        Self {
            horizon,
            arrival_rate,
            pools,
            completed: Vec::new(),
            queue_samples,
            arrived: 0,
            dropped_waiting: 0,
            dropped_in_service: 0,
            events_executed: 0,
            events_discarded: 0,
        }
    }

    // ── Recording (runner only) ───────────────────────────────────────────

    pub(crate) fn record_queue_sample(&mut self, pool: PoolId, len: usize) {
        self.queue_samples.entry(pool).or_default().push(len);
    }

    pub(crate) fn record_departure(&mut self, customer: CompletedCustomer) {
        self.completed.push(customer);
    }

    pub(crate) fn finish(
        &mut self,
        arrived:            u64,
        dropped_waiting:    u64,
        dropped_in_service: u64,
        outcome:            UntilOutcome,
    ) {
        self.arrived = arrived;
        self.dropped_waiting = dropped_waiting;
        self.dropped_in_service = dropped_in_service;
        self.events_executed = outcome.executed;
        self.events_discarded = outcome.discarded;
    }

    // ── Aggregate queries ─────────────────────────────────────────────────

    /// Mean time from arrival to start of service, over completed customers.
    pub fn mean_wait(&self) -> StatsResult<f64> {
        mean(self.completed.iter().map(|c| c.wait_time), "mean wait")
    }

    /// Mean time from arrival to departure, over completed customers.
    pub fn mean_system_time(&self) -> StatsResult<f64> {
        mean(self.completed.iter().map(|c| c.system_time), "mean system time")
    }

    /// Completed customers per unit of simulated time.
    ///
    /// Undefined when nobody completed (this covers a zero horizon).
    pub fn throughput(&self) -> StatsResult<f64> {
        if self.completed.is_empty() || self.horizon <= 0.0 {
            return Err(StatsError::EmptySample { statistic: "throughput" });
        }
        Ok(self.completed.len() as f64 / self.horizon)
    }

    /// Mean waiting-line length of `pool`, sampled at each service start.
    pub fn mean_queue_len(&self, pool: PoolId) -> StatsResult<f64> {
        let samples = self.queue_samples.get(&pool).ok_or(StatsError::UnknownPool(pool))?;
        mean(samples.iter().map(|&n| n as f64), "mean queue length")
    }

    /// Mean of the per-pool mean queue lengths.
    ///
    /// Pools that never started a service are left out.
    pub fn mean_queue_len_overall(&self) -> StatsResult<f64> {
        let per_pool = self
            .queue_samples
            .keys()
            .filter_map(|&id| self.mean_queue_len(id).ok());
        mean(per_pool, "overall mean queue length")
    }

    /// Mean wait of completed customers routed as `class`.
    pub fn mean_wait_for(&self, class: ClassLabel) -> StatsResult<f64> {
        mean(
            self.completed.iter().filter(|c| c.class == class).map(|c| c.wait_time),
            "mean wait for class",
        )
    }

    /// Offered load over aggregate capacity, `λ / Σ cᵢ·μᵢ`.
    ///
    /// A configuration property, independent of what the run observed.
    /// Values above 1 mean the configuration is unstable.
    pub fn utilization(&self) -> f64 {
        let capacity: f64 = self
            .pools
            .iter()
            .map(|p| f64::from(p.capacity) * p.service_rate)
            .sum();
        self.arrival_rate / capacity
    }

    /// Class labels that completed at least one customer.
    pub fn classes(&self) -> BTreeSet<ClassLabel> {
        self.completed.iter().map(|c| c.class).collect()
    }

    // ── Counts and raw data ───────────────────────────────────────────────

    /// Customers that departed before the horizon.
    pub fn completed(&self) -> usize {
        self.completed.len()
    }

    /// Customers still in the bank at the horizon.
    pub fn dropped(&self) -> u64 {
        self.dropped_waiting + self.dropped_in_service
    }

    /// Dropped customers that never reached a teller.
    pub fn dropped_waiting(&self) -> u64 {
        self.dropped_waiting
    }

    /// Dropped customers that were mid-service.
    pub fn dropped_in_service(&self) -> u64 {
        self.dropped_in_service
    }

    /// Customers that arrived before the horizon.
    pub fn arrived(&self) -> u64 {
        self.arrived
    }

    pub fn events_executed(&self) -> u64 {
        self.events_executed
    }

    /// Events still pending at the horizon.
    pub fn events_discarded(&self) -> usize {
        self.events_discarded
    }

    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    pub fn pools(&self) -> &[PoolSpec] {
        &self.pools
    }

    /// Departed customers in completion order.
    pub fn customers(&self) -> &[CompletedCustomer] {
        &self.completed
    }

    pub fn wait_times(&self) -> impl Iterator<Item = f64> + '_ {
        self.completed.iter().map(|c| c.wait_time)
    }

    pub fn system_times(&self) -> impl Iterator<Item = f64> + '_ {
        self.completed.iter().map(|c| c.system_time)
    }

    pub fn class_labels(&self) -> impl Iterator<Item = ClassLabel> + '_ {
        self.completed.iter().map(|c| c.class)
    }

    /// Raw queue-length samples of `pool`.
    pub fn queue_samples(&self, pool: PoolId) -> StatsResult<&[usize]> {
        self.queue_samples
            .get(&pool)
            .map(Vec::as_slice)
            .ok_or(StatsError::UnknownPool(pool))
    }
}

fn mean(values: impl Iterator<Item = f64>, statistic: &'static str) -> StatsResult<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        Err(StatsError::EmptySample { statistic })
    } else {
        Ok(sum / n as f64)
    }
}
