//! Fluent builder for constructing a [`Sim`].

use std::collections::HashMap;

use bq_core::{CoreResult, Exponential, RunConfig, RunStreams};
use bq_resource::ResourcePool;
use bq_schedule::EventQueue;
use tracing::debug;

use crate::sim::World;
use crate::{ArrivalGenerator, DispatchPolicy, RunStatistics, Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`RunConfig`]: topology, rates, horizon, seed
///
/// # Overrides
///
/// | Method          | Default             |
/// |-----------------|---------------------|
/// | `.seed(s)`      | `config.seed`       |
/// | `.horizon(h)`   | `config.horizon`    |
///
/// # Example
///
/// ```rust,ignore
/// let stats = SimBuilder::new(config)
///     .seed(7)
///     .build()?
///     .run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: RunConfig,
}

impl SimBuilder {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Replace the root seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Replace the horizon.
    pub fn horizon(mut self, horizon: f64) -> Self {
        self.config.horizon = horizon;
        self
    }

    /// Validate the config, build pools, samplers, and RNG streams, and
    /// return a ready-to-run [`Sim`].
    ///
    /// Fails with [`SimError::Config`][crate::SimError::Config] before
    /// anything is scheduled if the config is invalid.
    pub fn build(self) -> SimResult<Sim> {
        let specs = self.config.pool_specs()?;

        let pools: Vec<ResourcePool<_>> = specs
            .iter()
            .map(|spec| ResourcePool::new(spec.id, spec.capacity))
            .collect();
        let service = specs
            .iter()
            .map(|spec| Exponential::new(spec.service_rate))
            .collect::<CoreResult<Vec<_>>>()?;

        let streams = RunStreams::from_seed(self.config.seed);
        let arrivals = ArrivalGenerator::new(self.config.rates.arrival_rate, streams.arrivals)?;

        let dispatch = DispatchPolicy::from_config(&self.config.policy);
        debug!(
            topology = self.config.policy.topology(),
            pools = specs.len(),
            servers = self.config.policy.total_servers(),
            ?dispatch,
            "simulation built"
        );

        let stats = RunStatistics::new(self.config.horizon, self.config.rates.arrival_rate, specs);

        Ok(Sim {
            config: self.config,
            queue:  EventQueue::new(),
            world:  World {
                pools,
                service,
                dispatch,
                arrivals,
                service_rng: streams.service,
                routing_rng: streams.routing,
                in_flight: HashMap::new(),
                stats,
            },
        })
    }
}
