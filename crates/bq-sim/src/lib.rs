//! `bq-sim`: event-driven runner for the three bank topologies.
//!
//! # Event loop
//!
//! ```text
//! schedule first arrival gap
//! while next event time ≤ horizon:
//!   WaitingArrival        : spawn customer; policy picks a pool; request();
//!                           granted → resume WaitingResource at now;
//!                           schedule next arrival gap
//!   WaitingResource(c)    : record wait + queue-length sample; sample service;
//!                           schedule WaitingServiceEnd(c)
//!   WaitingServiceEnd(c)  : release(); hand slot to head of line (resume it
//!                           at now); record system time; append to stats
//! drop everything past the horizon; count in-flight customers as dropped
//! ```
//!
//! Only one task runs at any instant, so pools and statistics need no locks.
//! Same-time events run in the order they were scheduled.
//!
//! # Topologies
//!
//! | `PolicyConfig`     | Pools                         | `DispatchPolicy` |
//! |--------------------|-------------------------------|------------------|
//! | `Single`           | one pool, `servers` tellers   | `Single`         |
//! | `ShortestQueue`    | `queues` single-teller pools  | `ShortestOfN`    |
//! | `ExpressRegular`   | express pool + regular pool   | `ClassSplit`     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bq_core::{PolicyConfig, RateConfig, RunConfig};
//!
//! let config = RunConfig::new(
//!     PolicyConfig::Single { servers: 3 },
//!     RateConfig::uniform(0.2, 0.25),
//!     480.0,
//!     42,
//! );
//! let stats = bq_sim::run(&config)?;
//! println!("mean wait: {:.2}", stats.mean_wait()?);
//! ```

pub mod arrival;
pub mod builder;
pub mod customer;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod observer;
pub mod sim;
pub mod stats;


pub use arrival::ArrivalGenerator;
pub use builder::SimBuilder;
pub use customer::{ClassLabel, CompletedCustomer, Customer, CustomerPhase};
pub use dispatch::DispatchPolicy;
pub use error::{SimError, SimResult, StatsError, StatsResult};
pub use logging::init_logging;
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, Wake};
pub use stats::RunStatistics;

use bq_core::RunConfig;

/// Build and run one configuration with no observer.
pub fn run(config: &RunConfig) -> SimResult<RunStatistics> {
    run_with_observer(config, &mut NoopObserver)
}

/// Build and run one configuration, reporting transitions to `observer`.
pub fn run_with_observer<O: SimObserver>(
    config:   &RunConfig,
    observer: &mut O,
) -> SimResult<RunStatistics> {
    SimBuilder::new(config.clone()).build()?.run(observer)
}
