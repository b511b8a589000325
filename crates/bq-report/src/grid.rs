//! Parameter grids.
//!
//! A grid is a set of value lists; its points are the cartesian product,
//! expanded in nested-loop order (first list outermost).  Each point becomes
//! one [`RunConfig`] whose seed is `base_seed + point index`, so a grid is
//! reproducible point by point and no two points share a random stream.
//!
//! The `*_default` constructors reproduce the bank experiments: an 8-hour
//! day (480 minutes) with the rate lists below.
//!
//! | Grid                 | Servers            | λ                 | μ                                   | p_express |
//! |----------------------|--------------------|-------------------|-------------------------------------|-----------|
//! | single / n_queues    | 2, 3, 4            | 1/5, 1/4, 1/3     | 1/4, 1/3, 1/2                       | -         |
//! | express_regular      | E 1, 2 × R 2, 3    | 1/4, 1/3          | E 1/2, 1/1.5 × R 1/4, 1/3           | 0.3, 0.5  |

use bq_core::{PolicyConfig, RateConfig, RunConfig};
use serde::{Deserialize, Serialize};

use crate::{ReportError, ReportResult};

/// Length of the simulated banking day, in minutes.
pub const DEFAULT_HORIZON: f64 = 480.0;
pub const DEFAULT_BASE_SEED: u64 = 42;

/// Which topology a [`UniformGrid`] builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniformTopology {
    Single,
    NQueues,
}

/// Grid over a topology whose pools share one service rate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniformGrid {
    pub topology:      UniformTopology,
    /// Tellers (single) or queues (n_queues).
    pub servers:       Vec<u32>,
    pub arrival_rates: Vec<f64>,
    pub service_rates: Vec<f64>,
}

/// Grid over the express/regular topology.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpressRegularGrid {
    pub express_servers: Vec<u32>,
    pub regular_servers: Vec<u32>,
    pub arrival_rates:   Vec<f64>,
    pub express_rates:   Vec<f64>,
    pub regular_rates:   Vec<f64>,
    pub prob_express:    Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridKind {
    Uniform(UniformGrid),
    ExpressRegular(ExpressRegularGrid),
}

/// A grid plus the horizon and base seed shared by all its points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterGrid {
    pub kind:      GridKind,
    pub horizon:   f64,
    pub base_seed: u64,
}

impl ParameterGrid {
    pub fn new(kind: GridKind) -> Self {
        Self { kind, horizon: DEFAULT_HORIZON, base_seed: DEFAULT_BASE_SEED }
    }

    pub fn with_horizon(mut self, horizon: f64) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_base_seed(mut self, base_seed: u64) -> Self {
        self.base_seed = base_seed;
        self
    }

    /// Shared-pool experiment lists.
    pub fn single_default() -> Self {
        Self::new(GridKind::Uniform(UniformGrid::default_lists(UniformTopology::Single)))
    }

    /// Multi-queue experiment lists.
    pub fn n_queues_default() -> Self {
        Self::new(GridKind::Uniform(UniformGrid::default_lists(UniformTopology::NQueues)))
    }

    /// Express/regular experiment lists.
    pub fn express_regular_default() -> Self {
        Self::new(GridKind::ExpressRegular(ExpressRegularGrid {
            express_servers: vec![1, 2],
            regular_servers: vec![2, 3],
            arrival_rates:   vec![1.0 / 4.0, 1.0 / 3.0],
            express_rates:   vec![1.0 / 2.0, 1.0 / 1.5],
            regular_rates:   vec![1.0 / 4.0, 1.0 / 3.0],
            prob_express:    vec![0.3, 0.5],
        }))
    }

    /// Number of points in the grid.
    pub fn len(&self) -> usize {
        match &self.kind {
            GridKind::Uniform(g) => g.servers.len() * g.arrival_rates.len() * g.service_rates.len(),
            GridKind::ExpressRegular(g) => {
                g.express_servers.len()
                    * g.regular_servers.len()
                    * g.arrival_rates.len()
                    * g.express_rates.len()
                    * g.regular_rates.len()
                    * g.prob_express.len()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expand into one `RunConfig` per point, in nested-loop order.
    ///
    /// Fails if any list is empty.  Values are not validated here; the
    /// simulation builder rejects bad points when they run.
    pub fn points(&self) -> ReportResult<Vec<RunConfig>> {
        let mut points = Vec::with_capacity(self.len());
        match &self.kind {
            GridKind::Uniform(g) => {
                non_empty(&g.servers, "servers")?;
                non_empty(&g.arrival_rates, "arrival rates")?;
                non_empty(&g.service_rates, "service rates")?;
                for &servers in &g.servers {
                    for &lambda in &g.arrival_rates {
                        for &mu in &g.service_rates {
                            let policy = match g.topology {
                                UniformTopology::Single => PolicyConfig::Single { servers },
                                UniformTopology::NQueues => {
                                    PolicyConfig::ShortestQueue { queues: servers }
                                }
                            };
                            points.push((policy, RateConfig::uniform(lambda, mu)));
                        }
                    }
                }
            }
            GridKind::ExpressRegular(g) => {
                non_empty(&g.express_servers, "express servers")?;
                non_empty(&g.regular_servers, "regular servers")?;
                non_empty(&g.arrival_rates, "arrival rates")?;
                non_empty(&g.express_rates, "express rates")?;
                non_empty(&g.regular_rates, "regular rates")?;
                non_empty(&g.prob_express, "prob_express")?;
                for &express_servers in &g.express_servers {
                    for &regular_servers in &g.regular_servers {
                        for &lambda in &g.arrival_rates {
                            for &mu_e in &g.express_rates {
                                for &mu_r in &g.regular_rates {
                                    for &prob_express in &g.prob_express {
                                        points.push((
                                            PolicyConfig::ExpressRegular {
                                                express_servers,
                                                regular_servers,
                                                prob_express,
                                            },
                                            RateConfig::express_regular(lambda, mu_e, mu_r),
                                        ));
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        Ok(points
            .into_iter()
            .enumerate()
            .map(|(i, (policy, rates))| {
                RunConfig::new(policy, rates, self.horizon, self.base_seed.wrapping_add(i as u64))
            })
            .collect())
    }
}

impl UniformGrid {
    fn default_lists(topology: UniformTopology) -> Self {
        Self {
            topology,
            servers:       vec![2, 3, 4],
            arrival_rates: vec![1.0 / 5.0, 1.0 / 4.0, 1.0 / 3.0],
            service_rates: vec![1.0 / 4.0, 1.0 / 3.0, 1.0 / 2.0],
        }
    }
}

fn non_empty<T>(values: &[T], what: &'static str) -> ReportResult<()> {
    if values.is_empty() { Err(ReportError::EmptyGrid(what)) } else { Ok(()) }
}
