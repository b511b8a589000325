//! Run configuration.
//!
//! One [`RunConfig`] fully specifies one run: topology, rates, horizon, and
//! seed.  Nothing in the engine reads process-wide state, so a run is a pure
//! function of its config.
//!
//! Validation happens in [`RunConfig::pool_specs`], which the simulation
//! builder calls before scheduling anything.

use crate::{CoreError, CoreResult, PoolId};

/// Pool index of the express tellers in an [`PolicyConfig::ExpressRegular`] run.
pub const EXPRESS_POOL: PoolId = PoolId(0);
/// Pool index of the regular tellers in an [`PolicyConfig::ExpressRegular`] run.
pub const REGULAR_POOL: PoolId = PoolId(1);

// ── PolicyConfig ──────────────────────────────────────────────────────────────

/// Which pool topology to build and how arrivals are routed across it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "topology", rename_all = "snake_case"))]
pub enum PolicyConfig {
    /// One shared pool of `servers` tellers.
    Single { servers: u32 },

    /// `queues` independent single-teller pools; arrivals join the shortest.
    #[cfg_attr(feature = "serde", serde(rename = "n_queues"))]
    ShortestQueue { queues: u32 },

    /// Two dedicated pools; an arrival is express with probability
    /// `prob_express`, regular otherwise.
    ExpressRegular {
        express_servers: u32,
        regular_servers: u32,
        prob_express:    f64,
    },
}

impl PolicyConfig {
    /// Short topology name used in logs and report rows.
    pub fn topology(&self) -> &'static str {
        match self {
            PolicyConfig::Single { .. } => "single",
            PolicyConfig::ShortestQueue { .. } => "n_queues",
            PolicyConfig::ExpressRegular { .. } => "express_regular",
        }
    }

    /// Total tellers across all pools.
    pub fn total_servers(&self) -> u32 {
        match *self {
            PolicyConfig::Single { servers } => servers,
            PolicyConfig::ShortestQueue { queues } => queues,
            PolicyConfig::ExpressRegular { express_servers, regular_servers, .. } => {
                express_servers.saturating_add(regular_servers)
            }
        }
    }

    /// `prob_express` for class-split runs, `None` otherwise.
    pub fn prob_express(&self) -> Option<f64> {
        match *self {
            PolicyConfig::ExpressRegular { prob_express, .. } => Some(prob_express),
            _ => None,
        }
    }
}

// ── RateConfig ────────────────────────────────────────────────────────────────

/// Arrival rate plus the service rate(s) of the pools.
///
/// | Topology          | `service_rates`                          |
/// |-------------------|------------------------------------------|
/// | `Single`          | exactly one rate                         |
/// | `ShortestQueue`   | one shared rate, or one per queue        |
/// | `ExpressRegular`  | exactly `[express, regular]`             |
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateConfig {
    pub arrival_rate:  f64,
    pub service_rates: Vec<f64>,
}

impl RateConfig {
    /// Same service rate for every pool.
    pub fn uniform(arrival_rate: f64, service_rate: f64) -> Self {
        Self { arrival_rate, service_rates: vec![service_rate] }
    }

    pub fn express_regular(arrival_rate: f64, express_rate: f64, regular_rate: f64) -> Self {
        Self { arrival_rate, service_rates: vec![express_rate, regular_rate] }
    }
}

// ── PoolSpec ──────────────────────────────────────────────────────────────────

/// A validated pool description: what the builder turns into a `ResourcePool`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoolSpec {
    pub id:           PoolId,
    pub capacity:     u32,
    pub service_rate: f64,
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Everything needed for one run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    pub policy:  PolicyConfig,
    pub rates:   RateConfig,
    /// Simulated-time cutoff.  `0` is valid and completes nobody.
    pub horizon: f64,
    /// Root seed.  The same seed always produces identical statistics.
    pub seed:    u64,
}

impl RunConfig {
    pub fn new(policy: PolicyConfig, rates: RateConfig, horizon: f64, seed: u64) -> Self {
        Self { policy, rates, horizon, seed }
    }

    /// Validate the whole config and resolve it into one [`PoolSpec`] per
    /// pool, in `PoolId` order.
    pub fn pool_specs(&self) -> CoreResult<Vec<PoolSpec>> {
        check_rate("arrival rate", self.rates.arrival_rate)?;
        if !(self.horizon.is_finite() && self.horizon >= 0.0) {
            return Err(invalid(format!(
                "horizon must be finite and non-negative, got {}",
                self.horizon
            )));
        }
        for (i, &rate) in self.rates.service_rates.iter().enumerate() {
            check_rate(&format!("service rate #{i}"), rate)?;
        }

        let rates = &self.rates.service_rates;
        match self.policy {
            PolicyConfig::Single { servers } => {
                check_capacity("servers", servers)?;
                expect_rate_count(rates, &[1], "single")?;
                Ok(vec![PoolSpec { id: PoolId(0), capacity: servers, service_rate: rates[0] }])
            }

            PolicyConfig::ShortestQueue { queues } => {
                check_capacity("queues", queues)?;
                let n = usize::try_from(queues)
                    .map_err(|_| invalid(format!("too many queues: {queues}")))?;
                if n > usize::from(u16::MAX) {
                    return Err(invalid(format!("too many queues: {queues}")));
                }
                expect_rate_count(rates, &[1, n], "n_queues")?;
                Ok((0..n)
                    .map(|i| PoolSpec {
                        id:           PoolId(i as u16),
                        capacity:     1,
                        service_rate: if rates.len() == 1 { rates[0] } else { rates[i] },
                    })
                    .collect())
            }

            PolicyConfig::ExpressRegular { express_servers, regular_servers, prob_express } => {
                check_capacity("express servers", express_servers)?;
                check_capacity("regular servers", regular_servers)?;
                if !(0.0..=1.0).contains(&prob_express) {
                    return Err(invalid(format!(
                        "prob_express must lie in [0, 1], got {prob_express}"
                    )));
                }
                expect_rate_count(rates, &[2], "express_regular")?;
                Ok(vec![
                    PoolSpec { id: EXPRESS_POOL, capacity: express_servers, service_rate: rates[0] },
                    PoolSpec { id: REGULAR_POOL, capacity: regular_servers, service_rate: rates[1] },
                ])
            }
        }
    }

    /// Shorthand for `pool_specs().map(|_| ())`.
    pub fn validate(&self) -> CoreResult<()> {
        self.pool_specs().map(|_| ())
    }
}

// ── Validation helpers ────────────────────────────────────────────────────────

fn invalid(msg: String) -> CoreError {
    CoreError::InvalidConfiguration(msg)
}

fn check_rate(what: &str, rate: f64) -> CoreResult<()> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{what} must be finite and positive, got {rate}")))
    }
}

fn check_capacity(what: &str, n: u32) -> CoreResult<()> {
    if n == 0 {
        Err(invalid(format!("{what} must be at least 1")))
    } else {
        Ok(())
    }
}

fn expect_rate_count(rates: &[f64], allowed: &[usize], topology: &str) -> CoreResult<()> {
    if allowed.contains(&rates.len()) {
        Ok(())
    } else {
        Err(invalid(format!(
            "{topology} topology expects {allowed:?} service rate(s), got {}",
            rates.len()
        )))
    }
}
