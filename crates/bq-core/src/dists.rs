//! Exponential sampler for inter-arrival gaps and service durations.

use rand_distr::{Distribution, Exp};

use crate::{CoreError, CoreResult, SimRng};

/// Exponential distribution parameterised by rate (events per time unit).
///
/// Mean of a sample is `1 / rate`.
#[derive(Clone, Copy, Debug)]
pub struct Exponential {
    rate: f64,
    dist: Exp<f64>,
}

impl Exponential {
    /// Build a sampler for `rate`.  Fails unless `rate` is finite and `> 0`.
    pub fn new(rate: f64) -> CoreResult<Self> {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(CoreError::InvalidConfiguration(format!(
                "exponential rate must be finite and positive, got {rate}"
            )));
        }
        let dist = Exp::new(rate).map_err(|e| {
            CoreError::InvalidConfiguration(format!("exponential rate {rate}: {e}"))
        })?;
        Ok(Self { rate, dist })
    }

    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        1.0 / self.rate
    }

    /// Draw one non-negative duration.
    #[inline]
    pub fn sample(&self, rng: &mut SimRng) -> f64 {
        self.dist.sample(rng.source())
    }
}
