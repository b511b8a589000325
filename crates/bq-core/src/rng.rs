//! Deterministic random streams for one simulation run.
//!
//! # Determinism strategy
//!
//! A run's seed feeds one root generator, which is used for nothing except
//! deriving the three [`RunStreams`], always in the same order:
//!
//! | Stream     | Offset | Draws                         |
//! |------------|--------|-------------------------------|
//! | `arrivals` | 0      | inter-arrival gaps            |
//! | `service`  | 1      | service durations             |
//! | `routing`  | 2      | express/regular class choice  |
//!
//! A stream's seed is the root's next `u64` XOR-ed with the offset times the
//! 64-bit golden-ratio constant.  Because each concern has its own stream,
//! changing `prob_express` or a service rate leaves the arrival sequence of
//! a seed untouched.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Golden-ratio constant, spreads stream offsets across the seed space.
const STREAM_SPREAD: u64 = 0x9e37_79b9_7f4a_7c15;

/// One seeded generator, owned by exactly one consumer.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Split off an independent stream identified by `offset`.
    ///
    /// Splitting the same root with the same offsets, in the same order,
    /// always yields the same streams.
    pub fn split(&mut self, offset: u64) -> SimRng {
        let seed = self.0.r#gen::<u64>() ^ offset.wrapping_mul(STREAM_SPREAD);
        SimRng::new(seed)
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// `true` with probability `p`.  `p <= 0` never fires, `p >= 1` always does.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.uniform() < p
    }

    /// Raw generator for `rand_distr` samplers.
    #[inline]
    pub(crate) fn source(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

/// The per-concern streams of one run.
pub struct RunStreams {
    pub arrivals: SimRng,
    pub service:  SimRng,
    pub routing:  SimRng,
}

impl RunStreams {
    pub fn from_seed(seed: u64) -> Self {
        let mut root = SimRng::new(seed);
        let arrivals = root.split(0);
        let service = root.split(1);
        let routing = root.split(2);
        Self { arrivals, service, routing }
    }
}
