//! Dispatch policies: which pool a new arrival joins.

use bq_core::{PolicyConfig, PoolId, SimRng, EXPRESS_POOL, REGULAR_POOL};
use bq_resource::ResourcePool;

use crate::ClassLabel;

/// Routing strategy, fixed for the whole run.
///
/// Pools are passed in on every call; the policy holds no pool state of its
/// own, only the numbers it was configured with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DispatchPolicy {
    /// Everyone joins pool 0.
    Single,
    /// Join the pool with the shortest waiting line; ties go to the lowest
    /// index.
    ShortestOfN,
    /// Express with probability `prob_express`, regular otherwise.
    ClassSplit { prob_express: f64 },
}

impl DispatchPolicy {
    pub fn from_config(policy: &PolicyConfig) -> Self {
        match *policy {
            PolicyConfig::Single { .. } => DispatchPolicy::Single,
            PolicyConfig::ShortestQueue { .. } => DispatchPolicy::ShortestOfN,
            PolicyConfig::ExpressRegular { prob_express, .. } => {
                DispatchPolicy::ClassSplit { prob_express }
            }
        }
    }

    /// Pick the pool for one arrival.
    ///
    /// Only `ClassSplit` consumes a draw from `rng`.  `pools` must be the
    /// pool set the policy was built for (non-empty; two pools for
    /// `ClassSplit`).
    pub fn select_pool<R>(
        &self,
        pools: &[ResourcePool<R>],
        rng:   &mut SimRng,
    ) -> (PoolId, ClassLabel) {
        match *self {
            DispatchPolicy::Single => (PoolId(0), ClassLabel::Single),

            DispatchPolicy::ShortestOfN => {
                // `min_by_key` keeps the first of equal minima.
                let id = pools
                    .iter()
                    .min_by_key(|p| p.queue_len())
                    .map(|p| p.id())
                    .unwrap_or(PoolId(0));
                (id, ClassLabel::RegularQueueIndex(id.0))
            }

            DispatchPolicy::ClassSplit { prob_express } => {
                if rng.chance(prob_express) {
                    (EXPRESS_POOL, ClassLabel::Express)
                } else {
                    (REGULAR_POOL, ClassLabel::Regular)
                }
            }
        }
    }
}
