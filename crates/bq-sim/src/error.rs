use bq_core::{CoreError, CustomerId, PoolId};
use bq_resource::ResourceError;
use bq_schedule::ScheduleError;
use thiserror::Error;

/// Errors raised while building or running a simulation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Bad rates, capacities, probability, or horizon.  Raised by the
    /// builder before any event exists.
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("scheduling error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("{0} resumed but is not in flight")]
    UnknownCustomer(CustomerId),

    #[error("{0} was routed to but does not exist")]
    UnknownPool(PoolId),
}

pub type SimResult<T> = Result<T, SimError>;

/// Errors from the read-only queries on [`RunStatistics`][crate::RunStatistics].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// The query has no samples to aggregate (e.g. nobody completed before
    /// the horizon).  The value is undefined, not zero.
    #[error("{statistic} is undefined: no samples")]
    EmptySample { statistic: &'static str },

    #[error("{0} does not exist in this run")]
    UnknownPool(PoolId),
}

pub type StatsResult<T> = Result<T, StatsError>;
