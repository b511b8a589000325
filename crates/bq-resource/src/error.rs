use bq_core::PoolId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("release on {0} with no server in use")]
    ReleaseIdle(PoolId),
}

pub type ResourceResult<T> = Result<T, ResourceError>;
