//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so configuration problems surface unchanged at the
//! run entry point.

use thiserror::Error;

/// The error type for `bq-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// A rate, capacity, probability, or horizon is outside its valid range.
    /// Raised before any event is scheduled.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Shorthand result type for `bq-core`.
pub type CoreResult<T> = Result<T, CoreError>;
