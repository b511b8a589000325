//! Error types for bq-report.

use bq_sim::SimError;
use thiserror::Error;

/// Errors that can occur while sweeping or writing results.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("simulation failed: {0}")]
    Sim(#[from] SimError),

    /// A grid with an empty parameter list expands to nothing.
    #[error("parameter grid has no values for {0}")]
    EmptyGrid(&'static str),
}

/// Alias for `Result<T, ReportError>`.
pub type ReportResult<T> = Result<T, ReportError>;
