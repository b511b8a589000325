use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("event delay must be finite and non-negative, got {0}")]
    InvalidDelay(f64),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
