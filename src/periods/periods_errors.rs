use thiserror::Error;

/// Custom error type for period-related operations
#[derive(Debug, Error)]
pub enum PeriodError {
    #[error("Period '{0}' is locked and cannot be modified")]
    Locked(String),
    #[error("Period not found: {0}")]
    NotFound(String),
}
