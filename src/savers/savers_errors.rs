use thiserror::Error;

/// Custom error type for saver-related operations
#[derive(Debug, Error)]
pub enum SaverError {
    #[error("Saver not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
