use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::loans::LoanError;
use crate::periods::PeriodError;
use crate::savers::SaverError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the fund engine
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Period operation failed: {0}")]
    Period(#[from] PeriodError),

    #[error("Loan operation failed: {0}")]
    Loan(#[from] LoanError),

    #[error("Saver operation failed: {0}")]
    Saver(#[from] SaverError),

    #[error("Settings operation failed: {0}")]
    Settings(String),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("Duration must be at least one month")]
    NonPositiveDuration,

    #[error("Fund start date {0} is after end date {1}")]
    StartAfterEnd(NaiveDate, NaiveDate),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}
