use rust_decimal::Decimal;
use thiserror::Error;

/// Custom error type for loan-related operations
#[derive(Debug, Error)]
pub enum LoanError {
    #[error("Saver is not eligible for a loan: {0}")]
    Ineligible(String),

    #[error("Requested {requested} exceeds available funds of {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("A {duration}-month loan runs past the fund close; {months_remaining} months remain")]
    ExceedsFundHorizon {
        duration: u32,
        months_remaining: u32,
    },

    #[error("Loan is already fully paid")]
    AlreadyPaid,

    #[error("Loan not found: {0}")]
    NotFound(String),
}
