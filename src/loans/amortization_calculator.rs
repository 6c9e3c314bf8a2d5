use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::errors::{Result, ValidationError};

/// Fixed repayment figures for a proposed loan.
///
/// Simple, non-compounding interest. The figures are snapshotted onto the
/// loan at creation and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanQuote {
    pub principal: Decimal,
    pub duration_months: u32,
    /// Monthly rate in percent.
    pub interest_rate: Decimal,
    pub total_interest: Decimal,
    pub total_to_pay: Decimal,
    pub monthly_payment: Decimal,
}

/// Computes the repayment figures for a proposed loan:
///
/// ```text
/// total_interest  = principal × (rate / 100) × duration
/// total_to_pay    = principal + total_interest
/// monthly_payment = total_to_pay / duration
/// ```
pub fn quote(principal: Decimal, interest_rate: Decimal, duration_months: u32) -> Result<LoanQuote> {
    if principal <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(principal).into());
    }
    if duration_months == 0 {
        return Err(ValidationError::NonPositiveDuration.into());
    }

    let months = Decimal::from(duration_months);
    let total_interest = principal * (interest_rate / dec!(100)) * months;
    let total_to_pay = principal + total_interest;
    let monthly_payment = total_to_pay / months;

    Ok(LoanQuote {
        principal,
        duration_months,
        interest_rate,
        total_interest,
        total_to_pay,
        monthly_payment,
    })
}
