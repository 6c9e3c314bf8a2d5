use rust_decimal::Decimal;
use serde::Serialize;

/// Fund-wide report figures, recomputed from the full saver/loan collection
/// on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundReport {
    /// Net disposable cash: settled inflows minus disbursed principal.
    pub available_funds: Decimal,
    /// Historical sum of paid dues, penalties and repayments excluded.
    pub total_savings: Decimal,
    /// What a full on-time month would collect across all savers.
    pub expected_monthly_collection: Decimal,
    /// Interest portion of the loan payments recorded so far.
    pub total_interest_earned: Decimal,
    pub total_penalties_collected: Decimal,
    /// Principal disbursed to loans still active.
    pub active_loans_capital: Decimal,
    pub total_loans_given: Decimal,
    pub total_loan_payments_received: Decimal,
    pub savers_count: usize,
    pub active_loans_count: usize,
}
