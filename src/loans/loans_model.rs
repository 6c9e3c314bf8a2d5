use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amortization_calculator::LoanQuote;

/// Loan lifecycle. `Active` flips to `Paid` exactly when the last scheduled
/// payment is recorded; the transition is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Paid,
}

/// A disbursement from the pool to one saver.
///
/// The repayment figures are snapshotted from the quote at creation and never
/// recomputed from later rate changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: String,
    pub saver_id: String,
    pub principal: Decimal,
    pub duration_months: u32,
    /// Rate in percent at creation time, not a live reference to settings.
    pub interest_rate: Decimal,
    pub total_interest: Decimal,
    pub total_to_pay: Decimal,
    pub monthly_payment: Decimal,
    pub start_date: NaiveDate,
    pub status: LoanStatus,
    pub payments_made: u32,
}

impl Loan {
    pub fn from_quote(saver_id: &str, quote: &LoanQuote, start_date: NaiveDate) -> Self {
        Loan {
            id: uuid::Uuid::new_v4().to_string(),
            saver_id: saver_id.to_string(),
            principal: quote.principal,
            duration_months: quote.duration_months,
            interest_rate: quote.interest_rate,
            total_interest: quote.total_interest,
            total_to_pay: quote.total_to_pay,
            monthly_payment: quote.monthly_payment,
            start_date,
            status: LoanStatus::Active,
            payments_made: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }

    /// What is still owed against the repayment schedule.
    pub fn remaining_balance(&self) -> Decimal {
        self.total_to_pay - self.monthly_payment * Decimal::from(self.payments_made)
    }

    /// Interest portion of the payments recorded so far.
    pub fn interest_collected(&self) -> Decimal {
        if self.duration_months == 0 {
            return Decimal::ZERO;
        }
        self.total_interest / Decimal::from(self.duration_months)
            * Decimal::from(self.payments_made)
    }
}

/// Input model for requesting a new loan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLoan {
    pub principal: Decimal,
    pub duration_months: u32,
}
