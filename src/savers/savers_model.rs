use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::loans::Loan;
use crate::periods::SavingsPeriod;

/// A fund participant: pays fixed bi-weekly dues and may borrow against the
/// pool. Owns its period history and loans; scoped to one user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Saver {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub bi_weekly_amount: Decimal,
    pub start_date: NaiveDate,
    /// Chronological, one per calendar month, contiguous.
    pub periods: Vec<SavingsPeriod>,
    pub loans: Vec<Loan>,
}

/// Input model for creating a new saver
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSaver {
    pub name: String,
    pub bi_weekly_amount: Decimal,
    pub start_date: NaiveDate,
}

impl NewSaver {
    /// Validates the new saver data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if self.bi_weekly_amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(self.bi_weekly_amount).into());
        }
        Ok(())
    }
}

/// Summary figures for one saver, derived on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaverTotals {
    /// Dues actually paid across all periods.
    pub total_saved: Decimal,
    /// What the saver would accumulate over the whole fund horizon.
    pub projected_total: Decimal,
    /// Remaining balance across active loans.
    pub outstanding_debt: Decimal,
    pub active_loans_count: usize,
    /// Any nonzero penalty still unpaid on any period.
    pub has_open_issues: bool,
}
