use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Fund-wide configuration, one per account scope.
///
/// Changing it never retroactively alters existing loans (which snapshot the
/// rate at creation) or penalties already recorded on past periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundSettings {
    pub user_id: String,
    /// Monthly interest rate applied to new loans, in percent.
    pub interest_rate: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub enable_reminders: bool,
}

impl FundSettings {
    /// Whole months from `from` until the fund end date, floored at zero.
    /// New loans may not run longer than this.
    pub fn months_remaining(&self, from: NaiveDate) -> u32 {
        let months = (self.end_date.year() - from.year()) * 12
            + (self.end_date.month() as i32 - from.month() as i32);
        months.max(0) as u32
    }

    /// Total calendar months the fund spans, inclusive of both boundary months.
    pub fn total_fund_months(&self) -> u32 {
        let months = (self.end_date.year() - self.start_date.year()) * 12
            + (self.end_date.month() as i32 - self.start_date.month() as i32)
            + 1;
        months.max(0) as u32
    }
}

/// Input model for updating fund settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundSettingsUpdate {
    pub interest_rate: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub enable_reminders: bool,
}

impl FundSettingsUpdate {
    /// Validates the settings update data
    pub fn validate(&self) -> Result<()> {
        if self.interest_rate < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Interest rate cannot be negative".to_string(),
            )
            .into());
        }
        if self.start_date > self.end_date {
            return Err(ValidationError::StartAfterEnd(self.start_date, self.end_date).into());
        }
        Ok(())
    }
}
