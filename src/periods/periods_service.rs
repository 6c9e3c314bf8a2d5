use std::sync::Arc;

use chrono::{Months, NaiveDate, NaiveDateTime};
use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::context::SessionContext;
use crate::errors::{Result, ValidationError};
use crate::savers::{load_scoped_saver, Saver, SaverRepositoryTrait};
use crate::settings::{FundSettings, SettingsRepositoryTrait};

use super::period_schedule::{first_of_month, resolve_schedule};
use super::period_state::{evaluate_period, is_locked, PeriodStatus};
use super::periods_errors::PeriodError;
use super::periods_model::{Quincena, SavingsPeriod};

/// A period together with its derived status at one evaluation instant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodWithStatus {
    pub period: SavingsPeriod,
    pub status: PeriodStatus,
}

/// Result of a due toggle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DueToggleOutcome {
    pub period: SavingsPeriod,
    /// Successor period appended when the toggle settled the saver's last
    /// period and the fund is still open.
    pub generated: Option<SavingsPeriod>,
}

/// Service for period mutations and status evaluation
pub struct PeriodService {
    saver_repo: Arc<dyn SaverRepositoryTrait>,
    settings_repo: Arc<dyn SettingsRepositoryTrait>,
}

impl PeriodService {
    pub fn new(
        saver_repo: Arc<dyn SaverRepositoryTrait>,
        settings_repo: Arc<dyn SettingsRepositoryTrait>,
    ) -> Self {
        PeriodService {
            saver_repo,
            settings_repo,
        }
    }

    /// Derived status of every period of a saver at the given instant.
    pub fn period_statuses(
        &self,
        ctx: &SessionContext,
        saver_id: &str,
        now: NaiveDateTime,
    ) -> Result<Vec<PeriodWithStatus>> {
        let saver = load_scoped_saver(self.saver_repo.as_ref(), ctx, saver_id)?;
        let settings = self.settings_repo.get_settings(&ctx.user_id)?;

        let mut statuses = Vec::with_capacity(saver.periods.len());
        for (idx, period) in saver.periods.iter().enumerate() {
            let predecessor = if idx > 0 { saver.periods.get(idx - 1) } else { None };
            let schedule = resolve_schedule(period.month, &settings);
            statuses.push(PeriodWithStatus {
                status: evaluate_period(period, predecessor, &schedule, now),
                period: period.clone(),
            });
        }
        Ok(statuses)
    }

    /// Flips a due flag. When the toggle settles the chronologically last
    /// period, the next period is generated in the same call.
    pub fn toggle_due(
        &self,
        ctx: &SessionContext,
        saver_id: &str,
        period_id: &str,
        quincena: Quincena,
    ) -> Result<DueToggleOutcome> {
        let mut saver = load_scoped_saver(self.saver_repo.as_ref(), ctx, saver_id)?;
        let settings = self.settings_repo.get_settings(&ctx.user_id)?;
        let idx = self.unlocked_period_index(&saver, period_id)?;

        let mut period = saver.periods[idx].clone();
        match quincena {
            Quincena::Q1 => period.q1_paid = !period.q1_paid,
            Quincena::Q2 => period.q2_paid = !period.q2_paid,
        }
        debug!(
            "Toggling {} due of period {} for saver {}: now paid={}",
            quincena,
            period.label,
            saver_id,
            period.due_paid(quincena)
        );
        let period = self.saver_repo.update_period(&period)?;

        let generated = if period.is_settled() && idx + 1 == saver.periods.len() {
            saver.periods[idx] = period.clone();
            self.append_next_period(&saver, &settings)?
        } else {
            None
        };

        Ok(DueToggleOutcome { period, generated })
    }

    /// Flips a penalty-paid flag. Independent of the due flag; rejected when
    /// no penalty has been assessed on that track.
    pub fn toggle_penalty_paid(
        &self,
        ctx: &SessionContext,
        saver_id: &str,
        period_id: &str,
        quincena: Quincena,
    ) -> Result<SavingsPeriod> {
        let saver = load_scoped_saver(self.saver_repo.as_ref(), ctx, saver_id)?;
        let idx = self.unlocked_period_index(&saver, period_id)?;

        let mut period = saver.periods[idx].clone();
        if period.penalty(quincena).is_zero() {
            return Err(ValidationError::InvalidInput(format!(
                "No penalty assessed on {} ({})",
                period.label, quincena
            ))
            .into());
        }
        match quincena {
            Quincena::Q1 => period.q1_penalty_paid = !period.q1_penalty_paid,
            Quincena::Q2 => period.q2_penalty_paid = !period.q2_penalty_paid,
        }
        self.saver_repo.update_period(&period)
    }

    /// Records an externally computed penalty amount on a track. The engine
    /// consumes penalty values; it never derives them.
    pub fn record_penalty(
        &self,
        ctx: &SessionContext,
        saver_id: &str,
        period_id: &str,
        quincena: Quincena,
        amount: Decimal,
    ) -> Result<SavingsPeriod> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(amount).into());
        }
        let saver = load_scoped_saver(self.saver_repo.as_ref(), ctx, saver_id)?;
        let idx = self.unlocked_period_index(&saver, period_id)?;

        let mut period = saver.periods[idx].clone();
        match quincena {
            Quincena::Q1 => {
                period.q1_penalty = amount;
                period.q1_penalty_paid = false;
            }
            Quincena::Q2 => {
                period.q2_penalty = amount;
                period.q2_penalty_paid = false;
            }
        }
        debug!(
            "Recorded {} penalty of {} on period {} for saver {}",
            quincena, amount, period.label, saver_id
        );
        self.saver_repo.update_period(&period)
    }

    /// Appends the saver's next period, if the prior one is fully settled and
    /// the fund has not closed. Returns `Ok(None)` past the fund end date.
    pub fn generate_next_period(
        &self,
        ctx: &SessionContext,
        saver_id: &str,
    ) -> Result<Option<SavingsPeriod>> {
        let saver = load_scoped_saver(self.saver_repo.as_ref(), ctx, saver_id)?;
        let settings = self.settings_repo.get_settings(&ctx.user_id)?;

        if let Some(last) = saver.periods.last() {
            if !last.is_settled() {
                return Err(ValidationError::InvalidInput(format!(
                    "Period {} is not fully settled",
                    last.label
                ))
                .into());
            }
        }
        self.append_next_period(&saver, &settings)
    }

    fn unlocked_period_index(&self, saver: &Saver, period_id: &str) -> Result<usize> {
        let idx = saver
            .periods
            .iter()
            .position(|p| p.id == period_id)
            .ok_or_else(|| PeriodError::NotFound(period_id.to_string()))?;
        let predecessor = if idx > 0 { saver.periods.get(idx - 1) } else { None };
        if is_locked(&saver.periods[idx], predecessor) {
            return Err(PeriodError::Locked(saver.periods[idx].label.clone()).into());
        }
        Ok(idx)
    }

    fn append_next_period(
        &self,
        saver: &Saver,
        settings: &FundSettings,
    ) -> Result<Option<SavingsPeriod>> {
        let Some(next_month) = next_period_month(saver) else {
            return Ok(None);
        };
        if next_month > settings.end_date {
            debug!(
                "Fund closed ({}); not generating period {} for saver {}",
                settings.end_date, next_month, saver.id
            );
            return Ok(None);
        }
        let period = SavingsPeriod::new(&saver.id, next_month);
        Ok(Some(self.saver_repo.append_period(&period)?))
    }
}

/// Next month for a saver, counted from the start date rather than the last
/// period's date so repeated generation cannot drift.
fn next_period_month(saver: &Saver) -> Option<NaiveDate> {
    first_of_month(saver.start_date).checked_add_months(Months::new(saver.periods.len() as u32))
}
