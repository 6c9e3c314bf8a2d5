use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use crate::constants::DUES_PER_PERIOD;
use crate::context::SessionContext;
use crate::errors::Result;
use crate::periods::{first_of_month, resolve_schedule, SavingsPeriod};
use crate::settings::SettingsRepositoryTrait;

use super::savers_errors::SaverError;
use super::savers_model::{NewSaver, Saver, SaverTotals};
use super::savers_traits::SaverRepositoryTrait;

/// Fetches a saver and enforces the session's ownership scope. A saver owned
/// by another user is reported as not found, never as forbidden.
pub(crate) fn load_scoped_saver(
    repo: &dyn SaverRepositoryTrait,
    ctx: &SessionContext,
    saver_id: &str,
) -> Result<Saver> {
    let saver = repo.get_saver(saver_id)?;
    if saver.user_id != ctx.user_id {
        return Err(SaverError::NotFound(saver_id.to_string()).into());
    }
    Ok(saver)
}

/// Service for managing savers
pub struct SaverService {
    saver_repo: Arc<dyn SaverRepositoryTrait>,
    settings_repo: Arc<dyn SettingsRepositoryTrait>,
}

impl SaverService {
    pub fn new(
        saver_repo: Arc<dyn SaverRepositoryTrait>,
        settings_repo: Arc<dyn SettingsRepositoryTrait>,
    ) -> Self {
        SaverService {
            saver_repo,
            settings_repo,
        }
    }

    /// Creates a saver and seeds its first period when the start month falls
    /// inside the fund range.
    pub fn create_saver(&self, ctx: &SessionContext, new_saver: NewSaver) -> Result<Saver> {
        new_saver.validate()?;
        let settings = self.settings_repo.get_settings(&ctx.user_id)?;

        let mut saver = Saver {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: ctx.user_id.clone(),
            name: new_saver.name,
            bi_weekly_amount: new_saver.bi_weekly_amount,
            start_date: new_saver.start_date,
            periods: Vec::new(),
            loans: Vec::new(),
        };

        let first_month = first_of_month(saver.start_date);
        if resolve_schedule(first_month, &settings).within_fund_range {
            saver.periods.push(SavingsPeriod::new(&saver.id, first_month));
        } else {
            debug!(
                "Saver {} starts {} outside the fund range; no initial period",
                saver.id, first_month
            );
        }

        self.saver_repo.insert_saver(&saver)
    }

    pub fn get_saver(&self, ctx: &SessionContext, saver_id: &str) -> Result<Saver> {
        load_scoped_saver(self.saver_repo.as_ref(), ctx, saver_id)
    }

    pub fn list_savers(&self, ctx: &SessionContext) -> Result<Vec<Saver>> {
        self.saver_repo.list_savers(&ctx.user_id)
    }

    /// Deletes a saver; periods and loans cascade in the repository.
    pub fn delete_saver(&self, ctx: &SessionContext, saver_id: &str) -> Result<usize> {
        load_scoped_saver(self.saver_repo.as_ref(), ctx, saver_id)?;
        self.saver_repo.delete_saver(saver_id)
    }

    /// Summary figures for one saver.
    pub fn saver_totals(&self, ctx: &SessionContext, saver_id: &str) -> Result<SaverTotals> {
        let saver = load_scoped_saver(self.saver_repo.as_ref(), ctx, saver_id)?;
        let settings = self.settings_repo.get_settings(&ctx.user_id)?;

        let mut total_saved = Decimal::ZERO;
        for period in &saver.periods {
            if period.q1_paid {
                total_saved += saver.bi_weekly_amount;
            }
            if period.q2_paid {
                total_saved += saver.bi_weekly_amount;
            }
        }

        let projected_total = Decimal::from(settings.total_fund_months() * DUES_PER_PERIOD)
            * saver.bi_weekly_amount;

        let active_loans: Vec<_> = saver.loans.iter().filter(|l| l.is_active()).collect();
        let outstanding_debt = active_loans
            .iter()
            .map(|l| l.remaining_balance())
            .sum::<Decimal>();

        Ok(SaverTotals {
            total_saved,
            projected_total,
            outstanding_debt,
            active_loans_count: active_loans.len(),
            has_open_issues: saver.periods.iter().any(|p| p.has_open_issues()),
        })
    }
}
