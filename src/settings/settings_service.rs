use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::constants::{Q1_DEADLINE_DAY, Q2_DEADLINE_DAY};
use crate::context::SessionContext;
use crate::errors::Result;

use super::settings_model::{FundSettings, FundSettingsUpdate};
use super::settings_traits::SettingsRepositoryTrait;

/// Service for reading and updating fund settings
pub struct SettingsService {
    settings_repo: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repo: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService { settings_repo }
    }

    pub fn get_settings(&self, ctx: &SessionContext) -> Result<FundSettings> {
        self.settings_repo.get_settings(&ctx.user_id)
    }

    pub fn update_settings(
        &self,
        ctx: &SessionContext,
        update: FundSettingsUpdate,
    ) -> Result<FundSettings> {
        update.validate()?;

        let mut settings = self.settings_repo.get_settings(&ctx.user_id)?;
        debug!(
            "Updating fund settings for user {}: rate {} -> {}",
            ctx.user_id, settings.interest_rate, update.interest_rate
        );

        settings.interest_rate = update.interest_rate;
        settings.start_date = update.start_date;
        settings.end_date = update.end_date;
        settings.enable_reminders = update.enable_reminders;

        self.settings_repo.update_settings(&settings)
    }

    /// Advisory payment-reminder check for a given calendar day.
    ///
    /// Returns the due day (3 or 18) when reminders are enabled and `today`
    /// falls on one. Has no bearing on ledger state.
    pub fn reminder_day(&self, ctx: &SessionContext, today: NaiveDate) -> Result<Option<u32>> {
        let settings = self.settings_repo.get_settings(&ctx.user_id)?;
        if !settings.enable_reminders {
            return Ok(None);
        }
        let day = today.day();
        Ok((day == Q1_DEADLINE_DAY || day == Q2_DEADLINE_DAY).then_some(day))
    }
}
