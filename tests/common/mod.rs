use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;

use fondo_core::errors::{Error, Result};
use fondo_core::ledger::LedgerService;
use fondo_core::loans::{Loan, LoanError, LoanService};
use fondo_core::periods::{PeriodError, PeriodService, SavingsPeriod};
use fondo_core::savers::{Saver, SaverError, SaverRepositoryTrait, SaverService};
use fondo_core::settings::{FundSettings, SettingsRepositoryTrait, SettingsService};
use fondo_core::SessionContext;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
}

// --- In-memory repositories standing in for the persistence collaborator ---

#[derive(Default)]
pub struct InMemorySaverRepository {
    savers: Mutex<Vec<Saver>>,
}

impl InMemorySaverRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> MutexGuard<'_, Vec<Saver>> {
        self.savers.lock().unwrap()
    }
}

impl SaverRepositoryTrait for InMemorySaverRepository {
    fn list_savers(&self, user_id: &str) -> Result<Vec<Saver>> {
        Ok(self
            .store()
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }

    fn get_saver(&self, saver_id: &str) -> Result<Saver> {
        self.store()
            .iter()
            .find(|s| s.id == saver_id)
            .cloned()
            .ok_or_else(|| SaverError::NotFound(saver_id.to_string()).into())
    }

    fn insert_saver(&self, saver: &Saver) -> Result<Saver> {
        self.store().push(saver.clone());
        Ok(saver.clone())
    }

    fn delete_saver(&self, saver_id: &str) -> Result<usize> {
        let mut savers = self.store();
        let before = savers.len();
        savers.retain(|s| s.id != saver_id);
        Ok(before - savers.len())
    }

    fn update_period(&self, period: &SavingsPeriod) -> Result<SavingsPeriod> {
        let mut savers = self.store();
        for saver in savers.iter_mut() {
            if let Some(existing) = saver.periods.iter_mut().find(|p| p.id == period.id) {
                *existing = period.clone();
                return Ok(period.clone());
            }
        }
        Err(PeriodError::NotFound(period.id.clone()).into())
    }

    fn append_period(&self, period: &SavingsPeriod) -> Result<SavingsPeriod> {
        let mut savers = self.store();
        let saver = savers
            .iter_mut()
            .find(|s| s.id == period.saver_id)
            .ok_or_else(|| SaverError::NotFound(period.saver_id.clone()))?;
        saver.periods.push(period.clone());
        Ok(period.clone())
    }

    fn get_loan(&self, loan_id: &str) -> Result<Loan> {
        self.store()
            .iter()
            .flat_map(|s| s.loans.iter())
            .find(|l| l.id == loan_id)
            .cloned()
            .ok_or_else(|| LoanError::NotFound(loan_id.to_string()).into())
    }

    fn insert_loan(&self, loan: &Loan) -> Result<Loan> {
        let mut savers = self.store();
        let saver = savers
            .iter_mut()
            .find(|s| s.id == loan.saver_id)
            .ok_or_else(|| SaverError::NotFound(loan.saver_id.clone()))?;
        saver.loans.push(loan.clone());
        Ok(loan.clone())
    }

    fn update_loan(&self, loan: &Loan) -> Result<Loan> {
        let mut savers = self.store();
        for saver in savers.iter_mut() {
            if let Some(existing) = saver.loans.iter_mut().find(|l| l.id == loan.id) {
                *existing = loan.clone();
                return Ok(loan.clone());
            }
        }
        Err(LoanError::NotFound(loan.id.clone()).into())
    }
}

#[derive(Default)]
pub struct InMemorySettingsRepository {
    settings: Mutex<HashMap<String, FundSettings>>,
}

impl InMemorySettingsRepository {
    pub fn with_settings(settings: FundSettings) -> Self {
        let repo = Self::default();
        repo.settings
            .lock()
            .unwrap()
            .insert(settings.user_id.clone(), settings);
        repo
    }
}

impl SettingsRepositoryTrait for InMemorySettingsRepository {
    fn get_settings(&self, user_id: &str) -> Result<FundSettings> {
        self.settings
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .ok_or_else(|| Error::Settings(format!("No settings for user {}", user_id)))
    }

    fn update_settings(&self, settings: &FundSettings) -> Result<FundSettings> {
        self.settings
            .lock()
            .unwrap()
            .insert(settings.user_id.clone(), settings.clone());
        Ok(settings.clone())
    }
}

// --- Test harness wiring every service against the in-memory repositories ---

pub const TEST_USER: &str = "user_1";

pub fn default_settings() -> FundSettings {
    FundSettings {
        user_id: TEST_USER.to_string(),
        interest_rate: dec!(2),
        start_date: date(2025, 1, 1),
        end_date: date(2025, 6, 30),
        enable_reminders: true,
    }
}

pub struct Harness {
    pub ctx: SessionContext,
    pub savers: SaverService,
    pub periods: PeriodService,
    pub loans: LoanService,
    pub ledger: LedgerService,
    pub settings: SettingsService,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_settings(default_settings())
    }

    pub fn with_settings(settings: FundSettings) -> Self {
        let saver_dyn: Arc<dyn SaverRepositoryTrait> = Arc::new(InMemorySaverRepository::new());
        let settings_dyn: Arc<dyn SettingsRepositoryTrait> =
            Arc::new(InMemorySettingsRepository::with_settings(settings));

        Harness {
            ctx: SessionContext::new(TEST_USER),
            savers: SaverService::new(saver_dyn.clone(), settings_dyn.clone()),
            periods: PeriodService::new(saver_dyn.clone(), settings_dyn.clone()),
            loans: LoanService::new(saver_dyn.clone(), settings_dyn.clone()),
            ledger: LedgerService::new(saver_dyn),
            settings: SettingsService::new(settings_dyn),
        }
    }
}
