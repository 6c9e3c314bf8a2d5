use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;
use dashmap::DashMap;
use log::debug;

use crate::context::SessionContext;
use crate::errors::Result;
use crate::ledger::LedgerService;
use crate::savers::{load_scoped_saver, SaverRepositoryTrait};
use crate::settings::SettingsRepositoryTrait;

use super::amortization_calculator::{quote, LoanQuote};
use super::eligibility::{check_eligibility, LoanEligibility};
use super::loans_errors::LoanError;
use super::loans_model::{Loan, LoanStatus, NewLoan};

/// Service for loan quoting, creation, and repayment
pub struct LoanService {
    saver_repo: Arc<dyn SaverRepositoryTrait>,
    settings_repo: Arc<dyn SettingsRepositoryTrait>,
    ledger: LedgerService,
    /// One mutual-exclusion scope per saver: concurrent loan creation for the
    /// same saver must re-check available funds inside the lock.
    creation_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl LoanService {
    pub fn new(
        saver_repo: Arc<dyn SaverRepositoryTrait>,
        settings_repo: Arc<dyn SettingsRepositoryTrait>,
    ) -> Self {
        let ledger = LedgerService::new(saver_repo.clone());
        LoanService {
            saver_repo,
            settings_repo,
            ledger,
            creation_locks: DashMap::new(),
        }
    }

    /// Eligibility verdict for a saver at the given instant.
    pub fn check_eligibility(
        &self,
        ctx: &SessionContext,
        saver_id: &str,
        now: NaiveDateTime,
    ) -> Result<LoanEligibility> {
        let saver = load_scoped_saver(self.saver_repo.as_ref(), ctx, saver_id)?;
        let settings = self.settings_repo.get_settings(&ctx.user_id)?;
        Ok(check_eligibility(&saver.periods, &settings, now))
    }

    /// Amortization preview at the current fund rate. No mutation.
    pub fn preview_loan(&self, ctx: &SessionContext, new_loan: &NewLoan) -> Result<LoanQuote> {
        let settings = self.settings_repo.get_settings(&ctx.user_id)?;
        quote(
            new_loan.principal,
            settings.interest_rate,
            new_loan.duration_months,
        )
    }

    /// Creates a loan after re-validating every guard inside the saver's
    /// exclusive section: eligibility, fund horizon, and available funds.
    /// The funds figure is recomputed fresh; a caller-cached value is never
    /// trusted.
    pub fn create_loan(
        &self,
        ctx: &SessionContext,
        saver_id: &str,
        new_loan: &NewLoan,
        now: NaiveDateTime,
    ) -> Result<Loan> {
        let settings = self.settings_repo.get_settings(&ctx.user_id)?;
        let quote = quote(
            new_loan.principal,
            settings.interest_rate,
            new_loan.duration_months,
        )?;

        let lock = self
            .creation_locks
            .entry(saver_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let saver = load_scoped_saver(self.saver_repo.as_ref(), ctx, saver_id)?;

        let eligibility = check_eligibility(&saver.periods, &settings, now);
        if let Some(reason) = eligibility.reason {
            return Err(LoanError::Ineligible(reason.to_string()).into());
        }

        let months_remaining = settings.months_remaining(now.date());
        if new_loan.duration_months > months_remaining {
            return Err(LoanError::ExceedsFundHorizon {
                duration: new_loan.duration_months,
                months_remaining,
            }
            .into());
        }

        let available = self.ledger.available_funds(ctx)?;
        if quote.principal > available {
            return Err(LoanError::InsufficientFunds {
                requested: quote.principal,
                available,
            }
            .into());
        }

        debug!(
            "Creating loan of {} over {} months for saver {} at {}%",
            quote.principal, quote.duration_months, saver_id, quote.interest_rate
        );
        self.saver_repo
            .insert_loan(&Loan::from_quote(&saver.id, &quote, now.date()))
    }

    /// Records one scheduled payment. The counter is monotonic and the status
    /// flips to paid exactly when it reaches the loan duration.
    pub fn record_payment(&self, ctx: &SessionContext, loan_id: &str) -> Result<Loan> {
        let mut loan = self.saver_repo.get_loan(loan_id)?;
        load_scoped_saver(self.saver_repo.as_ref(), ctx, &loan.saver_id)?;

        if loan.status == LoanStatus::Paid || loan.payments_made >= loan.duration_months {
            return Err(LoanError::AlreadyPaid.into());
        }

        loan.payments_made += 1;
        if loan.payments_made == loan.duration_months {
            loan.status = LoanStatus::Paid;
            debug!("Loan {} fully repaid", loan.id);
        }
        self.saver_repo.update_loan(&loan)
    }
}
