use std::sync::Arc;

use rust_decimal::Decimal;

use crate::constants::DUES_PER_PERIOD;
use crate::context::SessionContext;
use crate::errors::Result;
use crate::savers::{Saver, SaverRepositoryTrait};

use super::ledger_model::FundReport;

/// Fund-wide cash aggregator.
///
/// Every figure is a stateless recomputation over the entire saver/loan
/// collection; no incremental running balance is trusted. O(total periods +
/// loans) per call, which the bounded fund horizon keeps small.
pub struct LedgerService {
    saver_repo: Arc<dyn SaverRepositoryTrait>,
}

impl LedgerService {
    pub fn new(saver_repo: Arc<dyn SaverRepositoryTrait>) -> Self {
        LedgerService { saver_repo }
    }

    /// Current disposable cash for the fund.
    pub fn available_funds(&self, ctx: &SessionContext) -> Result<Decimal> {
        let savers = self.saver_repo.list_savers(&ctx.user_id)?;
        Ok(available_funds_for(&savers))
    }

    /// Full report figures for the fund.
    pub fn fund_report(&self, ctx: &SessionContext) -> Result<FundReport> {
        let savers = self.saver_repo.list_savers(&ctx.user_id)?;

        let mut total_savings = Decimal::ZERO;
        let mut total_penalties_collected = Decimal::ZERO;
        let mut expected_monthly_collection = Decimal::ZERO;
        let mut total_interest_earned = Decimal::ZERO;
        let mut active_loans_capital = Decimal::ZERO;
        let mut total_loans_given = Decimal::ZERO;
        let mut total_loan_payments_received = Decimal::ZERO;
        let mut active_loans_count = 0usize;

        for saver in &savers {
            expected_monthly_collection += Decimal::from(DUES_PER_PERIOD) * saver.bi_weekly_amount;

            for period in &saver.periods {
                if period.q1_paid {
                    total_savings += saver.bi_weekly_amount;
                }
                if period.q2_paid {
                    total_savings += saver.bi_weekly_amount;
                }
                if period.q1_penalty_paid {
                    total_penalties_collected += period.q1_penalty;
                }
                if period.q2_penalty_paid {
                    total_penalties_collected += period.q2_penalty;
                }
            }

            for loan in &saver.loans {
                total_loans_given += loan.principal;
                total_loan_payments_received +=
                    loan.monthly_payment * Decimal::from(loan.payments_made);
                total_interest_earned += loan.interest_collected();
                if loan.is_active() {
                    active_loans_capital += loan.principal;
                    active_loans_count += 1;
                }
            }
        }

        Ok(FundReport {
            available_funds: total_savings + total_penalties_collected
                + total_loan_payments_received
                - total_loans_given,
            total_savings,
            expected_monthly_collection,
            total_interest_earned,
            total_penalties_collected,
            active_loans_capital,
            total_loans_given,
            total_loan_payments_received,
            savers_count: savers.len(),
            active_loans_count,
        })
    }
}

/// Nets all cash movement across the given savers:
///
/// ```text
/// inflow  = paid dues + paid penalties + monthly_payment × payments_made
/// outflow = Σ loan principal
/// ```
///
/// Principal leaves available cash at loan creation, independent of repayment
/// progress; repayments are added back as they are recorded.
pub fn available_funds_for(savers: &[Saver]) -> Decimal {
    let mut inflow = Decimal::ZERO;
    let mut outflow = Decimal::ZERO;

    for saver in savers {
        for period in &saver.periods {
            if period.q1_paid {
                inflow += saver.bi_weekly_amount;
            }
            if period.q1_penalty_paid {
                inflow += period.q1_penalty;
            }
            if period.q2_paid {
                inflow += saver.bi_weekly_amount;
            }
            if period.q2_penalty_paid {
                inflow += period.q2_penalty;
            }
        }

        for loan in &saver.loans {
            outflow += loan.principal;
            inflow += loan.monthly_payment * Decimal::from(loan.payments_made);
        }
    }

    inflow - outflow
}
