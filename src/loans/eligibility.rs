use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::periods::{month_start_of, resolve_schedule, Quincena, SavingsPeriod};
use crate::settings::FundSettings;

/// Why a loan request was denied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum IneligibilityReason {
    /// A nonzero penalty is still unpaid on this track.
    UnpaidPenalty { period: String, quincena: Quincena },
    /// The due for this track was not paid before its deadline.
    OverdueDue { period: String, quincena: Quincena },
}

impl fmt::Display for IneligibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IneligibilityReason::UnpaidPenalty { period, quincena } => {
                write!(f, "unpaid penalty on {} ({})", period, quincena)
            }
            IneligibilityReason::OverdueDue { period, quincena } => {
                write!(f, "overdue due on {} ({})", period, quincena)
            }
        }
    }
}

/// Verdict of the eligibility scan, as a plain value for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanEligibility {
    pub eligible: bool,
    pub reason: Option<IneligibilityReason>,
}

impl LoanEligibility {
    pub fn eligible() -> Self {
        LoanEligibility {
            eligible: true,
            reason: None,
        }
    }

    pub fn ineligible(reason: IneligibilityReason) -> Self {
        LoanEligibility {
            eligible: false,
            reason: Some(reason),
        }
    }
}

/// Scans a saver's full period history for unresolved infractions.
///
/// Periods are visited in chronological order; months that have not started
/// are skipped. The first unpaid nonzero penalty, or unpaid due whose
/// deadline has passed, blocks the request. The scan does not stop at the
/// most recent period, so one unresolved infraction anywhere in history
/// blocks new loans until it is cleared. A single evaluation instant is used
/// for every deadline comparison within the scan.
pub fn check_eligibility(
    periods: &[SavingsPeriod],
    settings: &FundSettings,
    now: NaiveDateTime,
) -> LoanEligibility {
    let current_month_start = month_start_of(now);

    for period in periods {
        let schedule = resolve_schedule(period.month, settings);
        if schedule.month_start > current_month_start {
            continue;
        }

        for quincena in [Quincena::Q1, Quincena::Q2] {
            if period.has_unpaid_penalty(quincena) {
                return LoanEligibility::ineligible(IneligibilityReason::UnpaidPenalty {
                    period: period.label.clone(),
                    quincena,
                });
            }
        }

        // Out-of-range months are never late, so they cannot block on dues.
        if schedule.within_fund_range {
            if !period.q1_paid && now > schedule.q1_deadline {
                return LoanEligibility::ineligible(IneligibilityReason::OverdueDue {
                    period: period.label.clone(),
                    quincena: Quincena::Q1,
                });
            }
            if !period.q2_paid && now > schedule.q2_deadline {
                return LoanEligibility::ineligible(IneligibilityReason::OverdueDue {
                    period: period.label.clone(),
                    quincena: Quincena::Q2,
                });
            }
        }
    }

    LoanEligibility::eligible()
}
