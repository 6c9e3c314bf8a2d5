use chrono::NaiveDateTime;
use serde::Serialize;

use super::period_schedule::{month_start_of, PeriodSchedule};
use super::periods_model::{Quincena, SavingsPeriod};

/// Lifecycle of a single quincena track. `Paid` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackStatus {
    /// The period's month has not started relative to the evaluation instant.
    Future,
    /// Payable, deadline not yet passed.
    Open,
    /// Deadline passed and still unpaid.
    Late,
    Paid,
}

/// Derived status of a period at a single evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStatus {
    pub q1: TrackStatus,
    pub q2: TrackStatus,
    pub locked: bool,
}

/// A period is locked when its persisted flag is set or its chronological
/// predecessor is not yet fully settled.
pub fn is_locked(period: &SavingsPeriod, predecessor: Option<&SavingsPeriod>) -> bool {
    period.is_locked || predecessor.map_or(false, |prev| !prev.is_settled())
}

fn track_status(
    period: &SavingsPeriod,
    quincena: Quincena,
    schedule: &PeriodSchedule,
    now: NaiveDateTime,
) -> TrackStatus {
    if period.due_paid(quincena) {
        return TrackStatus::Paid;
    }
    // Month-granular comparison: a period is never late before its own month
    // has begun, regardless of the day within the current month.
    if schedule.month_start > month_start_of(now) {
        return TrackStatus::Future;
    }
    if !schedule.within_fund_range {
        return TrackStatus::Open;
    }
    let deadline = match quincena {
        Quincena::Q1 => schedule.q1_deadline,
        Quincena::Q2 => schedule.q2_deadline,
    };
    if now > deadline {
        TrackStatus::Late
    } else {
        TrackStatus::Open
    }
}

/// Evaluates both tracks and the lock state at the given instant.
pub fn evaluate_period(
    period: &SavingsPeriod,
    predecessor: Option<&SavingsPeriod>,
    schedule: &PeriodSchedule,
    now: NaiveDateTime,
) -> PeriodStatus {
    PeriodStatus {
        q1: track_status(period, Quincena::Q1, schedule, now),
        q2: track_status(period, Quincena::Q2, schedule, now),
        locked: is_locked(period, predecessor),
    }
}
