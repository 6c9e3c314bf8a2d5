use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::constants::{Q1_DEADLINE_DAY, Q2_DEADLINE_DAY};
use crate::settings::FundSettings;

/// Concrete deadline instants for one period month, resolved against the
/// fund's configured date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSchedule {
    /// Midnight on the first day of the period's month.
    pub month_start: NaiveDateTime,
    /// End of day 3 of the month.
    pub q1_deadline: NaiveDateTime,
    /// End of day 18 of the month.
    pub q2_deadline: NaiveDateTime,
    /// False when the month precedes the fund's start month or follows its
    /// end month. Out-of-range periods are never reported late.
    pub within_fund_range: bool,
}

/// First day of the calendar month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("day 1 exists in every month")
}

/// Midnight at the start of the calendar month containing `instant`.
pub fn month_start_of(instant: NaiveDateTime) -> NaiveDateTime {
    first_of_month(instant.date()).and_time(NaiveTime::MIN)
}

fn end_of_day(month: NaiveDate, day: u32) -> NaiveDateTime {
    let date = month.with_day(day).expect("deadline day exists in every month");
    let end = NaiveTime::from_hms_opt(23, 59, 59).expect("23:59:59 is a valid time");
    date.and_time(end)
}

/// Resolves a period's month into its deadline instants and fund-range
/// membership. The range check is month-rounded on both ends.
pub fn resolve_schedule(month: NaiveDate, settings: &FundSettings) -> PeriodSchedule {
    let month = first_of_month(month);
    let within_fund_range = month >= first_of_month(settings.start_date)
        && month <= first_of_month(settings.end_date);

    PeriodSchedule {
        month_start: month.and_time(NaiveTime::MIN),
        q1_deadline: end_of_day(month, Q1_DEADLINE_DAY),
        q2_deadline: end_of_day(month, Q2_DEADLINE_DAY),
        within_fund_range,
    }
}
