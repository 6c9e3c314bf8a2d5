#[cfg(test)]
mod tests {
    use crate::loans::eligibility::{check_eligibility, IneligibilityReason};
    use crate::periods::{Quincena, SavingsPeriod};
    use crate::settings::FundSettings;
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn instant(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
    }

    fn test_settings() -> FundSettings {
        FundSettings {
            user_id: "user_1".to_string(),
            interest_rate: dec!(2),
            start_date: date(2025, 1, 1),
            end_date: date(2025, 12, 31),
            enable_reminders: false,
        }
    }

    fn settled_period(month: NaiveDate) -> SavingsPeriod {
        let mut period = SavingsPeriod::new("saver_1", month);
        period.q1_paid = true;
        period.q2_paid = true;
        period
    }

    #[test]
    fn clean_history_is_eligible() {
        let periods = vec![
            settled_period(date(2025, 1, 1)),
            settled_period(date(2025, 2, 1)),
        ];
        let verdict = check_eligibility(&periods, &test_settings(), instant(2025, 3, 1, 12));
        assert!(verdict.eligible);
        assert!(verdict.reason.is_none());
    }

    #[test]
    fn old_unpaid_penalty_blocks_even_when_current_period_is_clean() {
        let mut early = settled_period(date(2025, 1, 1));
        early.q2_penalty = dec!(5000);
        early.q2_penalty_paid = false;
        let periods = vec![early, settled_period(date(2025, 2, 1))];

        let verdict = check_eligibility(&periods, &test_settings(), instant(2025, 2, 20, 12));
        assert!(!verdict.eligible);
        assert_eq!(
            verdict.reason,
            Some(IneligibilityReason::UnpaidPenalty {
                period: "January 2025".to_string(),
                quincena: Quincena::Q2,
            })
        );
    }

    #[test]
    fn paid_penalty_does_not_block() {
        let mut early = settled_period(date(2025, 1, 1));
        early.q1_penalty = dec!(2500);
        early.q1_penalty_paid = true;
        let periods = vec![early];

        let verdict = check_eligibility(&periods, &test_settings(), instant(2025, 2, 1, 12));
        assert!(verdict.eligible);
    }

    #[test]
    fn overdue_due_blocks_and_names_the_track() {
        let mut period = SavingsPeriod::new("saver_1", date(2025, 2, 1));
        period.q1_paid = true;
        let periods = vec![period];

        // Past the Q2 deadline (day 18) with q2 unpaid.
        let verdict = check_eligibility(&periods, &test_settings(), instant(2025, 2, 19, 12));
        assert!(!verdict.eligible);
        assert_eq!(
            verdict.reason,
            Some(IneligibilityReason::OverdueDue {
                period: "February 2025".to_string(),
                quincena: Quincena::Q2,
            })
        );
    }

    #[test]
    fn unpaid_due_before_its_deadline_does_not_block() {
        let period = SavingsPeriod::new("saver_1", date(2025, 2, 1));
        let periods = vec![period];

        let verdict = check_eligibility(&periods, &test_settings(), instant(2025, 2, 2, 12));
        assert!(verdict.eligible);
    }

    #[test]
    fn future_months_are_skipped() {
        let periods = vec![
            settled_period(date(2025, 2, 1)),
            // Generated ahead of time, entirely unpaid.
            SavingsPeriod::new("saver_1", date(2025, 3, 1)),
        ];

        let verdict = check_eligibility(&periods, &test_settings(), instant(2025, 2, 25, 12));
        assert!(verdict.eligible);
    }

    #[test]
    fn penalty_outranks_an_overdue_due_in_the_same_period() {
        let mut period = SavingsPeriod::new("saver_1", date(2025, 2, 1));
        period.q1_penalty = dec!(1000);
        let periods = vec![period];

        // Both conditions hold; the penalty is reported first.
        let verdict = check_eligibility(&periods, &test_settings(), instant(2025, 2, 19, 12));
        assert_eq!(
            verdict.reason,
            Some(IneligibilityReason::UnpaidPenalty {
                period: "February 2025".to_string(),
                quincena: Quincena::Q1,
            })
        );
    }

    #[test]
    fn earliest_infraction_is_reported() {
        let mut first = SavingsPeriod::new("saver_1", date(2025, 1, 1));
        first.q1_paid = true;
        let mut second = SavingsPeriod::new("saver_1", date(2025, 2, 1));
        second.q2_penalty = dec!(3000);
        let periods = vec![first, second];

        let verdict = check_eligibility(&periods, &test_settings(), instant(2025, 3, 1, 12));
        assert_eq!(
            verdict.reason,
            Some(IneligibilityReason::OverdueDue {
                period: "January 2025".to_string(),
                quincena: Quincena::Q2,
            })
        );
    }
}
