#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::loans::amortization_calculator::quote;
    use rust_decimal_macros::dec;

    #[test]
    fn simple_interest_over_three_months() {
        let q = quote(dec!(1000000), dec!(2), 3).unwrap();
        assert_eq!(q.total_interest, dec!(60000));
        assert_eq!(q.total_to_pay, dec!(1060000));
        assert_eq!(q.monthly_payment.round_dp(2), dec!(353333.33));
    }

    #[test]
    fn single_month_loan_pays_everything_at_once() {
        let q = quote(dec!(500000), dec!(5), 1).unwrap();
        assert_eq!(q.total_interest, dec!(25000));
        assert_eq!(q.monthly_payment, dec!(525000));
    }

    #[test]
    fn zero_rate_charges_no_interest() {
        let q = quote(dec!(300000), dec!(0), 6).unwrap();
        assert_eq!(q.total_interest, dec!(0));
        assert_eq!(q.total_to_pay, dec!(300000));
        assert_eq!(q.monthly_payment, dec!(50000));
    }

    #[test]
    fn rejects_non_positive_principal() {
        assert!(matches!(
            quote(dec!(0), dec!(2), 3),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            quote(dec!(-100), dec!(2), 3),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn rejects_zero_duration() {
        assert!(matches!(
            quote(dec!(1000), dec!(2), 0),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn figures_stay_consistent() {
        let q = quote(dec!(750000), dec!(3), 5).unwrap();
        assert_eq!(q.total_to_pay, q.principal + q.total_interest);
        assert_eq!(q.monthly_payment * dec!(5), q.total_to_pay);
    }
}
