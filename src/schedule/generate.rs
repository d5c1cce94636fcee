use rust_decimal::Decimal;

use crate::config::PlanConfig;
use crate::dates::add_months;
use crate::decimal::Money;
use crate::schedule::Schedule;
use crate::types::{Payment, PaymentKind, PlanParameters};

impl Schedule {
    /// generate a full schedule from form parameters.
    ///
    /// Produces the deposit at the configured reference date, the prepayment
    /// at the first-installment date, then `installment_count` installments
    /// at one-month increments. Each installment amount is rounded
    /// independently, so the installment sum may drift from the remainder by
    /// up to `installment_count` units; the drift is accepted here and only
    /// corrected by manual amount edits.
    ///
    /// Total for any pre-validated form; every payment gets a fresh id.
    pub fn generate(form: &PlanParameters, config: &PlanConfig) -> Schedule {
        let mut payments =
            Vec::with_capacity(form.installment_count as usize + 2);

        payments.push(Payment::new(
            PaymentKind::Deposit,
            config.deposit_date,
            form.deposit,
        ));
        payments.push(Payment::new(
            PaymentKind::Prepayment,
            form.first_installment_date,
            form.prepayment,
        ));

        if form.installment_count > 0 {
            let remaining = config.full_price - form.deposit - form.prepayment;
            let per_installment = Money::from_decimal(
                remaining.as_decimal() / Decimal::from(form.installment_count),
            );

            for offset in 1..=form.installment_count {
                let date = add_months(form.first_installment_date, offset);
                payments.push(Payment::new(PaymentKind::Installment, date, per_installment));
            }
        }

        Schedule::from_payments(payments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn form(count: u32) -> PlanParameters {
        PlanParameters {
            installment_count: count,
            ..PlanParameters::default()
        }
    }

    #[test]
    fn test_generates_count_plus_two_payments() {
        let schedule = Schedule::generate(&form(12), &PlanConfig::default());

        assert_eq!(schedule.len(), 14);
        assert_eq!(schedule.installment_count(), 12);
        assert_eq!(
            schedule
                .payments()
                .iter()
                .filter(|p| p.kind == PaymentKind::Deposit)
                .count(),
            1
        );
        assert_eq!(
            schedule
                .payments()
                .iter()
                .filter(|p| p.kind == PaymentKind::Prepayment)
                .count(),
            1
        );
    }

    #[test]
    fn test_upfront_payments_carry_form_amounts_and_dates() {
        let config = PlanConfig::default();
        let schedule = Schedule::generate(&form(12), &config);

        let deposit = schedule.deposit().unwrap();
        assert_eq!(deposit.amount, Money::from_major(5_000_000));
        assert_eq!(deposit.date, config.deposit_date);

        let prepayment = schedule.prepayment().unwrap();
        assert_eq!(prepayment.amount, Money::from_major(5_000_000));
        assert_eq!(prepayment.date, ymd(2025, 8, 1));
    }

    #[test]
    fn test_installments_step_by_one_month() {
        let schedule = Schedule::generate(&form(12), &PlanConfig::default());

        let dates: Vec<NaiveDate> = schedule.installments().map(|p| p.date).collect();
        assert_eq!(dates[0], ymd(2025, 9, 1));
        assert_eq!(dates[11], ymd(2026, 8, 1));
        for pair in dates.windows(2) {
            assert_eq!(pair[1], add_months(pair[0], 1));
        }
    }

    #[test]
    fn test_installment_sum_within_rounding_bound() {
        let config = PlanConfig::default();
        for count in [12, 13, 17, 48] {
            let schedule = Schedule::generate(&form(count), &config);
            let remaining = schedule.remaining(config.full_price);
            let drift = (schedule.installment_total() - remaining).abs();
            assert!(
                drift <= Money::from_major(count as i64),
                "count {}: drift {}",
                count,
                drift
            );
        }
    }

    #[test]
    fn test_every_payment_gets_fresh_id() {
        let schedule = Schedule::generate(&form(24), &PlanConfig::default());
        let ids: HashSet<_> = schedule.payments().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), schedule.len());
    }

    #[test]
    fn test_zero_installments_leaves_upfront_only() {
        let schedule = Schedule::generate(&form(0), &PlanConfig::default());
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.installment_count(), 0);
        assert_eq!(schedule.installment_total(), Money::ZERO);
    }
}
