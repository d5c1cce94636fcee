use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};

/// unique identifier for a payment, stable across reorders
pub type PaymentId = Uuid;

/// payment kinds making up a schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentKind {
    /// one-time upfront payment fixed at a nominal date
    Deposit,
    /// second upfront payment, anchor for installment dating
    Prepayment,
    /// one of the recurring monthly payments covering the remainder
    Installment,
}

/// single dated payment in the schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub kind: PaymentKind,
    pub day_of_month: u8,
    pub date: NaiveDate,
    pub amount: Money,
}

impl Payment {
    /// create a payment with a fresh identifier, day derived from the date
    pub fn new(kind: PaymentKind, date: NaiveDate, amount: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            day_of_month: date.day() as u8,
            date,
            amount,
        }
    }

    /// refresh the cosmetic day-of-month after a date change
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.day_of_month = date.day() as u8;
    }

    pub fn is_installment(&self) -> bool {
        self.kind == PaymentKind::Installment
    }
}

/// payment plan rate, determines the derived prepayment fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanRate {
    TwentyPercent,
    ThirtyPercent,
}

impl PlanRate {
    /// prepayment fraction of the full price
    pub fn fraction(&self) -> Rate {
        match self {
            PlanRate::TwentyPercent => Rate::from_percentage(20),
            PlanRate::ThirtyPercent => Rate::from_percentage(30),
        }
    }
}

/// user-editable form parameters driving schedule generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanParameters {
    pub plan_rate: PlanRate,
    pub deposit: Money,
    pub prepayment: Money,
    /// prepayment date; installments start one month after it
    pub first_installment_date: NaiveDate,
    pub installment_count: u32,
}

impl Default for PlanParameters {
    fn default() -> Self {
        Self {
            plan_rate: PlanRate::ThirtyPercent,
            deposit: Money::from_major(5_000_000),
            prepayment: Money::from_major(5_000_000),
            first_installment_date: NaiveDate::from_ymd_opt(2025, 8, 1)
                .unwrap_or(NaiveDate::MIN),
            installment_count: 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_day_derived_from_date() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
        let payment = Payment::new(PaymentKind::Installment, date, Money::from_major(100));
        assert_eq!(payment.day_of_month, 15);

        let mut moved = payment.clone();
        moved.set_date(NaiveDate::from_ymd_opt(2025, 10, 3).unwrap());
        assert_eq!(moved.day_of_month, 3);
        assert_eq!(moved.id, payment.id);
    }

    #[test]
    fn test_plan_rate_fraction() {
        assert_eq!(PlanRate::TwentyPercent.fraction(), Rate::from_percentage(20));
        assert_eq!(PlanRate::ThirtyPercent.fraction(), Rate::from_percentage(30));
    }
}
