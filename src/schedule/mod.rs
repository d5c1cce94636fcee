pub mod generate;
pub mod rebalance;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{Payment, PaymentId, PaymentKind};

pub use rebalance::ReorderGate;

/// ordered payment collection: one deposit, one prepayment, then installments.
///
/// Order is significant and persisted. Installment dates are a function of
/// ordinal position among installments, anchored one month after the
/// prepayment date.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schedule {
    payments: Vec<Payment>,
}

impl Schedule {
    /// build from an explicit payment sequence (snapshots, tests)
    pub fn from_payments(payments: Vec<Payment>) -> Self {
        Self { payments }
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn into_payments(self) -> Vec<Payment> {
        self.payments
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    pub fn find(&self, id: PaymentId) -> Option<&Payment> {
        self.payments.iter().find(|p| p.id == id)
    }

    pub fn deposit(&self) -> Option<&Payment> {
        self.payments.iter().find(|p| p.kind == PaymentKind::Deposit)
    }

    pub fn prepayment(&self) -> Option<&Payment> {
        self.payments
            .iter()
            .find(|p| p.kind == PaymentKind::Prepayment)
    }

    pub fn installments(&self) -> impl Iterator<Item = &Payment> {
        self.payments.iter().filter(|p| p.is_installment())
    }

    pub fn installment_count(&self) -> u32 {
        self.installments().count() as u32
    }

    /// sum of installment amounts
    pub fn installment_total(&self) -> Money {
        self.installments().map(|p| p.amount).sum()
    }

    /// sum over every payment in the schedule
    pub fn total(&self) -> Money {
        self.payments.iter().map(|p| p.amount).sum()
    }

    /// amount left for installments: full price minus the two upfront payments
    pub fn remaining(&self, full_price: Money) -> Money {
        let deposit = self.deposit().map(|p| p.amount).unwrap_or(Money::ZERO);
        let prepayment = self.prepayment().map(|p| p.amount).unwrap_or(Money::ZERO);
        full_price - deposit - prepayment
    }

    /// installment dating anchor: the prepayment date
    pub fn anchor_date(&self) -> Option<NaiveDate> {
        self.prepayment().map(|p| p.date)
    }

    pub(crate) fn payments_mut(&mut self) -> &mut Vec<Payment> {
        &mut self.payments
    }
}
