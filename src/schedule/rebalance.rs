use rust_decimal::Decimal;

use crate::dates::add_months;
use crate::decimal::Money;
use crate::errors::{Result, ScheduleError};
use crate::schedule::Schedule;
use crate::types::{Payment, PaymentId, PaymentKind};

/// predicate over (moved payment, displaced target) deciding whether a
/// reorder is allowed; injected by the caller, the engine imposes no kind
/// restrictions of its own
pub type ReorderGate = fn(&Payment, &Payment) -> bool;

/// shipped gate: the deposit can be neither dragged nor displaced
pub fn default_reorder_gate(moved: &Payment, target: &Payment) -> bool {
    moved.kind != PaymentKind::Deposit && target.kind != PaymentKind::Deposit
}

impl Schedule {
    /// set one installment's amount, conserving the installment total.
    ///
    /// The difference against `full_price - deposit - prepayment` is spread
    /// over the untouched installments by floor division; the division
    /// remainder, plus any amount freed by clamping an installment at zero,
    /// lands back on the edited installment. The installment sum equals the
    /// remainder exactly afterwards, unlike generation where per-installment
    /// rounding drift is accepted.
    pub fn edit_amount(
        &self,
        id: PaymentId,
        new_amount: Money,
        full_price: Money,
    ) -> Result<Schedule> {
        let target = self
            .find(id)
            .ok_or(ScheduleError::PaymentNotFound { id })?;
        if !target.is_installment() {
            return Err(ScheduleError::NotAnInstallment { kind: target.kind });
        }

        let remaining = self.remaining(full_price);
        let mut next = self.clone();

        if new_amount >= remaining {
            // the edit swallows the whole remainder
            for payment in next.payments_mut().iter_mut().filter(|p| p.is_installment()) {
                payment.amount = if payment.id == id {
                    remaining.max(Money::ZERO)
                } else {
                    Money::ZERO
                };
            }
            return Ok(next);
        }

        let others_total: Money = self
            .installments()
            .filter(|p| p.id != id)
            .map(|p| p.amount)
            .sum();
        let other_count = self.installment_count().saturating_sub(1);

        if other_count == 0 {
            // nothing to redistribute against, the single installment keeps the remainder
            if let Some(payment) = next.payments_mut().iter_mut().find(|p| p.id == id) {
                payment.amount = remaining.max(Money::ZERO);
            }
            return Ok(next);
        }

        let diff = remaining - (new_amount + others_total);
        let divisor = Decimal::from(other_count);
        let share = Money::from_decimal_floor(diff.as_decimal() / divisor);
        let mut leftover = diff - Money::from_decimal_floor(share.as_decimal() * divisor);

        for payment in next.payments_mut().iter_mut().filter(|p| p.is_installment()) {
            if payment.id == id {
                continue;
            }
            let candidate = payment.amount + share;
            if candidate.is_negative() {
                leftover += candidate;
                payment.amount = Money::ZERO;
            } else {
                payment.amount = candidate;
            }
        }

        if let Some(payment) = next.payments_mut().iter_mut().find(|p| p.id == id) {
            payment.amount = (new_amount + leftover).max(Money::ZERO);
        }

        Ok(next)
    }

    /// append an installment one month after the current last one and spread
    /// the remainder evenly (floor division, drift accepted) over all
    /// installments. Returns the new schedule and the appended payment's id.
    pub fn add_installment(&self, full_price: Money) -> (Schedule, PaymentId) {
        let date = match self.installments().last() {
            Some(last) => add_months(last.date, 1),
            None => self
                .anchor_date()
                .map(|anchor| add_months(anchor, 1))
                .unwrap_or_default(),
        };

        let mut next = self.clone();
        let appended = Payment::new(PaymentKind::Installment, date, Money::ZERO);
        let appended_id = appended.id;
        next.payments_mut().push(appended);

        next.spread_remaining_evenly(full_price);
        (next, appended_id)
    }

    /// remove an installment and spread the remainder evenly over the
    /// survivors (floor division, drift accepted). The last installment
    /// cannot be removed.
    pub fn remove_installment(&self, id: PaymentId, full_price: Money) -> Result<Schedule> {
        let target = self
            .find(id)
            .ok_or(ScheduleError::PaymentNotFound { id })?;
        if !target.is_installment() {
            return Err(ScheduleError::NotAnInstallment { kind: target.kind });
        }
        if self.installment_count() <= 1 {
            return Err(ScheduleError::LastInstallment);
        }

        let mut next = self.clone();
        next.payments_mut().retain(|p| p.id != id);
        next.spread_remaining_evenly(full_price);
        Ok(next)
    }

    /// move one element of the full sequence and re-date every installment by
    /// its new ordinal position. Amounts are untouched; rejections come only
    /// from bounds and the injected gate.
    pub fn reorder(
        &self,
        old_index: usize,
        new_index: usize,
        gate: ReorderGate,
    ) -> Result<Schedule> {
        let len = self.len();
        if old_index >= len {
            return Err(ScheduleError::IndexOutOfBounds {
                index: old_index,
                len,
            });
        }
        if new_index >= len {
            return Err(ScheduleError::IndexOutOfBounds {
                index: new_index,
                len,
            });
        }
        if old_index == new_index {
            return Ok(self.clone());
        }

        let moved = &self.payments()[old_index];
        let displaced = &self.payments()[new_index];
        if !gate(moved, displaced) {
            return Err(ScheduleError::ReorderNotAllowed);
        }

        let mut next = self.clone();
        let payment = next.payments_mut().remove(old_index);
        next.payments_mut().insert(new_index, payment);
        next.renumber_installments();
        Ok(next)
    }

    /// re-date installments by ordinal: first = anchor + 1 month, second = +2, ...
    fn renumber_installments(&mut self) {
        let Some(anchor) = self.anchor_date() else {
            return;
        };
        let mut ordinal = 0;
        for payment in self.payments_mut().iter_mut() {
            if payment.is_installment() {
                ordinal += 1;
                payment.set_date(add_months(anchor, ordinal));
            }
        }
    }

    fn spread_remaining_evenly(&mut self, full_price: Money) {
        let count = self.installment_count();
        if count == 0 {
            return;
        }
        let remaining = self.remaining(full_price);
        let share =
            Money::from_decimal_floor(remaining.as_decimal() / Decimal::from(count));
        for payment in self.payments_mut().iter_mut().filter(|p| p.is_installment()) {
            payment.amount = share;
        }
    }
}
