use chrono::Datelike;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::dates::year_span;
use crate::decimal::{Money, Rate};
use crate::schedule::Schedule;

/// installment total for one calendar year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearBreakdown {
    pub year: i32,
    pub amount: Money,
    /// share of the full price, one decimal
    pub percent: Decimal,
}

/// derived aggregate view of a schedule; recomputed on every read, never stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_cost: Money,
    pub price_per_sqm: Money,
    pub deposit_plus_prepayment: Money,
    pub deposit_plus_prepayment_percent: Decimal,
    pub yearly_breakdown: Vec<YearBreakdown>,
    /// total paid over the full price, percent above 100, one decimal
    pub simple_burden_percent: Decimal,
}

/// project a schedule into its summary metrics
pub fn project(schedule: &Schedule, full_price: Money, apartment_area: Decimal) -> SummaryMetrics {
    let deposit = schedule.deposit().map(|p| p.amount).unwrap_or(Money::ZERO);
    let prepayment = schedule.prepayment().map(|p| p.amount).unwrap_or(Money::ZERO);
    let deposit_plus_prepayment = deposit + prepayment;

    let price_per_sqm = full_price
        .as_decimal()
        .checked_div(apartment_area)
        .map(Money::from_decimal)
        .unwrap_or(Money::ZERO);

    let mut yearly_breakdown = Vec::new();
    if let Some((min_year, max_year)) = year_span(schedule.installments().map(|p| p.date)) {
        for year in min_year..=max_year {
            let amount: Money = schedule
                .installments()
                .filter(|p| p.date.year() == year)
                .map(|p| p.amount)
                .sum();
            if !amount.is_zero() {
                yearly_breakdown.push(YearBreakdown {
                    year,
                    amount,
                    percent: percent_of(amount, full_price),
                });
            }
        }
    }

    let burden = schedule
        .total()
        .as_decimal()
        .checked_div(full_price.as_decimal())
        .map(|ratio| round_percent((ratio - Decimal::ONE) * Decimal::from(100)))
        .unwrap_or(Decimal::ZERO);

    SummaryMetrics {
        total_cost: full_price,
        price_per_sqm,
        deposit_plus_prepayment,
        deposit_plus_prepayment_percent: percent_of(deposit_plus_prepayment, full_price),
        yearly_breakdown,
        simple_burden_percent: burden,
    }
}

/// net present value of the payment stream against the full price.
///
/// Without a rate this is the plain payment total minus the full price. With
/// a rate each payment is discounted by `(1 + rate)^k` where `k` is its
/// 1-based position in the full sequence.
pub fn npv(schedule: &Schedule, full_price: Money, rate: Option<Rate>) -> Money {
    let Some(rate) = rate else {
        return schedule.total() - full_price;
    };

    let base = Decimal::ONE + rate.as_decimal();
    let mut factor = Decimal::ONE;
    let mut present_value = Decimal::ZERO;
    for payment in schedule.payments() {
        factor *= base;
        present_value += payment.amount.as_decimal() / factor;
    }

    Money::from_decimal(present_value) - full_price
}

fn percent_of(amount: Money, full_price: Money) -> Decimal {
    amount
        .as_decimal()
        .checked_div(full_price.as_decimal())
        .map(|ratio| round_percent(ratio * Decimal::from(100)))
        .unwrap_or(Decimal::ZERO)
}

fn round_percent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
