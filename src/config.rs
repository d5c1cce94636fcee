use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// lower bound on the installment count accepted by the form
pub const MIN_INSTALLMENTS: u32 = 12;
/// upper bound on the installment count accepted by the form
pub const MAX_INSTALLMENTS: u32 = 48;

/// plan configuration: the unit being purchased and fixed schedule anchors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// full price of the unit in whole currency units
    pub full_price: Money,
    /// unit area in square meters, for the price-per-m2 metric
    pub apartment_area: Decimal,
    /// fixed reference date the deposit payment is dated at
    pub deposit_date: NaiveDate,
}

impl PlanConfig {
    pub fn new(full_price: Money, apartment_area: Decimal, deposit_date: NaiveDate) -> Self {
        Self {
            full_price,
            apartment_area,
            deposit_date,
        }
    }
}

impl Default for PlanConfig {
    /// reference unit: 25 558 146 units for 39 m2, deposit anchored at 2025-08-01
    fn default() -> Self {
        Self {
            full_price: Money::from_major(25_558_146),
            apartment_area: dec!(39),
            deposit_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap_or(NaiveDate::MIN),
        }
    }
}
