use hourglass_rs::SafeTimeProvider;
use serde::Serialize;

use crate::config::{PlanConfig, MAX_INSTALLMENTS, MIN_INSTALLMENTS};
use crate::decimal::Money;
use crate::types::PlanParameters;

/// single failed form check, tagged with the offending field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

/// outcome of validating a form; empty issue list means the form may reach
/// the engine
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// collaborator-side form checks. The generator and rebalancer assume input
/// that passed here; they perform no bounds defense of their own.
pub fn validate(
    form: &PlanParameters,
    config: &PlanConfig,
    time_provider: &SafeTimeProvider,
) -> ValidationReport {
    let mut issues = Vec::new();

    if form.deposit.is_negative() {
        issues.push(ValidationIssue {
            field: "deposit",
            message: "deposit cannot be negative".to_string(),
        });
    } else if form.deposit > config.full_price {
        issues.push(ValidationIssue {
            field: "deposit",
            message: "deposit cannot exceed the full price".to_string(),
        });
    }

    if form.prepayment.is_negative() {
        issues.push(ValidationIssue {
            field: "prepayment",
            message: "prepayment cannot be negative".to_string(),
        });
    } else if form.prepayment > config.full_price {
        issues.push(ValidationIssue {
            field: "prepayment",
            message: "prepayment cannot exceed the full price".to_string(),
        });
    }

    if form.deposit + form.prepayment > config.full_price {
        issues.push(ValidationIssue {
            field: "prepayment",
            message: "deposit plus prepayment cannot exceed the full price".to_string(),
        });
    }

    let today = time_provider.now().date_naive();
    if form.first_installment_date < today {
        issues.push(ValidationIssue {
            field: "first_installment_date",
            message: "first installment date cannot be in the past".to_string(),
        });
    }

    if !(MIN_INSTALLMENTS..=MAX_INSTALLMENTS).contains(&form.installment_count) {
        issues.push(ValidationIssue {
            field: "installment_count",
            message: format!(
                "installment count must be between {} and {}",
                MIN_INSTALLMENTS, MAX_INSTALLMENTS
            ),
        });
    }

    ValidationReport { issues }
}

/// range check for a manually entered installment amount
pub fn validate_amount(amount: Money, max_amount: Money) -> bool {
    !amount.is_negative() && amount <= max_amount
}
