use thiserror::Error;

use crate::types::{PaymentId, PaymentKind};

/// rejected schedule transitions; the pre-state stays valid on every variant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("payment not found: {id}")]
    PaymentNotFound {
        id: PaymentId,
    },

    #[error("only installments can be modified, got {kind:?}")]
    NotAnInstallment {
        kind: PaymentKind,
    },

    #[error("cannot remove the last installment")]
    LastInstallment,

    #[error("position out of bounds: {index}, schedule length {len}")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },

    #[error("reorder blocked by gating rule")]
    ReorderNotAllowed,
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
