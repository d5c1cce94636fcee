use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::PaymentId;

/// notification level for the toast collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Warning,
}

/// all events emitted by plan transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    ScheduleGenerated {
        installment_count: u32,
        installment_total: Money,
    },
    AmountUpdated {
        id: PaymentId,
        amount: Money,
    },
    InstallmentAdded {
        id: PaymentId,
        date: NaiveDate,
    },
    InstallmentRemoved {
        id: PaymentId,
    },
    OrderChanged {
        old_index: usize,
        new_index: usize,
    },
    TransitionRejected {
        reason: String,
    },
}

impl Event {
    pub fn severity(&self) -> Severity {
        match self {
            Event::TransitionRejected { .. } => Severity::Warning,
            _ => Severity::Success,
        }
    }

    /// human-readable text for the transient notification channel
    pub fn message(&self) -> String {
        match self {
            Event::ScheduleGenerated {
                installment_count, ..
            } => {
                format!("schedule regenerated with {} installments", installment_count)
            }
            Event::AmountUpdated { .. } => "amount updated".to_string(),
            Event::InstallmentAdded { .. } => "new installment added".to_string(),
            Event::InstallmentRemoved { .. } => "installment removed".to_string(),
            Event::OrderChanged { .. } => "installment order updated".to_string(),
            Event::TransitionRejected { reason } => reason.clone(),
        }
    }
}

/// event store for collecting notifications during plan operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
