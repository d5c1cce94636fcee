pub mod config;
pub mod dates;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod format;
pub mod plan;
pub mod schedule;
pub mod summary;
pub mod types;
pub mod validation;

// re-export key types
pub use config::{PlanConfig, MAX_INSTALLMENTS, MIN_INSTALLMENTS};
pub use decimal::{Money, Rate};
pub use errors::{Result, ScheduleError};
pub use events::{Event, EventStore, Severity};
pub use plan::{FormUpdate, PaymentPlan, PlanSnapshot};
pub use schedule::rebalance::default_reorder_gate;
pub use schedule::{ReorderGate, Schedule};
pub use summary::{SummaryMetrics, YearBreakdown};
pub use types::{Payment, PaymentId, PaymentKind, PlanParameters, PlanRate};
pub use validation::{validate, validate_amount, ValidationIssue, ValidationReport};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
