use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::PlanConfig;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::events::{Event, EventStore};
use crate::schedule::rebalance::default_reorder_gate;
use crate::schedule::{ReorderGate, Schedule};
use crate::summary::{self, SummaryMetrics};
use crate::types::{PaymentId, PlanParameters, PlanRate};

/// partial form patch; only the present fields change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormUpdate {
    pub plan_rate: Option<PlanRate>,
    pub deposit: Option<Money>,
    pub prepayment: Option<Money>,
    pub first_installment_date: Option<NaiveDate>,
    pub installment_count: Option<u32>,
}

/// serializable snapshot of a plan (configuration, form, payments)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub config: PlanConfig,
    pub form: PlanParameters,
    pub schedule: Schedule,
}

/// host container owning the form, the schedule, and the notification store.
///
/// Transitions are serialized here: each one is fully applied (or rejected
/// with the pre-state kept) before the next is dispatched. The engine never
/// retains state of its own across calls.
pub struct PaymentPlan {
    config: PlanConfig,
    form: PlanParameters,
    schedule: Schedule,
    pub events: EventStore,
    reorder_gate: ReorderGate,
}

impl PaymentPlan {
    /// create a plan with the default form and a freshly generated schedule
    pub fn new(config: PlanConfig) -> Self {
        Self::with_form(config, PlanParameters::default())
    }

    pub fn with_form(config: PlanConfig, form: PlanParameters) -> Self {
        let schedule = Schedule::generate(&form, &config);
        let mut plan = Self {
            config,
            form,
            schedule,
            events: EventStore::new(),
            reorder_gate: default_reorder_gate,
        };
        plan.emit_generated();
        plan
    }

    /// replace the reorder gating predicate
    pub fn with_reorder_gate(mut self, gate: ReorderGate) -> Self {
        self.reorder_gate = gate;
        self
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    pub fn form(&self) -> &PlanParameters {
        &self.form
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// apply a form patch and regenerate the schedule wholesale.
    ///
    /// A patched plan rate re-derives the prepayment as its fraction of the
    /// full price; every payment gets a fresh identifier afterwards.
    pub fn update_form(&mut self, update: FormUpdate) {
        if let Some(rate) = update.plan_rate {
            self.form.plan_rate = rate;
            self.form.prepayment = self.config.full_price.percentage(rate.fraction());
        }
        if let Some(deposit) = update.deposit {
            self.form.deposit = deposit;
        }
        if let Some(prepayment) = update.prepayment {
            self.form.prepayment = prepayment;
        }
        if let Some(date) = update.first_installment_date {
            self.form.first_installment_date = date;
        }
        if let Some(count) = update.installment_count {
            self.form.installment_count = count;
        }

        self.schedule = Schedule::generate(&self.form, &self.config);
        log::debug!(
            "schedule regenerated: {} installments",
            self.form.installment_count
        );
        self.emit_generated();
    }

    /// set one installment's amount, rebalancing the rest to conserve the total
    pub fn edit_amount(&mut self, id: PaymentId, amount: Money) -> Result<()> {
        match self.schedule.edit_amount(id, amount, self.config.full_price) {
            Ok(next) => {
                self.schedule = next;
                log::debug!("amount updated for {}", id);
                self.events.emit(Event::AmountUpdated { id, amount });
                Ok(())
            }
            Err(err) => {
                log::warn!("edit rejected: {}", err);
                self.events.emit(Event::TransitionRejected {
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// append an installment and keep the form count in step
    pub fn add_installment(&mut self) -> PaymentId {
        let (next, id) = self.schedule.add_installment(self.config.full_price);
        self.schedule = next;
        self.form.installment_count = self.schedule.installment_count();

        let date = self
            .schedule
            .find(id)
            .map(|p| p.date)
            .unwrap_or(self.form.first_installment_date);
        log::debug!("installment {} added at {}", id, date);
        self.events.emit(Event::InstallmentAdded { id, date });
        id
    }

    /// remove an installment (never the last one) and keep the form count in step
    pub fn remove_installment(&mut self, id: PaymentId) -> Result<()> {
        match self.schedule.remove_installment(id, self.config.full_price) {
            Ok(next) => {
                self.schedule = next;
                self.form.installment_count = self.schedule.installment_count();
                log::debug!("installment {} removed", id);
                self.events.emit(Event::InstallmentRemoved { id });
                Ok(())
            }
            Err(err) => {
                log::warn!("remove rejected: {}", err);
                self.events.emit(Event::TransitionRejected {
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// move a payment across the sequence, re-dating installments by position
    pub fn reorder(&mut self, old_index: usize, new_index: usize) -> Result<()> {
        match self
            .schedule
            .reorder(old_index, new_index, self.reorder_gate)
        {
            Ok(next) => {
                self.schedule = next;
                log::debug!("payment moved {} -> {}", old_index, new_index);
                self.events.emit(Event::OrderChanged {
                    old_index,
                    new_index,
                });
                Ok(())
            }
            Err(err) => {
                log::warn!("reorder rejected: {}", err);
                self.events.emit(Event::TransitionRejected {
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// aggregate metrics, derived on every call
    pub fn summary(&self) -> SummaryMetrics {
        summary::project(
            &self.schedule,
            self.config.full_price,
            self.config.apartment_area,
        )
    }

    /// net present value of the schedule at an optional discount rate
    pub fn npv(&self, rate: Option<Rate>) -> Money {
        summary::npv(&self.schedule, self.config.full_price, rate)
    }

    /// serialize configuration, form, and payments to json
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&PlanSnapshot {
            config: self.config.clone(),
            form: self.form.clone(),
            schedule: self.schedule.clone(),
        })
    }

    /// restore a plan from a json snapshot; the event store starts empty and
    /// the default reorder gate applies
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let snapshot: PlanSnapshot = serde_json::from_str(json)?;
        Ok(Self {
            config: snapshot.config,
            form: snapshot.form,
            schedule: snapshot.schedule,
            events: EventStore::new(),
            reorder_gate: default_reorder_gate,
        })
    }

    fn emit_generated(&mut self) {
        self.events.emit(Event::ScheduleGenerated {
            installment_count: self.schedule.installment_count(),
            installment_total: self.schedule.installment_total(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Severity;
    use crate::types::PaymentKind;

    fn plan() -> PaymentPlan {
        let mut plan = PaymentPlan::new(PlanConfig::default());
        plan.events.clear();
        plan
    }

    #[test]
    fn test_new_plan_generates_default_schedule() {
        let plan = PaymentPlan::new(PlanConfig::default());
        assert_eq!(plan.schedule().len(), 14);
        assert!(matches!(
            plan.events.events(),
            [Event::ScheduleGenerated { .. }]
        ));
    }

    #[test]
    fn test_rate_patch_rederives_prepayment() {
        let mut plan = plan();
        plan.update_form(FormUpdate {
            plan_rate: Some(PlanRate::TwentyPercent),
            ..FormUpdate::default()
        });

        // round(25 558 146 * 0.2)
        assert_eq!(plan.form().prepayment, Money::from_major(5_111_629));
        assert_eq!(plan.form().plan_rate, PlanRate::TwentyPercent);
    }

    #[test]
    fn test_form_update_regenerates_wholesale() {
        let mut plan = plan();
        let old_ids: Vec<_> = plan.schedule().payments().iter().map(|p| p.id).collect();

        plan.update_form(FormUpdate {
            installment_count: Some(24),
            ..FormUpdate::default()
        });

        assert_eq!(plan.schedule().installment_count(), 24);
        let fresh = plan
            .schedule()
            .payments()
            .iter()
            .all(|p| !old_ids.contains(&p.id));
        assert!(fresh, "regeneration must assign fresh ids");
    }

    #[test]
    fn test_edit_swaps_schedule_and_notifies() {
        let mut plan = plan();
        let id = plan.schedule().installments().next().unwrap().id;

        plan.edit_amount(id, Money::from_major(2_000_000)).unwrap();

        let remaining = plan.schedule().remaining(plan.config().full_price);
        assert_eq!(plan.schedule().installment_total(), remaining);
        assert!(matches!(
            plan.events.events(),
            [Event::AmountUpdated { .. }]
        ));
    }

    #[test]
    fn test_add_and_remove_keep_form_count_in_step() {
        let mut plan = plan();

        let id = plan.add_installment();
        assert_eq!(plan.form().installment_count, 13);
        assert_eq!(plan.schedule().installment_count(), 13);

        plan.remove_installment(id).unwrap();
        assert_eq!(plan.form().installment_count, 12);
        assert_eq!(plan.schedule().installment_count(), 12);
    }

    #[test]
    fn test_rejection_keeps_state_and_emits_warning() {
        let mut plan = plan();
        plan.update_form(FormUpdate {
            installment_count: Some(12),
            ..FormUpdate::default()
        });
        plan.events.clear();

        // shrink to a single installment by removing eleven
        let ids: Vec<_> = plan.schedule().installments().map(|p| p.id).collect();
        for id in &ids[1..] {
            plan.remove_installment(*id).unwrap();
        }
        plan.events.clear();

        let before = plan.schedule().clone();
        let err = plan.remove_installment(ids[0]).unwrap_err();
        assert_eq!(err, crate::errors::ScheduleError::LastInstallment);
        assert_eq!(plan.schedule(), &before);
        assert_eq!(plan.form().installment_count, 1);

        let events = plan.events.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity(), Severity::Warning);
    }

    #[test]
    fn test_reorder_uses_injected_gate() {
        let config = PlanConfig::default();
        let mut locked = PaymentPlan::new(config.clone()).with_reorder_gate(|_, _| false);
        assert!(locked.reorder(2, 3).is_err());

        let mut open = PaymentPlan::new(config).with_reorder_gate(|_, _| true);
        // even the deposit moves under a permissive gate
        assert!(open.reorder(0, 1).is_ok());
    }

    #[test]
    fn test_summary_reflects_current_schedule() {
        let mut plan = plan();
        let before = plan.summary();

        let id = plan.schedule().installments().next().unwrap().id;
        plan.edit_amount(id, Money::from_major(3_000_000)).unwrap();

        let after = plan.summary();
        assert_eq!(before.total_cost, after.total_cost);
        assert_ne!(before.yearly_breakdown, after.yearly_breakdown);
    }

    #[test]
    fn test_json_roundtrip_preserves_payments() {
        let mut plan = plan();
        let id = plan.schedule().installments().next().unwrap().id;
        plan.edit_amount(id, Money::from_major(999_999)).unwrap();

        let json = plan.to_json().unwrap();
        let restored = PaymentPlan::from_json(&json).unwrap();

        assert_eq!(restored.form(), plan.form());
        assert_eq!(restored.schedule(), plan.schedule());
        assert!(restored.events.events().is_empty());
        assert_eq!(
            restored.schedule().deposit().map(|p| p.kind),
            Some(PaymentKind::Deposit)
        );
    }
}
