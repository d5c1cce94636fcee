/// rebalancing - edit, add, remove, and reorder installments
use installment_plan_rs::format::format_currency_with_symbol;
use installment_plan_rs::{Money, PaymentPlan, PlanConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut plan = PaymentPlan::new(PlanConfig::default());

    // bump the first installment; the others shrink to conserve the total
    let first = plan
        .schedule()
        .installments()
        .next()
        .map(|p| p.id)
        .ok_or("schedule has no installments")?;
    plan.edit_amount(first, Money::from_major(3_000_000))?;

    let remaining = plan.schedule().remaining(plan.config().full_price);
    println!(
        "installment total {} == remaining {}",
        plan.schedule().installment_total(),
        remaining
    );

    // grow and shrink the tail
    let appended = plan.add_installment();
    plan.remove_installment(appended)?;

    // drag the second installment ahead of the first (full-sequence indices)
    plan.reorder(3, 2)?;

    // removing the last installment is rejected, not applied
    let ids: Vec<_> = plan.schedule().installments().map(|p| p.id).collect();
    for id in &ids[..ids.len() - 1] {
        plan.remove_installment(*id)?;
    }
    if plan.remove_installment(ids[ids.len() - 1]).is_err() {
        println!("last installment is protected");
    }

    // drain the notification channel
    for event in plan.events.take_events() {
        println!("[{:?}] {}", event.severity(), event.message());
    }

    for payment in plan.schedule().payments() {
        println!(
            "{:?}\t{}",
            payment.kind,
            format_currency_with_symbol(payment.amount)
        );
    }

    Ok(())
}
