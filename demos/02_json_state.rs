/// json state - snapshot a plan and restore it
use installment_plan_rs::{FormUpdate, Money, PaymentPlan, PlanConfig, PlanRate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut plan = PaymentPlan::new(PlanConfig::default());

    // switch to the 20% plan; the prepayment is re-derived from the price
    plan.update_form(FormUpdate {
        plan_rate: Some(PlanRate::TwentyPercent),
        deposit: Some(Money::from_major(4_000_000)),
        ..FormUpdate::default()
    });

    let json = plan.to_json()?;
    println!("{}", json);

    let restored = PaymentPlan::from_json(&json)?;
    assert_eq!(restored.schedule(), plan.schedule());
    assert_eq!(restored.form(), plan.form());
    println!("restored {} payments", restored.schedule().len());

    Ok(())
}
