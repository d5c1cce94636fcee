/// quick start - generate a schedule and read its summary
use installment_plan_rs::format::{format_currency_with_symbol, format_date};
use installment_plan_rs::{PaymentPlan, PlanConfig};

fn main() {
    // reference unit: 25 558 146 ₸ for 39 m², 12 monthly installments
    let plan = PaymentPlan::new(PlanConfig::default());

    for payment in plan.schedule().payments() {
        println!(
            "{:?}\t{}\t{}",
            payment.kind,
            format_date(payment.date),
            format_currency_with_symbol(payment.amount)
        );
    }

    let summary = plan.summary();
    println!("price per m²: {}", format_currency_with_symbol(summary.price_per_sqm));
    println!(
        "upfront: {} ({}%)",
        format_currency_with_symbol(summary.deposit_plus_prepayment),
        summary.deposit_plus_prepayment_percent
    );
    for year in &summary.yearly_breakdown {
        println!(
            "{}: {} ({}%)",
            year.year,
            format_currency_with_symbol(year.amount),
            year.percent
        );
    }
    println!("npv (r = 0): {}", format_currency_with_symbol(plan.npv(None)));
}
