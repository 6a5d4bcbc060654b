/// amortization schedule - yearly payment split for a fixed-rate mortgage
use housing_scenarios_rs::{AmortizationSchedule, Money, Rate, Uuid};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let schedule = AmortizationSchedule::generate(
        Uuid::new_v4(),
        Money::from_major(160_000),
        Rate::from_decimal(dec!(0.028)),
        30,
        2024,
    )?;

    println!(
        "monthly payment: {}",
        schedule.monthly_payment.round_dp(2)
    );
    println!("year    payment     principal   interest    pending");

    for row in &schedule.years {
        println!(
            "{}  {:>10}  {:>10}  {:>9}  {:>10}",
            row.year,
            row.payment.round_dp(2),
            row.principal.round_dp(2),
            row.interest.round_dp(2),
            schedule.pending_principal_after(row.year).round_dp(2)
        );
    }

    println!(
        "total interest over the term: {}",
        schedule.total_interest.round_dp(2)
    );

    Ok(())
}
