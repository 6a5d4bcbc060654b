/// short-term rental - nightly letting vs a yearly lease, as json
use housing_scenarios_rs::{
    compute_long_term_rental_forecast, compute_short_term_rental_forecast, Money, Rate,
    ScenarioComparison, ScenarioParameters,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = ScenarioParameters::builder()
        .time_period_years(15)
        .start_year(2024)
        .financing(Money::from_major(220_000), Rate::from_percentage(30))
        .annual_interest_rate(Rate::from_decimal(dec!(0.028)))
        .house_appreciation_rate(Rate::from_decimal(dec!(0.02)))
        .inflation_rate(Rate::from_decimal(dec!(0.03)))
        .maintenance_rate(Rate::from_decimal(dec!(0.01)))
        .rent_expectation_rate(Rate::from_decimal(dec!(0.05)))
        // nightly letting: double rate, 60% of the year advertised,
        // four weeks kept for the owner, platform takes 12%
        .nightly_rate_multiplier(dec!(2))
        .occupancy_rate(Rate::from_decimal(dec!(0.6)))
        .private_use_nights(28)
        .service_fee_rate(Rate::from_decimal(dec!(0.12)))
        .annual_supplies(Money::from_major(2_400))
        .build()?;

    let long_term = compute_long_term_rental_forecast(&params)?;
    let short_term = compute_short_term_rental_forecast(&params)?;

    for table in [&long_term, &short_term] {
        let first = &table.rows[0];
        println!(
            "{}: year-1 income {}, costs {}, cashflow {}",
            table.strategy.label(),
            first.income.round_dp(2),
            first.costs.round_dp(2),
            first.cashflow.round_dp(2)
        );
    }

    let merged = ScenarioComparison::merge(&[&long_term, &short_term]);
    println!("{}", merged.to_json_pretty()?);

    Ok(())
}
