/// quick start - rent vs buy over 30 years with a handful of assumptions
use housing_scenarios_rs::{
    compute_buy_forecast, compute_rent_forecast, current_year, Money, Rate, ScenarioParameters,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = ScenarioParameters::builder()
        .time_period_years(30)
        .start_year(current_year())
        .financing(Money::from_major(300_000), Rate::from_percentage(50))
        .annual_interest_rate(Rate::from_decimal(dec!(0.03)))
        .house_appreciation_rate(Rate::from_decimal(dec!(0.02)))
        .inflation_rate(Rate::from_decimal(dec!(0.04)))
        .market_return_rate(Rate::from_decimal(dec!(0.05)))
        .capital_gains_tax_rate(Rate::from_percentage(20))
        .maintenance_rate(Rate::from_decimal(dec!(0.005)))
        .buying_transaction_cost_rate(Rate::from_decimal(dec!(0.15)))
        .net_annual_income(Money::from_major(36_000))
        .rent_initial_amount(Money::from_major(14_400))
        .build()?;

    let rent = compute_rent_forecast(&params)?;
    let buy = compute_buy_forecast(&params)?;

    println!(
        "renting for {} years ends at a net worth of {}",
        params.time_period_years,
        rent.final_net_worth().unwrap_or(Money::ZERO).round_dp(2)
    );
    println!(
        "buying ends at a net worth of {}",
        buy.final_net_worth().unwrap_or(Money::ZERO).round_dp(2)
    );

    Ok(())
}
