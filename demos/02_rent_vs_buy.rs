/// rent vs buy - full comparison on equal total budget, merged by year
use housing_scenarios_rs::{
    affordable_house_price, compute_buy_forecast, compute_market_forecast, compute_rent_forecast,
    Money, Rate, ScenarioComparison, ScenarioParameters,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let budget = Money::from_major(350_000);
    let buying_costs = Rate::from_decimal(dec!(0.15));

    // the most expensive house the budget affords once buying costs are paid
    let house_price = affordable_house_price(budget, buying_costs);
    println!("affordable house price: {}", house_price.round_dp(2));

    let params = ScenarioParameters::builder()
        .time_period_years(30)
        .start_year(2024)
        .financing(house_price, Rate::from_percentage(50))
        .annual_interest_rate(Rate::from_decimal(dec!(0.03)))
        .house_appreciation_rate(Rate::from_decimal(dec!(0.02)))
        .inflation_rate(Rate::from_decimal(dec!(0.04)))
        .market_return_rate(Rate::from_decimal(dec!(0.05)))
        .capital_gains_tax_rate(Rate::from_percentage(20))
        .maintenance_rate(Rate::from_decimal(dec!(0.005)))
        .buying_transaction_cost_rate(buying_costs)
        .selling_transaction_cost_rate(Rate::from_decimal(dec!(0.10)))
        .net_annual_income(Money::from_major(36_000))
        .rent_initial_amount(Money::from_major(14_400))
        .build()?;

    println!("required loan amount: {}", params.loan_amount.round_dp(2));

    let rent = compute_rent_forecast(&params)?;
    let buy = compute_buy_forecast(&params)?;
    // the buyer's financed portion keeps working in the markets
    let market_leg = compute_market_forecast(&params)?;

    let merged = ScenarioComparison::merge(&[&rent, &buy, &market_leg]);

    println!("year    rent        buy         buy+markets");
    for row in &merged.rows {
        let rent_worth = row.cells[0].map(|c| c.net_worth).unwrap_or(Money::ZERO);
        let buy_worth = row.cells[1].map(|c| c.net_worth).unwrap_or(Money::ZERO);
        let market_worth = row.cells[2].map(|c| c.net_worth).unwrap_or(Money::ZERO);

        println!(
            "{}  {:>10}  {:>10}  {:>10}",
            row.year,
            rent_worth.round_dp(0),
            buy_worth.round_dp(0),
            (buy_worth + market_worth).round_dp(0)
        );
    }

    Ok(())
}
