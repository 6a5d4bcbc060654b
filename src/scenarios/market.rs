use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::ScenarioParameters;
use crate::decimal::Money;
use crate::errors::Result;
use crate::forecast::{ForecastTable, YearlyForecastRow};
use crate::types::StrategyKind;

use super::{factor_series, finalize_returns, portfolio_position};

/// invest the amount a purchase would not tie up (the financed portion) in
/// the markets
///
/// Same portfolio mechanics as renting, with no rent and no salary savings:
/// net worth is the after-tax portfolio alone. Merging this with a buy
/// forecast puts buy and rent scenarios on equal total-budget footing.
pub fn compute_market_forecast(params: &ScenarioParameters) -> Result<ForecastTable> {
    params.validate()?;

    let scenario_id = Uuid::new_v4();
    let factors = factor_series(params);
    let principal = params.exceeding_budget();

    let mut rows = Vec::with_capacity(params.time_period_years as usize);

    for index in 0..params.time_period_years as usize {
        let year = params.start_year + index as i32;

        let (portfolio_value, portfolio_value_after_tax) = portfolio_position(
            principal,
            factors.market[index],
            params.capital_gains_tax_rate,
        );

        rows.push(YearlyForecastRow {
            year,
            cumulative_inflation: factors.inflation[index],
            cumulative_appreciation: factors.appreciation[index],
            cumulative_market_return: factors.market[index],
            income: Money::ZERO,
            costs: Money::ZERO,
            cashflow: Money::ZERO,
            cumulative_cashflow: Money::ZERO,
            mortgage_payment: None,
            house_value: None,
            pending_principal: None,
            equity: None,
            portfolio_value: Some(portfolio_value),
            portfolio_value_after_tax: Some(portfolio_value_after_tax),
            net_worth: portfolio_value_after_tax,
            net_profit: Money::ZERO,
            roi: Decimal::ZERO,
            roi_change: None,
        });
    }

    finalize_returns(&mut rows, principal);

    Ok(ForecastTable {
        scenario_id,
        strategy: StrategyKind::MarketOpportunity,
        start_year: params.start_year,
        initial_investment: principal,
        rows,
        schedule: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_invests_the_financed_portion() {
        let params = ScenarioParameters::builder()
            .time_period_years(2)
            .start_year(2024)
            .financing(Money::from_major(200_000), Rate::from_percentage(50))
            .market_return_rate(Rate::from_decimal(dec!(0.05)))
            .capital_gains_tax_rate(Rate::from_percentage(20))
            .build()
            .unwrap();

        let table = compute_market_forecast(&params).unwrap();

        assert_eq!(table.initial_investment, Money::from_major(100_000));
        // 100k * 1.05 = 105k, 5k gain taxed at 20%
        assert_eq!(table.rows[0].net_worth, Money::from_major(104_000));
        assert!(table.rows.iter().all(|row| row.cashflow.is_zero()));
    }

    #[test]
    fn test_no_gain_means_no_tax() {
        let params = ScenarioParameters::builder()
            .time_period_years(5)
            .start_year(2024)
            .financing(Money::from_major(200_000), Rate::from_percentage(50))
            .capital_gains_tax_rate(Rate::from_percentage(40))
            .build()
            .unwrap();

        let table = compute_market_forecast(&params).unwrap();

        for row in &table.rows {
            assert_eq!(row.net_worth, Money::from_major(100_000));
            assert_eq!(row.roi, Decimal::ZERO);
        }
    }

    #[test]
    fn test_cash_purchase_leaves_nothing_to_invest() {
        let params = ScenarioParameters::builder()
            .time_period_years(3)
            .start_year(2024)
            .house(Money::from_major(200_000), Money::ZERO, Money::from_major(200_000))
            .market_return_rate(Rate::from_decimal(dec!(0.05)))
            .build()
            .unwrap();

        let table = compute_market_forecast(&params).unwrap();

        assert!(table.rows.iter().all(|row| row.net_worth.is_zero()));
    }
}
