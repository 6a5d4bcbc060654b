use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::ScenarioParameters;
use crate::decimal::Money;
use crate::errors::Result;
use crate::forecast::{ForecastTable, YearlyForecastRow};
use crate::types::StrategyKind;

use super::{factor_series, finalize_returns, portfolio_position};

/// rent a home and keep the full purchase budget invested in the markets
///
/// Rent and net income both track cumulative inflation; the yearly surplus
/// accumulates as savings next to the invested budget.
pub fn compute_rent_forecast(params: &ScenarioParameters) -> Result<ForecastTable> {
    params.validate()?;

    let scenario_id = Uuid::new_v4();
    let factors = factor_series(params);
    let budget = params.total_budget();

    let mut rows = Vec::with_capacity(params.time_period_years as usize);
    let mut cumulative_savings = Money::ZERO;

    for index in 0..params.time_period_years as usize {
        let year = params.start_year + index as i32;
        let cumulative_inflation = factors.inflation[index];

        let rent_amount = params.rent_initial_amount * cumulative_inflation;
        let income = params.net_annual_income * cumulative_inflation;
        let savings = income - rent_amount;
        cumulative_savings += savings;

        let (portfolio_value, portfolio_value_after_tax) = portfolio_position(
            budget,
            factors.market[index],
            params.capital_gains_tax_rate,
        );

        let net_worth = portfolio_value_after_tax + cumulative_savings;

        rows.push(YearlyForecastRow {
            year,
            cumulative_inflation,
            cumulative_appreciation: factors.appreciation[index],
            cumulative_market_return: factors.market[index],
            income,
            costs: rent_amount,
            cashflow: savings,
            cumulative_cashflow: cumulative_savings,
            mortgage_payment: None,
            house_value: None,
            pending_principal: None,
            equity: None,
            portfolio_value: Some(portfolio_value),
            portfolio_value_after_tax: Some(portfolio_value_after_tax),
            net_worth,
            net_profit: Money::ZERO,
            roi: Decimal::ZERO,
            roi_change: None,
        });
    }

    finalize_returns(&mut rows, budget);

    Ok(ForecastTable {
        scenario_id,
        strategy: StrategyKind::RentAndInvest,
        start_year: params.start_year,
        initial_investment: budget,
        rows,
        schedule: None,
    })
}
