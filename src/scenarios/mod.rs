pub mod buy;
pub mod market;
pub mod rent;
pub mod rental;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::ScenarioParameters;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::forecast::{ForecastTable, YearlyForecastRow};
use crate::growth::GrowthCurve;
use crate::mortgage::AmortizationSchedule;
use crate::types::StrategyKind;

pub use buy::compute_buy_forecast;
pub use market::compute_market_forecast;
pub use rent::compute_rent_forecast;
pub use rental::{compute_long_term_rental_forecast, compute_short_term_rental_forecast};

/// compute the forecast for any strategy
pub fn compute_forecast(
    params: &ScenarioParameters,
    strategy: StrategyKind,
) -> Result<ForecastTable> {
    match strategy {
        StrategyKind::RentAndInvest => compute_rent_forecast(params),
        StrategyKind::BuyToLive => compute_buy_forecast(params),
        StrategyKind::BuyToRentLongTerm => compute_long_term_rental_forecast(params),
        StrategyKind::BuyToRentShortTerm => compute_short_term_rental_forecast(params),
        StrategyKind::MarketOpportunity => compute_market_forecast(params),
    }
}

/// the three compounding factor series every forecast row carries
pub(crate) struct FactorSeries {
    pub inflation: Vec<Decimal>,
    pub appreciation: Vec<Decimal>,
    pub market: Vec<Decimal>,
}

pub(crate) fn factor_series(params: &ScenarioParameters) -> FactorSeries {
    let years = params.time_period_years;
    FactorSeries {
        inflation: GrowthCurve::new(params.inflation_rate).series(years),
        appreciation: GrowthCurve::new(params.house_appreciation_rate).series(years),
        market: GrowthCurve::new(params.market_return_rate).series(years),
    }
}

/// portfolio value and its after-tax counterpart for an invested budget;
/// tax applies to the gain over cost basis only, never the principal
pub(crate) fn portfolio_position(
    budget: Money,
    market_factor: Decimal,
    capital_gains_tax_rate: Rate,
) -> (Money, Money) {
    let value = budget * market_factor;
    let gain = value - budget;
    let after_tax = value - gain.at_rate(capital_gains_tax_rate);
    (value, after_tax)
}

/// fill net profit, cumulative ROI, and year-over-year ROI once every row's
/// net worth is known
pub(crate) fn finalize_returns(rows: &mut [YearlyForecastRow], initial_investment: Money) {
    let mut previous_net_worth: Option<Money> = None;

    for row in rows.iter_mut() {
        row.net_profit = row.net_worth - initial_investment;
        row.roi = if initial_investment.is_zero() {
            Decimal::ZERO
        } else {
            row.net_profit.as_decimal() / initial_investment.as_decimal()
        };
        row.roi_change = previous_net_worth.and_then(|previous| {
            if previous.is_zero() {
                None
            } else {
                Some((row.net_worth - previous).as_decimal() / previous.as_decimal())
            }
        });
        previous_net_worth = Some(row.net_worth);
    }
}

/// shared per-year loop for every strategy that owns the property; the
/// `income_and_extra_costs` hook supplies rental income and rental-specific
/// costs on top of mortgage payment and maintenance
pub(crate) fn property_forecast(
    params: &ScenarioParameters,
    strategy: StrategyKind,
    income_and_extra_costs: impl Fn(Money) -> (Money, Money),
) -> Result<ForecastTable> {
    params.validate()?;

    let scenario_id = Uuid::new_v4();
    let schedule = AmortizationSchedule::generate(
        scenario_id,
        params.loan_amount,
        params.annual_interest_rate,
        params.time_period_years,
        params.start_year,
    )?;

    let factors = factor_series(params);
    let initial_investment = params.initial_investment();

    let mut rows = Vec::with_capacity(params.time_period_years as usize);
    let mut cumulative_principal = Money::ZERO;
    let mut cumulative_cashflow = Money::ZERO;

    for (index, amortization) in schedule.years.iter().enumerate() {
        cumulative_principal += amortization.principal;
        let pending_principal = params.loan_amount - cumulative_principal;

        let house_value = params.house_price * factors.appreciation[index];
        let equity = house_value - pending_principal;

        let (income, extra_costs) = income_and_extra_costs(house_value);
        let costs = amortization.payment + house_value.at_rate(params.maintenance_rate) + extra_costs;

        let cashflow = income - costs;
        cumulative_cashflow += cashflow;

        let net_worth = cumulative_cashflow + equity;

        rows.push(YearlyForecastRow {
            year: amortization.year,
            cumulative_inflation: factors.inflation[index],
            cumulative_appreciation: factors.appreciation[index],
            cumulative_market_return: factors.market[index],
            income,
            costs,
            cashflow,
            cumulative_cashflow,
            mortgage_payment: Some(amortization.payment),
            house_value: Some(house_value),
            pending_principal: Some(pending_principal),
            equity: Some(equity),
            portfolio_value: None,
            portfolio_value_after_tax: None,
            net_worth,
            net_profit: Money::ZERO,
            roi: Decimal::ZERO,
            roi_change: None,
        });
    }

    finalize_returns(&mut rows, initial_investment);

    Ok(ForecastTable {
        scenario_id,
        strategy,
        start_year: params.start_year,
        initial_investment,
        rows,
        schedule: Some(schedule),
    })
}
