use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::mortgage::AmortizationSchedule;
use crate::types::{ScenarioId, StrategyKind};

/// one year of a scenario forecast
///
/// Property columns are present for buy strategies, portfolio columns for
/// investment strategies; both stay `None` where the strategy has no such
/// position. All three compounding factors are carried on every row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyForecastRow {
    pub year: i32,

    pub cumulative_inflation: Decimal,
    pub cumulative_appreciation: Decimal,
    pub cumulative_market_return: Decimal,

    pub income: Money,
    pub costs: Money,
    pub cashflow: Money,
    pub cumulative_cashflow: Money,

    pub mortgage_payment: Option<Money>,
    pub house_value: Option<Money>,
    pub pending_principal: Option<Money>,
    pub equity: Option<Money>,

    pub portfolio_value: Option<Money>,
    pub portfolio_value_after_tax: Option<Money>,

    pub net_worth: Money,
    pub net_profit: Money,
    /// cumulative return on the initial out-of-pocket investment
    pub roi: Decimal,
    /// year-over-year change of net worth; None for year 1 (no prior value)
    pub roi_change: Option<Decimal>,
}

/// yearly forecast for one strategy, built fresh per invocation and never
/// mutated afterwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastTable {
    pub scenario_id: ScenarioId,
    pub strategy: StrategyKind,
    pub start_year: i32,
    pub initial_investment: Money,
    pub rows: Vec<YearlyForecastRow>,
    /// embedded by value for mortgage-bearing strategies so the forecast
    /// replays from parameters alone
    pub schedule: Option<AmortizationSchedule>,
}

impl ForecastTable {
    /// row for a specific calendar year
    pub fn year_row(&self, year: i32) -> Option<&YearlyForecastRow> {
        self.rows.iter().find(|row| row.year == year)
    }

    /// net worth at the end of the horizon
    pub fn final_net_worth(&self) -> Option<Money> {
        self.rows.last().map(|row| row.net_worth)
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn sample_row(year: i32, net_worth: Money) -> YearlyForecastRow {
        YearlyForecastRow {
            year,
            cumulative_inflation: dec!(1.04),
            cumulative_appreciation: dec!(1.02),
            cumulative_market_return: dec!(1.05),
            income: Money::ZERO,
            costs: Money::from_major(5_000),
            cashflow: -Money::from_major(5_000),
            cumulative_cashflow: -Money::from_major(5_000),
            mortgage_payment: Some(Money::from_major(4_000)),
            house_value: Some(Money::from_major(153_000)),
            pending_principal: Some(Money::from_major(116_000)),
            equity: Some(Money::from_major(37_000)),
            portfolio_value: None,
            portfolio_value_after_tax: None,
            net_worth,
            net_profit: net_worth - Money::from_major(30_000),
            roi: dec!(0.0667),
            roi_change: None,
        }
    }

    #[test]
    fn test_year_lookup_and_final_net_worth() {
        let table = ForecastTable {
            scenario_id: Uuid::new_v4(),
            strategy: StrategyKind::BuyToLive,
            start_year: 2024,
            initial_investment: Money::from_major(30_000),
            rows: vec![
                sample_row(2024, Money::from_major(32_000)),
                sample_row(2025, Money::from_major(34_500)),
            ],
            schedule: None,
        };

        assert_eq!(
            table.year_row(2025).unwrap().net_worth,
            Money::from_major(34_500)
        );
        assert!(table.year_row(2030).is_none());
        assert_eq!(table.final_net_worth(), Some(Money::from_major(34_500)));
    }

    #[test]
    fn test_table_json_round_trip() {
        let table = ForecastTable {
            scenario_id: Uuid::new_v4(),
            strategy: StrategyKind::RentAndInvest,
            start_year: 2024,
            initial_investment: Money::from_major(350_000),
            rows: vec![sample_row(2024, Money::from_major(360_000))],
            schedule: None,
        };

        let json = table.to_json_pretty().unwrap();
        let back: ForecastTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back.strategy, table.strategy);
        assert_eq!(back.rows, table.rows);
    }
}
