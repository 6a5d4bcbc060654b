use crate::config::ScenarioParameters;
use crate::decimal::Money;
use crate::errors::Result;
use crate::forecast::ForecastTable;
use crate::types::StrategyKind;

use super::property_forecast;

/// buy a home as a primary residence
///
/// No rental income; yearly costs are the mortgage payment plus maintenance
/// on the current (appreciated) house value. Net worth combines accumulated
/// cashflow with the equity built up in the property.
pub fn compute_buy_forecast(params: &ScenarioParameters) -> Result<ForecastTable> {
    property_forecast(params, StrategyKind::BuyToLive, |_house_value| {
        (Money::ZERO, Money::ZERO)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use rust_decimal_macros::dec;

    fn zero_rate_params() -> ScenarioParameters {
        // interest-free mortgage keeps every yearly figure hand-checkable:
        // 120k over 30 years is 4k principal per year
        ScenarioParameters::builder()
            .time_period_years(30)
            .start_year(2024)
            .house(
                Money::from_major(150_000),
                Money::from_major(120_000),
                Money::from_major(30_000),
            )
            .maintenance_rate(Rate::from_decimal(dec!(0.01)))
            .build()
            .unwrap()
    }

    #[test]
    fn test_first_year_hand_check() {
        let table = compute_buy_forecast(&zero_rate_params()).unwrap();
        let first = &table.rows[0];

        let cent = Money::CENT;
        assert!((first.costs - Money::from_major(5_500)).abs() < cent);
        assert!((first.cashflow + Money::from_major(5_500)).abs() < cent);
        assert!(
            (first.pending_principal.unwrap() - Money::from_major(116_000)).abs() < cent
        );
        assert!((first.equity.unwrap() - Money::from_major(34_000)).abs() < cent);
        assert!((first.net_worth - Money::from_major(28_500)).abs() < cent);
    }

    #[test]
    fn test_roi_out_of_pocket() {
        let table = compute_buy_forecast(&zero_rate_params()).unwrap();
        let first = &table.rows[0];

        // 1.5k loss on a 30k down payment
        assert_eq!(table.initial_investment, Money::from_major(30_000));
        assert!((first.net_profit + Money::from_major(1_500)).abs() < Money::CENT);
        assert!((first.roi - dec!(-0.05)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_no_rental_income() {
        let table = compute_buy_forecast(&zero_rate_params()).unwrap();
        assert!(table.rows.iter().all(|row| row.income.is_zero()));
    }

    #[test]
    fn test_maintenance_scales_with_house_value() {
        let params = ScenarioParameters::builder()
            .time_period_years(2)
            .start_year(2024)
            .house(Money::from_major(100_000), Money::ZERO, Money::from_major(100_000))
            .house_appreciation_rate(Rate::from_percentage(10))
            .maintenance_rate(Rate::from_decimal(dec!(0.01)))
            .build()
            .unwrap();

        let table = compute_buy_forecast(&params).unwrap();

        // upkeep follows the appreciated value, not the purchase price
        assert_eq!(table.rows[0].costs, Money::from_major(1_100));
        assert_eq!(table.rows[1].costs, Money::from_major(1_210));
    }

    #[test]
    fn test_equity_reaches_house_value_at_payoff() {
        let table = compute_buy_forecast(&zero_rate_params()).unwrap();
        let last = table.rows.last().unwrap();

        // flat market: the paid-off house is worth its purchase price
        assert!(
            (last.equity.unwrap() - Money::from_major(150_000)).abs() < Money::CENT
        );
        assert!(last.pending_principal.unwrap().abs() < Money::CENT);
    }

    #[test]
    fn test_schedule_embedded_by_value() {
        let table = compute_buy_forecast(&zero_rate_params()).unwrap();
        let schedule = table.schedule.as_ref().unwrap();

        assert_eq!(schedule.scenario_id, table.scenario_id);
        assert_eq!(schedule.term_years, 30);
        assert_eq!(schedule.years.len(), table.rows.len());
    }
}
