use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::ScenarioParameters;
use crate::decimal::Money;
use crate::errors::Result;
use crate::forecast::ForecastTable;
use crate::types::StrategyKind;

use super::property_forecast;

/// buy a property and let it on a yearly lease
///
/// Rental income is a fixed fraction of the current house value, so it
/// appreciates with the property.
pub fn compute_long_term_rental_forecast(params: &ScenarioParameters) -> Result<ForecastTable> {
    property_forecast(params, StrategyKind::BuyToRentLongTerm, |house_value| {
        (params.expected_annual_rent(house_value), Money::ZERO)
    })
}

/// buy a property and let it by the night
///
/// Gross income anchors to the expected yearly long-term rent, scaled by the
/// nightly premium and the effective occupancy. The platform takes a cut of
/// gross income, and supplies are prorated by occupancy.
pub fn compute_short_term_rental_forecast(params: &ScenarioParameters) -> Result<ForecastTable> {
    let occupancy = effective_occupancy(params);

    property_forecast(params, StrategyKind::BuyToRentShortTerm, |house_value| {
        let rent_basis = params.expected_annual_rent(house_value);
        let gross_income = rent_basis * params.nightly_rate_multiplier * occupancy;

        let service_fee = gross_income.at_rate(params.service_fee_rate);
        let supplies = params.annual_supplies * occupancy;

        (gross_income, service_fee + supplies)
    })
}

/// fraction of the year actually let out: advertised occupancy minus the
/// owner's private-use nights, clamped at zero (private use beyond the
/// advertised availability must not invert the revenue sign)
fn effective_occupancy(params: &ScenarioParameters) -> Decimal {
    let private_share = Decimal::from(params.private_use_nights) / dec!(365);
    (params.occupancy_rate.as_decimal() - private_share).max(Decimal::ZERO)
}
