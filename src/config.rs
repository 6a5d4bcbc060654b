use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{ForecastError, Result};

/// convenience for callers that want forecasts anchored to the wall-clock
/// year; the engine itself only ever sees the explicit start_year
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// maximum house price affordable within a total budget once buying
/// transaction costs are paid
pub fn affordable_house_price(budget: Money, buying_transaction_cost_rate: Rate) -> Money {
    budget / buying_transaction_cost_rate.growth_factor()
}

/// immutable input bundle for one forecast run
///
/// All fields are fully specified; default selection and range clamping are
/// the caller's responsibility. `house_price = down_payment + loan_amount`
/// is a caller-side invariant, not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    /// forecast horizon in years, must be positive
    pub time_period_years: u32,
    /// first calendar year of the forecast
    pub start_year: i32,

    pub house_price: Money,
    pub loan_amount: Money,
    pub down_payment: Money,

    pub annual_interest_rate: Rate,
    pub house_appreciation_rate: Rate,
    pub inflation_rate: Rate,
    pub market_return_rate: Rate,
    pub capital_gains_tax_rate: Rate,
    pub maintenance_rate: Rate,
    pub buying_transaction_cost_rate: Rate,
    pub selling_transaction_cost_rate: Rate,
    /// platform/agency cut of gross short-term rental income
    pub service_fee_rate: Rate,
    /// expected yearly long-term rent as a fraction of current house value
    pub rent_expectation_rate: Rate,

    pub net_annual_income: Money,
    pub rent_initial_amount: Money,
    /// fixed yearly supplies for a short-term rental at full occupancy
    pub annual_supplies: Money,

    /// fraction of the year a short-term rental is advertised as available
    pub occupancy_rate: Rate,
    /// nightly short-term premium over the long-term rent basis
    pub nightly_rate_multiplier: Decimal,
    /// nights per year reserved for the owner's own use
    pub private_use_nights: u32,
}

impl ScenarioParameters {
    /// builder with neutral defaults
    pub fn builder() -> ScenarioParametersBuilder {
        ScenarioParametersBuilder::new()
    }

    /// reject parameter sets the engine cannot compute on, naming the field
    pub fn validate(&self) -> Result<()> {
        if self.time_period_years == 0 {
            return Err(ForecastError::InvalidParameter {
                field: "time_period_years",
                message: "forecast horizon must be at least one year".to_string(),
            });
        }

        if self.annual_interest_rate.monthly_rate().as_decimal() == Decimal::NEGATIVE_ONE {
            return Err(ForecastError::InvalidParameter {
                field: "annual_interest_rate",
                message: "monthly rate of exactly -100% has no amortization".to_string(),
            });
        }

        Ok(())
    }

    /// total cash a buyer needs up front: purchase price plus buying costs;
    /// the renter keeps this amount invested instead
    pub fn total_budget(&self) -> Money {
        self.house_price * self.buying_transaction_cost_rate.growth_factor()
    }

    /// amount a buyer does not hand over at purchase and can keep invested
    pub fn exceeding_budget(&self) -> Money {
        self.loan_amount
    }

    /// out-of-pocket base for ROI: the down payment, or the full price for
    /// an unfinanced purchase
    pub fn initial_investment(&self) -> Money {
        if self.loan_amount.is_zero() {
            self.house_price
        } else {
            self.down_payment
        }
    }

    /// yearly long-term rent expected from a property at its current value
    pub fn expected_annual_rent(&self, house_value: Money) -> Money {
        house_value.at_rate(self.rent_expectation_rate)
    }
}

/// builder for scenario parameters
pub struct ScenarioParametersBuilder {
    time_period_years: Option<u32>,
    start_year: Option<i32>,
    house_price: Money,
    loan_amount: Money,
    down_payment: Money,
    annual_interest_rate: Rate,
    house_appreciation_rate: Rate,
    inflation_rate: Rate,
    market_return_rate: Rate,
    capital_gains_tax_rate: Rate,
    maintenance_rate: Rate,
    buying_transaction_cost_rate: Rate,
    selling_transaction_cost_rate: Rate,
    service_fee_rate: Rate,
    rent_expectation_rate: Rate,
    net_annual_income: Money,
    rent_initial_amount: Money,
    annual_supplies: Money,
    occupancy_rate: Rate,
    nightly_rate_multiplier: Decimal,
    private_use_nights: u32,
}

impl ScenarioParametersBuilder {
    pub fn new() -> Self {
        Self {
            time_period_years: None,
            start_year: None,
            house_price: Money::ZERO,
            loan_amount: Money::ZERO,
            down_payment: Money::ZERO,
            annual_interest_rate: Rate::ZERO,
            house_appreciation_rate: Rate::ZERO,
            inflation_rate: Rate::ZERO,
            market_return_rate: Rate::ZERO,
            capital_gains_tax_rate: Rate::ZERO,
            maintenance_rate: Rate::ZERO,
            buying_transaction_cost_rate: Rate::ZERO,
            selling_transaction_cost_rate: Rate::ZERO,
            service_fee_rate: Rate::ZERO,
            rent_expectation_rate: Rate::ZERO,
            net_annual_income: Money::ZERO,
            rent_initial_amount: Money::ZERO,
            annual_supplies: Money::ZERO,
            occupancy_rate: Rate::ZERO,
            nightly_rate_multiplier: Decimal::ONE,
            private_use_nights: 0,
        }
    }

    pub fn time_period_years(mut self, years: u32) -> Self {
        self.time_period_years = Some(years);
        self
    }

    pub fn start_year(mut self, year: i32) -> Self {
        self.start_year = Some(year);
        self
    }

    /// set the purchase split explicitly
    pub fn house(mut self, house_price: Money, loan_amount: Money, down_payment: Money) -> Self {
        self.house_price = house_price;
        self.loan_amount = loan_amount;
        self.down_payment = down_payment;
        self
    }

    /// derive the purchase split from a house price and a down-payment rate
    pub fn financing(mut self, house_price: Money, down_payment_rate: Rate) -> Self {
        let down_payment = house_price.at_rate(down_payment_rate);
        self.house_price = house_price;
        self.down_payment = down_payment;
        self.loan_amount = house_price - down_payment;
        self
    }

    pub fn annual_interest_rate(mut self, rate: Rate) -> Self {
        self.annual_interest_rate = rate;
        self
    }

    pub fn house_appreciation_rate(mut self, rate: Rate) -> Self {
        self.house_appreciation_rate = rate;
        self
    }

    pub fn inflation_rate(mut self, rate: Rate) -> Self {
        self.inflation_rate = rate;
        self
    }

    pub fn market_return_rate(mut self, rate: Rate) -> Self {
        self.market_return_rate = rate;
        self
    }

    pub fn capital_gains_tax_rate(mut self, rate: Rate) -> Self {
        self.capital_gains_tax_rate = rate;
        self
    }

    pub fn maintenance_rate(mut self, rate: Rate) -> Self {
        self.maintenance_rate = rate;
        self
    }

    pub fn buying_transaction_cost_rate(mut self, rate: Rate) -> Self {
        self.buying_transaction_cost_rate = rate;
        self
    }

    pub fn selling_transaction_cost_rate(mut self, rate: Rate) -> Self {
        self.selling_transaction_cost_rate = rate;
        self
    }

    pub fn service_fee_rate(mut self, rate: Rate) -> Self {
        self.service_fee_rate = rate;
        self
    }

    pub fn rent_expectation_rate(mut self, rate: Rate) -> Self {
        self.rent_expectation_rate = rate;
        self
    }

    pub fn net_annual_income(mut self, amount: Money) -> Self {
        self.net_annual_income = amount;
        self
    }

    pub fn rent_initial_amount(mut self, amount: Money) -> Self {
        self.rent_initial_amount = amount;
        self
    }

    pub fn annual_supplies(mut self, amount: Money) -> Self {
        self.annual_supplies = amount;
        self
    }

    pub fn occupancy_rate(mut self, rate: Rate) -> Self {
        self.occupancy_rate = rate;
        self
    }

    pub fn nightly_rate_multiplier(mut self, multiplier: Decimal) -> Self {
        self.nightly_rate_multiplier = multiplier;
        self
    }

    pub fn private_use_nights(mut self, nights: u32) -> Self {
        self.private_use_nights = nights;
        self
    }

    /// assemble and validate the parameter set
    pub fn build(self) -> Result<ScenarioParameters> {
        let time_period_years = self.time_period_years.ok_or_else(|| {
            ForecastError::InvalidParameter {
                field: "time_period_years",
                message: "forecast horizon not set".to_string(),
            }
        })?;
        let start_year = self.start_year.ok_or_else(|| ForecastError::InvalidParameter {
            field: "start_year",
            message: "start year not set".to_string(),
        })?;

        let params = ScenarioParameters {
            time_period_years,
            start_year,
            house_price: self.house_price,
            loan_amount: self.loan_amount,
            down_payment: self.down_payment,
            annual_interest_rate: self.annual_interest_rate,
            house_appreciation_rate: self.house_appreciation_rate,
            inflation_rate: self.inflation_rate,
            market_return_rate: self.market_return_rate,
            capital_gains_tax_rate: self.capital_gains_tax_rate,
            maintenance_rate: self.maintenance_rate,
            buying_transaction_cost_rate: self.buying_transaction_cost_rate,
            selling_transaction_cost_rate: self.selling_transaction_cost_rate,
            service_fee_rate: self.service_fee_rate,
            rent_expectation_rate: self.rent_expectation_rate,
            net_annual_income: self.net_annual_income,
            rent_initial_amount: self.rent_initial_amount,
            annual_supplies: self.annual_supplies,
            occupancy_rate: self.occupancy_rate,
            nightly_rate_multiplier: self.nightly_rate_multiplier,
            private_use_nights: self.private_use_nights,
        };

        params.validate()?;
        Ok(params)
    }
}

impl Default for ScenarioParametersBuilder {
    fn default() -> Self {
        Self::new()
    }
}
