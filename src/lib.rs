pub mod comparison;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod forecast;
pub mod growth;
pub mod mortgage;
pub mod scenarios;
pub mod types;

// re-export key types
pub use comparison::{ComparisonCell, ComparisonColumn, ComparisonRow, ScenarioComparison};
pub use config::{affordable_house_price, current_year, ScenarioParameters, ScenarioParametersBuilder};
pub use decimal::{Money, Rate};
pub use errors::{ForecastError, Result};
pub use forecast::{ForecastTable, YearlyForecastRow};
pub use growth::GrowthCurve;
pub use mortgage::{AmortizationSchedule, MonthlyInstallment, YearlyAmortizationRow};
pub use scenarios::{
    compute_buy_forecast, compute_forecast, compute_long_term_rental_forecast,
    compute_market_forecast, compute_rent_forecast, compute_short_term_rental_forecast,
};
pub use types::{ScenarioId, StrategyKind};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
