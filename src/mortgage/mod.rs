pub mod amortization;

pub use amortization::{AmortizationSchedule, MonthlyInstallment, YearlyAmortizationRow};
