use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{ForecastError, Result};
use crate::types::ScenarioId;

/// one monthly installment of a fixed-payment mortgage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyInstallment {
    pub period: u32,
    pub year: i32,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
}

/// monthly installments of one calendar year summed together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyAmortizationRow {
    pub year: i32,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
}

/// amortization schedule for a fixed-rate, fully amortizing loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub scenario_id: ScenarioId,
    pub loan_amount: Money,
    pub annual_interest_rate: Rate,
    pub term_years: u32,
    pub start_year: i32,
    pub monthly_payment: Money,
    pub installments: Vec<MonthlyInstallment>,
    pub years: Vec<YearlyAmortizationRow>,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl AmortizationSchedule {
    /// generate the full schedule, monthly then aggregated per calendar year
    ///
    /// Installment components come from the closed-form annuity identities
    /// (remaining balance times rate for interest, payment minus interest for
    /// principal) rather than iterative balance subtraction, so no rounding
    /// drift accumulates across periods.
    pub fn generate(
        scenario_id: ScenarioId,
        loan_amount: Money,
        annual_interest_rate: Rate,
        term_years: u32,
        start_year: i32,
    ) -> Result<Self> {
        if term_years == 0 {
            return Err(ForecastError::InvalidParameter {
                field: "term_years",
                message: "loan term must be at least one year".to_string(),
            });
        }

        let monthly_rate = annual_interest_rate.monthly_rate().as_decimal();
        if monthly_rate == Decimal::NEGATIVE_ONE {
            return Err(ForecastError::InvalidParameter {
                field: "annual_interest_rate",
                message: "monthly rate of exactly -100% has no amortization".to_string(),
            });
        }

        let periods = term_years * 12;
        let monthly_payment = monthly_payment_amount(loan_amount, monthly_rate, periods)?;

        let mut installments = Vec::with_capacity(periods as usize);
        let base = Decimal::ONE + monthly_rate;
        // (1 + r)^(p-1), advanced one period at a time
        let mut growth = Decimal::ONE;

        for period in 1..=periods {
            let balance_before = if monthly_rate.is_zero() {
                loan_amount - monthly_payment * Decimal::from(period - 1)
            } else {
                // B(p) = L*(1+r)^(p-1) - PMT*((1+r)^(p-1) - 1)/r
                let annuity_factor = (growth - Decimal::ONE) / monthly_rate;
                loan_amount * growth - monthly_payment * annuity_factor
            };

            let interest = balance_before * monthly_rate;
            let principal = monthly_payment - interest;
            let year = start_year + ((period - 1) / 12) as i32;

            installments.push(MonthlyInstallment {
                period,
                year,
                payment: monthly_payment,
                principal,
                interest,
            });

            growth *= base;
        }

        let years = aggregate_by_year(&installments, start_year, term_years);
        verify_yearly_identity(&years)?;

        let total_interest = installments
            .iter()
            .map(|i| i.interest)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_payment = installments
            .iter()
            .map(|i| i.payment)
            .fold(Money::ZERO, |acc, x| acc + x);

        Ok(Self {
            scenario_id,
            loan_amount,
            annual_interest_rate,
            term_years,
            start_year,
            monthly_payment,
            installments,
            years,
            total_interest,
            total_payment,
        })
    }

    /// yearly row for a specific calendar year
    pub fn year_row(&self, year: i32) -> Option<&YearlyAmortizationRow> {
        self.years.iter().find(|row| row.year == year)
    }

    /// principal repaid through the given calendar year, inclusive
    pub fn cumulative_principal_through(&self, year: i32) -> Money {
        self.years
            .iter()
            .take_while(|row| row.year <= year)
            .map(|row| row.principal)
            .fold(Money::ZERO, |acc, x| acc + x)
    }

    /// balance still owed once the given calendar year has been paid
    pub fn pending_principal_after(&self, year: i32) -> Money {
        self.loan_amount - self.cumulative_principal_through(year)
    }
}

/// fixed monthly payment via the standard annuity formula
fn monthly_payment_amount(loan_amount: Money, monthly_rate: Decimal, periods: u32) -> Result<Money> {
    if monthly_rate.is_zero() {
        return Ok(loan_amount / Decimal::from(periods));
    }

    // PMT = L * r * (1 + r)^n / ((1 + r)^n - 1)
    let mut compound = Decimal::ONE;
    let base = Decimal::ONE + monthly_rate;
    for _ in 0..periods {
        compound *= base;
    }

    let denominator = compound - Decimal::ONE;
    if denominator.is_zero() {
        return Err(ForecastError::InvalidParameter {
            field: "annual_interest_rate",
            message: "annuity denominator vanishes for this rate and term".to_string(),
        });
    }

    let numerator = loan_amount.as_decimal() * monthly_rate * compound;
    Ok(Money::from_decimal(numerator / denominator))
}

/// sum the 12 monthly installments falling in each calendar year
fn aggregate_by_year(
    installments: &[MonthlyInstallment],
    start_year: i32,
    term_years: u32,
) -> Vec<YearlyAmortizationRow> {
    let mut years: Vec<YearlyAmortizationRow> = (0..term_years)
        .map(|offset| YearlyAmortizationRow {
            year: start_year + offset as i32,
            payment: Money::ZERO,
            principal: Money::ZERO,
            interest: Money::ZERO,
        })
        .collect();

    for installment in installments {
        let index = (installment.year - start_year) as usize;
        let row = &mut years[index];
        row.payment += installment.payment;
        row.principal += installment.principal;
        row.interest += installment.interest;
    }

    years
}

/// postcondition: payment == principal + interest per yearly row, at cent
/// precision; a violation is an implementation defect, never user input
fn verify_yearly_identity(years: &[YearlyAmortizationRow]) -> Result<()> {
    for row in years {
        let recomposed = (row.principal + row.interest).round_dp(2);
        if row.payment.round_dp(2) != recomposed {
            return Err(ForecastError::InternalConsistency {
                message: format!(
                    "year {}: payment {} != principal + interest {}",
                    row.year,
                    row.payment.round_dp(2),
                    recomposed
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn generate(
        loan: Money,
        annual_rate: Rate,
        term_years: u32,
        start_year: i32,
    ) -> Result<AmortizationSchedule> {
        AmortizationSchedule::generate(Uuid::new_v4(), loan, annual_rate, term_years, start_year)
    }

    #[test]
    fn test_reference_monthly_payment() {
        // 100k at 3% over 30 years is the classic 421.60/month case
        let schedule = generate(
            Money::from_major(100_000),
            Rate::from_decimal(dec!(0.03)),
            30,
            2024,
        )
        .unwrap();

        assert_eq!(
            schedule.monthly_payment.round_dp(2),
            Money::from_str_exact("421.60").unwrap()
        );
    }

    #[test]
    fn test_yearly_identity_holds() {
        let schedule = generate(
            Money::from_major(160_000),
            Rate::from_decimal(dec!(0.028)),
            30,
            2024,
        )
        .unwrap();

        assert_eq!(schedule.years.len(), 30);
        for row in &schedule.years {
            assert_eq!(
                row.payment.round_dp(2),
                (row.principal + row.interest).round_dp(2),
                "identity broken in year {}",
                row.year
            );
        }
    }

    #[test]
    fn test_fully_amortized() {
        let loan = Money::from_major(160_000);
        let schedule = generate(loan, Rate::from_decimal(dec!(0.028)), 30, 2024).unwrap();

        let repaid = schedule
            .years
            .iter()
            .map(|row| row.principal)
            .fold(Money::ZERO, |acc, x| acc + x);

        assert!((repaid - loan).abs() < Money::CENT);
        assert!(schedule.pending_principal_after(2053).abs() < Money::CENT);
    }

    #[test]
    fn test_yearly_payment_is_twelve_installments() {
        let schedule = generate(
            Money::from_major(160_000),
            Rate::from_decimal(dec!(0.028)),
            30,
            2024,
        )
        .unwrap();

        let first_year = &schedule.years[0];
        let expected = schedule.monthly_payment * dec!(12);
        assert!((first_year.payment - expected).abs() < Money::CENT);
        assert_eq!(first_year.year, 2024);
        assert_eq!(schedule.years.last().unwrap().year, 2053);

        // pmt(0.028/12, 360, 160000) lands at 657.43/month
        let monthly = schedule.monthly_payment;
        assert!(monthly > Money::from_major(655) && monthly < Money::from_major(660));
    }

    #[test]
    fn test_zero_rate_degenerates_to_straight_line() {
        let loan = Money::from_major(120_000);
        let schedule = generate(loan, Rate::ZERO, 10, 2024).unwrap();

        assert_eq!(schedule.monthly_payment, loan / dec!(120));
        for installment in &schedule.installments {
            assert_eq!(installment.interest, Money::ZERO);
            assert_eq!(installment.principal, installment.payment);
        }
        // every yearly row repays exactly a tenth of the loan
        for row in &schedule.years {
            assert!((row.principal - loan / dec!(10)).abs() < Money::CENT);
        }
    }

    #[test]
    fn test_zero_loan_is_degenerate_not_error() {
        let schedule = generate(Money::ZERO, Rate::from_decimal(dec!(0.03)), 5, 2024).unwrap();

        assert_eq!(schedule.years.len(), 5);
        for row in &schedule.years {
            assert_eq!(row.payment, Money::ZERO);
            assert_eq!(row.principal, Money::ZERO);
            assert_eq!(row.interest, Money::ZERO);
        }
    }

    #[test]
    fn test_negative_rate_accepted() {
        let loan = Money::from_major(100_000);
        let schedule = generate(loan, Rate::from_decimal(dec!(-0.01)), 10, 2024).unwrap();

        // borrower pays back less than borrowed when rates go negative
        assert!(schedule.total_payment < loan);

        let repaid = schedule
            .years
            .iter()
            .map(|row| row.principal)
            .fold(Money::ZERO, |acc, x| acc + x);
        assert!((repaid - loan).abs() < Money::CENT);
    }

    #[test]
    fn test_zero_term_rejected() {
        let result = generate(Money::from_major(100_000), Rate::from_decimal(dec!(0.03)), 0, 2024);

        match result {
            Err(ForecastError::InvalidParameter { field, .. }) => {
                assert_eq!(field, "term_years");
            }
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_pending_principal_decreases() {
        let schedule = generate(
            Money::from_major(200_000),
            Rate::from_decimal(dec!(0.035)),
            20,
            2024,
        )
        .unwrap();

        let mut previous = schedule.loan_amount;
        for row in &schedule.years {
            let pending = schedule.pending_principal_after(row.year);
            assert!(pending < previous);
            previous = pending;
        }
    }

    #[test]
    fn test_interest_declines_over_time() {
        let schedule = generate(
            Money::from_major(150_000),
            Rate::from_decimal(dec!(0.04)),
            15,
            2024,
        )
        .unwrap();

        for pair in schedule.years.windows(2) {
            assert!(pair[1].interest < pair[0].interest);
            assert!(pair[1].principal > pair[0].principal);
        }
    }
}
