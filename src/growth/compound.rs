use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};

/// geometric growth curve for a compounding process (inflation, house
/// appreciation, market return)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthCurve {
    pub rate: Rate,
}

impl GrowthCurve {
    pub fn new(rate: Rate) -> Self {
        Self { rate }
    }

    /// cumulative factor (1 + r)^k after k whole periods
    pub fn factor_at(&self, periods: u32) -> Decimal {
        let base = self.rate.growth_factor();
        let mut factor = Decimal::ONE;
        for _ in 0..periods {
            factor *= base;
        }
        factor
    }

    /// cumulative factor series [(1+r)^1, ..., (1+r)^n], one entry per year
    pub fn series(&self, periods: u32) -> Vec<Decimal> {
        let base = self.rate.growth_factor();
        let mut factors = Vec::with_capacity(periods as usize);
        let mut factor = Decimal::ONE;
        for _ in 0..periods {
            factor *= base;
            factors.push(factor);
        }
        factors
    }

    /// grow a base amount for k whole periods
    pub fn grow(&self, amount: Money, periods: u32) -> Money {
        amount * self.factor_at(periods)
    }
}
