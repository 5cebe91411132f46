//! Monthly-equivalent normalization

use std::fmt;
use std::ops::{Add, AddAssign};

use crate::models::{Frequency, Money};

/// Weekly-to-monthly multiplier (52 weeks / 12 months, to two places)
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// A fractional amount of cents per month
///
/// Kept unrounded so totals aggregate exactly; use [`MonthlyAmount::to_money`]
/// or `Display` to get whole cents.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct MonthlyAmount(f64);

impl MonthlyAmount {
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Unrounded cents
    pub fn cents(&self) -> f64 {
        self.0
    }

    /// Unrounded currency units
    pub fn units(&self) -> f64 {
        self.0 / 100.0
    }

    /// Round half away from zero to whole cents
    pub fn to_money(&self) -> Money {
        Money::from_cents(self.0.round() as i64)
    }

    /// Divide evenly, e.g. to get an average; zero when `count` is zero
    pub fn per(&self, count: usize) -> Self {
        if count == 0 {
            Self::zero()
        } else {
            Self(self.0 / count as f64)
        }
    }
}

impl From<Money> for MonthlyAmount {
    fn from(money: Money) -> Self {
        Self(money.cents() as f64)
    }
}

impl fmt::Display for MonthlyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_money())
    }
}

impl Add for MonthlyAmount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for MonthlyAmount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for MonthlyAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MonthlyAmount::zero(), |acc, m| acc + m)
    }
}

/// Express a per-period amount as a per-month amount
///
/// Unrecognized frequencies are counted as monthly.
pub fn normalize_to_monthly(amount: Money, frequency: &Frequency) -> MonthlyAmount {
    let cents = amount.cents() as f64;
    let monthly = match frequency {
        Frequency::Weekly => cents * WEEKS_PER_MONTH,
        Frequency::Monthly => cents,
        Frequency::Quarterly => cents / 3.0,
        Frequency::Yearly => cents / 12.0,
        Frequency::Unrecognized(_) => cents,
    };
    MonthlyAmount(monthly)
}
