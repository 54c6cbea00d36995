use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// currency amount, carried at full f64 precision
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    pub const ZERO: Money = Money(0.0);

    /// create from a raw amount
    pub fn new(amount: f64) -> Self {
        Money(amount)
    }

    /// create from whole currency units
    pub fn from_major(amount: i64) -> Self {
        Money(amount as f64)
    }

    /// get underlying value
    pub fn as_f64(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    pub fn min(self, other: Money) -> Money {
        Money(self.0.min(other.0))
    }

    /// interest for one period at the given periodic rate
    pub fn interest_at(&self, periodic_rate: f64) -> Money {
        Money(self.0 * periodic_rate)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for Money {
    fn from(v: f64) -> Self {
        Money(v)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 -= other.0;
    }
}

/// annual interest rate expressed as a percentage (12.0 is 12% per year)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Rate(f64);

impl Rate {
    pub const ZERO: Rate = Rate(0.0);

    /// create from annual percentage
    pub fn from_percentage(pct: f64) -> Self {
        Rate(pct)
    }

    /// get as annual percentage
    pub fn as_percentage(&self) -> f64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// monthly fraction from annual percentage
    pub fn monthly_rate(&self) -> f64 {
        self.0 / 100.0 / 12.0
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<f64> for Rate {
    fn from(v: f64) -> Self {
        Rate(v)
    }
}
