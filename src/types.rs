use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::amount::{Money, Rate};

/// inputs to a payoff projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebtParameters {
    pub total_debt: Money,
    pub monthly_payment: Money,
    pub annual_interest_rate: Rate,
}

impl DebtParameters {
    pub fn new(total_debt: f64, monthly_payment: f64, annual_interest_rate: f64) -> Self {
        Self {
            total_debt: Money::new(total_debt),
            monthly_payment: Money::new(monthly_payment),
            annual_interest_rate: Rate::from_percentage(annual_interest_rate),
        }
    }

    /// true when every field is a finite number
    pub fn is_finite(&self) -> bool {
        self.total_debt.is_finite()
            && self.monthly_payment.is_finite()
            && self.annual_interest_rate.is_finite()
    }
}

/// what the simulator hands back on success
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayoffOutcome {
    pub freedom_date: NaiveDate,
    pub total_months: u32,
    pub total_interest_paid: Money,
}

/// whole years and leftover months until a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub years: u32,
    pub months: u32,
}
