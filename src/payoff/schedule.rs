use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::amount::Money;
use crate::errors::Result;
use crate::payoff::simulator::PayoffSimulator;
use crate::types::{DebtParameters, PayoffOutcome};

/// one month of a payoff schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub month: u32,
    pub payment_date: NaiveDate,
    pub beginning_balance: Money,
    pub interest: Money,
    pub payment: Money,
    pub principal: Money,
    pub ending_balance: Money,
    pub cumulative_interest: Money,
}

/// month-by-month breakdown of a payoff projection
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffSchedule {
    pub outcome: PayoffOutcome,
    pub payments: Vec<ScheduledPayment>,
}

impl PayoffSchedule {
    /// sum of all payments made
    pub fn total_paid(&self) -> Money {
        self.payments
            .iter()
            .map(|p| p.payment)
            .fold(Money::ZERO, |acc, x| acc + x)
    }

    /// get payment for a given month, 1-based
    pub fn get_payment(&self, month: u32) -> Option<&ScheduledPayment> {
        month
            .checked_sub(1)
            .and_then(|i| self.payments.get(i as usize))
    }
}

impl PayoffSimulator {
    /// run the projection and keep every month's figures
    pub fn schedule(
        &self,
        params: &DebtParameters,
        time_provider: &SafeTimeProvider,
    ) -> Result<PayoffSchedule> {
        self.schedule_from(params, time_provider.now().date_naive())
    }

    pub fn schedule_from(&self, params: &DebtParameters, today: NaiveDate) -> Result<PayoffSchedule> {
        let mut payments = Vec::new();
        let outcome = self.run(params, today, Some(&mut payments))?;
        Ok(PayoffSchedule { outcome, payments })
    }
}
