use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use tracing::debug;

use crate::amount::Money;
use crate::config::SimulatorConfig;
use crate::errors::{PayoffError, Result};
use crate::payoff::calendar::add_months;
use crate::payoff::schedule::ScheduledPayment;
use crate::types::{DebtParameters, PayoffOutcome};

/// month-by-month payoff simulation for a fixed payment and flat rate
#[derive(Debug, Clone, Default)]
pub struct PayoffSimulator {
    config: SimulatorConfig,
}

impl PayoffSimulator {
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// project the debt freedom date, taking "today" from the time provider
    pub fn simulate(
        &self,
        params: &DebtParameters,
        time_provider: &SafeTimeProvider,
    ) -> Result<PayoffOutcome> {
        self.simulate_from(params, time_provider.now().date_naive())
    }

    /// project the debt freedom date counting from `today`
    pub fn simulate_from(&self, params: &DebtParameters, today: NaiveDate) -> Result<PayoffOutcome> {
        self.run(params, today, None)
    }

    /// shared loop behind `simulate` and `schedule`; rows are only built
    /// when a sink is passed so the plain projection never allocates
    pub(crate) fn run(
        &self,
        params: &DebtParameters,
        today: NaiveDate,
        mut rows: Option<&mut Vec<ScheduledPayment>>,
    ) -> Result<PayoffOutcome> {
        let initial_balance = params.total_debt;

        // already debt free
        if !initial_balance.is_positive() {
            return Ok(PayoffOutcome {
                freedom_date: today,
                total_months: 0,
                total_interest_paid: Money::ZERO,
            });
        }

        if !params.is_finite() {
            return Err(PayoffError::Calculation {
                message: format!(
                    "non-finite input: debt {:?}, payment {:?}, rate {:?}",
                    params.total_debt, params.monthly_payment, params.annual_interest_rate
                ),
            });
        }

        let monthly_payment = params.monthly_payment;
        let monthly_rate = params.annual_interest_rate.monthly_rate();

        // balance never grows once the first month's interest is covered
        let first_month_interest = initial_balance.interest_at(monthly_rate);
        if params.annual_interest_rate.is_positive() && monthly_payment <= first_month_interest {
            debug!(
                payment = monthly_payment.as_f64(),
                first_month_interest = first_month_interest.as_f64(),
                "payment does not cover interest"
            );
            return Err(PayoffError::InsufficientPayment {
                minimum_payment: first_month_interest,
            });
        }

        let max_months = self.config.max_months;
        let mut balance = initial_balance;
        let mut total_interest = Money::ZERO;
        let mut months: u32 = 0;

        while balance.is_positive() && months < max_months {
            months += 1;
            let beginning_balance = balance;

            let interest = balance.interest_at(monthly_rate);
            balance += interest;
            total_interest += interest;

            // final payment is capped at what is owed
            let payment = monthly_payment.min(balance);
            balance -= payment;

            if let Some(rows) = rows.as_deref_mut() {
                rows.push(ScheduledPayment {
                    month: months,
                    payment_date: self.date_after(today, months)?,
                    beginning_balance,
                    interest,
                    payment,
                    principal: payment - interest,
                    ending_balance: balance,
                    cumulative_interest: total_interest,
                });
            }
        }

        if months >= max_months && balance.is_positive() {
            debug!(max_months, remaining = balance.as_f64(), "payoff horizon exceeded");
            return Err(PayoffError::CalculationTooLong { max_months });
        }

        let freedom_date = self.date_after(today, months)?;

        debug!(
            months,
            total_interest = total_interest.as_f64(),
            %freedom_date,
            "payoff projected"
        );

        Ok(PayoffOutcome {
            freedom_date,
            total_months: months,
            total_interest_paid: total_interest,
        })
    }

    fn date_after(&self, today: NaiveDate, months: u32) -> Result<NaiveDate> {
        add_months(today, months).ok_or_else(|| PayoffError::Calculation {
            message: format!("date overflow adding {} months to {}", months, today),
        })
    }
}
