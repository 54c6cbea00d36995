use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{FieldError, PayoffError};
use crate::payoff::ScheduledPayment;
use crate::types::{Countdown, DebtParameters, PayoffOutcome};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_UNPROCESSABLE: u16 = 422;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// opaque message for anything that is not a domain failure
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred during calculation.";

/// success body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffResult {
    pub freedom_date: NaiveDate,
    pub total_months: u32,
    pub total_interest_paid: f64,
    pub initial_debt: f64,
    pub monthly_payment: f64,
    pub annual_interest_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countdown: Option<Countdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<ScheduledPayment>>,
}

impl PayoffResult {
    pub fn new(params: &DebtParameters, outcome: &PayoffOutcome) -> Self {
        Self {
            freedom_date: outcome.freedom_date,
            total_months: outcome.total_months,
            total_interest_paid: outcome.total_interest_paid.as_f64(),
            initial_debt: params.total_debt.as_f64(),
            monthly_payment: params.monthly_payment.as_f64(),
            annual_interest_rate: params.annual_interest_rate.as_percentage(),
            countdown: None,
            schedule: None,
        }
    }
}

/// domain failure body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion_unit: Option<String>,
}

impl ErrorDetail {
    /// `None` for internal failures, which never get a detail body
    pub fn from_payoff_error(err: &PayoffError, suggestion_unit: &str) -> Option<Self> {
        let code = err.code()?;
        let (suggestion_value, suggestion_unit) = match err {
            PayoffError::InsufficientPayment { minimum_payment } => {
                (Some(minimum_payment.as_f64()), Some(suggestion_unit.to_string()))
            }
            _ => (None, None),
        };

        Some(Self {
            code: code.as_str().to_string(),
            message: err.to_string(),
            suggestion_value,
            suggestion_unit,
        })
    }
}

/// validation failure body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    pub detail: Vec<FieldError>,
}

/// internal failure body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalErrorBody {
    pub detail: String,
}

impl Default for InternalErrorBody {
    fn default() -> Self {
        Self {
            detail: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

/// status code plus json body, ready for any transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    pub fn internal_error() -> Self {
        Self {
            status: STATUS_INTERNAL_ERROR,
            body: serde_json::json!({ "detail": INTERNAL_ERROR_MESSAGE }),
        }
    }

    /// serialize `body` with `status`, degrading to a 500 if that fails
    pub fn from_body<T: Serialize>(status: u16, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self { status, body },
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize response body");
                Self::internal_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Money;

    #[test]
    fn test_insufficient_payment_detail() {
        let err = PayoffError::InsufficientPayment { minimum_payment: Money::new(10.0) };
        let detail = ErrorDetail::from_payoff_error(&err, "$").unwrap();

        assert_eq!(detail.code, "INSUFFICIENT_PAYMENT");
        assert_eq!(
            detail.message,
            "Your monthly payment is not enough to cover the monthly interest accrual."
        );
        assert_eq!(detail.suggestion_value, Some(10.0));
        assert_eq!(detail.suggestion_unit.as_deref(), Some("$"));
    }

    #[test]
    fn test_too_long_detail_omits_suggestion() {
        let err = PayoffError::CalculationTooLong { max_months: 1200 };
        let detail = ErrorDetail::from_payoff_error(&err, "$").unwrap();
        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(json["code"], "CALCULATION_TOO_LONG");
        assert!(json.get("suggestion_value").is_none());
        assert!(json.get("suggestion_unit").is_none());
    }

    #[test]
    fn test_internal_error_has_no_detail() {
        let err = PayoffError::Calculation { message: "secret".to_string() };
        assert!(ErrorDetail::from_payoff_error(&err, "$").is_none());

        let response = ApiResponse::internal_error();
        assert_eq!(response.status, 500);
        assert_eq!(response.body["detail"], INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_result_serializes_iso_date() {
        let params = DebtParameters::new(1000.0, 100.0, 0.0);
        let outcome = PayoffOutcome {
            freedom_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            total_months: 10,
            total_interest_paid: Money::ZERO,
        };
        let json = serde_json::to_value(PayoffResult::new(&params, &outcome)).unwrap();

        assert_eq!(json["freedom_date"], "2025-03-01");
        assert_eq!(json["total_months"], 10);
        assert_eq!(json["initial_debt"], 1000.0);
        assert!(json.get("countdown").is_none());
        assert!(json.get("schedule").is_none());
    }
}
