use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::amount::Money;

/// machine-readable code for domain failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InsufficientPayment,
    CalculationTooLong,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InsufficientPayment => "INSUFFICIENT_PAYMENT",
            ErrorCode::CalculationTooLong => "CALCULATION_TOO_LONG",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayoffError {
    #[error("Your monthly payment is not enough to cover the monthly interest accrual.")]
    InsufficientPayment {
        minimum_payment: Money,
    },

    #[error(
        "Calculation exceeded {max_months} months ({} years). Your payment amount is too low to pay off this debt within a reasonable timeframe.",
        .max_months / 12
    )]
    CalculationTooLong {
        max_months: u32,
    },

    #[error("calculation error: {message}")]
    Calculation {
        message: String,
    },
}

impl PayoffError {
    /// domain code, `None` for internal failures
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            PayoffError::InsufficientPayment { .. } => Some(ErrorCode::InsufficientPayment),
            PayoffError::CalculationTooLong { .. } => Some(ErrorCode::CalculationTooLong),
            PayoffError::Calculation { .. } => None,
        }
    }

    /// the caller must change inputs; retrying never helps
    pub fn is_domain(&self) -> bool {
        self.code().is_some()
    }
}

/// a single rejected request field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid request: {}", .0.iter().map(|e| format!("{}: {}", e.field, e.message)).collect::<Vec<_>>().join(", "))]
    Validation(Vec<FieldError>),

    #[error("malformed request: {message}")]
    MalformedRequest {
        message: String,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {message}")]
    Invalid {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, PayoffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let err = PayoffError::InsufficientPayment { minimum_payment: Money::new(10.0) };
        assert_eq!(err.code(), Some(ErrorCode::InsufficientPayment));
        assert!(err.is_domain());

        let err = PayoffError::Calculation { message: "boom".to_string() };
        assert_eq!(err.code(), None);
        assert!(!err.is_domain());
    }

    #[test]
    fn test_too_long_message_names_limit() {
        let err = PayoffError::CalculationTooLong { max_months: 1200 };
        assert_eq!(
            err.to_string(),
            "Calculation exceeded 1200 months (100 years). Your payment amount is too low to pay off this debt within a reasonable timeframe."
        );
    }

    #[test]
    fn test_code_serializes_screaming() {
        let json = serde_json::to_string(&ErrorCode::CalculationTooLong).unwrap();
        assert_eq!(json, "\"CALCULATION_TOO_LONG\"");
    }
}
