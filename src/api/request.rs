use serde::{Deserialize, Serialize};

use crate::amount::{Money, Rate};
use crate::errors::{ApiError, FieldError};
use crate::types::DebtParameters;

pub trait Validate {
    fn validate(&self) -> Result<(), ApiError>;
}

/// body of a freedom date calculation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub total_debt: f64,
    pub monthly_payment: f64,
    pub annual_interest_rate: f64,
    #[serde(default)]
    pub include_schedule: bool,
}

impl CalculateRequest {
    pub fn new(total_debt: f64, monthly_payment: f64, annual_interest_rate: f64) -> Self {
        Self {
            total_debt,
            monthly_payment,
            annual_interest_rate,
            include_schedule: false,
        }
    }

    pub fn with_schedule(mut self) -> Self {
        self.include_schedule = true;
        self
    }

    /// parse a json body
    pub fn from_json(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::MalformedRequest {
            message: e.to_string(),
        })
    }

    pub fn parameters(&self) -> DebtParameters {
        DebtParameters {
            total_debt: Money::new(self.total_debt),
            monthly_payment: Money::new(self.monthly_payment),
            annual_interest_rate: Rate::from_percentage(self.annual_interest_rate),
        }
    }
}

impl Validate for CalculateRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();

        check_greater_than_zero("total_debt", self.total_debt, &mut errors);
        check_greater_than_zero("monthly_payment", self.monthly_payment, &mut errors);

        if !self.annual_interest_rate.is_finite() {
            errors.push(field_error("annual_interest_rate", "must be a finite number"));
        } else if self.annual_interest_rate < 0.0 {
            errors.push(field_error("annual_interest_rate", "must be greater than or equal to 0"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(errors))
        }
    }
}

fn check_greater_than_zero(field: &str, value: f64, errors: &mut Vec<FieldError>) {
    if !value.is_finite() {
        errors.push(field_error(field, "must be a finite number"));
    } else if value <= 0.0 {
        errors.push(field_error(field, "must be greater than 0"));
    }
}

fn field_error(field: &str, message: &str) -> FieldError {
    FieldError {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        assert!(CalculateRequest::new(1000.0, 100.0, 0.0).validate().is_ok());
        assert!(CalculateRequest::new(0.01, 0.01, 29.99).validate().is_ok());
    }

    #[test]
    fn test_collects_every_bad_field() {
        let err = CalculateRequest::new(0.0, -5.0, -1.0).validate().unwrap_err();
        match err {
            ApiError::Validation(fields) => {
                let names: Vec<_> = fields.iter().map(|f| f.field.as_str()).collect();
                assert_eq!(names, vec!["total_debt", "monthly_payment", "annual_interest_rate"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = CalculateRequest::new(f64::NAN, 100.0, 5.0).validate().unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref f) if f[0].message == "must be a finite number"));
    }

    #[test]
    fn test_from_json() {
        let req = CalculateRequest::from_json(
            r#"{"total_debt": 1000, "monthly_payment": 100.5, "annual_interest_rate": 4}"#,
        )
        .unwrap();
        assert_eq!(req, CalculateRequest::new(1000.0, 100.5, 4.0));
        assert!(!req.include_schedule);

        let req = CalculateRequest::from_json(
            r#"{"total_debt": 1, "monthly_payment": 1, "annual_interest_rate": 0, "include_schedule": true}"#,
        )
        .unwrap();
        assert!(req.include_schedule);
    }

    #[test]
    fn test_from_json_missing_field() {
        let err = CalculateRequest::from_json(r#"{"total_debt": 1000}"#).unwrap_err();
        assert!(matches!(err, ApiError::MalformedRequest { .. }));

        let err = CalculateRequest::from_json("not json").unwrap_err();
        assert!(matches!(err, ApiError::MalformedRequest { .. }));
    }
}
