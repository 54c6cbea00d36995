use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use tracing::{error, info, warn};

use crate::api::request::{CalculateRequest, Validate};
use crate::api::response::{
    ApiResponse, ErrorDetail, InternalErrorBody, PayoffResult, ValidationErrorBody,
    STATUS_BAD_REQUEST, STATUS_INTERNAL_ERROR, STATUS_OK, STATUS_UNPROCESSABLE,
};
use crate::errors::{ApiError, FieldError, PayoffError};
use crate::payoff::calendar::countdown;
use crate::payoff::PayoffSimulator;

/// parse, validate and run a calculation from a raw json body
pub fn handle_json(
    body: &str,
    simulator: &PayoffSimulator,
    time_provider: &SafeTimeProvider,
) -> ApiResponse {
    match CalculateRequest::from_json(body) {
        Ok(request) => calculate_freedom_date(&request, simulator, time_provider),
        Err(e) => rejected(e),
    }
}

/// run a calculation for an already-bound request
pub fn calculate_freedom_date(
    request: &CalculateRequest,
    simulator: &PayoffSimulator,
    time_provider: &SafeTimeProvider,
) -> ApiResponse {
    calculate_freedom_date_from(request, simulator, time_provider.now().date_naive())
}

pub fn calculate_freedom_date_from(
    request: &CalculateRequest,
    simulator: &PayoffSimulator,
    today: NaiveDate,
) -> ApiResponse {
    if let Err(e) = request.validate() {
        return rejected(e);
    }

    let params = request.parameters();
    let projection = if request.include_schedule {
        simulator
            .schedule_from(&params, today)
            .map(|s| (s.outcome, Some(s.payments)))
    } else {
        simulator.simulate_from(&params, today).map(|o| (o, None))
    };

    match projection {
        Ok((outcome, schedule)) => {
            info!(
                months = outcome.total_months,
                freedom_date = %outcome.freedom_date,
                "freedom date calculated"
            );
            let mut result = PayoffResult::new(&params, &outcome);
            result.countdown = countdown(today, outcome.freedom_date);
            result.schedule = schedule;
            ApiResponse::from_body(STATUS_OK, &result)
        }
        Err(e) => failed(e, &simulator.config().suggestion_unit),
    }
}

fn failed(err: PayoffError, suggestion_unit: &str) -> ApiResponse {
    match ErrorDetail::from_payoff_error(&err, suggestion_unit) {
        Some(detail) => {
            info!(code = %detail.code, "calculation rejected");
            ApiResponse::from_body(STATUS_BAD_REQUEST, &detail)
        }
        None => {
            error!(error = %err, "unexpected failure during calculation");
            ApiResponse::from_body(STATUS_INTERNAL_ERROR, &InternalErrorBody::default())
        }
    }
}

fn rejected(err: ApiError) -> ApiResponse {
    warn!(error = %err, "request rejected");
    let detail = match err {
        ApiError::Validation(fields) => fields,
        ApiError::MalformedRequest { message } => vec![FieldError {
            field: "body".to_string(),
            message,
        }],
    };
    ApiResponse::from_body(STATUS_UNPROCESSABLE, &ValidationErrorBody { detail })
}
