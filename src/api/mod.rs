//! transport-neutral request boundary: json in, status and json body out.
//! a web server mounts `handle_json` behind whatever route it likes.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{calculate_freedom_date, calculate_freedom_date_from, handle_json};
pub use request::{CalculateRequest, Validate};
pub use response::{
    ApiResponse, ErrorDetail, InternalErrorBody, PayoffResult, ValidationErrorBody,
    INTERNAL_ERROR_MESSAGE,
};
