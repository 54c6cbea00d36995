pub mod amount;
pub mod api;
pub mod config;
pub mod errors;
pub mod logging;
pub mod payoff;
pub mod types;

// re-export key types
pub use amount::{Money, Rate};
pub use api::{calculate_freedom_date, handle_json, ApiResponse, CalculateRequest};
pub use config::{SimulatorConfig, MAX_MONTHS};
pub use errors::{ApiError, ConfigError, ErrorCode, PayoffError, Result};
pub use payoff::{PayoffSchedule, PayoffSimulator, ScheduledPayment};
pub use types::{Countdown, DebtParameters, PayoffOutcome};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
