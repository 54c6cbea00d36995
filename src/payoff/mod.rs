pub mod calendar;
pub mod schedule;
pub mod simulator;

pub use schedule::{PayoffSchedule, ScheduledPayment};
pub use simulator::PayoffSimulator;
