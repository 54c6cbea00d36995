/// fixed clock - run the json boundary with a pinned "today"
use debt_freedom::chrono::{TimeZone, Utc};
use debt_freedom::{handle_json, PayoffSimulator, SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap(),
    ));
    let simulator = PayoffSimulator::default();

    let requests = [
        r#"{"total_debt": 1000, "monthly_payment": 100, "annual_interest_rate": 0}"#,
        r#"{"total_debt": 1000, "monthly_payment": 5, "annual_interest_rate": 12}"#,
        r#"{"total_debt": 100000, "monthly_payment": 501.26, "annual_interest_rate": 6}"#,
        r#"{"total_debt": 0, "monthly_payment": 50, "annual_interest_rate": 5}"#,
    ];

    for body in requests {
        let response = handle_json(body, &simulator, &time);
        println!("{} {}", response.status, serde_json::to_string_pretty(&response.body)?);
    }

    Ok(())
}
