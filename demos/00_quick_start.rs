/// quick start - project a payoff date against the system clock
use debt_freedom::{DebtParameters, PayoffSimulator, SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);
    let simulator = PayoffSimulator::default();

    // $12,000 card balance, $400 a month at 19.99%
    let params = DebtParameters::new(12_000.0, 400.0, 19.99);
    let outcome = simulator.simulate(&params, &time)?;

    println!("debt free on {}", outcome.freedom_date);
    println!("months: {}", outcome.total_months);
    println!("interest paid: {}", outcome.total_interest_paid);

    Ok(())
}
