use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use debt_freedom::api::{calculate_freedom_date, CalculateRequest};
use debt_freedom::{logging, PayoffSimulator, SafeTimeProvider, SimulatorConfig, TimeSource};

#[derive(Debug, Parser)]
#[command(name = "debt-freedom")]
#[command(about = "Project the date a fixed-payment debt is paid off")]
struct Cli {
    #[arg(long, allow_negative_numbers = true)]
    total_debt: f64,

    #[arg(long, allow_negative_numbers = true)]
    monthly_payment: f64,

    #[arg(long, allow_negative_numbers = true, help = "Annual interest rate in percent")]
    annual_interest_rate: f64,

    #[arg(long, help = "Include the month-by-month schedule")]
    schedule: bool,

    #[arg(long, help = "Count from this date (YYYY-MM-DD) instead of the system clock")]
    today: Option<NaiveDate>,

    #[arg(long, help = "Path to a TOML simulator config")]
    config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    json_logs: bool,
}

fn exit_code(status: u16) -> i32 {
    match status {
        200 => 0,
        400 => 1,
        422 => 2,
        _ => 3,
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.json_logs {
        logging::init_json_logger();
    } else {
        logging::init_cli_logger(cli.verbose);
    }

    let config = match &cli.config {
        Some(path) => SimulatorConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path))?,
        None => SimulatorConfig::default(),
    };
    tracing::debug!(?config, "simulator config");

    let time = match cli.today {
        Some(date) => {
            let start = date
                .and_hms_opt(0, 0, 0)
                .context("building start of day")?
                .and_utc();
            SafeTimeProvider::new(TimeSource::Test(start))
        }
        None => SafeTimeProvider::new(TimeSource::System),
    };

    let mut request = CalculateRequest::new(
        cli.total_debt,
        cli.monthly_payment,
        cli.annual_interest_rate,
    );
    request.include_schedule = cli.schedule;

    let simulator = PayoffSimulator::new(config);
    let response = calculate_freedom_date(&request, &simulator, &time);

    println!("{}", serde_json::to_string_pretty(&response.body)?);

    let code = exit_code(response.status);
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
