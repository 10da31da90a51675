/// time control - deterministic accrual with controlled time
use investment_accrual_rs::{Consolidator, InvestmentApplication, SafeTimeProvider, TimeSource};
use chrono::{Duration, TimeZone, Utc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== time control example ===\n");

    // create controlled time for testing
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ));
    let controller = time.test_control().unwrap();

    println!("starting date: {}", time.now().format("%Y-%m-%d"));

    let applications = vec![
        InvestmentApplication::new("energia-solar", 10_000.0, 50.0, time.now())?
            .with_title("Energia Solar"),
    ];
    let consolidator = Consolidator::with_defaults();

    // day zero: nothing accrued yet
    let report = consolidator.statement(&applications, &time);
    println!("accrued on day 0: {:.2}", report.grand_total_return);

    // advance 30 days
    controller.advance(Duration::days(30));
    let report = consolidator.statement(&applications, &time);
    println!(
        "accrued after 30 days ({}): {:.2}",
        time.now().format("%Y-%m-%d"),
        report.grand_total_return
    );

    // advance to exactly one year
    controller.advance(Duration::days(335));
    let report = consolidator.statement(&applications, &time);
    println!(
        "accrued after one year ({}): {:.2}",
        time.now().format("%Y-%m-%d"),
        report.grand_total_return
    );

    // a second year elapses, but the statement display is capped at 365 days
    controller.advance(Duration::days(365));
    let report = consolidator.statement(&applications, &time);
    println!(
        "statement after two years ({}): {:.2} (capped)",
        time.now().format("%Y-%m-%d"),
        report.grand_total_return
    );

    let uncapped = consolidator.consolidate(&applications, &time);
    println!("uncapped after two years: {:.2}", uncapped.grand_total_return);

    Ok(())
}
