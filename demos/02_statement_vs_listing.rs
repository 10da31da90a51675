/// statement vs listing - the divergent elapsed-day policies per view
use investment_accrual_rs::{
    application_returns, recent_activity, AccrualConfig, Consolidator, InvestmentApplication,
};
use chrono::{Duration, Utc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now();
    let config = AccrualConfig::default();

    let applications = vec![
        // committed two years ago
        InvestmentApplication::new("energia-solar", 10_000.0, 50.0, now - Duration::days(730))?
            .with_title("Energia Solar"),
        // committed two hours ago
        InvestmentApplication::new("agronegocio", 5_000.0, 50.0, now - Duration::hours(2))?
            .with_title("Agronegócio"),
    ];

    // consolidated statement: elapsed days capped at 365 per application
    let statement = Consolidator::new(config.clone()).statement_at(&applications, now);
    println!("statement total accrued: {:.2}", statement.grand_total_return);

    // my-applications list: raw elapsed days, no cap, no floor
    println!("\nmy applications:");
    for row in application_returns(&applications, now, &config) {
        println!(
            "  {}: {} days elapsed, accrued {:.2}",
            row.product_title, row.accrued.days, row.accrued.amount
        );
    }

    // recent-applications table: elapsed days floored at 1
    println!("\nrecent activity:");
    for row in recent_activity(&applications, now, &config) {
        println!(
            "  {}: {} days shown, accrued {:.2}",
            row.product_title, row.accrued.days, row.accrued.amount
        );
    }

    Ok(())
}
