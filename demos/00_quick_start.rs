/// quick start - minimal example to get started
use investment_accrual_rs::{Consolidator, InterestType, InvestmentApplication};
use chrono::{Duration, Utc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now();

    // three applications across two products
    let applications = vec![
        InvestmentApplication::new("energia-solar", 10_000.0, 50.0, now - Duration::days(120))?
            .with_title("Energia Solar")
            .with_interest_type(InterestType::Compound),
        InvestmentApplication::new("energia-solar", 5_000.0, 50.0, now - Duration::days(30))?
            .with_title("Energia Solar"),
        InvestmentApplication::new("agronegocio", 2_500.0, 50.0, now - Duration::days(200))?
            .with_title("Agronegócio"),
    ];

    let report = Consolidator::with_defaults().statement_at(&applications, now);

    for product in &report.products {
        println!(
            "{} ({}): invested {:.2}, accrued {:.2} across {} applications",
            product.product_title,
            product.interest_type_label,
            product.total_invested,
            product.total_return,
            product.application_count,
        );
    }

    println!("\ntotal invested: {:.2}", report.grand_total_invested);
    println!("total accrued:  {:.2}", report.grand_total_return);

    Ok(())
}
