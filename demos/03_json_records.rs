/// json records - consolidating raw records as fetched from the data layer
use investment_accrual_rs::{Consolidator, InvestmentApplication};
use chrono::Utc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // a record with a Portuguese tag, one with missing metadata entirely
    let raw = r#"[
        {
            "id": "0a1b2c3d-4e5f-6071-8293-a4b5c6d7e8f9",
            "product_id": "energia-solar",
            "product_title": "Energia Solar",
            "principal": 10000.0,
            "annual_rate_pct": 50.0,
            "interest_type": "composto",
            "started_at": "2024-01-15T10:30:00Z"
        },
        {
            "id": "1b2c3d4e-5f60-7182-93a4-b5c6d7e8f901",
            "product_id": "produto-removido",
            "principal": 2500.0,
            "annual_rate_pct": 50.0,
            "started_at": "2024-03-01T00:00:00Z"
        }
    ]"#;

    let applications: Vec<InvestmentApplication> = serde_json::from_str(raw)?;

    let report = Consolidator::with_defaults().statement_at(&applications, Utc::now());

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
