pub mod aggregator;
pub mod views;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use aggregator::Consolidator;
pub use views::{
    application_returns, cap_statement_days, floor_recent_days, recent_activity, ApplicationRow,
    RECENT_FLOOR_DAYS, STATEMENT_CAP_DAYS,
};

/// per-product rollup of one user's applications
///
/// each member application accrues independently at its own elapsed-day
/// count; the group only sums the results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub product_id: String,
    pub product_title: String,
    pub total_invested: f64,
    pub total_return: f64,
    pub application_count: usize,
    pub first_date: DateTime<Utc>,
    pub last_date: DateTime<Utc>,
    pub interest_type_label: String,
}

/// consolidated view over all of a user's applications
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ConsolidationReport {
    pub products: Vec<ProductSummary>,
    pub grand_total_invested: f64,
    pub grand_total_return: f64,
}

impl ConsolidationReport {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
