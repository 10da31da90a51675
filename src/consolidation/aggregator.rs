use std::collections::HashMap;

use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;

use crate::application::InvestmentApplication;
use crate::config::AccrualConfig;
use crate::consolidation::views::cap_statement_days;
use crate::consolidation::{ConsolidationReport, ProductSummary};
use crate::interest::{calculate_return, elapsed_days};

/// stateless transform from a flat application list to per-product
/// summaries and grand totals
///
/// "now" is always supplied by the caller, directly or through a time
/// provider, so every invocation is deterministic and testable
pub struct Consolidator {
    config: AccrualConfig,
}

impl Consolidator {
    pub fn new(config: AccrualConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(AccrualConfig::default())
    }

    pub fn config(&self) -> &AccrualConfig {
        &self.config
    }

    /// consolidated statement with the current provider time
    pub fn statement(
        &self,
        applications: &[InvestmentApplication],
        time_provider: &SafeTimeProvider,
    ) -> ConsolidationReport {
        self.statement_at(applications, time_provider.now())
    }

    /// consolidated statement: each application's displayed accrual is
    /// capped at one year of elapsed days
    pub fn statement_at(
        &self,
        applications: &[InvestmentApplication],
        now: DateTime<Utc>,
    ) -> ConsolidationReport {
        self.consolidate_with(applications, now, cap_statement_days)
    }

    /// uncapped consolidation with the current provider time
    pub fn consolidate(
        &self,
        applications: &[InvestmentApplication],
        time_provider: &SafeTimeProvider,
    ) -> ConsolidationReport {
        self.consolidate_at(applications, time_provider.now())
    }

    /// uncapped consolidation, raw elapsed days per application
    ///
    /// this is the my-applications behavior; it intentionally diverges from
    /// [`Consolidator::statement_at`], which caps at one year. both call
    /// sites exist in the marketplace and neither is unified into the other
    pub fn consolidate_at(
        &self,
        applications: &[InvestmentApplication],
        now: DateTime<Utc>,
    ) -> ConsolidationReport {
        self.consolidate_with(applications, now, |days| days)
    }

    fn consolidate_with(
        &self,
        applications: &[InvestmentApplication],
        now: DateTime<Utc>,
        day_policy: fn(i64) -> i64,
    ) -> ConsolidationReport {
        // chronological scan order makes first/last dates per group fall
        // out of the first and last application seen
        let mut sorted: Vec<&InvestmentApplication> = applications.iter().collect();
        sorted.sort_by_key(|app| app.started_at);

        let mut products: Vec<ProductSummary> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for app in sorted {
            let days = day_policy(elapsed_days(app.started_at, now));
            let interest_type = app.effective_interest_type(&self.config);
            let amount = calculate_return(app.principal, app.annual_rate_pct, days, interest_type);

            match index.get(app.product_id.as_str()) {
                Some(&i) => {
                    let summary = &mut products[i];
                    summary.total_invested += app.principal;
                    summary.total_return += amount;
                    summary.application_count += 1;
                    summary.last_date = app.started_at;
                }
                None => {
                    index.insert(app.product_id.as_str(), products.len());
                    products.push(ProductSummary {
                        product_id: app.product_id.clone(),
                        product_title: app.resolved_title(&self.config),
                        total_invested: app.principal,
                        total_return: amount,
                        application_count: 1,
                        first_date: app.started_at,
                        last_date: app.started_at,
                        interest_type_label: interest_type.label().to_string(),
                    });
                }
            }
        }

        let grand_total_invested = products.iter().map(|p| p.total_invested).sum();
        let grand_total_return = products.iter().map(|p| p.total_return).sum();

        ConsolidationReport {
            products,
            grand_total_invested,
            grand_total_return,
        }
    }
}
