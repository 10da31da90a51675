use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AccrualConfig;
use crate::errors::{AccrualError, Result};
use crate::interest::elapsed_days;
use crate::types::InterestType;

/// unique identifier for an investment application
pub type ApplicationId = Uuid;

/// one discrete act of committing funds to an investment product
///
/// immutable once recorded; accrued returns are always derived from these
/// fields at evaluation time, never stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentApplication {
    pub id: ApplicationId,
    pub product_id: String,
    #[serde(default)]
    pub product_title: Option<String>,
    /// committed amount, currency-agnostic unit
    pub principal: f64,
    /// whole percentage points per year (50 means 50%/year)
    pub annual_rate_pct: f64,
    #[serde(default)]
    pub interest_type: Option<InterestType>,
    pub started_at: DateTime<Utc>,
}

impl InvestmentApplication {
    /// validating constructor for programmatic creation
    ///
    /// records deserialized from the data layer bypass this and are taken
    /// as-is; evaluation clamps rather than fails on bad numbers
    pub fn new(
        product_id: impl Into<String>,
        principal: f64,
        annual_rate_pct: f64,
        started_at: DateTime<Utc>,
    ) -> Result<Self> {
        if !principal.is_finite() || principal < 0.0 {
            return Err(AccrualError::NegativePrincipal { principal });
        }
        if !annual_rate_pct.is_finite() || annual_rate_pct < 0.0 {
            return Err(AccrualError::InvalidRate {
                rate: annual_rate_pct,
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            product_id: product_id.into(),
            product_title: None,
            principal,
            annual_rate_pct,
            interest_type: None,
            started_at,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.product_title = Some(title.into());
        self
    }

    pub fn with_interest_type(mut self, interest_type: InterestType) -> Self {
        self.interest_type = Some(interest_type);
        self
    }

    /// whole days elapsed since the application was recorded
    pub fn days_elapsed(&self, now: DateTime<Utc>) -> i64 {
        elapsed_days(self.started_at, now)
    }

    /// interest regime, falling back to the configured default
    pub fn effective_interest_type(&self, config: &AccrualConfig) -> InterestType {
        self.interest_type.unwrap_or(config.default_interest_type)
    }

    /// product title, falling back to the configured placeholder
    pub fn resolved_title(&self, config: &AccrualConfig) -> String {
        self.product_title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| config.default_product_title.clone())
    }
}

/// parse an ISO-8601 start timestamp as supplied by the data layer
pub fn parse_start_timestamp(value: &str) -> Result<DateTime<Utc>> {
    value
        .parse::<DateTime<Utc>>()
        .map_err(|_| AccrualError::InvalidTimestamp {
            value: value.to_string(),
        })
}
