use serde::{Deserialize, Serialize};

use crate::errors::{AccrualError, Result};
use crate::types::InterestType;

/// fallbacks applied when a record's product metadata cannot be resolved
///
/// the defaults reproduce the marketplace behavior: an application whose
/// product was deleted still shows up in statements under the placeholder
/// title, accruing simple interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualConfig {
    pub default_product_title: String,
    pub default_interest_type: InterestType,
}

impl Default for AccrualConfig {
    fn default() -> Self {
        Self {
            default_product_title: "Investimento".to_string(),
            default_interest_type: InterestType::Simple,
        }
    }
}

impl AccrualConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_product_title.trim().is_empty() {
            return Err(AccrualError::InvalidConfiguration {
                message: "default product title must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
