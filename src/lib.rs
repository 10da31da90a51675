pub mod application;
pub mod config;
pub mod consolidation;
pub mod errors;
pub mod interest;
pub mod types;

// re-export key types
pub use application::{parse_start_timestamp, ApplicationId, InvestmentApplication};
pub use config::AccrualConfig;
pub use consolidation::{
    application_returns, recent_activity, ApplicationRow, ConsolidationReport, Consolidator,
    ProductSummary, RECENT_FLOOR_DAYS, STATEMENT_CAP_DAYS,
};
pub use errors::{AccrualError, Result};
pub use interest::{
    calculate_return, compound_interest, elapsed_days, simple_interest, AccruedReturn,
};
pub use types::InterestType;

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use uuid::Uuid;
