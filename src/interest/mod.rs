pub mod compound;
pub mod simple;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::InvestmentApplication;
use crate::types::InterestType;

pub use compound::compound_interest;
pub use simple::simple_interest;

/// accrued return for one application at a given evaluation instant
///
/// derived, never persisted; recomputed on demand from principal, rate,
/// elapsed days and the interest-type tag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccruedReturn {
    pub amount: f64,
    pub days: i64,
    pub principal: f64,
    pub annual_rate_pct: f64,
    pub interest_type: InterestType,
}

impl AccruedReturn {
    /// evaluate one application at the given elapsed-day count
    ///
    /// day clamping policies (statement cap, recent-list floor) are the
    /// caller's decision and applied before this point
    pub fn evaluate(app: &InvestmentApplication, days: i64, fallback: InterestType) -> Self {
        let interest_type = app.interest_type.unwrap_or(fallback);
        Self {
            amount: calculate_return(app.principal, app.annual_rate_pct, days, interest_type),
            days,
            principal: app.principal,
            annual_rate_pct: app.annual_rate_pct,
            interest_type,
        }
    }
}

/// whole days elapsed between two instants, truncated
pub fn elapsed_days(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - start).num_days()
}

/// earnings to date for a principal under the given interest regime
///
/// the single entry point dashboards and statements call per application.
/// negative principal, negative elapsed days and non-finite rates are
/// clamped to zero with a warning so one bad record never poisons a view
pub fn calculate_return(
    principal: f64,
    annual_rate_pct: f64,
    days: i64,
    interest_type: InterestType,
) -> f64 {
    let principal = if !principal.is_finite() || principal < 0.0 {
        log::warn!("clamping invalid principal {principal} to zero");
        0.0
    } else {
        principal
    };
    let annual_rate_pct = if !annual_rate_pct.is_finite() {
        log::warn!("clamping non-finite annual rate to zero");
        0.0
    } else {
        annual_rate_pct
    };
    let days = if days < 0 {
        log::warn!("clamping negative elapsed days {days} to zero");
        0
    } else {
        days
    };

    match interest_type {
        InterestType::Compound => compound_interest(principal, annual_rate_pct, days),
        InterestType::Simple => simple_interest(principal, annual_rate_pct, days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_dispatch_routes_by_type() {
        let compound = calculate_return(10_000.0, 50.0, 100, InterestType::Compound);
        assert_eq!(compound, compound_interest(10_000.0, 50.0, 100));

        let simple = calculate_return(10_000.0, 50.0, 100, InterestType::Simple);
        assert_eq!(simple, simple_interest(10_000.0, 50.0, 100));
    }

    #[test]
    fn test_unknown_tag_accrues_as_simple() {
        let amount = calculate_return(10_000.0, 50.0, 100, InterestType::from_tag("unknown-tag"));
        assert_eq!(amount, simple_interest(10_000.0, 50.0, 100));
    }

    #[test]
    fn test_invalid_inputs_clamp_to_zero() {
        assert_eq!(calculate_return(-500.0, 50.0, 100, InterestType::Simple), 0.0);
        assert_eq!(calculate_return(1_000.0, 50.0, -10, InterestType::Compound), 0.0);
        assert_eq!(
            calculate_return(1_000.0, f64::NAN, 100, InterestType::Simple),
            0.0
        );
    }

    #[test]
    fn test_elapsed_days_truncates() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(elapsed_days(start, start), 0);
        assert_eq!(elapsed_days(start, start + Duration::hours(36)), 1);
        assert_eq!(elapsed_days(start, start + Duration::days(365)), 365);
    }

    #[test]
    fn test_evaluate_uses_fallback_type() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let app = InvestmentApplication::new("p-1", 1_000.0, 50.0, start).unwrap();

        let accrued = AccruedReturn::evaluate(&app, 100, InterestType::Simple);
        assert_eq!(accrued.interest_type, InterestType::Simple);
        assert_eq!(accrued.amount, simple_interest(1_000.0, 50.0, 100));

        let app = app.with_interest_type(InterestType::Compound);
        let accrued = AccruedReturn::evaluate(&app, 100, InterestType::Simple);
        assert_eq!(accrued.interest_type, InterestType::Compound);
        assert_eq!(accrued.amount, compound_interest(1_000.0, 50.0, 100));
    }
}
