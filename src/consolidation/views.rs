//! per-call-site elapsed-day policies
//!
//! the marketplace applies different clamps in different views: the
//! consolidated statement caps accrual display at one year, the
//! recent-applications table floors elapsed days at one so a same-day
//! application never shows a zero-day accrual, and the my-applications list
//! applies neither. the clamps live here as explicit decorators around the
//! uncapped engine instead of being baked into it

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::application::InvestmentApplication;
use crate::config::AccrualConfig;
use crate::interest::{elapsed_days, AccruedReturn};

/// consolidated statements cap displayed accrual at one year
pub const STATEMENT_CAP_DAYS: i64 = 365;

/// the recent-applications table never shows a zero-day accrual
pub const RECENT_FLOOR_DAYS: i64 = 1;

pub fn cap_statement_days(days: i64) -> i64 {
    days.min(STATEMENT_CAP_DAYS)
}

pub fn floor_recent_days(days: i64) -> i64 {
    days.max(RECENT_FLOOR_DAYS)
}

/// one row of a per-application listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub product_id: String,
    pub product_title: String,
    pub started_at: DateTime<Utc>,
    pub accrued: AccruedReturn,
}

/// my-applications listing: raw elapsed days, no clamp
pub fn application_returns(
    applications: &[InvestmentApplication],
    now: DateTime<Utc>,
    config: &AccrualConfig,
) -> Vec<ApplicationRow> {
    rows(applications, now, config, |days| days)
}

/// recent-applications table: elapsed days floored at one
pub fn recent_activity(
    applications: &[InvestmentApplication],
    now: DateTime<Utc>,
    config: &AccrualConfig,
) -> Vec<ApplicationRow> {
    rows(applications, now, config, floor_recent_days)
}

fn rows(
    applications: &[InvestmentApplication],
    now: DateTime<Utc>,
    config: &AccrualConfig,
    day_policy: fn(i64) -> i64,
) -> Vec<ApplicationRow> {
    applications
        .iter()
        .map(|app| {
            let days = day_policy(elapsed_days(app.started_at, now));
            ApplicationRow {
                id: app.id,
                product_id: app.product_id.clone(),
                product_title: app.resolved_title(config),
                started_at: app.started_at,
                accrued: AccruedReturn::evaluate(app, days, config.default_interest_type),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::simple_interest;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_clamp_policies() {
        assert_eq!(cap_statement_days(100), 100);
        assert_eq!(cap_statement_days(365), 365);
        assert_eq!(cap_statement_days(730), 365);

        assert_eq!(floor_recent_days(0), 1);
        assert_eq!(floor_recent_days(1), 1);
        assert_eq!(floor_recent_days(42), 42);
    }

    #[test]
    fn test_recent_activity_floors_same_day_applications() {
        let config = AccrualConfig::default();
        let apps = vec![
            InvestmentApplication::new("solar", 10_000.0, 50.0, now() - Duration::hours(2))
                .unwrap(),
        ];

        let rows = recent_activity(&apps, now(), &config);
        assert_eq!(rows[0].accrued.days, 1);
        assert!((rows[0].accrued.amount - simple_interest(10_000.0, 50.0, 1)).abs() < 1e-9);

        // the my-applications list shows the raw zero-day accrual
        let rows = application_returns(&apps, now(), &config);
        assert_eq!(rows[0].accrued.days, 0);
        assert_eq!(rows[0].accrued.amount, 0.0);
    }

    #[test]
    fn test_listing_applies_no_statement_cap() {
        let config = AccrualConfig::default();
        let apps = vec![
            InvestmentApplication::new("solar", 10_000.0, 50.0, now() - Duration::days(730))
                .unwrap(),
        ];

        let rows = application_returns(&apps, now(), &config);
        assert_eq!(rows[0].accrued.days, 730);

        let rows = recent_activity(&apps, now(), &config);
        assert_eq!(rows[0].accrued.days, 730);
    }

    #[test]
    fn test_rows_carry_resolved_metadata() {
        let config = AccrualConfig::default();
        let apps = vec![
            InvestmentApplication::new("solar", 1_000.0, 50.0, now() - Duration::days(10))
                .unwrap()
                .with_title("Energia Solar"),
            InvestmentApplication::new("ghost", 2_000.0, 50.0, now() - Duration::days(20))
                .unwrap(),
        ];

        let rows = application_returns(&apps, now(), &config);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].product_title, "Energia Solar");
        assert_eq!(rows[1].product_title, "Investimento");
    }
}
