/// compound interest earned to date, excluding principal
///
/// daily compounding at a rate obtained by dividing the annual percentage
/// evenly across 365 days. the linear division is the marketplace's own
/// convention, not an effective-daily-rate conversion, and is kept exactly
/// as-is for compatibility with stored expectations
pub fn compound_interest(principal: f64, annual_rate_pct: f64, days: i64) -> f64 {
    debug_assert!(principal >= 0.0, "negative principal");
    debug_assert!(days >= 0, "negative elapsed days");

    let daily_rate = (annual_rate_pct / 100.0) / 365.0;
    let final_amount = principal * (1.0 + daily_rate).powf(days as f64);
    final_amount - principal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::simple_interest;

    #[test]
    fn test_zero_days_accrues_nothing() {
        assert_eq!(compound_interest(10_000.0, 50.0, 0), 0.0);
        assert_eq!(compound_interest(0.0, 50.0, 365), 0.0);
    }

    #[test]
    fn test_one_year_at_fifty_percent() {
        // 10000 * (1 + 0.5/365)^365 - 10000
        let amount = compound_interest(10_000.0, 50.0, 365);
        assert!(amount > 6_481.0);
        assert!(amount < 6_482.0);
    }

    #[test]
    fn test_matches_simple_for_one_day() {
        let compound = compound_interest(10_000.0, 50.0, 1);
        let simple = simple_interest(10_000.0, 50.0, 1);
        assert!((compound - simple).abs() < 1e-9);
    }

    #[test]
    fn test_beats_simple_beyond_one_day() {
        for days in [2, 30, 100, 365, 730] {
            let compound = compound_interest(10_000.0, 50.0, days);
            let simple = simple_interest(10_000.0, 50.0, days);
            assert!(
                compound > simple,
                "compound {compound} should exceed simple {simple} at {days} days"
            );
        }
    }

    #[test]
    fn test_monotone_in_days() {
        let mut prev = 0.0;
        for days in [1, 10, 100, 365, 1000] {
            let amount = compound_interest(1_000.0, 50.0, days);
            assert!(amount >= prev);
            prev = amount;
        }
    }

    #[test]
    fn test_zero_rate_accrues_nothing() {
        assert_eq!(compound_interest(10_000.0, 0.0, 365), 0.0);
    }
}
