/// simple interest earned to date, excluding principal
///
/// straight-line daily accrual: a fixed fraction of principal per day, no
/// compounding. `annual_rate_pct` is whole percentage points per year
/// (50 means 50%/year), hence the final division by 100.
///
/// callers must not pass negative principal or elapsed days; the public
/// dispatch in [`crate::interest::calculate_return`] clamps those before
/// reaching this formula
pub fn simple_interest(principal: f64, annual_rate_pct: f64, days: i64) -> f64 {
    debug_assert!(principal >= 0.0, "negative principal");
    debug_assert!(days >= 0, "negative elapsed days");

    annual_rate_pct / 365.0 * days as f64 * principal / 100.0
}
