//! Ratio-based case metrics.
//!
//! All rounding is half-up, matching how the console has always displayed
//! these numbers. The arithmetic is done on integers so boundary values
//! (exactly 50%, exactly 8 cases per officer) never drift.

use cybercrime_console_analytics_models::{CaseGrowth, ResponseTimeBucket, WorkloadLevel};

/// Computes `round(numerator / denominator)` with half-up rounding.
///
/// `denominator` must be positive.
fn div_round_half_up(numerator: i128, denominator: i128) -> i128 {
    (2 * numerator + denominator).div_euclid(2 * denominator)
}

/// Percentage of cases that are resolved, out of resolved plus active.
///
/// Returns `0` when there are no cases at all.
#[must_use]
pub fn success_rate(resolved: u64, active: u64) -> u8 {
    let total = i128::from(resolved) + i128::from(active);
    if total == 0 {
        return 0;
    }

    let rate = div_round_half_up(i128::from(resolved) * 100, total);
    u8::try_from(rate).unwrap_or(100)
}

/// Percentage of `total` cases that are resolved, capped at 100.
///
/// Returns `0` when `total` is `0`.
#[must_use]
pub fn success_rate_of_total(resolved: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }

    let rate = div_round_half_up(i128::from(resolved.min(total)) * 100, i128::from(total));
    u8::try_from(rate).unwrap_or(100)
}

/// Active cases per officer, rounded. `0` when there are no officers.
#[must_use]
pub fn cases_per_officer(active: u64, officers: u64) -> u64 {
    if officers == 0 {
        return 0;
    }

    let ratio = div_round_half_up(i128::from(active), i128::from(officers));
    u64::try_from(ratio).unwrap_or(u64::MAX)
}

/// Estimates response time from the unrounded active-cases-per-officer
/// workload.
///
/// A unit with no officers is treated as having no workload.
#[must_use]
pub fn response_time_bucket(active: u64, officers: u64) -> ResponseTimeBucket {
    if officers == 0 {
        return ResponseTimeBucket::OneHour;
    }

    let active = u128::from(active);
    let officers = u128::from(officers);
    let at_least = |cases_each: u128| active >= cases_each * officers;

    if at_least(8) {
        ResponseTimeBucket::ThreePlusHours
    } else if at_least(6) {
        ResponseTimeBucket::TwoAndHalfHours
    } else if at_least(4) {
        ResponseTimeBucket::TwoHours
    } else if at_least(2) {
        ResponseTimeBucket::OneAndHalfHours
    } else {
        ResponseTimeBucket::OneHour
    }
}

/// How far the active share of all cases sits above or below one half,
/// in whole percentage points (`-50` to `+50`).
#[must_use]
pub fn case_growth(active: u64, resolved: u64) -> CaseGrowth {
    let total = i128::from(active) + i128::from(resolved);
    if total == 0 {
        return CaseGrowth::new(0);
    }

    // (active / total - 0.5) * 100 == 50 * (2 * active - total) / total
    let numerator = 50 * (2 * i128::from(active) - total);
    let percent = div_round_half_up(numerator, total);

    CaseGrowth::new(i32::try_from(percent).unwrap_or_default())
}

/// Classifies a rounded cases-per-officer figure.
#[must_use]
pub const fn workload_level(cases_per_officer: u64) -> WorkloadLevel {
    if cases_per_officer >= 8 {
        WorkloadLevel::High
    } else if cases_per_officer >= 5 {
        WorkloadLevel::Medium
    } else {
        WorkloadLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_rate_boundaries() {
        assert_eq!(success_rate(0, 0), 0);
        assert_eq!(success_rate(10, 0), 100);
        assert_eq!(success_rate(5, 5), 50);
        assert_eq!(success_rate(0, 7), 0);
    }

    #[test]
    fn success_rate_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(success_rate(1, 7), 13);
        // 2/3 = 66.67%
        assert_eq!(success_rate(2, 1), 67);
        // 1/3 = 33.33%
        assert_eq!(success_rate(1, 2), 33);
    }

    #[test]
    fn success_rate_handles_huge_counts() {
        assert_eq!(success_rate(u64::MAX, u64::MAX), 50);
        assert_eq!(success_rate(u64::MAX, 0), 100);
    }

    #[test]
    fn success_rate_of_total_is_capped() {
        assert_eq!(success_rate_of_total(0, 0), 0);
        assert_eq!(success_rate_of_total(3, 4), 75);
        assert_eq!(success_rate_of_total(9, 4), 100);
    }

    #[test]
    fn response_bucket_thresholds() {
        assert_eq!(response_time_bucket(0, 0), ResponseTimeBucket::OneHour);
        assert_eq!(response_time_bucket(50, 0), ResponseTimeBucket::OneHour);
        assert_eq!(response_time_bucket(1, 1), ResponseTimeBucket::OneHour);
        assert_eq!(response_time_bucket(2, 1), ResponseTimeBucket::OneAndHalfHours);
        assert_eq!(response_time_bucket(4, 1), ResponseTimeBucket::TwoHours);
        assert_eq!(response_time_bucket(6, 1), ResponseTimeBucket::TwoAndHalfHours);
        assert_eq!(response_time_bucket(8, 1), ResponseTimeBucket::ThreePlusHours);
        // 15 / 2 = 7.5, not yet 8
        assert_eq!(response_time_bucket(15, 2), ResponseTimeBucket::TwoAndHalfHours);
        assert_eq!(response_time_bucket(16, 2), ResponseTimeBucket::ThreePlusHours);
    }

    #[test]
    fn response_bucket_is_monotonic_in_active_cases() {
        for officers in [1, 2, 3, 7] {
            let mut previous = response_time_bucket(0, officers);
            for active in 1..=100 {
                let bucket = response_time_bucket(active, officers);
                assert!(
                    bucket >= previous,
                    "{active} cases / {officers} officers gave {bucket} after {previous}"
                );
                previous = bucket;
            }
        }
    }

    #[test]
    fn case_growth_values() {
        assert_eq!(case_growth(0, 0).to_string(), "0%");
        assert_eq!(case_growth(5, 5).to_string(), "0%");
        assert_eq!(case_growth(10, 0).to_string(), "+50%");
        assert_eq!(case_growth(0, 10).to_string(), "-50%");
        // 2/3 - 1/2 = 16.67%
        assert_eq!(case_growth(2, 1).to_string(), "+17%");
        // 1/8 - 1/2 = -37.5%, half-up rounds toward +inf
        assert_eq!(case_growth(1, 7).to_string(), "-37%");
        // 5/8 - 1/2 = 12.5%
        assert_eq!(case_growth(5, 3).to_string(), "+13%");
    }

    #[test]
    fn cases_per_officer_rounds() {
        assert_eq!(cases_per_officer(10, 0), 0);
        assert_eq!(cases_per_officer(9, 2), 5);
        assert_eq!(cases_per_officer(7, 2), 4);
        assert_eq!(cases_per_officer(11, 3), 4);
    }

    #[test]
    fn workload_boundaries() {
        assert_eq!(workload_level(8), WorkloadLevel::High);
        assert_eq!(workload_level(20), WorkloadLevel::High);
        assert_eq!(workload_level(7), WorkloadLevel::Medium);
        assert_eq!(workload_level(5), WorkloadLevel::Medium);
        assert_eq!(workload_level(4), WorkloadLevel::Low);
        assert_eq!(workload_level(0), WorkloadLevel::Low);
    }
}
