//! Unit and officer statistics built from case counts.

use cybercrime_console_analytics_models::{CaseCounts, OfficerStats, UnitStats};

use crate::metrics::{
    case_growth, cases_per_officer, response_time_bucket, success_rate, workload_level,
};

/// Builds the statistics card for a PNP unit staffed by `officer_count`
/// officers.
#[must_use]
pub fn unit_stats(counts: CaseCounts, officer_count: u64) -> UnitStats {
    if officer_count == 0 && counts.active > 0 {
        log::debug!(
            "Unit has {} active cases but no officers; reporting the lowest response bucket",
            counts.active
        );
    }

    UnitStats {
        success_rate: success_rate(counts.resolved, counts.active),
        active_cases: counts.active,
        resolved_cases: counts.resolved,
        response_time_bucket: response_time_bucket(counts.active, officer_count),
        case_growth: case_growth(counts.active, counts.resolved),
        officer_count,
        workload_level: workload_level(cases_per_officer(counts.active, officer_count)),
    }
}

/// Builds the statistics card for a single officer, whose workload is
/// their own active caseload.
#[must_use]
pub fn officer_stats(counts: CaseCounts) -> OfficerStats {
    OfficerStats {
        success_rate: success_rate(counts.resolved, counts.active),
        active_cases: counts.active,
        resolved_cases: counts.resolved,
        response_time_bucket: response_time_bucket(counts.active, 1),
        case_growth: case_growth(counts.active, counts.resolved),
        workload_level: workload_level(counts.active),
    }
}
