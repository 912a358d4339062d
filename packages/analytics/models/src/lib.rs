#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived case metric types.
//!
//! These are the values the console's unit and officer views render
//! directly: success rates, response-time estimates, case growth, workload
//! labels, and investigation progress scoring policy. All of them are
//! recomputed on demand from raw case counts and never persisted.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Estimated response time, bucketed by caseload per officer.
///
/// Variants are ordered from shortest to longest estimate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum ResponseTimeBucket {
    /// Workload under 2 cases per officer
    #[serde(rename = "1.0 hrs")]
    #[strum(serialize = "1.0 hrs")]
    OneHour,
    /// Workload of at least 2
    #[serde(rename = "1.5 hrs")]
    #[strum(serialize = "1.5 hrs")]
    OneAndHalfHours,
    /// Workload of at least 4
    #[serde(rename = "2.0 hrs")]
    #[strum(serialize = "2.0 hrs")]
    TwoHours,
    /// Workload of at least 6
    #[serde(rename = "2.5 hrs")]
    #[strum(serialize = "2.5 hrs")]
    TwoAndHalfHours,
    /// Workload of at least 8
    #[serde(rename = "3.0+ hrs")]
    #[strum(serialize = "3.0+ hrs")]
    ThreePlusHours,
}

/// Caseload severity label.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WorkloadLevel {
    /// Fewer than 5 cases per officer
    Low,
    /// 5 to 7 cases per officer
    Medium,
    /// 8 or more cases per officer
    High,
}

/// Signed percentage describing how far the active share of cases sits
/// above or below half. Rendered as `"+12%"`, `"-8%"`, or `"0%"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct CaseGrowth(i32);

impl CaseGrowth {
    /// Creates a growth value from a whole percentage.
    #[must_use]
    pub const fn new(percent: i32) -> Self {
        Self(percent)
    }

    /// Returns the signed percentage.
    #[must_use]
    pub const fn percent(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for CaseGrowth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}%", self.0)
        } else {
            write!(f, "{}%", self.0)
        }
    }
}

impl From<CaseGrowth> for String {
    fn from(value: CaseGrowth) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for CaseGrowth {
    type Error = InvalidCaseGrowthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let percent = value
            .strip_suffix('%')
            .map(|n| n.strip_prefix('+').unwrap_or(n))
            .and_then(|n| n.parse::<i32>().ok());

        match percent {
            Some(percent) => Ok(Self(percent)),
            None => Err(InvalidCaseGrowthError { value }),
        }
    }
}

/// Error returned when a string is not a case growth percentage such as
/// `"+12%"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCaseGrowthError {
    /// The rejected input.
    pub value: String,
}

impl std::fmt::Display for InvalidCaseGrowthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid case growth '{}': expected a signed percentage like +12%",
            self.value
        )
    }
}

impl std::error::Error for InvalidCaseGrowthError {}

/// Case counts by lifecycle bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseCounts {
    /// Pending, under investigation, or awaiting more information.
    pub active: u64,
    /// Resolved.
    pub resolved: u64,
    /// Dismissed. Counted in neither `active` nor `resolved`.
    pub dismissed: u64,
}

impl CaseCounts {
    /// Returns the total number of cases counted.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.active + self.resolved + self.dismissed
    }
}

/// Aggregate statistics for a PNP unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitStats {
    /// Resolved share of resolved + active cases, 0-100.
    pub success_rate: u8,
    /// Active case count.
    pub active_cases: u64,
    /// Resolved case count.
    pub resolved_cases: u64,
    /// Estimated response time.
    pub response_time_bucket: ResponseTimeBucket,
    /// Active share relative to half of all cases.
    pub case_growth: CaseGrowth,
    /// Officers assigned to the unit.
    pub officer_count: u64,
    /// Caseload label from active cases per officer.
    pub workload_level: WorkloadLevel,
}

/// Aggregate statistics for a single officer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerStats {
    /// Resolved share of resolved + active cases, 0-100.
    pub success_rate: u8,
    /// Active case count.
    pub active_cases: u64,
    /// Resolved case count.
    pub resolved_cases: u64,
    /// Estimated response time.
    pub response_time_bucket: ResponseTimeBucket,
    /// Active share relative to half of all cases.
    pub case_growth: CaseGrowth,
    /// Caseload label from the officer's active cases.
    pub workload_level: WorkloadLevel,
}

/// Number of cases in one crime category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    /// Category display name, or `"Uncategorized"` for unknown crime types.
    pub category: String,
    /// Number of cases.
    pub count: u64,
}

/// Bonus points used to score investigation progress on top of the
/// status-based base value.
///
/// The defaults reproduce the console's long-standing scoring. Any field
/// left out of a config file keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressPolicy {
    /// Added when at least one evidence file is attached.
    pub evidence_bonus: u8,
    /// Added on top of `evidence_bonus` once `bulk_evidence_threshold`
    /// files are attached.
    pub bulk_evidence_bonus: u8,
    /// Evidence file count that earns `bulk_evidence_bonus`.
    pub bulk_evidence_threshold: u32,
    /// Added when an AI summary exists.
    pub ai_summary_bonus: u8,
    /// Added when the suspect's name or contact is known.
    pub suspect_info_bonus: u8,
}

impl Default for ProgressPolicy {
    fn default() -> Self {
        Self {
            evidence_bonus: 20,
            bulk_evidence_bonus: 10,
            bulk_evidence_threshold: 3,
            ai_summary_bonus: 10,
            suspect_info_bonus: 10,
        }
    }
}
