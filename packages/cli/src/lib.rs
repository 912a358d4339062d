#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the admin console's case logic.
//!
//! Loads case records exported from the database as JSON, resolves their
//! category-specific detail fields, and computes the unit, officer, and
//! progress metrics the console renders.

pub mod interactive;

use std::path::{Path, PathBuf};

use cybercrime_console_analytics::AnalyticsError;
use cybercrime_console_analytics::aggregate::{
    category_breakdown, officer_case_counts, tally_cases, unit_case_counts,
};
use cybercrime_console_analytics::config::AnalyticsConfig;
use cybercrime_console_analytics::stats::{officer_stats, unit_stats};
use cybercrime_console_analytics_models::{CaseCounts, CategoryCount, OfficerStats, UnitStats};
use cybercrime_console_case::{NO_DETAILS_MESSAGE, group_fields};
use cybercrime_console_case_models::{CaseRecord, ResolvedField};
use serde::Serialize;
use thiserror::Error;

/// Environment variable naming the config file when `--config` isn't given.
pub const CONFIG_ENV_VAR: &str = "CYBERCRIME_CONSOLE_CONFIG";

/// Errors that can occur while running a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (file read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file is invalid.
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    /// Interactive prompt failed.
    #[error("Prompt error: {0}")]
    Dialog(#[from] dialoguer::Error),

    /// No crime category has this display name.
    #[error("Unknown crime category: '{name}'")]
    UnknownCategory {
        /// The name that was given.
        name: String,
    },
}

/// Loads the analytics config from `path`, falling back to the
/// [`CONFIG_ENV_VAR`] environment variable, then to defaults.
///
/// # Errors
///
/// Returns [`CliError`] if the config file can't be read or is invalid.
pub fn load_config(path: Option<&Path>) -> Result<AnalyticsConfig, CliError> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

    let Some(path) = path else {
        log::debug!("No config file given; using default analytics settings");
        return Ok(AnalyticsConfig::default());
    };

    log::info!("Loading config from {}", path.display());
    let source = std::fs::read_to_string(&path)?;
    Ok(AnalyticsConfig::from_toml_str(&source)?)
}

/// Reads a single case record from a JSON file.
///
/// # Errors
///
/// Returns [`CliError`] if the file can't be read or isn't a case object.
pub fn read_case(path: &Path) -> Result<CaseRecord, CliError> {
    let source = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&source)?)
}

/// Reads a JSON array of case records.
///
/// # Errors
///
/// Returns [`CliError`] if the file can't be read or isn't a JSON array.
pub fn read_cases(path: &Path) -> Result<Vec<CaseRecord>, CliError> {
    let source = std::fs::read_to_string(path)?;
    let cases = parse_cases(&source)?;
    log::debug!("Read {} cases from {}", cases.len(), path.display());
    Ok(cases)
}

/// Parses a JSON array of case records. Rows that aren't case objects are
/// skipped with a warning so one bad row doesn't hide the rest.
///
/// # Errors
///
/// Returns [`CliError::Json`] if `source` isn't a JSON array.
pub fn parse_cases(source: &str) -> Result<Vec<CaseRecord>, CliError> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(source)?;

    Ok(rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(case) => Some(case),
            Err(e) => {
                log::warn!("Skipping case row {index}: {e}");
                None
            }
        })
        .collect())
}

/// Renders resolved fields as labelled sections, or the fallback message
/// when there is nothing to show.
#[must_use]
pub fn render_fields(fields: Vec<ResolvedField>) -> String {
    if fields.is_empty() {
        return format!("{NO_DETAILS_MESSAGE}\n");
    }

    let mut out = String::new();
    for (group, members) in group_fields(fields) {
        out.push_str(group.heading());
        out.push('\n');
        for field in members {
            out.push_str(&format!("  {:<24} {}\n", field.label, field.value));
        }
    }
    out
}

/// Renders a unit statistics card.
#[must_use]
pub fn render_unit_stats(stats: &UnitStats) -> String {
    format!(
        "Success rate:    {}%\n\
         Active cases:    {}\n\
         Resolved cases:  {}\n\
         Officers:        {}\n\
         Workload:        {}\n\
         Response time:   {}\n\
         Case growth:     {}\n",
        stats.success_rate,
        stats.active_cases,
        stats.resolved_cases,
        stats.officer_count,
        stats.workload_level,
        stats.response_time_bucket,
        stats.case_growth,
    )
}

/// Renders an officer statistics card.
#[must_use]
pub fn render_officer_stats(stats: &OfficerStats) -> String {
    format!(
        "Success rate:    {}%\n\
         Active cases:    {}\n\
         Resolved cases:  {}\n\
         Workload:        {}\n\
         Response time:   {}\n\
         Case growth:     {}\n",
        stats.success_rate,
        stats.active_cases,
        stats.resolved_cases,
        stats.workload_level,
        stats.response_time_bucket,
        stats.case_growth,
    )
}

/// Which cases a summary covers.
#[derive(Debug, Clone, Copy, Default)]
pub enum SummaryScope<'a> {
    /// Every case in the file.
    #[default]
    All,
    /// Cases assigned to one PNP unit.
    Unit(&'a str),
    /// Cases assigned to one officer.
    Officer(&'a str),
}

/// Statistics card for a summary: a unit card for unit and whole-file
/// scopes, an officer card for a single officer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SummaryStats {
    /// Cases handled by a team of officers.
    Unit(UnitStats),
    /// One officer's caseload.
    Officer(OfficerStats),
}

/// Dashboard summary over a list of cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSummary {
    /// Lifecycle counts for the cases in scope.
    pub counts: CaseCounts,
    /// Cases per crime category, largest first.
    pub by_category: Vec<CategoryCount>,
    /// Derived statistics for the cases in scope.
    pub stats: SummaryStats,
}

/// Summarizes `cases` within `scope`.
///
/// Unit and whole-file scopes are measured against `officer_count`
/// officers. An officer scope is always measured against that one officer
/// and ignores `officer_count`.
#[must_use]
pub fn summarize(cases: &[CaseRecord], scope: SummaryScope<'_>, officer_count: u64) -> CaseSummary {
    let (counts, in_scope): (CaseCounts, Vec<CaseRecord>) = match scope {
        SummaryScope::All => (tally_cases(cases), cases.to_vec()),
        SummaryScope::Unit(unit_id) => (
            unit_case_counts(cases, unit_id),
            cases
                .iter()
                .filter(|c| c.assigned_unit_id.as_deref() == Some(unit_id))
                .cloned()
                .collect(),
        ),
        SummaryScope::Officer(officer_id) => (
            officer_case_counts(cases, officer_id),
            cases
                .iter()
                .filter(|c| c.assigned_officer_id.as_deref() == Some(officer_id))
                .cloned()
                .collect(),
        ),
    };

    let stats = match scope {
        SummaryScope::Officer(_) => SummaryStats::Officer(officer_stats(counts)),
        SummaryScope::All | SummaryScope::Unit(_) => {
            SummaryStats::Unit(unit_stats(counts, officer_count))
        }
    };

    CaseSummary {
        counts,
        by_category: category_breakdown(&in_scope),
        stats,
    }
}

/// Renders a [`CaseSummary`] as text.
#[must_use]
pub fn render_summary(summary: &CaseSummary) -> String {
    let mut out = format!(
        "Cases: {} total ({} active, {} resolved, {} dismissed)\n\n",
        summary.counts.total(),
        summary.counts.active,
        summary.counts.resolved,
        summary.counts.dismissed
    );
    out.push_str("By category\n");
    for entry in &summary.by_category {
        out.push_str(&format!("  {:<40} {}\n", entry.category, entry.count));
    }
    out.push('\n');
    out.push_str(&match &summary.stats {
        SummaryStats::Unit(stats) => render_unit_stats(stats),
        SummaryStats::Officer(stats) => render_officer_stats(stats),
    });
    out
}

#[cfg(test)]
mod tests {
    use cybercrime_console_analytics_models::{ResponseTimeBucket, WorkloadLevel};
    use cybercrime_console_case::resolve_case_fields;

    use super::*;

    fn cases() -> Vec<CaseRecord> {
        serde_json::from_value(serde_json::json!([
            { "id": "1", "crime_type": "phishing", "status": "Pending",
              "assigned_unit_id": "acg-ncr", "assigned_officer_id": "o-1" },
            { "id": "2", "crime_type": "onlineScam", "status": "Resolved",
              "assigned_unit_id": "acg-ncr", "assigned_officer_id": "o-1" },
            { "id": "3", "crime_type": "ransomware", "status": "Resolved",
              "assigned_unit_id": "acg-r7", "assigned_officer_id": "o-2" },
        ]))
        .unwrap()
    }

    fn unit_card(summary: &CaseSummary) -> &UnitStats {
        match &summary.stats {
            SummaryStats::Unit(stats) => stats,
            SummaryStats::Officer(_) => panic!("expected unit stats, got {:?}", summary.stats),
        }
    }

    #[test]
    fn renders_fallback_for_empty_fields() {
        assert_eq!(render_fields(Vec::new()), format!("{NO_DETAILS_MESSAGE}\n"));
    }

    #[test]
    fn renders_sections() {
        let case: CaseRecord = serde_json::from_value(serde_json::json!({
            "crime_type": "onlineScam",
            "incident_location": "Taguig",
            "estimated_loss": 150_000,
        }))
        .unwrap();

        let text = render_fields(resolve_case_fields(&case));

        assert!(text.starts_with("Location\n"), "{text}");
        assert!(text.contains("Financial Impact\n"), "{text}");
        assert!(text.contains("₱150,000"), "{text}");
    }

    #[test]
    fn parse_cases_keeps_rows_around_a_bad_one() {
        let cases = parse_cases(
            r#"[
                { "id": 1, "crime_type": "phishing", "status": "Pending",
                  "created_at": "2024-01-15T08:30:00.123456" },
                { "id": 2, "crime_type": null, "status": "Resolved" },
                "not a case",
                { "id": 4, "crime_type": "ransomware", "status": "Dismissed" }
            ]"#,
        )
        .unwrap();

        let ids: Vec<&str> = cases.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4"]);

        let summary = summarize(&cases, SummaryScope::All, 1);
        assert_eq!(
            summary.counts,
            CaseCounts {
                active: 1,
                resolved: 1,
                dismissed: 1,
            }
        );
        assert!(
            summary
                .by_category
                .iter()
                .any(|c| c.category == cybercrime_console_analytics::aggregate::UNCATEGORIZED),
            "{:?}",
            summary.by_category
        );
    }

    #[test]
    fn parse_cases_rejects_non_array() {
        let err = parse_cases(r#"{ "id": "1" }"#).unwrap_err();
        assert!(matches!(err, CliError::Json(_)), "{err}");
    }

    #[test]
    fn summarizes_a_unit() {
        let summary = summarize(&cases(), SummaryScope::Unit("acg-ncr"), 1);
        let stats = unit_card(&summary);

        assert_eq!(summary.counts.active, 1);
        assert_eq!(summary.counts.resolved, 1);
        assert_eq!(summary.by_category.len(), 2);
        assert_eq!(stats.success_rate, 50);
        assert_eq!(stats.response_time_bucket, ResponseTimeBucket::OneHour);
    }

    #[test]
    fn summarizes_everything() {
        let summary = summarize(&cases(), SummaryScope::All, 2);
        let stats = unit_card(&summary);

        assert_eq!(summary.counts.total(), 3);
        assert_eq!(stats.success_rate, 67);
        assert_eq!(stats.officer_count, 2);
        assert_eq!(stats.case_growth.to_string(), "-17%");

        let text = render_summary(&summary);
        assert!(text.contains("3 total (1 active, 2 resolved, 0 dismissed)"), "{text}");
        assert!(text.contains("Officers:        2"), "{text}");
    }

    #[test]
    fn officer_summary_ignores_team_size() {
        let cases: Vec<CaseRecord> = (0..9)
            .map(|i| CaseRecord {
                id: i.to_string(),
                crime_type: "phishing".to_string(),
                status: "Pending".to_string(),
                assigned_officer_id: Some("o-1".to_string()),
                ..CaseRecord::default()
            })
            .collect();

        let summary = summarize(&cases, SummaryScope::Officer("o-1"), 3);

        let SummaryStats::Officer(stats) = &summary.stats else {
            panic!("expected officer stats, got {:?}", summary.stats);
        };
        assert_eq!(stats.active_cases, 9);
        assert_eq!(stats.workload_level, WorkloadLevel::High);
        assert_eq!(stats.response_time_bucket, ResponseTimeBucket::ThreePlusHours);

        let text = render_summary(&summary);
        assert!(!text.contains("Officers:"), "{text}");
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = summarize(&cases(), SummaryScope::Officer("o-2"), 1);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["counts"]["resolved"], 1);
        assert_eq!(json["byCategory"][0]["category"], "Malware & System Attacks");
        assert_eq!(json["stats"]["successRate"], 100);
        assert!(json["stats"].get("officerCount").is_none(), "{json}");
    }

    #[test]
    fn unknown_category_error_names_the_input() {
        let err = CliError::UnknownCategory {
            name: "Street Crimes".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown crime category: 'Street Crimes'");
    }
}
