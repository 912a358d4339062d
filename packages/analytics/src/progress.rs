//! Investigation progress scoring.

use cybercrime_console_analytics_models::ProgressPolicy;
use cybercrime_console_case_models::{CaseRecord, CaseStatus};

/// Progress score for a status the console doesn't recognize.
pub const UNKNOWN_STATUS_PROGRESS: u8 = 5;

const MAX_PROGRESS: u32 = 100;

/// Returns the status-based starting point of the progress score.
#[must_use]
pub const fn base_progress(status: Option<CaseStatus>) -> u8 {
    match status {
        Some(CaseStatus::Pending) => 10,
        Some(CaseStatus::UnderInvestigation) => 40,
        Some(CaseStatus::RequiresMoreInformation) => 60,
        Some(CaseStatus::Resolved | CaseStatus::Dismissed) => 100,
        None => UNKNOWN_STATUS_PROGRESS,
    }
}

/// Scores investigation progress (0-100) with the default
/// [`ProgressPolicy`].
#[must_use]
pub fn investigation_progress(
    status: Option<CaseStatus>,
    evidence_file_count: u32,
    has_ai_summary: bool,
    has_suspect_info: bool,
) -> u8 {
    investigation_progress_with(
        &ProgressPolicy::default(),
        status,
        evidence_file_count,
        has_ai_summary,
        has_suspect_info,
    )
}

/// Scores investigation progress (0-100) using the bonuses in `policy`.
///
/// The result never exceeds 100 no matter how many bonuses apply.
#[must_use]
pub fn investigation_progress_with(
    policy: &ProgressPolicy,
    status: Option<CaseStatus>,
    evidence_file_count: u32,
    has_ai_summary: bool,
    has_suspect_info: bool,
) -> u8 {
    let mut score = u32::from(base_progress(status));

    if evidence_file_count > 0 {
        score += u32::from(policy.evidence_bonus);
        if evidence_file_count >= policy.bulk_evidence_threshold {
            score += u32::from(policy.bulk_evidence_bonus);
        }
    }
    if has_ai_summary {
        score += u32::from(policy.ai_summary_bonus);
    }
    if has_suspect_info {
        score += u32::from(policy.suspect_info_bonus);
    }

    u8::try_from(score.min(MAX_PROGRESS)).unwrap_or(u8::MAX)
}

/// Scores a case record, reading its status, AI summary, and suspect
/// details from the record itself.
///
/// Evidence lives in a separate store, so its file count is passed in.
#[must_use]
pub fn case_progress(case: &CaseRecord, evidence_file_count: u32, policy: &ProgressPolicy) -> u8 {
    let status = case.status();
    if status.is_none() {
        log::debug!(
            "Case '{}' has unrecognized status '{}'; scoring from the fallback base",
            case.id,
            case.status
        );
    }

    investigation_progress_with(
        policy,
        status,
        evidence_file_count,
        case.has_ai_summary(),
        case.has_suspect_info(),
    )
}
