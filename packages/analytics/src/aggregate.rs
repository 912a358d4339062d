//! Case tallies over lists of case records.

use std::collections::BTreeMap;

use cybercrime_console_analytics_models::{CaseCounts, CategoryCount};
use cybercrime_console_case_models::{CaseRecord, CaseStatus};
use cybercrime_console_crime_models::category_of;

/// Category name used for cases whose crime type isn't in the taxonomy.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Counts active, resolved, and dismissed cases.
///
/// A case with an unrecognized status is still open as far as the console
/// can tell, so it counts as active.
#[must_use]
pub fn tally_cases<'a>(cases: impl IntoIterator<Item = &'a CaseRecord>) -> CaseCounts {
    let mut counts = CaseCounts::default();

    for case in cases {
        match case.status() {
            Some(CaseStatus::Resolved) => counts.resolved += 1,
            Some(CaseStatus::Dismissed) => counts.dismissed += 1,
            Some(_) => counts.active += 1,
            None => {
                log::warn!(
                    "Case '{}' has unrecognized status '{}'; counting it as active",
                    case.id,
                    case.status
                );
                counts.active += 1;
            }
        }
    }

    counts
}

/// Counts the cases assigned to one PNP unit.
#[must_use]
pub fn unit_case_counts(cases: &[CaseRecord], unit_id: &str) -> CaseCounts {
    tally_cases(
        cases
            .iter()
            .filter(|c| c.assigned_unit_id.as_deref() == Some(unit_id)),
    )
}

/// Counts the cases assigned to one officer.
#[must_use]
pub fn officer_case_counts(cases: &[CaseRecord], officer_id: &str) -> CaseCounts {
    tally_cases(
        cases
            .iter()
            .filter(|c| c.assigned_officer_id.as_deref() == Some(officer_id)),
    )
}

/// Counts cases per crime category, largest first.
///
/// Ties are broken by category name. Cases with an unknown crime type are
/// counted under [`UNCATEGORIZED`].
#[must_use]
pub fn category_breakdown(cases: &[CaseRecord]) -> Vec<CategoryCount> {
    let mut by_category: BTreeMap<String, u64> = BTreeMap::new();

    for case in cases {
        let name = category_of(&case.crime_type)
            .map_or_else(|| UNCATEGORIZED.to_string(), |c| c.to_string());
        *by_category.entry(name).or_default() += 1;
    }

    let mut counts: Vec<CategoryCount> = by_category
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    counts
}
