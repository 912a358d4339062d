//! Category-driven case-detail field resolution.
//!
//! The crime type picks a category, the category picks an ordered list of
//! field keys, and only populated fields from that list are returned. A
//! field outside the category's list is never surfaced, even if the record
//! has a value for it.

use cybercrime_console_case_models::{CaseRecord, RawValue, ResolvedField};
use cybercrime_console_crime_models::{FieldGroup, FieldKey, FormatHint, category_of};

use crate::format::{format_peso, format_plain, parse_amount, title_case_enum};

/// Shown in place of the details section when nothing resolves.
pub const NO_DETAILS_MESSAGE: &str = "No additional details available for this case.";

/// Resolves the displayable detail fields of `case` for `crime_type`.
///
/// Fields are ordered by [`FieldGroup`] and, within a group, by the
/// category schema's declared order. An unknown crime type resolves to an
/// empty list.
#[must_use]
pub fn resolve_fields(case: &CaseRecord, crime_type: &str) -> Vec<ResolvedField> {
    let Some(category) = category_of(crime_type) else {
        log::debug!("No category for crime type '{crime_type}'; no detail fields resolved");
        return Vec::new();
    };

    let mut fields: Vec<ResolvedField> = category
        .fields()
        .iter()
        .filter_map(|key| resolve_field(case, *key))
        .collect();

    // Stable: schema order is kept within each group.
    fields.sort_by_key(|field| field.group);

    log::trace!(
        "Resolved {} of {} '{category}' fields for case '{}'",
        fields.len(),
        category.fields().len(),
        case.id
    );

    fields
}

/// Resolves the detail fields of `case` using its own crime type.
#[must_use]
pub fn resolve_case_fields(case: &CaseRecord) -> Vec<ResolvedField> {
    resolve_fields(case, &case.crime_type)
}

fn resolve_field(case: &CaseRecord, key: FieldKey) -> Option<ResolvedField> {
    let raw = case.field(key)?;
    if matches!(raw, RawValue::Text(s) if s.is_empty()) {
        return None;
    }

    let value = format_value(key, raw)?;

    Some(ResolvedField {
        key,
        label: key.label().to_string(),
        group: key.group(),
        value,
        hint: key.hint().map(str::to_string),
    })
}

/// Formats a populated raw value according to the key's [`FormatHint`].
///
/// Returns `None` for currency values that are zero, negative, or not a
/// number; those are not reported.
#[must_use]
pub fn format_value(key: FieldKey, raw: RawValue<'_>) -> Option<String> {
    match key.format_hint() {
        Some(FormatHint::Currency) => {
            let Some(amount) = parse_amount(raw) else {
                log::trace!("Skipping {key}: {raw:?} is not a positive amount");
                return None;
            };
            Some(format_peso(amount))
        }
        Some(FormatHint::EnumTitlecase) => Some(match raw {
            RawValue::Text(s) => title_case_enum(s),
            RawValue::Number(_) => format_plain(raw),
        }),
        None => Some(format_plain(raw)),
    }
}

/// Splits resolved fields into display sections, one per non-empty group,
/// in group order.
#[must_use]
pub fn group_fields(fields: Vec<ResolvedField>) -> Vec<(FieldGroup, Vec<ResolvedField>)> {
    let mut sections: Vec<(FieldGroup, Vec<ResolvedField>)> = Vec::new();

    for field in fields {
        match sections.iter_mut().find(|(group, _)| *group == field.group) {
            Some((_, members)) => members.push(field),
            None => sections.push((field.group, vec![field])),
        }
    }

    sections.sort_by_key(|(group, _)| *group);
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(json: serde_json::Value) -> CaseRecord {
        serde_json::from_value(json).unwrap()
    }

    fn keys(fields: &[ResolvedField]) -> Vec<FieldKey> {
        fields.iter().map(|f| f.key).collect()
    }

    fn value_of(fields: &[ResolvedField], key: FieldKey) -> Option<&str> {
        fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
    }

    #[test]
    fn identity_theft_scenario() {
        let record = case(serde_json::json!({
            "crime_type": "identityTheft",
            "incident_location": "Manila",
            "account_reference": "",
            "technical_info": "leaked DB dump",
            "vulnerability_details": null,
            "security_level": "restricted",
            "impact_assessment": "high",
        }));

        let fields = resolve_case_fields(&record);

        assert_eq!(
            keys(&fields),
            vec![
                FieldKey::IncidentLocation,
                FieldKey::TechnicalInfo,
                FieldKey::SecurityLevel,
                FieldKey::ImpactAssessment,
            ]
        );
        assert_eq!(value_of(&fields, FieldKey::IncidentLocation), Some("Manila"));
        assert_eq!(
            value_of(&fields, FieldKey::TechnicalInfo),
            Some("leaked DB dump")
        );
        assert_eq!(value_of(&fields, FieldKey::SecurityLevel), Some("Restricted"));
        assert_eq!(value_of(&fields, FieldKey::ImpactAssessment), Some("high"));
    }

    #[test]
    fn fields_outside_schema_are_never_surfaced() {
        let record = case(serde_json::json!({
            "crime_type": "ransomware",
            "suspect_name": "John",
            "incident_location": "Cebu City",
            "estimated_loss": 50000,
            "system_details": "Windows Server 2019",
        }));

        let fields = resolve_case_fields(&record);

        assert_eq!(keys(&fields), vec![FieldKey::SystemDetails]);
    }

    #[test]
    fn zero_loss_is_not_reported() {
        let record = case(serde_json::json!({
            "crime_type": "onlineScam",
            "estimated_loss": 0,
            "platform_used": "Facebook Marketplace",
        }));

        let fields = resolve_case_fields(&record);

        assert!(!keys(&fields).contains(&FieldKey::EstimatedLoss));
        assert!(fields.iter().all(|f| f.group != FieldGroup::Financial));
        assert_eq!(keys(&fields), vec![FieldKey::PlatformUsed]);
    }

    #[test]
    fn malformed_loss_is_treated_as_absent() {
        let record = case(serde_json::json!({
            "crime_type": "onlineScam",
            "estimated_loss": "around fifty thousand",
        }));

        assert!(resolve_case_fields(&record).is_empty());
    }

    #[test]
    fn loss_is_formatted_in_pesos() {
        let record = case(serde_json::json!({
            "crime_type": "investmentScam",
            "estimated_loss": 150_000,
            "payment_method": "bank_transfer",
        }));

        let fields = resolve_case_fields(&record);

        assert_eq!(value_of(&fields, FieldKey::EstimatedLoss), Some("₱150,000"));
        assert_eq!(
            value_of(&fields, FieldKey::PaymentMethod),
            Some("Bank Transfer")
        );
    }

    #[test]
    fn numeric_string_loss_is_accepted() {
        let record = case(serde_json::json!({
            "crime_type": "bankFraud",
            "estimated_loss": "25000.50",
        }));

        let fields = resolve_case_fields(&record);

        assert_eq!(value_of(&fields, FieldKey::EstimatedLoss), Some("₱25,000.5"));
    }

    #[test]
    fn output_is_grouped_in_display_order() {
        // Intellectual property declares website/platform/content before loss.
        let record = case(serde_json::json!({
            "crime_type": "softwarePiracy",
            "website_url": "https://warez.example",
            "platform_used": "Telegram",
            "content_description": "Cracked installers",
            "estimated_loss": 12000,
            "suspect_name": "Unknown seller",
            "impact_assessment": "medium",
        }));

        let fields = resolve_case_fields(&record);

        assert_eq!(
            keys(&fields),
            vec![
                FieldKey::WebsiteUrl,
                FieldKey::PlatformUsed,
                FieldKey::EstimatedLoss,
                FieldKey::SuspectName,
                FieldKey::ContentDescription,
                FieldKey::ImpactAssessment,
            ]
        );
        assert!(fields.windows(2).all(|w| w[0].group <= w[1].group));
    }

    #[test]
    fn unknown_crime_type_resolves_nothing() {
        let record = case(serde_json::json!({
            "crime_type": "jaywalking",
            "incident_location": "Makati",
        }));

        assert!(resolve_case_fields(&record).is_empty());
    }

    #[test]
    fn explicit_crime_type_overrides_record() {
        let record = case(serde_json::json!({
            "crime_type": "ransomware",
            "suspect_name": "John",
        }));

        let fields = resolve_fields(&record, "cyberstalking");

        assert_eq!(keys(&fields), vec![FieldKey::SuspectName]);
    }

    #[test]
    fn numeric_fields_are_stringified() {
        let record = case(serde_json::json!({
            "crime_type": "dataBreach",
            "affected_individuals": 1200,
        }));

        let fields = resolve_case_fields(&record);

        assert_eq!(
            value_of(&fields, FieldKey::AffectedIndividuals),
            Some("1200")
        );
    }

    #[test]
    fn resolved_fields_carry_metadata() {
        let record = case(serde_json::json!({
            "crime_type": "phishing",
            "suspect_contact": "scammer@example.com",
        }));

        let fields = resolve_case_fields(&record);

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].label, "Suspect Contact");
        assert_eq!(fields[0].group, FieldGroup::Suspect);
        assert_eq!(
            fields[0].hint.as_deref(),
            Some("Phone number, e-mail, or handle used by the suspect")
        );
    }

    #[test]
    fn resolution_does_not_touch_the_record() {
        let record = case(serde_json::json!({
            "crime_type": "phishing",
            "incident_location": "Davao",
        }));
        let before = record.clone();

        let first = resolve_case_fields(&record);
        let second = resolve_case_fields(&record);

        assert_eq!(record, before);
        assert_eq!(first, second);
    }

    #[test]
    fn groups_into_sections() {
        let record = case(serde_json::json!({
            "crime_type": "onlineScam",
            "incident_location": "Pasig",
            "estimated_loss": 3000,
            "account_reference": "GCash 0917",
            "suspect_name": "J. Dela Cruz",
        }));

        let sections = group_fields(resolve_case_fields(&record));

        let groups: Vec<FieldGroup> = sections.iter().map(|(g, _)| *g).collect();
        assert_eq!(
            groups,
            vec![
                FieldGroup::Location,
                FieldGroup::Financial,
                FieldGroup::Suspect
            ]
        );
        assert_eq!(sections[1].1.len(), 2);
    }
}
