#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Case record types shared by the resolver and the analytics calculators.
//!
//! [`CaseRecord`] mirrors a row of the `cases` table as exported by the
//! database layer. It is read-only input to everything in this workspace.

mod de;

use std::str::FromStr as _;

use chrono::{DateTime, Utc};
use cybercrime_console_crime_models::{FieldGroup, FieldKey};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Workflow status of a case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CaseStatus {
    /// Filed but not yet picked up by an officer
    Pending,
    /// Assigned and actively being worked
    #[serde(rename = "Under Investigation")]
    #[strum(serialize = "Under Investigation")]
    UnderInvestigation,
    /// Waiting on the complainant for additional information
    #[serde(rename = "Requires More Information", alias = "Requires More Info")]
    #[strum(to_string = "Requires More Information", serialize = "Requires More Info")]
    RequiresMoreInformation,
    /// Closed with a resolution
    Resolved,
    /// Closed without action
    Dismissed,
}

impl CaseStatus {
    /// Returns `true` for statuses that still need investigative work.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(
            self,
            Self::Pending | Self::UnderInvestigation | Self::RequiresMoreInformation
        )
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Pending,
            Self::UnderInvestigation,
            Self::RequiresMoreInformation,
            Self::Resolved,
            Self::Dismissed,
        ]
    }
}

/// Triage priority of a case.
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
#[strum(ascii_case_insensitive)]
pub enum CasePriority {
    /// Can wait behind other work
    Low,
    /// Normal handling
    Medium,
    /// Ahead of the normal queue
    High,
    /// Needs immediate action
    Urgent,
}

fn text(value: Option<&str>) -> Option<RawValue<'_>> {
    value.map(RawValue::Text)
}

/// A field value that the database may hand back as either a number or a
/// string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A JSON number.
    Number(f64),
    /// A JSON string (possibly numeric, possibly garbage).
    Text(String),
}

/// Borrowed view of a populated case-detail field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    /// Text value.
    Text(&'a str),
    /// Numeric value.
    Number(f64),
}

impl<'a> From<&'a FieldValue> for RawValue<'a> {
    fn from(value: &'a FieldValue) -> Self {
        match value {
            FieldValue::Number(n) => Self::Number(*n),
            FieldValue::Text(s) => Self::Text(s),
        }
    }
}

/// A case row as exported from the `cases` table.
///
/// Relational references (officer, unit, complainant) are kept as opaque
/// ids; joins are the database layer's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseRecord {
    /// Database primary key. Integer keys are kept as their decimal text.
    #[serde(deserialize_with = "de::text_or_empty")]
    pub id: String,
    /// Human-facing case number (e.g. `"CC-2024-00017"`).
    #[serde(deserialize_with = "de::opt_text")]
    pub case_number: Option<String>,
    /// Crime type identifier (e.g. `"ransomware"`). Empty when unset.
    #[serde(deserialize_with = "de::text_or_empty")]
    pub crime_type: String,
    /// Raw status string. See [`CaseRecord::status`].
    #[serde(deserialize_with = "de::text_or_empty")]
    pub status: String,
    /// Raw priority string. See [`CaseRecord::priority`].
    #[serde(deserialize_with = "de::opt_text")]
    pub priority: Option<String>,
    /// When the complaint was filed. Timestamps without an offset are UTC.
    #[serde(deserialize_with = "de::opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the case was last modified.
    #[serde(deserialize_with = "de::opt_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Officer the case is assigned to.
    #[serde(deserialize_with = "de::opt_text")]
    pub assigned_officer_id: Option<String>,
    /// PNP unit the case is assigned to.
    #[serde(deserialize_with = "de::opt_text")]
    pub assigned_unit_id: Option<String>,
    /// Complainant who filed the case.
    #[serde(deserialize_with = "de::opt_text")]
    pub complainant_id: Option<String>,
    /// AI-generated case summary, if one has been produced.
    pub ai_summary: Option<String>,

    /// Where the incident happened
    pub incident_location: Option<String>,
    /// App or site the incident happened on
    pub platform_used: Option<String>,
    /// URL involved in the incident
    pub website_url: Option<String>,
    /// Amount lost in pesos
    pub estimated_loss: Option<FieldValue>,
    /// How the victim paid (`snake_case`)
    pub payment_method: Option<String>,
    /// Bank, wallet, or account reference
    pub account_reference: Option<String>,
    /// Known name or alias of the suspect
    pub suspect_name: Option<String>,
    /// Suspect's phone, email, or handle
    pub suspect_contact: Option<String>,
    /// Affected systems
    pub system_details: Option<String>,
    /// Technical indicators (IPs, hashes, headers)
    pub technical_info: Option<String>,
    /// How the attack got in (`snake_case`)
    pub attack_vector: Option<String>,
    /// Exploited weakness
    pub vulnerability_details: Option<String>,
    /// Sensitivity of the affected data (`snake_case`)
    pub security_level: Option<String>,
    /// Description of the offending content
    pub content_description: Option<String>,
    /// Number of people affected
    pub affected_individuals: Option<FieldValue>,
    /// Reported impact on the victim
    pub impact_assessment: Option<String>,
}

impl CaseRecord {
    /// Reads the raw value stored for `key`, without any filtering.
    #[must_use]
    pub fn field(&self, key: FieldKey) -> Option<RawValue<'_>> {
        match key {
            FieldKey::IncidentLocation => text(self.incident_location.as_deref()),
            FieldKey::PlatformUsed => text(self.platform_used.as_deref()),
            FieldKey::WebsiteUrl => text(self.website_url.as_deref()),
            FieldKey::EstimatedLoss => self.estimated_loss.as_ref().map(RawValue::from),
            FieldKey::PaymentMethod => text(self.payment_method.as_deref()),
            FieldKey::AccountReference => text(self.account_reference.as_deref()),
            FieldKey::SuspectName => text(self.suspect_name.as_deref()),
            FieldKey::SuspectContact => text(self.suspect_contact.as_deref()),
            FieldKey::SystemDetails => text(self.system_details.as_deref()),
            FieldKey::TechnicalInfo => text(self.technical_info.as_deref()),
            FieldKey::AttackVector => text(self.attack_vector.as_deref()),
            FieldKey::VulnerabilityDetails => text(self.vulnerability_details.as_deref()),
            FieldKey::SecurityLevel => text(self.security_level.as_deref()),
            FieldKey::ContentDescription => text(self.content_description.as_deref()),
            FieldKey::AffectedIndividuals => {
                self.affected_individuals.as_ref().map(RawValue::from)
            }
            FieldKey::ImpactAssessment => text(self.impact_assessment.as_deref()),
        }
    }

    /// Parses the status string. Unrecognized statuses yield `None`.
    #[must_use]
    pub fn status(&self) -> Option<CaseStatus> {
        CaseStatus::from_str(&self.status).ok()
    }

    /// Parses the priority string, ignoring case. Unrecognized priorities
    /// yield `None`.
    #[must_use]
    pub fn priority(&self) -> Option<CasePriority> {
        self.priority
            .as_deref()
            .and_then(|p| CasePriority::from_str(p.trim()).ok())
    }

    /// Returns `true` when an AI summary has been generated for this case.
    #[must_use]
    pub fn has_ai_summary(&self) -> bool {
        self.ai_summary.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Returns `true` when either the suspect's name or contact is known.
    #[must_use]
    pub fn has_suspect_info(&self) -> bool {
        [&self.suspect_name, &self.suspect_contact]
            .into_iter()
            .any(|v| v.as_deref().is_some_and(|s| !s.is_empty()))
    }
}

/// A case-detail field that survived resolution, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedField {
    /// Which field this is.
    pub key: FieldKey,
    /// Display label.
    pub label: String,
    /// Display group.
    pub group: FieldGroup,
    /// Formatted value.
    pub value: String,
    /// Optional help text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}
