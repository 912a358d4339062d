//! Case-detail field keys and their display metadata.
//!
//! Each [`FieldKey`] names one optional property of a case record. The key
//! carries its display label, the [`FieldGroup`] it is rendered under, an
//! optional [`FormatHint`], and an optional help hint for the complainant.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Semantic grouping for case-detail fields.
///
/// The declaration order is the display order: resolved fields are sorted
/// by group before anything else.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldGroup {
    /// Where the incident happened
    Location,
    /// Online platform or site involved
    Platform,
    /// Monetary loss and payment trail
    Financial,
    /// Suspect identity and contact details
    Suspect,
    /// Technical details of the attack
    Technical,
    /// Vulnerabilities and data sensitivity
    Security,
    /// Offending content
    Content,
    /// Reach and severity of the incident
    Impact,
}

impl FieldGroup {
    /// Returns the section heading shown above fields of this group.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Location => "Location",
            Self::Platform => "Platform",
            Self::Financial => "Financial Impact",
            Self::Suspect => "Suspect Information",
            Self::Technical => "Technical Details",
            Self::Security => "Security",
            Self::Content => "Content",
            Self::Impact => "Impact",
        }
    }

    /// Returns all variants of this enum in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Location,
            Self::Platform,
            Self::Financial,
            Self::Suspect,
            Self::Technical,
            Self::Security,
            Self::Content,
            Self::Impact,
        ]
    }
}

/// How a field's raw value is turned into display text.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FormatHint {
    /// Positive amount rendered in Philippine pesos (`₱150,000`)
    Currency,
    /// `snake_case` enum value rendered as `Title Case`
    EnumTitlecase,
}

/// One of the 16 known optional case-detail fields.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldKey {
    /// City or place where the incident happened
    IncidentLocation,
    /// App or website the incident happened on
    PlatformUsed,
    /// URL involved in the incident
    WebsiteUrl,
    /// Amount lost, in pesos
    EstimatedLoss,
    /// How money changed hands
    PaymentMethod,
    /// Bank, wallet, or account reference
    AccountReference,
    /// Known name or alias of the suspect
    SuspectName,
    /// Suspect's phone, email, or handle
    SuspectContact,
    /// Affected systems or devices
    SystemDetails,
    /// Technical indicators such as IPs and hashes
    TechnicalInfo,
    /// How the attack got in
    AttackVector,
    /// Weakness that was exploited
    VulnerabilityDetails,
    /// Sensitivity of the affected data
    SecurityLevel,
    /// Description of the offending content
    ContentDescription,
    /// Number of people affected
    AffectedIndividuals,
    /// Reported impact on the victim
    ImpactAssessment,
}

impl FieldKey {
    /// Returns the human-readable label for this field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::IncidentLocation => "Incident Location",
            Self::PlatformUsed => "Platform Used",
            Self::WebsiteUrl => "Website / URL",
            Self::EstimatedLoss => "Estimated Loss",
            Self::PaymentMethod => "Payment Method",
            Self::AccountReference => "Account Reference",
            Self::SuspectName => "Suspect Name",
            Self::SuspectContact => "Suspect Contact",
            Self::SystemDetails => "System Details",
            Self::TechnicalInfo => "Technical Information",
            Self::AttackVector => "Attack Vector",
            Self::VulnerabilityDetails => "Vulnerability Details",
            Self::SecurityLevel => "Security Level",
            Self::ContentDescription => "Content Description",
            Self::AffectedIndividuals => "Affected Individuals",
            Self::ImpactAssessment => "Impact Assessment",
        }
    }

    /// Returns the group this field is displayed under.
    #[must_use]
    pub const fn group(self) -> FieldGroup {
        match self {
            Self::IncidentLocation => FieldGroup::Location,
            Self::PlatformUsed | Self::WebsiteUrl => FieldGroup::Platform,
            Self::EstimatedLoss | Self::PaymentMethod | Self::AccountReference => {
                FieldGroup::Financial
            }
            Self::SuspectName | Self::SuspectContact => FieldGroup::Suspect,
            Self::SystemDetails | Self::TechnicalInfo | Self::AttackVector => {
                FieldGroup::Technical
            }
            Self::VulnerabilityDetails | Self::SecurityLevel => FieldGroup::Security,
            Self::ContentDescription => FieldGroup::Content,
            Self::AffectedIndividuals | Self::ImpactAssessment => FieldGroup::Impact,
        }
    }

    /// Returns the format applied to this field's value, if any.
    #[must_use]
    pub const fn format_hint(self) -> Option<FormatHint> {
        match self {
            Self::EstimatedLoss => Some(FormatHint::Currency),
            Self::PaymentMethod | Self::AttackVector | Self::SecurityLevel => {
                Some(FormatHint::EnumTitlecase)
            }
            _ => None,
        }
    }

    /// Returns the help text shown next to this field, if any.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::IncidentLocation => {
                Some("Physical or online location where the incident happened")
            }
            Self::PlatformUsed => Some("Social media, messaging app, or service involved"),
            Self::EstimatedLoss => Some("Total monetary loss reported by the complainant"),
            Self::AccountReference => Some("Bank, e-wallet, or online account involved"),
            Self::SuspectContact => Some("Phone number, e-mail, or handle used by the suspect"),
            Self::SystemDetails => Some("Affected devices, operating systems, or servers"),
            Self::ContentDescription => Some("Nature of the offending content"),
            _ => None,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::IncidentLocation,
            Self::PlatformUsed,
            Self::WebsiteUrl,
            Self::EstimatedLoss,
            Self::PaymentMethod,
            Self::AccountReference,
            Self::SuspectName,
            Self::SuspectContact,
            Self::SystemDetails,
            Self::TechnicalInfo,
            Self::AttackVector,
            Self::VulnerabilityDetails,
            Self::SecurityLevel,
            Self::ContentDescription,
            Self::AffectedIndividuals,
            Self::ImpactAssessment,
        ]
    }
}
