#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Cybercrime taxonomy types and the per-category case field schema.
//!
//! This crate is the single source of truth for which crime category a
//! reported crime type belongs to and which case-detail fields are relevant
//! for each category. Every view in the console resolves case details
//! through these tables rather than keeping its own copy.

pub mod fields;
pub mod taxonomy;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub use fields::{FieldGroup, FieldKey, FormatHint};
pub use taxonomy::{
    all_crime_types, category_of, crime_types_for, fields_for, humanize_crime_type,
};

/// Top-level cybercrime category groupings.
///
/// Each category maps to a specialized investigation unit and determines
/// which optional case-detail fields are shown for a case. The display
/// string is the exact value stored by the platform.
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
pub enum CrimeCategory {
    /// Phishing, spam, and compromised social media accounts
    #[serde(rename = "Communication & Social Media Crimes")]
    #[strum(serialize = "Communication & Social Media Crimes")]
    CommunicationSocialMedia,
    /// Online scams, payment fraud, and investment schemes
    #[serde(rename = "Financial & Fraud Crimes")]
    #[strum(serialize = "Financial & Fraud Crimes")]
    FinancialFraud,
    /// Identity theft, data breaches, and unauthorized access
    #[serde(rename = "Data & Privacy Crimes")]
    #[strum(serialize = "Data & Privacy Crimes")]
    DataPrivacy,
    /// Ransomware, trojans, spyware, and other malicious software
    #[serde(rename = "Malware & System Attacks")]
    #[strum(serialize = "Malware & System Attacks")]
    MalwareSystemAttacks,
    /// Denial of service, intrusions, and attacks on network services
    #[serde(rename = "Network & Infrastructure Attacks")]
    #[strum(serialize = "Network & Infrastructure Attacks")]
    NetworkInfrastructure,
    /// Cyberbullying, stalking, libel, and online threats
    #[serde(rename = "Harassment & Threats")]
    #[strum(serialize = "Harassment & Threats")]
    HarassmentThreats,
    /// Sextortion, non-consensual imagery, and online child exploitation
    #[serde(rename = "Sexual Exploitation & Abuse")]
    #[strum(serialize = "Sexual Exploitation & Abuse")]
    SexualExploitation,
    /// Piracy, counterfeiting, and trademark abuse
    #[serde(rename = "Intellectual Property Crimes")]
    #[strum(serialize = "Intellectual Property Crimes")]
    IntellectualProperty,
    /// Illegal gambling and online sale of prohibited goods or people
    #[serde(rename = "Illegal Online Trade & Gambling")]
    #[strum(serialize = "Illegal Online Trade & Gambling")]
    IllegalOnlineTrade,
    /// Fake news, deepfakes, and illegal content
    #[serde(rename = "Content & Misinformation Crimes")]
    #[strum(serialize = "Content & Misinformation Crimes")]
    ContentMisinformation,
}

impl CrimeCategory {
    /// Returns the ordered list of case-detail fields relevant to this
    /// category.
    ///
    /// Fields outside this list are never surfaced for cases of this
    /// category, even when the underlying record has a value for them.
    #[must_use]
    pub const fn fields(self) -> &'static [FieldKey] {
        use FieldKey::{
            AccountReference, AffectedIndividuals, AttackVector, ContentDescription,
            EstimatedLoss, ImpactAssessment, IncidentLocation, PaymentMethod, PlatformUsed,
            SecurityLevel, SuspectContact, SuspectName, SystemDetails, TechnicalInfo,
            VulnerabilityDetails, WebsiteUrl,
        };

        match self {
            Self::CommunicationSocialMedia => &[
                IncidentLocation,
                PlatformUsed,
                WebsiteUrl,
                SuspectName,
                SuspectContact,
                ContentDescription,
                ImpactAssessment,
            ],
            Self::FinancialFraud => &[
                IncidentLocation,
                PlatformUsed,
                WebsiteUrl,
                EstimatedLoss,
                PaymentMethod,
                AccountReference,
                SuspectName,
                SuspectContact,
                ImpactAssessment,
            ],
            Self::DataPrivacy => &[
                IncidentLocation,
                AccountReference,
                TechnicalInfo,
                VulnerabilityDetails,
                SecurityLevel,
                AffectedIndividuals,
                ImpactAssessment,
            ],
            Self::MalwareSystemAttacks => &[SystemDetails, TechnicalInfo, AttackVector],
            Self::NetworkInfrastructure => &[
                SystemDetails,
                TechnicalInfo,
                AttackVector,
                VulnerabilityDetails,
                SecurityLevel,
                AffectedIndividuals,
                ImpactAssessment,
            ],
            Self::HarassmentThreats => &[
                IncidentLocation,
                PlatformUsed,
                SuspectName,
                SuspectContact,
                ContentDescription,
                ImpactAssessment,
            ],
            Self::SexualExploitation => &[
                PlatformUsed,
                WebsiteUrl,
                SuspectName,
                SuspectContact,
                ContentDescription,
                AffectedIndividuals,
            ],
            Self::IntellectualProperty => &[
                WebsiteUrl,
                PlatformUsed,
                ContentDescription,
                EstimatedLoss,
                SuspectName,
                ImpactAssessment,
            ],
            Self::IllegalOnlineTrade => &[
                WebsiteUrl,
                PlatformUsed,
                EstimatedLoss,
                PaymentMethod,
                AccountReference,
                SuspectName,
                SuspectContact,
            ],
            Self::ContentMisinformation => &[
                PlatformUsed,
                WebsiteUrl,
                ContentDescription,
                AffectedIndividuals,
                ImpactAssessment,
            ],
        }
    }

    /// Looks up a category by its stored display string.
    #[must_use]
    pub fn from_display(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::CommunicationSocialMedia,
            Self::FinancialFraud,
            Self::DataPrivacy,
            Self::MalwareSystemAttacks,
            Self::NetworkInfrastructure,
            Self::HarassmentThreats,
            Self::SexualExploitation,
            Self::IntellectualProperty,
            Self::IllegalOnlineTrade,
            Self::ContentMisinformation,
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn every_category_has_fields() {
        for category in CrimeCategory::all() {
            assert!(
                !category.fields().is_empty(),
                "{category:?} has an empty field schema"
            );
        }
    }

    #[test]
    fn schemas_cover_every_field_key() {
        let used: BTreeSet<FieldKey> = CrimeCategory::all()
            .iter()
            .flat_map(|c| c.fields().iter().copied())
            .collect();
        let all: BTreeSet<FieldKey> = FieldKey::all().iter().copied().collect();
        assert_eq!(used, all);
    }

    #[test]
    fn schemas_have_no_duplicate_keys() {
        for category in CrimeCategory::all() {
            let unique: BTreeSet<FieldKey> = category.fields().iter().copied().collect();
            assert_eq!(
                unique.len(),
                category.fields().len(),
                "{category:?} lists a field twice"
            );
        }
    }

    #[test]
    fn malware_schema_is_technical_only() {
        assert_eq!(
            CrimeCategory::MalwareSystemAttacks.fields(),
            &[
                FieldKey::SystemDetails,
                FieldKey::TechnicalInfo,
                FieldKey::AttackVector
            ]
        );
    }

    #[test]
    fn display_string_roundtrip() {
        for category in CrimeCategory::all() {
            let parsed = CrimeCategory::from_str(&category.to_string()).unwrap();
            assert_eq!(parsed, *category);
        }
        assert_eq!(
            CrimeCategory::DataPrivacy.to_string(),
            "Data & Privacy Crimes"
        );
        assert!(CrimeCategory::from_str("Street Crimes").is_err());
        assert_eq!(
            CrimeCategory::from_display("Harassment & Threats"),
            Some(CrimeCategory::HarassmentThreats)
        );
        assert_eq!(CrimeCategory::from_display("harassment & threats"), None);
    }

    #[test]
    fn serde_uses_display_string() {
        let json = serde_json::to_string(&CrimeCategory::MalwareSystemAttacks).unwrap();
        assert_eq!(json, "\"Malware & System Attacks\"");
    }
}
