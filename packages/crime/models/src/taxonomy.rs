#![allow(clippy::too_many_lines)]
//! Crime type to crime category lookup table.
//!
//! Crime types are the camelCase identifiers stored on each case by the
//! reporting portal. Lookups are exact: the portal never stores any other
//! spelling, so an unrecognized identifier simply has no category.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::{CrimeCategory, FieldKey};

/// Maps every known crime type identifier to its category.
static CRIME_TYPES: LazyLock<BTreeMap<&'static str, CrimeCategory>> = LazyLock::new(|| {
    use CrimeCategory::{
        CommunicationSocialMedia, ContentMisinformation, DataPrivacy, FinancialFraud,
        HarassmentThreats, IllegalOnlineTrade, IntellectualProperty, MalwareSystemAttacks,
        NetworkInfrastructure, SexualExploitation,
    };

    BTreeMap::from([
        // ── Communication & Social Media ────────────────────
        ("phishing", CommunicationSocialMedia),
        ("smishing", CommunicationSocialMedia),
        ("vishing", CommunicationSocialMedia),
        ("spamming", CommunicationSocialMedia),
        ("socialMediaHacking", CommunicationSocialMedia),
        ("fakeAccounts", CommunicationSocialMedia),
        ("catfishing", CommunicationSocialMedia),
        ("chainMessageScam", CommunicationSocialMedia),
        // ── Financial & Fraud ───────────────────────────────
        ("onlineScam", FinancialFraud),
        ("investmentScam", FinancialFraud),
        ("onlineShoppingFraud", FinancialFraud),
        ("creditCardFraud", FinancialFraud),
        ("bankFraud", FinancialFraud),
        ("eWalletFraud", FinancialFraud),
        ("onlineBankingFraud", FinancialFraud),
        ("loanScam", FinancialFraud),
        ("romanceScam", FinancialFraud),
        ("advanceFeeFraud", FinancialFraud),
        ("ponziScheme", FinancialFraud),
        ("cryptocurrencyFraud", FinancialFraud),
        // ── Data & Privacy ──────────────────────────────────
        ("identityTheft", DataPrivacy),
        ("dataBreach", DataPrivacy),
        ("unauthorizedAccess", DataPrivacy),
        ("illegalAccess", DataPrivacy),
        ("dataInterference", DataPrivacy),
        ("privacyViolation", DataPrivacy),
        ("doxxing", DataPrivacy),
        ("simSwap", DataPrivacy),
        ("credentialStuffing", DataPrivacy),
        // ── Malware & System Attacks ────────────────────────
        ("ransomware", MalwareSystemAttacks),
        ("malware", MalwareSystemAttacks),
        ("virus", MalwareSystemAttacks),
        ("trojan", MalwareSystemAttacks),
        ("spyware", MalwareSystemAttacks),
        ("keylogger", MalwareSystemAttacks),
        ("cryptojacking", MalwareSystemAttacks),
        ("botnet", MalwareSystemAttacks),
        ("wormAttack", MalwareSystemAttacks),
        // ── Network & Infrastructure ────────────────────────
        ("ddos", NetworkInfrastructure),
        ("dosAttack", NetworkInfrastructure),
        ("systemInterference", NetworkInfrastructure),
        ("networkIntrusion", NetworkInfrastructure),
        ("manInTheMiddle", NetworkInfrastructure),
        ("dnsSpoofing", NetworkInfrastructure),
        ("websiteDefacement", NetworkInfrastructure),
        ("sqlInjection", NetworkInfrastructure),
        // ── Harassment & Threats ────────────────────────────
        ("cyberbullying", HarassmentThreats),
        ("cyberstalking", HarassmentThreats),
        ("onlineHarassment", HarassmentThreats),
        ("onlineThreats", HarassmentThreats),
        ("cyberLibel", HarassmentThreats),
        ("onlineExtortion", HarassmentThreats),
        ("hateSpeech", HarassmentThreats),
        ("trolling", HarassmentThreats),
        // ── Sexual Exploitation & Abuse ─────────────────────
        ("sextortion", SexualExploitation),
        ("revengePorn", SexualExploitation),
        ("onlineSexualAbuse", SexualExploitation),
        ("onlineChildExploitation", SexualExploitation),
        ("cybersex", SexualExploitation),
        ("onlineGrooming", SexualExploitation),
        ("voyeurism", SexualExploitation),
        ("nonConsensualImageSharing", SexualExploitation),
        // ── Intellectual Property ───────────────────────────
        ("softwarePiracy", IntellectualProperty),
        ("copyrightInfringement", IntellectualProperty),
        ("trademarkInfringement", IntellectualProperty),
        ("contentPiracy", IntellectualProperty),
        ("counterfeitGoods", IntellectualProperty),
        ("cybersquatting", IntellectualProperty),
        // ── Illegal Online Trade & Gambling ─────────────────
        ("onlineGambling", IllegalOnlineTrade),
        ("illegalOnlineSelling", IllegalOnlineTrade),
        ("onlineDrugTrafficking", IllegalOnlineTrade),
        ("onlineWeaponsTrafficking", IllegalOnlineTrade),
        ("onlineHumanTrafficking", IllegalOnlineTrade),
        ("darkWebMarket", IllegalOnlineTrade),
        // ── Content & Misinformation ────────────────────────
        ("fakeNews", ContentMisinformation),
        ("disinformation", ContentMisinformation),
        ("deepfake", ContentMisinformation),
        ("illegalContent", ContentMisinformation),
        ("terroristContent", ContentMisinformation),
        ("onlineImpersonation", ContentMisinformation),
    ])
});

/// Display names for identifiers that don't read well when split on case
/// boundaries.
static DISPLAY_OVERRIDES: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("ddos", "DDoS Attack"),
        ("dosAttack", "DoS Attack"),
        ("dnsSpoofing", "DNS Spoofing"),
        ("eWalletFraud", "E-Wallet Fraud"),
        ("simSwap", "SIM Swap"),
        ("sqlInjection", "SQL Injection"),
    ])
});

/// Returns the category a crime type belongs to, or `None` for an
/// unrecognized crime type.
#[must_use]
pub fn category_of(crime_type: &str) -> Option<CrimeCategory> {
    CRIME_TYPES.get(crime_type).copied()
}

/// Returns the ordered field schema for a category given by its display
/// string. Unknown category names yield an empty slice.
#[must_use]
pub fn fields_for(category: &str) -> &'static [FieldKey] {
    match CrimeCategory::from_display(category) {
        Some(category) => category.fields(),
        None => &[],
    }
}

/// Returns every crime type belonging to `category`, sorted by identifier.
#[must_use]
pub fn crime_types_for(category: CrimeCategory) -> Vec<&'static str> {
    CRIME_TYPES
        .iter()
        .filter(|(_, c)| **c == category)
        .map(|(crime_type, _)| *crime_type)
        .collect()
}

/// Returns every known crime type identifier, sorted.
#[must_use]
pub fn all_crime_types() -> Vec<&'static str> {
    CRIME_TYPES.keys().copied().collect()
}

/// Turns a camelCase crime type identifier into a display name
/// (`"identityTheft"` → `"Identity Theft"`).
#[must_use]
pub fn humanize_crime_type(crime_type: &str) -> String {
    if let Some(name) = DISPLAY_OVERRIDES.get(crime_type) {
        return (*name).to_string();
    }

    let mut out = String::with_capacity(crime_type.len() + 4);
    for (i, ch) in crime_type.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else if ch == '_' {
            out.push(' ');
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_has_eighty_crime_types() {
        assert_eq!(all_crime_types().len(), 80);
    }

    #[test]
    fn every_crime_type_has_a_non_empty_schema() {
        for crime_type in all_crime_types() {
            let category = category_of(crime_type).unwrap();
            assert!(
                !category.fields().is_empty(),
                "{crime_type} maps to {category:?} which has no fields"
            );
        }
    }

    #[test]
    fn every_category_owns_crime_types() {
        for category in CrimeCategory::all() {
            assert!(
                !crime_types_for(*category).is_empty(),
                "{category:?} has no crime types"
            );
        }
    }

    #[test]
    fn category_lookup() {
        assert_eq!(
            category_of("phishing"),
            Some(CrimeCategory::CommunicationSocialMedia)
        );
        assert_eq!(
            category_of("ransomware"),
            Some(CrimeCategory::MalwareSystemAttacks)
        );
        assert_eq!(category_of("identityTheft"), Some(CrimeCategory::DataPrivacy));
    }

    #[test]
    fn unknown_crime_type_has_no_category() {
        assert_eq!(category_of("jaywalking"), None);
        assert_eq!(category_of(""), None);
        assert_eq!(category_of("Phishing"), None);
    }

    #[test]
    fn fields_for_category_name() {
        assert_eq!(
            fields_for("Malware & System Attacks"),
            CrimeCategory::MalwareSystemAttacks.fields()
        );
        assert!(fields_for("Street Crimes").is_empty());
        assert!(fields_for("").is_empty());
    }

    #[test]
    fn humanizes_identifiers() {
        assert_eq!(humanize_crime_type("identityTheft"), "Identity Theft");
        assert_eq!(humanize_crime_type("phishing"), "Phishing");
        assert_eq!(humanize_crime_type("manInTheMiddle"), "Man In The Middle");
        assert_eq!(humanize_crime_type("ddos"), "DDoS Attack");
        assert_eq!(humanize_crime_type("eWalletFraud"), "E-Wallet Fraud");
        assert_eq!(humanize_crime_type("cybersex"), "Cybersex");
        assert_eq!(humanize_crime_type(""), "");
    }
}
