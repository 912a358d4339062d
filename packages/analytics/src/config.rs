//! TOML configuration for the analytics calculators.
//!
//! ```toml
//! [progress]
//! evidence_bonus = 20
//! bulk_evidence_bonus = 10
//! bulk_evidence_threshold = 3
//! ai_summary_bonus = 10
//! suspect_info_bonus = 10
//! ```

use cybercrime_console_analytics_models::ProgressPolicy;
use serde::{Deserialize, Serialize};

use crate::AnalyticsError;

/// Tunable analytics settings. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Investigation progress bonuses.
    pub progress: ProgressPolicy,
}

impl AnalyticsConfig {
    /// Parses and validates a TOML config document.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Toml`] if the document doesn't parse and
    /// [`AnalyticsError::Config`] if a value is out of range.
    pub fn from_toml_str(source: &str) -> Result<Self, AnalyticsError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Config`] describing the first bad value.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if self.progress.bulk_evidence_threshold == 0 {
            return Err(AnalyticsError::Config {
                message: "progress.bulk_evidence_threshold must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = AnalyticsConfig::from_toml_str("").unwrap();
        assert_eq!(config, AnalyticsConfig::default());
        assert_eq!(config.progress, ProgressPolicy::default());
    }

    #[test]
    fn overrides_progress_bonuses() {
        let config = AnalyticsConfig::from_toml_str(
            r"
            [progress]
            ai_summary_bonus = 15
            bulk_evidence_threshold = 4
            ",
        )
        .unwrap();

        assert_eq!(config.progress.ai_summary_bonus, 15);
        assert_eq!(config.progress.bulk_evidence_threshold, 4);
        assert_eq!(config.progress.evidence_bonus, 20);
    }

    #[test]
    fn rejects_zero_threshold() {
        let err = AnalyticsConfig::from_toml_str("[progress]\nbulk_evidence_threshold = 0")
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::Config { .. }), "{err}");
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = AnalyticsConfig::from_toml_str("[progress\nai_summary_bonus = 1").unwrap_err();
        assert!(matches!(err, AnalyticsError::Toml(_)), "{err}");
    }

    #[test]
    fn rejects_out_of_range_bonus() {
        let err = AnalyticsConfig::from_toml_str("[progress]\nevidence_bonus = 300").unwrap_err();
        assert!(matches!(err, AnalyticsError::Toml(_)), "{err}");
    }
}
