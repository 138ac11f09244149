//! Scoring configuration
//!
//! Loaded from TOML; every key is optional and falls back to the defaults
//! below.
//!
//! ```toml
//! default_top_n = 20
//! evidence_ratio = 0.5
//! validate_inputs = true
//!
//! [validation]
//! check_confidence = true
//! check_quality = true
//! check_support_level = true
//! check_ratings = true
//! check_game_inputs = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ranking::{DEFAULT_EVIDENCE_RATIO, DEFAULT_TOP_N};
use crate::ScoringError;

/// Which domain checks the [`Gatekeeper`](crate::Gatekeeper) applies
///
/// Non-finite numbers (NaN, infinities) are always rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Confidence must be in [0, 1]
    pub check_confidence: bool,

    /// Quality score must be in [0, 120]
    pub check_quality: bool,

    /// Support level must be in [-1.2, 1.2]
    pub check_support_level: bool,

    /// User ratings, beliefs and truth scores must be in [0, 100]
    pub check_ratings: bool,

    /// AI veracity must be in [-100, 100] and user stance in [-1.2, 1.2]
    pub check_game_inputs: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_confidence: true,
            check_quality: true,
            check_support_level: true,
            check_ratings: true,
            check_game_inputs: true,
        }
    }
}

impl ValidationConfig {
    /// Only reject non-finite numbers
    pub fn permissive() -> Self {
        Self {
            check_confidence: false,
            check_quality: false,
            check_support_level: false,
            check_ratings: false,
            check_game_inputs: false,
        }
    }
}

/// Configuration for the [`ScoringEngine`](crate::ScoringEngine)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Truncation length for ranked lists
    pub default_top_n: usize,

    /// Linked fraction below which a claim needs more evidence
    pub evidence_ratio: f64,

    /// Run the gatekeeper before scoring
    pub validate_inputs: bool,

    /// Gatekeeper rules
    pub validation: ValidationConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_top_n: DEFAULT_TOP_N,
            evidence_ratio: DEFAULT_EVIDENCE_RATIO,
            validate_inputs: true,
            validation: ValidationConfig::default(),
        }
    }
}

impl ScoringConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScoringError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self, ScoringError> {
        let config: ScoringConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values are usable
    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.default_top_n == 0 {
            return Err(ScoringError::Config(
                "default_top_n must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.evidence_ratio) {
            return Err(ScoringError::Config(format!(
                "evidence_ratio {} is outside [0.0, 1.0]",
                self.evidence_ratio
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ScoringConfig::default();
        assert_eq!(config.default_top_n, 20);
        assert_eq!(config.evidence_ratio, 0.5);
        assert!(config.validate_inputs);
        assert!(config.validation.check_confidence);
    }

    #[test]
    fn test_permissive_validation() {
        let config = ValidationConfig::permissive();
        assert!(!config.check_confidence);
        assert!(!config.check_game_inputs);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ScoringConfig::from_toml_str(
            r#"
            default_top_n = 5

            [validation]
            check_quality = false
            "#,
        )
        .unwrap();

        assert_eq!(config.default_top_n, 5);
        assert_eq!(config.evidence_ratio, 0.5);
        assert!(!config.validation.check_quality);
        assert!(config.validation.check_confidence);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            ScoringConfig::from_toml_str("evidence_ratio = 1.5"),
            Err(ScoringError::Config(_))
        ));
        assert!(matches!(
            ScoringConfig::from_toml_str("default_top_n = 0"),
            Err(ScoringError::Config(_))
        ));
        assert!(matches!(
            ScoringConfig::from_toml_str("default_top_n = \"many\""),
            Err(ScoringError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "evidence_ratio = 0.25\nvalidate_inputs = false").unwrap();

        let config = ScoringConfig::from_file(file.path()).unwrap();
        assert_eq!(config.evidence_ratio, 0.25);
        assert!(!config.validate_inputs);

        assert!(matches!(
            ScoringConfig::from_file("/nonexistent/veritas.toml"),
            Err(ScoringError::ConfigRead(_))
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ScoringConfig::default();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: ScoringConfig = serde_json::from_str(&serialized).unwrap();

        assert_eq!(config, deserialized);
    }
}
