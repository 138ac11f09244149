//! Input validation ahead of scoring
//!
//! The scoring functions accept any number and never clamp. The gatekeeper
//! checks documented domains up front so bad inputs become distinct error
//! values instead of silently skewed scores.

use std::fmt;

use tracing::warn;
use veritas_domain::{EvidenceLink, LinkMagnitude, LinkStrength, QualityRating};

use crate::performance::UserRound;
use crate::{ScoringError, ValidationConfig};

/// Confidence domain
pub const CONFIDENCE_RANGE: (f64, f64) = (0.0, 1.0);
/// Quality score domain
pub const QUALITY_RANGE: (f64, f64) = (0.0, 120.0);
/// Support level and user stance domain
pub const STANCE_RANGE: (f64, f64) = (-1.2, 1.2);
/// Ratings, beliefs and truth score domain
pub const RATING_RANGE: (f64, f64) = (0.0, 100.0);
/// AI veracity domain
pub const VERACITY_RANGE: (f64, f64) = (-100.0, 100.0);

/// Linked-fraction threshold
pub const RATIO_RANGE: (f64, f64) = (0.0, 1.0);

/// Outcome of validating one input
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether the input passed
    pub status: ValidationStatus,

    /// Rejection reasons (empty when accepted)
    pub reasons: Vec<RejectionReason>,
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Input accepted
    Accepted,

    /// Input rejected
    Rejected,
}

/// Why an input was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// Value outside its documented domain
    OutOfRange {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// NaN or infinite value
    NotFinite {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f64,
    },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{} {} is outside [{}, {}]", field, value, min, max),
            RejectionReason::NotFinite { field, value } => {
                write!(f, "{} {} is not a finite number", field, value)
            }
        }
    }
}

impl ValidationResult {
    fn from_reasons(reasons: Vec<RejectionReason>) -> Self {
        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            ValidationStatus::Rejected
        };
        Self { status, reasons }
    }

    /// Whether the input was accepted
    pub fn is_accepted(&self) -> bool {
        self.status == ValidationStatus::Accepted
    }

    /// Convert into an error carrying every reason
    pub fn into_result(self) -> Result<(), ScoringError> {
        if self.is_accepted() {
            Ok(())
        } else {
            warn!(reasons = self.reasons.len(), "Rejected scoring input");
            Err(ScoringError::InvalidInput(self.reasons))
        }
    }
}

/// The Gatekeeper validates scoring inputs against their domains
#[derive(Debug, Clone, Default)]
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    fn check(
        reasons: &mut Vec<RejectionReason>,
        enabled: bool,
        field: &'static str,
        value: f64,
        (min, max): (f64, f64),
    ) {
        if !value.is_finite() {
            reasons.push(RejectionReason::NotFinite { field, value });
        } else if enabled && !(min..=max).contains(&value) {
            reasons.push(RejectionReason::OutOfRange {
                field,
                value,
                min,
                max,
            });
        }
    }

    /// Validate every scored field of a full link
    pub fn validate_link(&self, link: &EvidenceLink) -> ValidationResult {
        let mut reasons = Vec::new();
        self.push_confidence(&mut reasons, link.confidence);
        Self::check(
            &mut reasons,
            self.config.check_quality,
            "quality_score",
            link.quality_score,
            QUALITY_RANGE,
        );
        Self::check(
            &mut reasons,
            self.config.check_support_level,
            "support_level",
            link.support_level,
            STANCE_RANGE,
        );
        ValidationResult::from_reasons(reasons)
    }

    /// Validate the relevance inputs of a link
    pub fn validate_magnitude(&self, link: &LinkMagnitude) -> ValidationResult {
        let mut reasons = Vec::new();
        self.push_confidence(&mut reasons, link.confidence);
        Self::check(
            &mut reasons,
            self.config.check_support_level,
            "support_level",
            link.support_level,
            STANCE_RANGE,
        );
        ValidationResult::from_reasons(reasons)
    }

    /// Validate the preponderance inputs of a link
    pub fn validate_strength(&self, link: &LinkStrength) -> ValidationResult {
        let mut reasons = Vec::new();
        self.push_confidence(&mut reasons, link.confidence);
        Self::check(
            &mut reasons,
            self.config.check_quality,
            "quality_score",
            link.quality_score,
            QUALITY_RANGE,
        );
        ValidationResult::from_reasons(reasons)
    }

    /// Validate a user's round inputs
    pub fn validate_round(&self, round: &UserRound) -> ValidationResult {
        let mut reasons = Vec::new();
        let enabled = self.config.check_ratings;
        Self::check(&mut reasons, enabled, "prior_belief", round.prior_belief, RATING_RANGE);
        Self::check(&mut reasons, enabled, "final_rating", round.final_rating, RATING_RANGE);
        Self::check(
            &mut reasons,
            enabled,
            "evidence_truth_score",
            round.evidence_truth_score,
            RATING_RANGE,
        );
        for rating in &round.ratings {
            self.push_quality_rating(&mut reasons, rating);
        }
        ValidationResult::from_reasons(reasons)
    }

    /// Validate an evidence coverage threshold
    ///
    /// Not affected by the per-field switches; a ratio outside [0, 1] has no meaning.
    pub fn validate_ratio(&self, ratio: f64) -> ValidationResult {
        let mut reasons = Vec::new();
        Self::check(&mut reasons, true, "evidence_ratio", ratio, RATIO_RANGE);
        ValidationResult::from_reasons(reasons)
    }

    /// Validate a game action
    pub fn validate_game(&self, ai_veracity_score: f64, user_stance: Option<f64>) -> ValidationResult {
        let mut reasons = Vec::new();
        let enabled = self.config.check_game_inputs;
        Self::check(
            &mut reasons,
            enabled,
            "ai_veracity_score",
            ai_veracity_score,
            VERACITY_RANGE,
        );
        if let Some(stance) = user_stance {
            Self::check(&mut reasons, enabled, "user_stance", stance, STANCE_RANGE);
        }
        ValidationResult::from_reasons(reasons)
    }

    fn push_confidence(&self, reasons: &mut Vec<RejectionReason>, confidence: f64) {
        Self::check(
            reasons,
            self.config.check_confidence,
            "confidence",
            confidence,
            CONFIDENCE_RANGE,
        );
    }

    fn push_quality_rating(&self, reasons: &mut Vec<RejectionReason>, rating: &QualityRating) {
        let enabled = self.config.check_ratings;
        Self::check(reasons, enabled, "user_quality", rating.user_quality, RATING_RANGE);
        Self::check(reasons, enabled, "ai_quality", rating.ai_quality, RATING_RANGE);
    }
}
