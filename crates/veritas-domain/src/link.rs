//! Evidence links between reference claims and task claims

use crate::{ClaimId, Stance};

/// An assessed attachment of a reference claim to a task claim
///
/// Links are produced by an upstream assessment step (human or AI) and are
/// immutable. Re-assessment replaces a link wholesale via [`EvidenceLink::reassess`].
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceLink {
    /// Reference claim providing the evidence
    pub source: ClaimId,

    /// Task claim under fact-check
    pub target: ClaimId,

    /// How the reference relates to the task claim
    pub stance: Stance,

    /// Assessor confidence [0.0, 1.0]
    pub confidence: f64,

    /// Evidence quality scaled by 100, [0.0, 120.0]
    pub quality_score: f64,

    /// Signed support level [-1.2, 1.2]
    pub support_level: f64,

    /// Whether the assessment came from the AI service
    pub created_by_ai: bool,

    /// Optional free-text justification
    pub rationale: Option<String>,

    /// When the link was assessed (ms since epoch)
    pub created_at: u64,
}

impl EvidenceLink {
    /// Create a new human-assessed link without rationale
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source: ClaimId,
        target: ClaimId,
        stance: Stance,
        confidence: f64,
        quality_score: f64,
        support_level: f64,
        created_at: u64,
    ) -> Self {
        Self {
            source,
            target,
            stance,
            confidence,
            quality_score,
            support_level,
            created_by_ai: false,
            rationale: None,
            created_at,
        }
    }

    /// Attach a rationale
    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }

    /// Mark the link as produced by the AI assessment service
    pub fn ai_assessed(mut self) -> Self {
        self.created_by_ai = true;
        self
    }

    /// Replace this link's assessment, keeping its endpoints
    ///
    /// The previous assessment (including rationale and provenance) is
    /// dropped entirely.
    pub fn reassess(
        self,
        stance: Stance,
        confidence: f64,
        quality_score: f64,
        support_level: f64,
        created_at: u64,
    ) -> Self {
        Self::new(
            self.source,
            self.target,
            stance,
            confidence,
            quality_score,
            support_level,
            created_at,
        )
    }

    /// Project the fields that drive relevance
    pub fn magnitude(&self) -> LinkMagnitude {
        LinkMagnitude {
            stance: self.stance,
            confidence: self.confidence,
            support_level: self.support_level,
        }
    }

    /// Project the fields that drive preponderance
    pub fn strength(&self) -> LinkStrength {
        LinkStrength {
            stance: self.stance,
            confidence: self.confidence,
            quality_score: self.quality_score,
        }
    }

    /// Quality on its natural [0.0, 1.2] scale
    pub fn quality(&self) -> f64 {
        self.quality_score / 100.0
    }
}

/// Directional magnitude of a link: the only input to relevance scoring
///
/// Uses `support_level` and ignores quality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkMagnitude {
    /// Link stance
    pub stance: Stance,
    /// Assessor confidence [0.0, 1.0]
    pub confidence: f64,
    /// Signed support level [-1.2, 1.2]; only the magnitude is scored
    pub support_level: f64,
}

/// Evidentiary strength of a link: the only input to preponderance
///
/// Uses `quality_score` and ignores support level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkStrength {
    /// Link stance
    pub stance: Stance,
    /// Assessor confidence [0.0, 1.0]
    pub confidence: f64,
    /// Evidence quality scaled by 100, [0.0, 120.0]
    pub quality_score: f64,
}

impl LinkStrength {
    /// Create a strength record directly (for callers without full links)
    pub fn new(stance: Stance, confidence: f64, quality_score: f64) -> Self {
        Self {
            stance,
            confidence,
            quality_score,
        }
    }
}

impl LinkMagnitude {
    /// Create a magnitude record directly (for callers without full links)
    pub fn new(stance: Stance, confidence: f64, support_level: f64) -> Self {
        Self {
            stance,
            confidence,
            support_level,
        }
    }
}
