//! Ranking candidates (references or claims) and their enriched form

use crate::{ClaimId, Stance};

/// A reference or claim that may be ranked against a target claim
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Identifier matched against a link's source
    pub id: ClaimId,

    /// Human-readable label (claim text or reference title)
    pub label: String,

    /// Creation timestamp, used as a tie-break when no link exists
    pub created_at: Option<u64>,
}

impl Candidate {
    /// Create a new candidate
    pub fn new(id: ClaimId, label: impl Into<String>, created_at: Option<u64>) -> Self {
        Self {
            id,
            label: label.into(),
            created_at,
        }
    }
}

/// A candidate with its link (if any) to the target claim folded in
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedCandidate {
    /// The underlying candidate
    pub candidate: Candidate,

    /// Relevance of the attached link; 0 when unlinked
    pub relevance_score: f64,

    /// Whether a link to the target exists
    pub has_link: bool,

    /// Stance of the attached link
    pub stance: Option<Stance>,

    /// Confidence of the attached link
    pub confidence: Option<f64>,

    /// Support level of the attached link
    pub support_level: Option<f64>,

    /// Rationale of the attached link
    pub rationale: Option<String>,
}

impl EnrichedCandidate {
    /// Wrap a candidate that has no link to the target
    pub fn unlinked(candidate: Candidate) -> Self {
        Self {
            candidate,
            relevance_score: 0.0,
            has_link: false,
            stance: None,
            confidence: None,
            support_level: None,
            rationale: None,
        }
    }

    /// Candidate identifier
    pub fn id(&self) -> ClaimId {
        self.candidate.id
    }
}
