//! Veritas Scoring
//!
//! The evidence relevance and preponderance scoring engine.
//!
//! The crate is split into pure computation modules and a thin facade:
//!
//! | Module | Computes |
//! |--------|----------|
//! | [`relevance`] | Per-link relevance from stance, confidence and support level |
//! | [`ranking`] | Linked-first ordering of candidates, truncation, coverage check |
//! | [`preponderance`] | The 0-100 evidence truth score and its weight breakdown |
//! | [`performance`] | Accuracy, mind-change, honesty, totals, grades and stars |
//! | [`game`] | Per-action points for the interactive linking game |
//! | [`session`] | The running session score reducer |
//!
//! The pure functions never fail and never clamp. [`ScoringEngine`] wraps
//! them with the [`Gatekeeper`] so out-of-domain inputs surface as
//! [`ScoringError::InvalidInput`] instead of silently skewed scores.
//!
//! # Examples
//!
//! ```
//! use veritas_domain::{ClaimId, EvidenceLink, Stance};
//! use veritas_scoring::ScoringEngine;
//!
//! let task = ClaimId::from_value(1);
//! let links = vec![
//!     EvidenceLink::new(ClaimId::from_value(2), task, Stance::Support, 0.8, 90.0, 1.0, 0),
//! ];
//!
//! let engine = ScoringEngine::default_config();
//! let result = engine.aggregate(&links).unwrap();
//! assert_eq!(result.evidence_truth_score, 100.0);
//! ```

#![warn(missing_docs)]

pub mod game;
pub mod performance;
pub mod preponderance;
pub mod ranking;
pub mod relevance;
pub mod session;

mod config;
mod engine;
mod error;
mod validator;

pub use config::{ScoringConfig, ValidationConfig};
pub use engine::ScoringEngine;
pub use error::ScoringError;
pub use validator::{Gatekeeper, RejectionReason, ValidationResult, ValidationStatus};

pub use game::{compute_link_points, link_points_range, max_link_points};
pub use performance::{
    grade_for, score_accuracy, score_honesty, score_mind_change, score_total, score_user,
    stars_for, UserRound,
};
pub use preponderance::aggregate_preponderance;
pub use ranking::{
    enrich, enrich_and_rank, evidence_coverage, needs_more_evidence, rank, take_top,
    EvidenceCoverage,
};
pub use relevance::compute_relevance;
pub use session::apply_points;
