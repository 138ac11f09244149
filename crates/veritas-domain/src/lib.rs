//! Veritas Domain Layer
//!
//! This crate holds the value objects shared by every other Veritas crate.
//! It depends on nothing but `uuid` and contains no scoring math: the
//! computations live in `veritas-scoring`, which consumes these types.
//!
//! ## Key Concepts
//!
//! - **Task claim**: the statement under fact-check
//! - **Reference claim**: a statement extracted from an external source
//! - **Evidence link**: a stance/confidence/quality-tagged attachment of a
//!   reference claim to a task claim
//! - **Link projections**: [`LinkMagnitude`] (directional magnitude, feeds
//!   relevance) and [`LinkStrength`] (evidentiary strength, feeds
//!   preponderance)
//! - **Results**: [`PreponderanceResult`], [`UserScoreResult`],
//!   [`PointsRange`] and the running [`SessionScoreState`]
//!
//! Every type here is an immutable value object. Results are created fresh
//! by each computation and never mutated afterwards.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod candidate;
pub mod claim;
pub mod link;
pub mod outcome;
pub mod score;
pub mod session;
pub mod stance;

// Re-exports for convenience
pub use candidate::{Candidate, EnrichedCandidate};
pub use claim::ClaimId;
pub use link::{EvidenceLink, LinkMagnitude, LinkStrength};
pub use outcome::{PreponderanceResult, StanceBreakdown};
pub use score::{Grade, PointsRange, QualityRating, ScoreBreakdown, TotalScore, UserScoreResult};
pub use session::SessionScoreState;
pub use stance::Stance;
