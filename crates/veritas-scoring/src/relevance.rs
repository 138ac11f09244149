//! Link relevance calculator
//!
//! Turns one link's directional magnitude into a non-negative ranking key:
//!
//! ```text
//! relevance = |support_level| × confidence × stance_bonus × 100
//! ```
//!
//! The score is a sort key and display magnitude, not a probability, and
//! has no fixed upper bound.

use tracing::warn;
use veritas_domain::{LinkMagnitude, Stance};

/// Bonus for support and refute links
pub const DIRECTIONAL_BONUS: f64 = 1.0;

/// Bonus for nuance links
pub const NUANCE_BONUS: f64 = 0.7;

/// Bonus for insufficient links
pub const INSUFFICIENT_BONUS: f64 = 0.3;

/// Fallback bonus for an unrecognised stance label
pub const UNKNOWN_STANCE_BONUS: f64 = 0.5;

/// Stance importance multiplier
pub fn stance_bonus(stance: Stance) -> f64 {
    match stance {
        Stance::Support | Stance::Refute => DIRECTIONAL_BONUS,
        Stance::Nuance => NUANCE_BONUS,
        Stance::Insufficient => INSUFFICIENT_BONUS,
    }
}

/// Stance bonus for a raw label coming from outside the type system
///
/// Unrecognised labels get [`UNKNOWN_STANCE_BONUS`] and are reported as a
/// data-quality warning.
pub fn stance_bonus_for_label(label: &str) -> f64 {
    match Stance::parse(label) {
        Some(stance) => stance_bonus(stance),
        None => {
            warn!(label, "Unrecognised stance label, using fallback bonus");
            UNKNOWN_STANCE_BONUS
        }
    }
}

/// Relevance of a link; 0 when there is no link
pub fn compute_relevance(link: Option<&LinkMagnitude>) -> f64 {
    let Some(link) = link else {
        return 0.0;
    };

    link.support_level.abs() * link.confidence * stance_bonus(link.stance) * 100.0
}
