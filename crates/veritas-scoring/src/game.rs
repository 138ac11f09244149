//! Interactive game point calculator
//!
//! Scores one drag-and-drop linking action by comparing the AI's veracity
//! score against the stance the user picked. The AI score is mapped onto
//! the stance scale and the distance is interpolated linearly:
//!
//! ```text
//! normalized = (ai / 100) × 1.2
//! points     = 10 − (|normalized − stance| / 2.4) × 20
//! ```
//!
//! Inputs are not clamped.

use veritas_domain::PointsRange;

/// Points for a perfect match
pub const MAX_LINK_POINTS: f64 = 10.0;

/// Magnitude of the stance scale ([-1.2, 1.2])
pub const STANCE_SCALE: f64 = 1.2;

/// Widest possible gap between two stances on the scale
pub const MAX_STANCE_DIFFERENCE: f64 = STANCE_SCALE * 2.0;

/// Map an AI veracity score in [-100, 100] onto the stance scale
pub fn normalize_ai_score(ai_veracity_score: f64) -> f64 {
    (ai_veracity_score / 100.0) * STANCE_SCALE
}

/// Round to one decimal; halves go toward positive infinity
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Points for placing a link at `user_stance` against an AI score
pub fn compute_link_points(ai_veracity_score: f64, user_stance: f64) -> f64 {
    let difference = (normalize_ai_score(ai_veracity_score) - user_stance).abs();
    let points = MAX_LINK_POINTS - (difference / MAX_STANCE_DIFFERENCE) * (MAX_LINK_POINTS * 2.0);
    round_to_tenth(points)
}

/// Points available before an action is taken
pub fn max_link_points() -> f64 {
    MAX_LINK_POINTS
}

/// Best and worst achievable points for one AI score
///
/// The worst case is the stance mirrored across neutral from the AI's
/// normalized score.
pub fn link_points_range(ai_veracity_score: f64) -> PointsRange {
    let opposite = -normalize_ai_score(ai_veracity_score);
    PointsRange {
        best: max_link_points(),
        worst: compute_link_points(ai_veracity_score, opposite),
    }
}
