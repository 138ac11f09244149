//! User performance scorer
//!
//! Compares a user's ratings against the evidence truth score. Each
//! component is an independent pure function; [`score_user`] composes them
//! for one round.

use veritas_domain::{Grade, QualityRating, ScoreBreakdown, TotalScore, UserScoreResult};

/// Belief shift (in rating points) that must be exceeded to earn a bonus
pub const MIND_CHANGE_THRESHOLD: f64 = 20.0;

/// Bonus for a large shift that moved toward the evidence
pub const TOWARD_EVIDENCE_BONUS: f64 = 75.0;

/// Bonus for any other large shift
pub const PARTICIPATION_BONUS: f64 = 25.0;

/// Grade ladder, highest first; bounds are inclusive
const GRADE_THRESHOLDS: [(f64, Grade); 7] = [
    (250.0, Grade::APlus),
    (225.0, Grade::A),
    (200.0, Grade::BPlus),
    (175.0, Grade::B),
    (150.0, Grade::CPlus),
    (125.0, Grade::C),
    (100.0, Grade::D),
];

/// Star ladder, highest first; bounds are inclusive
const STAR_THRESHOLDS: [(f64, u8); 4] = [(250.0, 5), (200.0, 4), (150.0, 3), (100.0, 2)];

/// Accuracy of a final rating against the evidence truth score
pub fn score_accuracy(user_rating: f64, evidence_truth_score: f64) -> f64 {
    (100.0 - (user_rating - evidence_truth_score).abs()).max(0.0)
}

/// Bonus for a belief update larger than [`MIND_CHANGE_THRESHOLD`]
///
/// Moving closer to the evidence earns [`TOWARD_EVIDENCE_BONUS`]; any other
/// large move still earns [`PARTICIPATION_BONUS`].
pub fn score_mind_change(prior_belief: f64, final_rating: f64, evidence_truth_score: f64) -> f64 {
    let shift = (final_rating - prior_belief).abs();
    if shift <= MIND_CHANGE_THRESHOLD {
        return 0.0;
    }

    let final_gap = (final_rating - evidence_truth_score).abs();
    let prior_gap = (prior_belief - evidence_truth_score).abs();

    if final_gap < prior_gap {
        TOWARD_EVIDENCE_BONUS
    } else {
        PARTICIPATION_BONUS
    }
}

/// Rounded mean agreement between user and AI quality ratings; 0 when empty
pub fn score_honesty(ratings: &[QualityRating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }

    let sum: f64 = ratings
        .iter()
        .map(|r| (100.0 - (r.user_quality - r.ai_quality).abs()).max(0.0))
        .sum();

    (sum / ratings.len() as f64).round()
}

/// Plain, uncapped sum of the three components
pub fn score_total(accuracy: f64, honesty: f64, mind_change: f64) -> TotalScore {
    TotalScore {
        total: accuracy + honesty + mind_change,
        breakdown: ScoreBreakdown {
            accuracy,
            honesty,
            mind_change,
        },
    }
}

/// Letter grade for a total
pub fn grade_for(total: f64) -> Grade {
    GRADE_THRESHOLDS
        .iter()
        .find(|(min, _)| total >= *min)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::F)
}

/// Credibility stars for an (averaged) total; never below 1
pub fn stars_for(average: f64) -> u8 {
    STAR_THRESHOLDS
        .iter()
        .find(|(min, _)| average >= *min)
        .map(|(_, stars)| *stars)
        .unwrap_or(1)
}

/// Mean round total; 0 for no rounds
pub fn average_total(results: &[UserScoreResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    results.iter().map(|r| r.total).sum::<f64>() / results.len() as f64
}

/// Everything a user supplied in one fact-check round
#[derive(Debug, Clone, PartialEq)]
pub struct UserRound {
    /// Belief before seeing the evidence [0, 100]
    pub prior_belief: f64,
    /// Rating after reviewing the evidence [0, 100]
    pub final_rating: f64,
    /// Preponderance verdict for the claim [0, 100]
    pub evidence_truth_score: f64,
    /// User vs AI quality ratings for the reviewed references
    pub ratings: Vec<QualityRating>,
}

/// Score one round end to end
pub fn score_user(round: &UserRound) -> UserScoreResult {
    let accuracy = score_accuracy(round.final_rating, round.evidence_truth_score);
    let honesty = score_honesty(&round.ratings);
    let mind_change = score_mind_change(
        round.prior_belief,
        round.final_rating,
        round.evidence_truth_score,
    );
    let TotalScore { total, .. } = score_total(accuracy, honesty, mind_change);

    UserScoreResult {
        accuracy_score: accuracy,
        honesty_score: honesty,
        mind_change_bonus: mind_change,
        total,
        grade: grade_for(total),
        stars: stars_for(total),
    }
}
