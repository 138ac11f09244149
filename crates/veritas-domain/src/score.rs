//! User performance and game scoring value objects

use std::fmt;

/// Letter grade for a round total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    /// 250 and above
    APlus,
    /// 225 and above
    A,
    /// 200 and above
    BPlus,
    /// 175 and above
    B,
    /// 150 and above
    CPlus,
    /// 125 and above
    C,
    /// 100 and above
    D,
    /// Below 100
    F,
}

impl Grade {
    /// Get the grade as displayed to users
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's quality rating of a reference next to the AI's rating
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityRating {
    /// User-assigned quality [0, 100]
    pub user_quality: f64,
    /// AI-assigned quality [0, 100]
    pub ai_quality: f64,
}

impl QualityRating {
    /// Create a new rating pair
    pub fn new(user_quality: f64, ai_quality: f64) -> Self {
        Self {
            user_quality,
            ai_quality,
        }
    }
}

/// Components that make up a round total
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Accuracy component [0, 100]
    pub accuracy: f64,
    /// Honesty component [0, 100]
    pub honesty: f64,
    /// Mind-change bonus (0, 25 or 75)
    pub mind_change: f64,
}

/// A round total together with its components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalScore {
    /// Plain sum of the breakdown, uncapped
    pub total: f64,
    /// The summed components
    pub breakdown: ScoreBreakdown,
}

/// Full user score for one round
///
/// `grade` and `stars` are derived from `total` alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserScoreResult {
    /// How close the final rating was to the evidence [0, 100]
    pub accuracy_score: f64,
    /// How well quality ratings matched the AI's [0, 100]
    pub honesty_score: f64,
    /// Reward for a large belief update (0, 25 or 75)
    pub mind_change_bonus: f64,
    /// accuracy + honesty + mind change
    pub total: f64,
    /// Letter grade for `total`
    pub grade: Grade,
    /// Star rating for `total` [1, 5]
    pub stars: u8,
}

/// Best and worst achievable game points for one AI score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointsRange {
    /// Points for a perfect match
    pub best: f64,
    /// Points for the stance opposite the AI's
    pub worst: f64,
}
