//! Preponderance outcome for one task claim

/// Neutral evidence truth score used when there is no weighted evidence
pub const NEUTRAL_TRUTH_SCORE: f64 = 50.0;

/// Count of links per stance bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StanceBreakdown {
    /// Links with a support stance
    pub supports: usize,
    /// Links with a refute stance
    pub refutes: usize,
    /// Links with a nuance stance
    pub nuances: usize,
    /// Links with an insufficient stance
    pub insufficient: usize,
}

impl StanceBreakdown {
    /// Total number of links counted
    pub fn total(&self) -> usize {
        self.supports + self.refutes + self.nuances + self.insufficient
    }
}

/// Aggregate "what does the evidence say" result
///
/// `evidence_truth_score` is exactly [`NEUTRAL_TRUTH_SCORE`] when
/// `total_weight` is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreponderanceResult {
    /// Weighted verdict [0, 100]
    pub evidence_truth_score: f64,
    /// support + refute + nuance weight
    pub total_weight: f64,
    /// Weight contributed by supporting links
    pub support_weight: f64,
    /// Weight contributed by refuting links
    pub refute_weight: f64,
    /// Weight contributed by nuance links (already halved)
    pub nuance_weight: f64,
    /// Link counts per stance
    pub breakdown: StanceBreakdown,
}

impl PreponderanceResult {
    /// The no-signal result
    pub fn neutral() -> Self {
        Self {
            evidence_truth_score: NEUTRAL_TRUTH_SCORE,
            total_weight: 0.0,
            support_weight: 0.0,
            refute_weight: 0.0,
            nuance_weight: 0.0,
            breakdown: StanceBreakdown::default(),
        }
    }

    /// Whether any link carried weight
    pub fn has_signal(&self) -> bool {
        self.total_weight > 0.0
    }
}

impl Default for PreponderanceResult {
    fn default() -> Self {
        Self::neutral()
    }
}
