//! Scoring engine facade
//!
//! Validates inputs through the [`Gatekeeper`] (when enabled) and then
//! delegates to the pure scoring modules. Holds only immutable
//! configuration, so one engine can be cloned or shared across threads.

use std::collections::BTreeMap;

use tracing::{debug, warn};
use veritas_domain::{
    Candidate, ClaimId, EnrichedCandidate, EvidenceLink, PointsRange, PreponderanceResult,
    SessionScoreState, UserScoreResult,
};

use crate::performance::{self, UserRound};
use crate::ranking::EvidenceCoverage;
use crate::validator::ValidationResult;
use crate::{game, preponderance, ranking, relevance, session};
use crate::{Gatekeeper, ScoringConfig, ScoringError};

/// Entry point for validated scoring
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
    gatekeeper: Gatekeeper,
}

impl ScoringEngine {
    /// Create an engine with the given configuration
    pub fn new(config: ScoringConfig) -> Self {
        let gatekeeper = Gatekeeper::new(config.validation.clone());
        Self { config, gatekeeper }
    }

    /// Create an engine with default configuration
    pub fn default_config() -> Self {
        Self::new(ScoringConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    fn gate(&self, check: impl FnOnce(&Gatekeeper) -> ValidationResult) -> Result<(), ScoringError> {
        if self.config.validate_inputs {
            check(&self.gatekeeper).into_result()
        } else {
            Ok(())
        }
    }

    fn gate_links<'a>(
        &self,
        links: impl IntoIterator<Item = &'a EvidenceLink>,
    ) -> Result<(), ScoringError> {
        if !self.config.validate_inputs {
            return Ok(());
        }
        let mut checked = 0usize;
        let mut reasons = Vec::new();
        for link in links {
            checked += 1;
            reasons.extend(self.gatekeeper.validate_link(link).reasons);
        }
        if reasons.is_empty() {
            Ok(())
        } else {
            warn!(links = checked, reasons = reasons.len(), "Rejected evidence links");
            Err(ScoringError::InvalidInput(reasons))
        }
    }

    /// Only links pointing at `target` take part in its ranking
    fn gate_target_links(&self, target: ClaimId, links: &[EvidenceLink]) -> Result<(), ScoringError> {
        self.gate_links(links.iter().filter(|l| l.target == target))
    }

    /// Relevance of a single (possibly absent) link
    pub fn relevance(&self, link: Option<&EvidenceLink>) -> Result<f64, ScoringError> {
        let magnitude = link.map(EvidenceLink::magnitude);
        if let Some(magnitude) = &magnitude {
            self.gate(|g| g.validate_magnitude(magnitude))?;
        }
        Ok(relevance::compute_relevance(magnitude.as_ref()))
    }

    /// Rank candidates for `target`, truncated to `limit` or the configured default
    pub fn rank(
        &self,
        candidates: &[Candidate],
        target: ClaimId,
        links: &[EvidenceLink],
        limit: Option<usize>,
    ) -> Result<Vec<EnrichedCandidate>, ScoringError> {
        self.gate_target_links(target, links)?;

        let limit = limit.unwrap_or(self.config.default_top_n);
        let ranked = ranking::top_ranked(candidates, target, links, Some(limit));

        debug!(
            task_claim = %target,
            candidates = candidates.len(),
            linked = ranked.iter().filter(|c| c.has_link).count(),
            returned = ranked.len(),
            "Ranked candidates"
        );
        Ok(ranked)
    }

    /// Linked share for `target`, against `ratio` or the configured default
    pub fn coverage(
        &self,
        candidates: &[Candidate],
        target: ClaimId,
        links: &[EvidenceLink],
        ratio: Option<f64>,
    ) -> Result<EvidenceCoverage, ScoringError> {
        let ratio = ratio.unwrap_or(self.config.evidence_ratio);
        self.gatekeeper.validate_ratio(ratio).into_result()?;
        self.gate_target_links(target, links)?;

        let coverage = ranking::evidence_coverage(candidates, target, links, ratio);
        debug!(
            task_claim = %target,
            candidates = candidates.len(),
            linked_fraction = coverage.linked_fraction,
            ratio,
            needed = coverage.needs_more_evidence,
            "Checked evidence coverage"
        );
        Ok(coverage)
    }

    /// Aggregate all links as evidence for one task claim
    pub fn aggregate(&self, links: &[EvidenceLink]) -> Result<PreponderanceResult, ScoringError> {
        self.gate_links(links)?;

        let result = preponderance::aggregate_links(links);
        debug!(
            links = links.len(),
            score = result.evidence_truth_score,
            total_weight = result.total_weight,
            "Aggregated preponderance"
        );
        Ok(result)
    }

    /// Aggregate a mixed batch separately per task claim
    pub fn aggregate_by_target(
        &self,
        links: &[EvidenceLink],
    ) -> Result<BTreeMap<ClaimId, PreponderanceResult>, ScoringError> {
        self.gate_links(links)?;

        let results = preponderance::aggregate_by_target(links);
        debug!(links = links.len(), targets = results.len(), "Aggregated per target");
        Ok(results)
    }

    /// Score one user round
    pub fn score_user(&self, round: &UserRound) -> Result<UserScoreResult, ScoringError> {
        self.gate(|g| g.validate_round(round))?;

        let result = performance::score_user(round);
        debug!(
            total = result.total,
            grade = %result.grade,
            stars = result.stars,
            "Scored user round"
        );
        Ok(result)
    }

    /// Credibility stars averaged over several rounds
    pub fn credibility(&self, results: &[UserScoreResult]) -> u8 {
        performance::stars_for(performance::average_total(results))
    }

    /// Points for one linking action
    pub fn link_points(&self, ai_veracity_score: f64, user_stance: f64) -> Result<f64, ScoringError> {
        self.gate(|g| g.validate_game(ai_veracity_score, Some(user_stance)))?;
        Ok(game::compute_link_points(ai_veracity_score, user_stance))
    }

    /// Best and worst points available for an AI score
    pub fn points_range(&self, ai_veracity_score: f64) -> Result<PointsRange, ScoringError> {
        self.gate(|g| g.validate_game(ai_veracity_score, None))?;
        Ok(game::link_points_range(ai_veracity_score))
    }

    /// Score one linking action and fold it into the session state
    pub fn play(
        &self,
        state: SessionScoreState,
        ai_veracity_score: f64,
        user_stance: f64,
    ) -> Result<(f64, SessionScoreState), ScoringError> {
        let delta = self.link_points(ai_veracity_score, user_stance)?;
        let next = session::apply_points(state, delta);
        debug!(delta, total = next.total_points, actions = next.actions, "Applied game points");
        Ok((delta, next))
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::default_config()
    }
}
