//! Ranking module
//!
//! Attaches relevance scores to candidates and orders them by successive
//! tie-break keys:
//!
//! 1. Linked candidates before unlinked ones, regardless of score
//! 2. Linked: higher relevance first, NaN scores last
//! 3. Unlinked: more recent `created_at` first
//!
//! The sort is stable, so ties keep input order.

use std::cmp::Ordering;
use std::collections::HashMap;

use veritas_domain::{Candidate, ClaimId, EnrichedCandidate, EvidenceLink};

use crate::relevance::compute_relevance;

/// Default truncation length for ranked lists
pub const DEFAULT_TOP_N: usize = 20;

/// Default linked fraction below which more evidence is requested
pub const DEFAULT_EVIDENCE_RATIO: f64 = 0.5;

/// Index the links pointing at `target` by their source; the first link wins
fn links_for_target(target: ClaimId, links: &[EvidenceLink]) -> HashMap<ClaimId, &EvidenceLink> {
    let mut by_source = HashMap::new();
    for link in links.iter().filter(|l| l.target == target) {
        by_source.entry(link.source).or_insert(link);
    }
    by_source
}

/// Attach each candidate's link to `target` (if any) and its relevance
pub fn enrich(
    candidates: &[Candidate],
    target: ClaimId,
    links: &[EvidenceLink],
) -> Vec<EnrichedCandidate> {
    let by_source = links_for_target(target, links);

    candidates
        .iter()
        .map(|candidate| match by_source.get(&candidate.id) {
            Some(link) => EnrichedCandidate {
                candidate: candidate.clone(),
                relevance_score: compute_relevance(Some(&link.magnitude())),
                has_link: true,
                stance: Some(link.stance),
                confidence: Some(link.confidence),
                support_level: Some(link.support_level),
                rationale: link.rationale.clone(),
            },
            None => EnrichedCandidate::unlinked(candidate.clone()),
        })
        .collect()
}

fn compare(a: &EnrichedCandidate, b: &EnrichedCandidate) -> Ordering {
    match (a.has_link, b.has_link) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        // NaN scores sort after every real score
        (true, true) => match (a.relevance_score.is_nan(), b.relevance_score.is_nan()) {
            (false, false) => b.relevance_score.total_cmp(&a.relevance_score),
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => Ordering::Equal,
        },
        // A missing timestamp sorts after any known one
        (false, false) => match (a.candidate.created_at, b.candidate.created_at) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Order enriched candidates: linked first, then by score, then by recency
pub fn rank(mut enriched: Vec<EnrichedCandidate>) -> Vec<EnrichedCandidate> {
    enriched.sort_by(compare);
    enriched
}

/// [`enrich`] followed by [`rank`]
pub fn enrich_and_rank(
    candidates: &[Candidate],
    target: ClaimId,
    links: &[EvidenceLink],
) -> Vec<EnrichedCandidate> {
    rank(enrich(candidates, target, links))
}

/// First `n` entries of an already ranked list
pub fn take_top(mut ranked: Vec<EnrichedCandidate>, n: usize) -> Vec<EnrichedCandidate> {
    ranked.truncate(n);
    ranked
}

/// Rank and truncate in one step; `limit` defaults to [`DEFAULT_TOP_N`]
pub fn top_ranked(
    candidates: &[Candidate],
    target: ClaimId,
    links: &[EvidenceLink],
    limit: Option<usize>,
) -> Vec<EnrichedCandidate> {
    take_top(
        enrich_and_rank(candidates, target, links),
        limit.unwrap_or(DEFAULT_TOP_N),
    )
}

/// Fraction of candidates linked to `target`; `None` for an empty set
pub fn linked_fraction(
    candidates: &[Candidate],
    target: ClaimId,
    links: &[EvidenceLink],
) -> Option<f64> {
    if candidates.is_empty() {
        return None;
    }

    let by_source = links_for_target(target, links);
    let linked = candidates
        .iter()
        .filter(|c| by_source.contains_key(&c.id))
        .count();

    Some(linked as f64 / candidates.len() as f64)
}

/// Linked share of a candidate set measured against a threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvidenceCoverage {
    /// Fraction of candidates linked to the task claim; `None` for no candidates
    pub linked_fraction: Option<f64>,
    /// Threshold the fraction was compared against
    pub ratio: f64,
    /// Whether the fraction fell short of `ratio`
    pub needs_more_evidence: bool,
}

/// Measure how much of `candidates` is linked to `target`
pub fn evidence_coverage(
    candidates: &[Candidate],
    target: ClaimId,
    links: &[EvidenceLink],
    ratio: f64,
) -> EvidenceCoverage {
    let linked_fraction = linked_fraction(candidates, target, links);
    EvidenceCoverage {
        linked_fraction,
        ratio,
        needs_more_evidence: linked_fraction.is_some_and(|fraction| fraction < ratio),
    }
}

/// Whether fewer than `ratio` of the candidates are linked to `target`
///
/// An empty candidate set never needs more evidence.
pub fn needs_more_evidence(
    candidates: &[Candidate],
    target: ClaimId,
    links: &[EvidenceLink],
    ratio: f64,
) -> bool {
    evidence_coverage(candidates, target, links, ratio).needs_more_evidence
}

#[cfg(test)]
mod tests {
    use super::*;
    use veritas_domain::Stance;

    const TARGET: u128 = 999;

    fn candidate(id: u128, created_at: Option<u64>) -> Candidate {
        Candidate::new(ClaimId::from_value(id), format!("candidate {}", id), created_at)
    }

    fn link(source: u128, stance: Stance, confidence: f64, support_level: f64) -> EvidenceLink {
        EvidenceLink::new(
            ClaimId::from_value(source),
            ClaimId::from_value(TARGET),
            stance,
            confidence,
            80.0,
            support_level,
            1_000,
        )
    }

    fn ids(ranked: &[EnrichedCandidate]) -> Vec<u128> {
        ranked.iter().map(|c| c.id().value()).collect()
    }

    #[test]
    fn test_linked_before_unlinked_then_by_score() {
        // A scores 5, C scores 8, B has no link
        let candidates = vec![candidate(1, None), candidate(2, None), candidate(3, None)];
        let links = vec![
            link(1, Stance::Support, 0.5, 0.1),
            link(3, Stance::Support, 0.8, 0.1),
        ];

        let ranked = enrich_and_rank(&candidates, ClaimId::from_value(TARGET), &links);

        assert!((ranked[0].relevance_score - 8.0).abs() < 1e-9);
        assert!((ranked[1].relevance_score - 5.0).abs() < 1e-9);
        assert_eq!(ids(&ranked), vec![3, 1, 2]);
    }

    #[test]
    fn test_zero_score_link_still_outranks_unlinked() {
        let candidates = vec![candidate(1, Some(9_999)), candidate(2, None)];
        let links = vec![link(2, Stance::Insufficient, 0.0, 0.0)];

        let ranked = enrich_and_rank(&candidates, ClaimId::from_value(TARGET), &links);

        assert_eq!(ids(&ranked), vec![2, 1]);
        assert!(ranked[0].has_link);
        assert_eq!(ranked[0].relevance_score, 0.0);
    }

    #[test]
    fn test_unlinked_by_recency_then_input_order() {
        let candidates = vec![
            candidate(1, Some(100)),
            candidate(2, None),
            candidate(3, Some(300)),
            candidate(4, None),
            candidate(5, Some(100)),
        ];

        let ranked = enrich_and_rank(&candidates, ClaimId::from_value(TARGET), &[]);

        assert_eq!(ids(&ranked), vec![3, 1, 5, 2, 4]);
    }

    #[test]
    fn test_score_ties_are_stable() {
        let candidates = vec![candidate(1, None), candidate(2, None), candidate(3, None)];
        let links = vec![
            link(3, Stance::Refute, 1.0, 0.5),
            link(1, Stance::Support, 1.0, 0.5),
            link(2, Stance::Support, 1.0, 0.5),
        ];

        let ranked = enrich_and_rank(&candidates, ClaimId::from_value(TARGET), &links);
        assert_eq!(ids(&ranked), vec![1, 2, 3]);
    }

    #[test]
    fn test_enrich_ignores_links_to_other_targets() {
        let candidates = vec![candidate(1, None)];
        let mut other = link(1, Stance::Support, 1.0, 1.0);
        other.target = ClaimId::from_value(12345);

        let enriched = enrich(&candidates, ClaimId::from_value(TARGET), &[other]);

        assert!(!enriched[0].has_link);
        assert_eq!(enriched[0].stance, None);
    }

    #[test]
    fn test_enrich_copies_link_fields() {
        let candidates = vec![candidate(1, None)];
        let links = vec![link(1, Stance::Nuance, 0.6, -0.4).with_rationale("partial")];

        let enriched = enrich(&candidates, ClaimId::from_value(TARGET), &links);
        let only = &enriched[0];

        assert!(only.has_link);
        assert_eq!(only.stance, Some(Stance::Nuance));
        assert_eq!(only.confidence, Some(0.6));
        assert_eq!(only.support_level, Some(-0.4));
        assert_eq!(only.rationale.as_deref(), Some("partial"));
    }

    #[test]
    fn test_first_matching_link_wins() {
        let candidates = vec![candidate(1, None)];
        let links = vec![
            link(1, Stance::Support, 1.0, 1.0),
            link(1, Stance::Refute, 0.1, 0.1),
        ];

        let enriched = enrich(&candidates, ClaimId::from_value(TARGET), &links);
        assert_eq!(enriched[0].stance, Some(Stance::Support));
    }

    #[test]
    fn test_take_top_and_default_limit() {
        let candidates: Vec<_> = (0..30).map(|i| candidate(i, Some(i as u64))).collect();

        let top = top_ranked(&candidates, ClaimId::from_value(TARGET), &[], None);
        assert_eq!(top.len(), DEFAULT_TOP_N);
        assert_eq!(top[0].id().value(), 29);

        let ranked = enrich_and_rank(&candidates, ClaimId::from_value(TARGET), &[]);
        assert_eq!(take_top(ranked.clone(), 3).len(), 3);
        assert_eq!(take_top(ranked, 100).len(), 30);
    }

    #[test]
    fn test_empty_candidates_rank_empty() {
        assert!(enrich_and_rank(&[], ClaimId::from_value(TARGET), &[]).is_empty());
    }

    #[test]
    fn test_needs_more_evidence() {
        let target = ClaimId::from_value(TARGET);
        let candidates = vec![
            candidate(1, None),
            candidate(2, None),
            candidate(3, None),
            candidate(4, None),
        ];
        let one = vec![link(1, Stance::Support, 1.0, 1.0)];
        let two = vec![
            link(1, Stance::Support, 1.0, 1.0),
            link(2, Stance::Refute, 1.0, 1.0),
        ];

        assert!(needs_more_evidence(&candidates, target, &one, DEFAULT_EVIDENCE_RATIO));
        // Exactly at the ratio is enough
        assert!(!needs_more_evidence(&candidates, target, &two, DEFAULT_EVIDENCE_RATIO));
        assert!(!needs_more_evidence(&[], target, &[], DEFAULT_EVIDENCE_RATIO));
    }

    #[test]
    fn test_evidence_coverage() {
        let target = ClaimId::from_value(TARGET);
        let candidates = vec![candidate(1, None), candidate(2, None), candidate(3, None)];
        let links = vec![link(1, Stance::Support, 1.0, 1.0)];

        let coverage = evidence_coverage(&candidates, target, &links, 0.3);
        assert_eq!(coverage.linked_fraction, Some(1.0 / 3.0));
        assert!(!coverage.needs_more_evidence);

        let coverage = evidence_coverage(&candidates, target, &links, 0.5);
        assert!(coverage.needs_more_evidence);

        let coverage = evidence_coverage(&[], target, &links, 0.5);
        assert_eq!(coverage.linked_fraction, None);
        assert!(!coverage.needs_more_evidence);
    }

    #[test]
    fn test_nan_scores_sink_below_real_scores() {
        let target = ClaimId::from_value(TARGET);
        let candidates: Vec<Candidate> = (1..=60).map(|id| candidate(id, None)).collect();
        let links: Vec<EvidenceLink> = (1..=60u128)
            .map(|id| {
                let confidence = if id % 7 == 0 { f64::NAN } else { (id % 11) as f64 / 10.0 };
                link(id, Stance::Support, confidence, 1.0)
            })
            .collect();

        let ranked = enrich_and_rank(&candidates, target, &links);
        let scores: Vec<f64> = ranked.iter().map(|c| c.relevance_score).collect();
        let finite = scores.iter().take_while(|s| !s.is_nan()).count();

        assert_eq!(ranked.len(), 60);
        assert_eq!(finite, 52);
        assert!(scores[finite..].iter().all(|s| s.is_nan()));
        assert!(scores[..finite].windows(2).all(|w| w[0] >= w[1]));
    }
}
