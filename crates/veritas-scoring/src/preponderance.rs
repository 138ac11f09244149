//! Preponderance aggregator
//!
//! Folds every link for one task claim into a single evidence truth score:
//!
//! 1. `weight = quality_score × confidence`
//! 2. Support and refute links add their full weight to their side; nuance
//!    links add half their weight to a nuance pool; insufficient links are
//!    only counted
//! 3. The nuance pool is split evenly between both sides
//! 4. `score = round(support / (support + refute) × 100)`, or 50 when
//!    nothing carried weight
//!
//! The fold is commutative: link order never changes the result.

use std::collections::BTreeMap;

use veritas_domain::outcome::NEUTRAL_TRUTH_SCORE;
use veritas_domain::{
    ClaimId, EvidenceLink, LinkStrength, PreponderanceResult, Stance, StanceBreakdown,
};

/// Share of a nuance link's weight that enters the nuance pool
pub const NUANCE_WEIGHT_FACTOR: f64 = 0.5;

/// Share of the nuance pool credited to each side
pub const NUANCE_SPLIT: f64 = 0.5;

/// Evidentiary weight of one link
pub fn link_weight(link: &LinkStrength) -> f64 {
    link.quality_score * link.confidence
}

/// Aggregate the links of one task claim into a preponderance result
pub fn aggregate_preponderance(links: &[LinkStrength]) -> PreponderanceResult {
    if links.is_empty() {
        return PreponderanceResult::neutral();
    }

    let mut support_weight = 0.0;
    let mut refute_weight = 0.0;
    let mut nuance_weight = 0.0;
    let mut breakdown = StanceBreakdown::default();

    for link in links {
        let weight = link_weight(link);
        match link.stance {
            Stance::Support => {
                support_weight += weight;
                breakdown.supports += 1;
            }
            Stance::Refute => {
                refute_weight += weight;
                breakdown.refutes += 1;
            }
            Stance::Nuance => {
                nuance_weight += weight * NUANCE_WEIGHT_FACTOR;
                breakdown.nuances += 1;
            }
            Stance::Insufficient => {
                breakdown.insufficient += 1;
            }
        }
    }

    let total_weight = support_weight + refute_weight + nuance_weight;
    let adjusted_support = support_weight + nuance_weight * NUANCE_SPLIT;
    let adjusted_refute = refute_weight + nuance_weight * NUANCE_SPLIT;
    let denominator = adjusted_support + adjusted_refute;

    let evidence_truth_score = if denominator > 0.0 {
        (adjusted_support / denominator * 100.0).round()
    } else {
        NEUTRAL_TRUTH_SCORE
    };

    PreponderanceResult {
        evidence_truth_score,
        total_weight,
        support_weight,
        refute_weight,
        nuance_weight,
        breakdown,
    }
}

/// Project full links and aggregate them
pub fn aggregate_links(links: &[EvidenceLink]) -> PreponderanceResult {
    let strengths: Vec<LinkStrength> = links.iter().map(EvidenceLink::strength).collect();
    aggregate_preponderance(&strengths)
}

/// Aggregate a mixed batch of links separately for each task claim
pub fn aggregate_by_target(links: &[EvidenceLink]) -> BTreeMap<ClaimId, PreponderanceResult> {
    let mut grouped: BTreeMap<ClaimId, Vec<LinkStrength>> = BTreeMap::new();
    for link in links {
        grouped.entry(link.target).or_default().push(link.strength());
    }

    grouped
        .into_iter()
        .map(|(target, strengths)| (target, aggregate_preponderance(&strengths)))
        .collect()
}
