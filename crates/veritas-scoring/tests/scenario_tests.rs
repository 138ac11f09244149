//! End-to-end scoring scenarios
//!
//! These tests drive the public API the way a fact-check round does:
//! links → ranking → preponderance → user score, plus the linking game.

use veritas_domain::{Candidate, ClaimId, EvidenceLink, Grade, QualityRating, Stance};
use veritas_scoring::performance::UserRound;
use veritas_scoring::{
    aggregate_preponderance, compute_link_points, enrich_and_rank, grade_for, link_points_range,
    score_accuracy, score_honesty, score_mind_change, score_total, ScoringEngine,
};

fn task_claim() -> ClaimId {
    ClaimId::from_value(1_000)
}

fn link(source: u128, stance: Stance, confidence: f64, quality: f64) -> EvidenceLink {
    EvidenceLink::new(
        ClaimId::from_value(source),
        task_claim(),
        stance,
        confidence,
        quality,
        1.0,
        1_000,
    )
}

#[test]
fn test_equal_opposing_weight_is_even() {
    let links = [
        link(1, Stance::Support, 1.0, 100.0),
        link(2, Stance::Refute, 1.0, 100.0),
    ];
    let strengths: Vec<_> = links.iter().map(EvidenceLink::strength).collect();

    let result = aggregate_preponderance(&strengths);
    assert_eq!(result.evidence_truth_score, 50.0);
}

#[test]
fn test_single_support_is_certain() {
    let engine = ScoringEngine::default_config();
    let result = engine.aggregate(&[link(1, Stance::Support, 0.8, 90.0)]).unwrap();

    assert_eq!(result.evidence_truth_score, 100.0);
    assert_eq!(result.refute_weight, 0.0);
    assert_eq!(result.breakdown.supports, 1);
}

#[test]
fn test_user_round_grades_a_plus() {
    let accuracy = score_accuracy(70.0, 50.0);
    let honesty = score_honesty(&[QualityRating::new(90.0, 85.0), QualityRating::new(60.0, 60.0)]);
    let mind_change = score_mind_change(30.0, 60.0, 50.0);

    assert_eq!(accuracy, 80.0);
    assert_eq!(honesty, 98.0);
    assert_eq!(mind_change, 75.0);

    let total = score_total(accuracy, honesty, mind_change);
    assert_eq!(total.total, 253.0);
    assert_eq!(grade_for(total.total), Grade::APlus);
    assert_eq!(grade_for(total.total).as_str(), "A+");
}

#[test]
fn test_points_range_for_sixty() {
    let range = link_points_range(60.0);

    assert_eq!(range.best, 10.0);
    assert_eq!(range.worst, -2.0);
    assert_eq!(compute_link_points(60.0, 0.72), 10.0);
}

#[test]
fn test_ranking_linked_first_then_by_score() {
    // A: linked with relevance 5, B: unlinked, C: linked with relevance 8
    let a = Candidate::new(ClaimId::from_value(1), "A", Some(10));
    let b = Candidate::new(ClaimId::from_value(2), "B", Some(99));
    let c = Candidate::new(ClaimId::from_value(3), "C", Some(20));

    let mut link_a = link(1, Stance::Support, 0.5, 80.0);
    link_a.support_level = 0.1;
    let mut link_c = link(3, Stance::Refute, 0.8, 80.0);
    link_c.support_level = -0.1;

    let ranked = enrich_and_rank(&[a, b, c], task_claim(), &[link_a, link_c]);
    let labels: Vec<_> = ranked.iter().map(|r| r.candidate.label.as_str()).collect();

    assert_eq!(labels, vec!["C", "A", "B"]);
}

#[test]
fn test_full_round_through_engine() {
    let engine = ScoringEngine::default_config();
    let links = vec![
        link(1, Stance::Support, 0.9, 100.0),
        link(2, Stance::Refute, 0.3, 100.0),
        link(3, Stance::Nuance, 1.0, 40.0),
        link(4, Stance::Insufficient, 1.0, 100.0),
    ];

    // support 90, refute 30, nuance pool 20 → 100 / 140
    let evidence = engine.aggregate(&links).unwrap();
    assert_eq!(evidence.evidence_truth_score, 71.0);
    assert_eq!(evidence.breakdown.total(), 4);
    assert_eq!(evidence.breakdown.insufficient, 1);

    let result = engine
        .score_user(&UserRound {
            prior_belief: 20.0,
            final_rating: 70.0,
            evidence_truth_score: evidence.evidence_truth_score,
            ratings: vec![QualityRating::new(90.0, 100.0)],
        })
        .unwrap();

    assert_eq!(result.accuracy_score, 99.0);
    assert_eq!(result.honesty_score, 90.0);
    assert_eq!(result.mind_change_bonus, 75.0);
    assert_eq!(result.total, 264.0);
    assert_eq!(result.grade, Grade::APlus);
    assert_eq!(result.stars, 5);
}

#[test]
fn test_engine_rejects_bad_game_input() {
    let engine = ScoringEngine::default_config();
    let err = engine.link_points(250.0, 0.0).unwrap_err();

    assert!(err.to_string().contains("ai_veracity_score"));
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = ScoringEngine::default_config();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                let stance = f64::from(i) * 0.3;
                engine.link_points(0.0, stance).unwrap()
            })
        })
        .collect();

    let points: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(points, vec![10.0, 7.5, 5.0, 2.5]);
}
