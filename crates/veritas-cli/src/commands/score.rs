//! Score command implementation.

use crate::cli::ScoreArgs;
use crate::error::{CliError, Result};
use crate::input::{load_links, load_ratings, parse_claim_id};
use crate::output::Formatter;
use veritas_domain::EvidenceLink;
use veritas_scoring::{ScoringEngine, UserRound};

/// Execute the score command.
pub fn execute_score(args: ScoreArgs, engine: &ScoringEngine, formatter: &Formatter) -> Result<()> {
    println!("{}", render(args, engine, formatter)?);
    Ok(())
}

fn render(args: ScoreArgs, engine: &ScoringEngine, formatter: &Formatter) -> Result<String> {
    let evidence_truth_score = match (args.evidence_score, args.links, args.target) {
        (Some(score), _, _) => score,
        (None, Some(links), Some(target)) => {
            let target = parse_claim_id(&target)?;
            let links: Vec<EvidenceLink> = load_links(&links)?
                .into_iter()
                .filter(|l| l.target == target)
                .collect();
            engine.aggregate(&links)?.evidence_truth_score
        }
        _ => {
            return Err(CliError::InvalidInput(
                "Must specify either --evidence-score or --links with --target".to_string(),
            ))
        }
    };

    let ratings = match args.ratings {
        Some(path) => load_ratings(&path)?,
        None => Vec::new(),
    };

    let round = UserRound {
        prior_belief: args.prior,
        final_rating: args.rating,
        evidence_truth_score,
        ratings,
    };
    let result = engine.score_user(&round)?;
    formatter.format_user_score(&result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::*;
    use crate::config::OutputFormat;

    fn args(rating: f64, prior: f64) -> ScoreArgs {
        ScoreArgs {
            rating,
            prior,
            evidence_score: None,
            links: None,
            target: None,
            ratings: None,
        }
    }

    fn json(args: ScoreArgs) -> Result<serde_json::Value> {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = render(args, &ScoringEngine::default(), &formatter)?;
        Ok(serde_json::from_str(&output).unwrap())
    }

    #[test]
    fn test_score_with_explicit_evidence() {
        let ratings = json_file(r#"[{"user_quality": 90, "ai_quality": 95},
                                   {"user_quality": 80, "ai_quality": 81}]"#);
        let mut args = args(70.0, 30.0);
        args.evidence_score = Some(75.0);
        args.ratings = Some(ratings.path().to_str().unwrap().to_string());

        let value = json(args).unwrap();

        assert_eq!(value["accuracy_score"], 95.0);
        assert_eq!(value["honesty_score"], 97.0);
        assert_eq!(value["mind_change_bonus"], 75.0);
        assert_eq!(value["total"], 267.0);
        assert_eq!(value["grade"], "A+");
    }

    #[test]
    fn test_score_from_links() {
        let links = json_file(&links_json());
        let mut args = args(80.0, 40.0);
        args.links = Some(links.path().to_str().unwrap().to_string());
        args.target = Some(TARGET.to_string());

        let value = json(args).unwrap();

        // Evidence aggregates to 82
        assert_eq!(value["accuracy_score"], 98.0);
        assert_eq!(value["mind_change_bonus"], 75.0);
        assert_eq!(value["honesty_score"], 0.0);
        assert_eq!(value["total"], 173.0);
    }

    #[test]
    fn test_score_requires_evidence_source() {
        assert!(matches!(json(args(50.0, 50.0)), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_score_rejects_out_of_range_rating() {
        let mut args = args(140.0, 50.0);
        args.evidence_score = Some(50.0);
        assert!(matches!(json(args), Err(CliError::Scoring(_))));
    }
}
