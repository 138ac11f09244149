//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use std::collections::BTreeMap;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use veritas_domain::{
    ClaimId, EnrichedCandidate, Grade, PointsRange, PreponderanceResult, SessionScoreState,
    UserScoreResult,
};
use veritas_scoring::ranking::EvidenceCoverage;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a ranked candidate list.
    pub fn format_ranked(&self, ranked: &[EnrichedCandidate]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = ranked
                    .iter()
                    .map(|c| {
                        serde_json::json!({
                            "id": c.id().to_string(),
                            "label": c.candidate.label,
                            "has_link": c.has_link,
                            "relevance_score": c.relevance_score,
                            "stance": c.stance.map(|s| s.as_str()),
                            "confidence": c.confidence,
                            "support_level": c.support_level,
                            "rationale": c.rationale,
                            "created_at": c.candidate.created_at,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Table => {
                if ranked.is_empty() {
                    return Ok(self.colorize("No candidates found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "ID", "Label", "Stance", "Confidence", "Relevance"]);
                for (i, c) in ranked.iter().enumerate() {
                    let stance = c
                        .stance
                        .map(|s| s.as_str().to_string())
                        .unwrap_or_else(|| "-".to_string());
                    let confidence = c
                        .confidence
                        .map(|v| format!("{:.2}", v))
                        .unwrap_or_else(|| "-".to_string());
                    builder.push_record([
                        (i + 1).to_string(),
                        c.id().to_string()[..8].to_string(),
                        c.candidate.label.clone(),
                        stance,
                        confidence,
                        format!("{:.1}", c.relevance_score),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format the preponderance result for one task claim.
    pub fn format_preponderance(&self, target: ClaimId, result: &PreponderanceResult) -> Result<String> {
        let mut results = BTreeMap::new();
        results.insert(target, *result);
        self.format_preponderance_map(&results)
    }

    /// Format preponderance results for several task claims.
    pub fn format_preponderance_map(
        &self,
        results: &BTreeMap<ClaimId, PreponderanceResult>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = results
                    .iter()
                    .map(|(target, r)| {
                        serde_json::json!({
                            "target": target.to_string(),
                            "evidence_truth_score": r.evidence_truth_score,
                            "total_weight": r.total_weight,
                            "support_weight": r.support_weight,
                            "refute_weight": r.refute_weight,
                            "nuance_weight": r.nuance_weight,
                            "breakdown": {
                                "supports": r.breakdown.supports,
                                "refutes": r.breakdown.refutes,
                                "nuances": r.breakdown.nuances,
                                "insufficient": r.breakdown.insufficient,
                            },
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Table => {
                if results.is_empty() {
                    return Ok(self.colorize("No evidence links found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record([
                    "Task claim", "Truth", "Support", "Refute", "Nuance", "Links (S/R/N/I)",
                ]);
                for (target, r) in results {
                    let b = r.breakdown;
                    builder.push_record([
                        target.to_string(),
                        self.colorize_truth(r.evidence_truth_score),
                        format!("{:.1}", r.support_weight),
                        format!("{:.1}", r.refute_weight),
                        format!("{:.1}", r.nuance_weight),
                        format!("{}/{}/{}/{}", b.supports, b.refutes, b.nuances, b.insufficient),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format a user's round score.
    pub fn format_user_score(&self, result: &UserScoreResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "accuracy_score": result.accuracy_score,
                "honesty_score": result.honesty_score,
                "mind_change_bonus": result.mind_change_bonus,
                "total": result.total,
                "grade": result.grade.as_str(),
                "stars": result.stars,
            }))?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Accuracy", "Honesty", "Mind change", "Total", "Grade", "Stars"]);
                builder.push_record([
                    format!("{:.0}", result.accuracy_score),
                    format!("{:.0}", result.honesty_score),
                    format!("{:.0}", result.mind_change_bonus),
                    format!("{:.0}", result.total),
                    self.colorize_grade(result.grade),
                    "★".repeat(usize::from(result.stars)),
                ]);
                Ok(self.render(builder))
            }
        }
    }

    /// Format the points earned by one linking action.
    pub fn format_points(&self, ai_veracity_score: f64, user_stance: f64, points: f64) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "ai_veracity_score": ai_veracity_score,
                "user_stance": user_stance,
                "points": points,
            }))?),
            OutputFormat::Table => {
                let text = format!("{:+.1} points", points);
                let color = if points >= 0.0 { "green" } else { "red" };
                Ok(self.colorize(&text, color))
            }
        }
    }

    /// Format the achievable points range for an AI score.
    pub fn format_range(&self, ai_veracity_score: f64, range: &PointsRange) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "ai_veracity_score": ai_veracity_score,
                "best": range.best,
                "worst": range.worst,
            }))?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["AI score", "Best", "Worst"]);
                builder.push_record([
                    format!("{:.0}", ai_veracity_score),
                    format!("{:+.1}", range.best),
                    format!("{:+.1}", range.worst),
                ]);
                Ok(self.render(builder))
            }
        }
    }

    /// Format the final state of a replayed session.
    pub fn format_session(&self, state: &SessionScoreState) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "total_points": state.total_points,
                "actions": state.actions,
                "last_delta": state.last_delta,
                "average": state.average(),
            }))?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Actions", "Total", "Average", "Last"]);
                builder.push_record([
                    state.actions.to_string(),
                    format!("{:.1}", state.total_points),
                    format!("{:.2}", state.average()),
                    state
                        .last_delta
                        .map(|d| format!("{:+.1}", d))
                        .unwrap_or_else(|| "-".to_string()),
                ]);
                Ok(self.render(builder))
            }
        }
    }

    /// Format an evidence coverage check.
    pub fn format_coverage(&self, target: ClaimId, coverage: &EvidenceCoverage) -> Result<String> {
        let EvidenceCoverage {
            linked_fraction,
            ratio,
            needs_more_evidence: needs_more,
        } = *coverage;

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "target": target.to_string(),
                "linked_fraction": linked_fraction,
                "ratio": ratio,
                "needs_more_evidence": needs_more,
            }))?),
            OutputFormat::Table => {
                let coverage = linked_fraction
                    .map(|f| format!("{:.0}%", f * 100.0))
                    .unwrap_or_else(|| "no candidates".to_string());
                let message = format!(
                    "{}: {} linked (threshold {:.0}%)",
                    target,
                    coverage,
                    ratio * 100.0
                );
                if needs_more {
                    Ok(self.warning(&format!("{} - needs more evidence", message)))
                } else {
                    Ok(self.success(&message))
                }
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn colorize_truth(&self, score: f64) -> String {
        let text = format!("{:.0}", score);
        let color = if score >= 60.0 {
            "green"
        } else if score <= 40.0 {
            "red"
        } else {
            "yellow"
        };
        self.colorize(&text, color)
    }

    fn colorize_grade(&self, grade: Grade) -> String {
        let color = match grade {
            Grade::APlus | Grade::A => "green",
            Grade::BPlus | Grade::B => "cyan",
            Grade::CPlus | Grade::C => "yellow",
            Grade::D => "magenta",
            Grade::F => "red",
        };
        self.colorize(grade.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veritas_domain::{Candidate, Stance, StanceBreakdown};

    fn ranked() -> Vec<EnrichedCandidate> {
        let linked = EnrichedCandidate {
            candidate: Candidate::new(ClaimId::from_value(1), "Peer-reviewed study", Some(1)),
            relevance_score: 72.0,
            has_link: true,
            stance: Some(Stance::Support),
            confidence: Some(0.8),
            support_level: Some(0.9),
            rationale: None,
        };
        let unlinked =
            EnrichedCandidate::unlinked(Candidate::new(ClaimId::from_value(2), "Blog post", None));
        vec![linked, unlinked]
    }

    fn preponderance() -> PreponderanceResult {
        PreponderanceResult {
            evidence_truth_score: 71.0,
            total_weight: 140.0,
            support_weight: 90.0,
            refute_weight: 30.0,
            nuance_weight: 20.0,
            breakdown: StanceBreakdown {
                supports: 1,
                refutes: 1,
                nuances: 1,
                insufficient: 1,
            },
        }
    }

    #[test]
    fn test_ranked_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_ranked(&ranked()).unwrap();
        assert!(output.contains("Relevance"));
        assert!(output.contains("Peer-reviewed study"));
        assert!(output.contains("72.0"));
    }

    #[test]
    fn test_ranked_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_ranked(&ranked()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value[0]["stance"], "support");
        assert_eq!(value[1]["has_link"], false);
        assert!(value[1]["stance"].is_null());
    }

    #[test]
    fn test_empty_ranking() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_ranked(&[]).unwrap();
        assert!(output.contains("No candidates found"));
    }

    #[test]
    fn test_preponderance_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_preponderance(ClaimId::from_value(9), &preponderance())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value[0]["evidence_truth_score"], 71.0);
        assert_eq!(value[0]["breakdown"]["insufficient"], 1);
    }

    #[test]
    fn test_preponderance_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_preponderance(ClaimId::from_value(9), &preponderance())
            .unwrap();
        assert!(output.contains("1/1/1/1"));
        assert!(output.contains("71"));
    }

    #[test]
    fn test_user_score_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let result = UserScoreResult {
            accuracy_score: 80.0,
            honesty_score: 98.0,
            mind_change_bonus: 75.0,
            total: 253.0,
            grade: Grade::APlus,
            stars: 5,
        };
        let output = formatter.format_user_score(&result).unwrap();
        assert!(output.contains("A+"));
        assert!(output.contains("253"));
        assert!(output.contains("★★★★★"));
    }

    #[test]
    fn test_points_plain() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.format_points(60.0, -0.72, -2.0).unwrap(), "-2.0 points");
        assert_eq!(formatter.format_points(60.0, 0.72, 10.0).unwrap(), "+10.0 points");
    }

    #[test]
    fn test_coverage_messages() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let target = ClaimId::from_value(9);

        let short = EvidenceCoverage {
            linked_fraction: Some(0.25),
            ratio: 0.5,
            needs_more_evidence: true,
        };
        let output = formatter.format_coverage(target, &short).unwrap();
        assert!(output.starts_with("⚠"));
        assert!(output.contains("25% linked"));

        let empty = EvidenceCoverage {
            linked_fraction: None,
            ratio: 0.5,
            needs_more_evidence: false,
        };
        let output = formatter.format_coverage(target, &empty).unwrap();
        assert!(output.contains("no candidates"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("done"), "✓ done");
        assert_eq!(formatter.error("failed"), "✗ failed");
    }
}
