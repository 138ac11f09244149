//! JSON input definitions and their conversion into domain values.

use crate::error::{CliError, Result};
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use tracing::warn;
use veritas_domain::{Candidate, ClaimId, EvidenceLink, QualityRating, Stance};

/// Read a JSON document from a file path, or stdin for "-".
pub fn read_source(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

/// Parse a claim id argument.
pub fn parse_claim_id(value: &str) -> Result<ClaimId> {
    ClaimId::from_string(value).map_err(CliError::InvalidInput)
}

/// Evidence link as written in input files.
#[derive(Debug, Deserialize)]
pub struct LinkDefinition {
    source: String,
    target: String,
    stance: String,
    confidence: f64,
    quality_score: f64,
    #[serde(default)]
    support_level: Option<f64>,
    #[serde(default)]
    created_by_ai: bool,
    #[serde(default)]
    rationale: Option<String>,
    #[serde(default)]
    created_at: u64,
}

impl LinkDefinition {
    /// Convert into a domain link, rejecting unknown stances.
    pub fn into_link(self) -> Result<EvidenceLink> {
        let stance: Stance = self.stance.parse().map_err(CliError::InvalidInput)?;
        let source = parse_claim_id(&self.source)?;
        let target = parse_claim_id(&self.target)?;

        // Without a support level the link still counts for preponderance
        // but has zero relevance.
        let support_level = self.support_level.unwrap_or_else(|| {
            warn!(%source, task_claim = %target, "Link has no support_level, relevance will be 0");
            0.0
        });

        let mut link = EvidenceLink::new(
            source,
            target,
            stance,
            self.confidence,
            self.quality_score,
            support_level,
            self.created_at,
        );
        if let Some(rationale) = self.rationale {
            link = link.with_rationale(rationale);
        }
        if self.created_by_ai {
            link = link.ai_assessed();
        }
        Ok(link)
    }
}

/// Candidate as written in input files.
#[derive(Debug, Deserialize)]
pub struct CandidateDefinition {
    id: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    created_at: Option<u64>,
}

impl CandidateDefinition {
    /// Convert into a domain candidate.
    pub fn into_candidate(self) -> Result<Candidate> {
        Ok(Candidate::new(
            parse_claim_id(&self.id)?,
            self.label,
            self.created_at,
        ))
    }
}

/// Quality rating pair as written in input files.
#[derive(Debug, Deserialize)]
pub struct RatingDefinition {
    user_quality: f64,
    ai_quality: f64,
}

/// Parse an array of evidence links.
pub fn parse_links(json: &str) -> Result<Vec<EvidenceLink>> {
    let defs: Vec<LinkDefinition> = serde_json::from_str(json)?;
    defs.into_iter().map(LinkDefinition::into_link).collect()
}

/// Parse an array of candidates.
pub fn parse_candidates(json: &str) -> Result<Vec<Candidate>> {
    let defs: Vec<CandidateDefinition> = serde_json::from_str(json)?;
    defs.into_iter()
        .map(CandidateDefinition::into_candidate)
        .collect()
}

/// Parse an array of quality ratings.
pub fn parse_ratings(json: &str) -> Result<Vec<QualityRating>> {
    let defs: Vec<RatingDefinition> = serde_json::from_str(json)?;
    Ok(defs
        .into_iter()
        .map(|d| QualityRating::new(d.user_quality, d.ai_quality))
        .collect())
}

/// Read and parse links from a path.
pub fn load_links(path: &str) -> Result<Vec<EvidenceLink>> {
    parse_links(&read_source(path)?)
}

/// Read and parse candidates from a path.
pub fn load_candidates(path: &str) -> Result<Vec<Candidate>> {
    parse_candidates(&read_source(path)?)
}

/// Read and parse ratings from a path.
pub fn load_ratings(path: &str) -> Result<Vec<QualityRating>> {
    parse_ratings(&read_source(path)?)
}
