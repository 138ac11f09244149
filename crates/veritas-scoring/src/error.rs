//! Scoring error types

use thiserror::Error;

use crate::validator::RejectionReason;

/// Errors surfaced by the scoring engine
///
/// The pure scoring functions never fail; these come from input validation
/// and configuration loading only.
#[derive(Error, Debug)]
pub enum ScoringError {
    /// One or more inputs fell outside their documented domain
    #[error("Invalid input: {}", join_reasons(.0))]
    InvalidInput(Vec<RejectionReason>),

    /// Failed to read a configuration file
    #[error("Failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// Failed to parse configuration TOML
    #[error("Failed to parse config TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration values are inconsistent
    #[error("Configuration error: {0}")]
    Config(String),
}

fn join_reasons(reasons: &[RejectionReason]) -> String {
    reasons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ScoringError {
    /// Rejection reasons, if this is a validation failure
    pub fn reasons(&self) -> &[RejectionReason] {
        match self {
            ScoringError::InvalidInput(reasons) => reasons,
            _ => &[],
        }
    }
}
