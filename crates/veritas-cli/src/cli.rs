//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Veritas - score evidence links, rank references and grade fact-checks.
#[derive(Debug, Parser)]
#[command(name = "veritas")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "VERITAS_CONFIG")]
    pub config: Option<String>,

    /// Skip input domain validation
    #[arg(long, global = true)]
    pub no_validate: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank candidate references for a task claim
    Rank(RankArgs),

    /// Compute the evidence truth score for one or all task claims
    Aggregate(AggregateArgs),

    /// Score a user's round against the evidence
    Score(ScoreArgs),

    /// Points for placing a link at a stance
    Points(PointsArgs),

    /// Best and worst points available for an AI score
    Range(RangeArgs),

    /// Replay point deltas through a session
    Session(SessionArgs),

    /// Check whether a task claim needs more evidence
    Coverage(CoverageArgs),
}

/// Arguments for the rank command.
#[derive(Debug, Parser)]
pub struct RankArgs {
    /// JSON file of evidence links ("-" for stdin)
    #[arg(short, long)]
    pub links: String,

    /// JSON file of candidates
    #[arg(long)]
    pub candidates: String,

    /// Task claim id
    #[arg(short, long)]
    pub target: String,

    /// Maximum number of results (defaults to the configured top N)
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the aggregate command.
#[derive(Debug, Parser)]
pub struct AggregateArgs {
    /// JSON file of evidence links ("-" for stdin)
    #[arg(short, long)]
    pub links: String,

    /// Only aggregate links for this task claim
    #[arg(short, long)]
    pub target: Option<String>,
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Final truth rating (0-100)
    #[arg(short, long)]
    pub rating: f64,

    /// Belief before reviewing evidence (0-100)
    #[arg(short, long)]
    pub prior: f64,

    /// Evidence truth score (0-100); computed from --links when omitted
    #[arg(short, long, conflicts_with = "links")]
    pub evidence_score: Option<f64>,

    /// JSON file of evidence links to aggregate
    #[arg(short, long, requires = "target")]
    pub links: Option<String>,

    /// Task claim id for --links
    #[arg(short, long)]
    pub target: Option<String>,

    /// JSON file of user/AI quality ratings
    #[arg(long)]
    pub ratings: Option<String>,
}

/// Arguments for the points command.
#[derive(Debug, Parser)]
pub struct PointsArgs {
    /// AI veracity score (-100 to 100)
    #[arg(short, long, allow_negative_numbers = true)]
    pub ai: f64,

    /// User stance (-1.2 to 1.2)
    #[arg(short, long, allow_negative_numbers = true)]
    pub stance: f64,
}

/// Arguments for the range command.
#[derive(Debug, Parser)]
pub struct RangeArgs {
    /// AI veracity score (-100 to 100)
    #[arg(short, long, allow_negative_numbers = true)]
    pub ai: f64,
}

/// Arguments for the session command.
#[derive(Debug, Parser)]
pub struct SessionArgs {
    /// Comma-separated point deltas
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    pub deltas: Vec<f64>,
}

/// Arguments for the coverage command.
#[derive(Debug, Parser)]
pub struct CoverageArgs {
    /// JSON file of evidence links ("-" for stdin)
    #[arg(short, long)]
    pub links: String,

    /// JSON file of candidates
    #[arg(long)]
    pub candidates: String,

    /// Task claim id
    #[arg(short, long)]
    pub target: String,

    /// Linked fraction required (defaults to the configured ratio)
    #[arg(long)]
    pub ratio: Option<f64>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
