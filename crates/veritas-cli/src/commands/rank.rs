//! Rank command implementation.

use crate::cli::RankArgs;
use crate::error::Result;
use crate::input::{load_candidates, load_links, parse_claim_id};
use crate::output::Formatter;
use veritas_scoring::ScoringEngine;

/// Execute the rank command.
pub fn execute_rank(args: RankArgs, engine: &ScoringEngine, formatter: &Formatter) -> Result<()> {
    println!("{}", render(args, engine, formatter)?);
    Ok(())
}

fn render(args: RankArgs, engine: &ScoringEngine, formatter: &Formatter) -> Result<String> {
    let target = parse_claim_id(&args.target)?;
    let links = load_links(&args.links)?;
    let candidates = load_candidates(&args.candidates)?;

    let ranked = engine.rank(&candidates, target, &links, args.limit)?;
    formatter.format_ranked(&ranked)
}
