//! Coverage command implementation.

use crate::cli::CoverageArgs;
use crate::error::Result;
use crate::input::{load_candidates, load_links, parse_claim_id};
use crate::output::Formatter;
use veritas_scoring::ScoringEngine;

/// Execute the coverage command.
pub fn execute_coverage(
    args: CoverageArgs,
    engine: &ScoringEngine,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", render(args, engine, formatter)?);
    Ok(())
}

fn render(args: CoverageArgs, engine: &ScoringEngine, formatter: &Formatter) -> Result<String> {
    let target = parse_claim_id(&args.target)?;
    let links = load_links(&args.links)?;
    let candidates = load_candidates(&args.candidates)?;

    let coverage = engine.coverage(&candidates, target, &links, args.ratio)?;
    formatter.format_coverage(target, &coverage)
}
