//! Aggregate command implementation.

use crate::cli::AggregateArgs;
use crate::error::Result;
use crate::input::{load_links, parse_claim_id};
use crate::output::Formatter;
use veritas_domain::EvidenceLink;
use veritas_scoring::ScoringEngine;

/// Execute the aggregate command.
pub fn execute_aggregate(
    args: AggregateArgs,
    engine: &ScoringEngine,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", render(args, engine, formatter)?);
    Ok(())
}

fn render(args: AggregateArgs, engine: &ScoringEngine, formatter: &Formatter) -> Result<String> {
    let links = load_links(&args.links)?;

    match args.target {
        Some(target) => {
            let target = parse_claim_id(&target)?;
            let for_target: Vec<EvidenceLink> =
                links.into_iter().filter(|l| l.target == target).collect();
            let result = engine.aggregate(&for_target)?;
            formatter.format_preponderance(target, &result)
        }
        None => {
            let results = engine.aggregate_by_target(&links)?;
            formatter.format_preponderance_map(&results)
        }
    }
}
