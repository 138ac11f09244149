//! Points and range command implementations.

use crate::cli::{PointsArgs, RangeArgs};
use crate::error::Result;
use crate::output::Formatter;
use veritas_scoring::ScoringEngine;

/// Execute the points command.
pub fn execute_points(args: PointsArgs, engine: &ScoringEngine, formatter: &Formatter) -> Result<()> {
    let points = engine.link_points(args.ai, args.stance)?;
    println!("{}", formatter.format_points(args.ai, args.stance, points)?);
    Ok(())
}

/// Execute the range command.
pub fn execute_range(args: RangeArgs, engine: &ScoringEngine, formatter: &Formatter) -> Result<()> {
    let range = engine.points_range(args.ai)?;
    println!("{}", formatter.format_range(args.ai, &range)?);
    Ok(())
}
