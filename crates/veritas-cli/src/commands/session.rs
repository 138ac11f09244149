//! Session command implementation.

use crate::cli::SessionArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use tracing::info;
use veritas_scoring::session::replay;

/// Execute the session command.
pub fn execute_session(args: SessionArgs, formatter: &Formatter) -> Result<()> {
    println!("{}", render(args, formatter)?);
    Ok(())
}

fn render(args: SessionArgs, formatter: &Formatter) -> Result<String> {
    if let Some(bad) = args.deltas.iter().find(|d| !d.is_finite()) {
        return Err(CliError::InvalidInput(format!("Point delta {} is not finite", bad)));
    }

    let state = replay(&args.deltas);
    info!(actions = state.actions, total = state.total_points, "Replayed session");
    formatter.format_session(&state)
}
