//! Veritas CLI - score evidence links, rank references and grade fact-checks.

use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use veritas_cli::commands;
use veritas_cli::{Cli, Command, Config, Formatter};
use veritas_scoring::ScoringEngine;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for JSON output.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> veritas_cli::Result<()> {
    let mut config = Config::load(cli.config.as_deref().map(Path::new))?;

    if cli.no_validate {
        config.scoring.validate_inputs = false;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let engine = ScoringEngine::new(config.scoring);

    match cli.command {
        Command::Rank(args) => commands::execute_rank(args, &engine, &formatter)?,
        Command::Aggregate(args) => commands::execute_aggregate(args, &engine, &formatter)?,
        Command::Score(args) => commands::execute_score(args, &engine, &formatter)?,
        Command::Points(args) => commands::execute_points(args, &engine, &formatter)?,
        Command::Range(args) => commands::execute_range(args, &engine, &formatter)?,
        Command::Session(args) => commands::execute_session(args, &formatter)?,
        Command::Coverage(args) => commands::execute_coverage(args, &engine, &formatter)?,
    }

    Ok(())
}
