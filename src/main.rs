use clap::Parser;
use tracing_subscriber::EnvFilter;

use sokoban_search::config::Cli;
use sokoban_search::{solver, Puzzle};

fn main() -> anyhow::Result<()> {
    // stdout carries the summaries; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let puzzle = Puzzle::from_file(&cli.puzzle)?;

    let algorithms = match cli.algorithm {
        Some(algorithm) => vec![algorithm],
        None => sokoban_search::Algorithm::all().to_vec(),
    };

    let outcomes: Vec<_> = algorithms
        .into_iter()
        .map(|algorithm| solver::solve(&puzzle, algorithm))
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        for outcome in &outcomes {
            println!("Search Summary:");
            println!("{outcome}");
            println!();
        }
    }

    Ok(())
}
