use std::env;
use std::process;

use tracing_subscriber::EnvFilter;

use sokoban_search::{solver, Algorithm, Puzzle};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <puzzle-file>", args[0]);
        process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let puzzle = Puzzle::from_file(&args[1]).unwrap_or_else(|err| {
        eprintln!("{err:#}");
        process::exit(1);
    });

    let outcome = solver::solve(&puzzle, Algorithm::Gbfs);
    println!("Search Summary:");
    println!("{outcome}");
}
