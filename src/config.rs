use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

/// The four search strategies. Shared by the solver dispatch, the result
/// record and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
pub enum Algorithm {
    #[serde(rename = "BFS")]
    Bfs,
    #[serde(rename = "GBFS")]
    Gbfs,
    #[value(name = "astar")]
    #[serde(rename = "A*")]
    AStar,
    #[serde(rename = "IDDFS")]
    Iddfs,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Gbfs => "GBFS",
            Algorithm::AStar => "A*",
            Algorithm::Iddfs => "IDDFS",
        }
    }

    pub fn all() -> [Algorithm; 4] {
        [
            Algorithm::Bfs,
            Algorithm::Gbfs,
            Algorithm::AStar,
            Algorithm::Iddfs,
        ]
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "sokoban-search",
    about = "Solves a single-box Sokoban puzzle with four search strategies and compares their statistics.",
    version
)]
pub struct Cli {
    #[arg(help = "Path to the puzzle file")]
    pub puzzle: PathBuf,

    #[arg(long, value_enum, help = "Run a single strategy instead of all four")]
    pub algorithm: Option<Algorithm>,

    #[arg(long, help = "Print results as a JSON array", default_value_t = false)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn algorithm_names() {
        assert_eq!(Algorithm::Bfs.name(), "BFS");
        assert_eq!(Algorithm::AStar.to_string(), "A*");
        assert_eq!(Algorithm::all().len(), 4);
    }
}
