pub mod astar;
pub mod bfs;
pub mod gbfs;
pub mod iddfs;

mod comm;
mod heuristic;

pub use comm::State;

use tracing::debug;

use crate::config::Algorithm;
use crate::puzzle::Puzzle;
use crate::stats::SearchOutcome;

/// Runs one strategy against a loaded puzzle.
///
/// Every strategy is a pure function of the puzzle's coordinates and wall
/// set; this is just the common entry point over the four of them.
pub fn solve(puzzle: &Puzzle, algorithm: Algorithm) -> SearchOutcome {
    debug!(
        "running {algorithm} on a {}x{} grid, robot {:?}, box {:?}, target {:?}",
        puzzle.rows, puzzle.cols, puzzle.robot, puzzle.box_pos, puzzle.target
    );

    let outcome = match algorithm {
        Algorithm::Bfs => bfs::solve(puzzle.robot, puzzle.box_pos, puzzle.target, &puzzle.walls),
        Algorithm::Gbfs => gbfs::solve(puzzle.robot, puzzle.box_pos, puzzle.target, &puzzle.walls),
        Algorithm::AStar => {
            astar::solve(puzzle.robot, puzzle.box_pos, puzzle.target, &puzzle.walls)
        }
        Algorithm::Iddfs => iddfs::solve(
            puzzle.robot,
            puzzle.box_pos,
            puzzle.target,
            &puzzle.walls,
            puzzle.rows,
            puzzle.cols,
        ),
    };

    debug!(
        "{algorithm} finished: solved={}, visited={}, peak fringe={}",
        outcome.solution_found, outcome.states_visited, outcome.max_fringe_size
    );
    outcome
}
