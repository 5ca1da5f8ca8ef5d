use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::config::Algorithm;

/// Per-run counters threaded through a strategy's main loop.
///
/// The fringe is sampled once per loop iteration, before the dequeue
/// shrinks it; IDDFS samples at every stack push instead. Either way the
/// recorded value is the true running maximum over the whole run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    pub states_visited: usize,
    pub max_fringe_size: usize,
}

impl SearchStats {
    pub fn visit(&mut self) {
        self.states_visited += 1;
    }

    pub fn observe_fringe(&mut self, len: usize) {
        if len > self.max_fringe_size {
            self.max_fringe_size = len;
        }
    }
}

/// The uniform result record - the engine's sole output contract.
///
/// `box_moves` and `robot_moves` are -1 when no solution was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    pub states_visited: usize,
    pub max_fringe_size: usize,
    pub solution_found: bool,
    pub box_moves: i32,
    pub robot_moves: i32,
}

impl SearchOutcome {
    pub(crate) fn solved(
        algorithm: Algorithm,
        stats: SearchStats,
        box_moves: i32,
        robot_moves: i32,
    ) -> Self {
        SearchOutcome {
            algorithm,
            states_visited: stats.states_visited,
            max_fringe_size: stats.max_fringe_size,
            solution_found: true,
            box_moves,
            robot_moves,
        }
    }

    pub(crate) fn unsolved(algorithm: Algorithm, stats: SearchStats) -> Self {
        SearchOutcome {
            algorithm,
            states_visited: stats.states_visited,
            max_fringe_size: stats.max_fringe_size,
            solution_found: false,
            box_moves: -1,
            robot_moves: -1,
        }
    }
}

impl Display for SearchOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm Used: {}", self.algorithm)?;
        writeln!(f, "States Visited: {}", self.states_visited)?;
        writeln!(f, "Max Fringe Size: {}", self.max_fringe_size)?;
        writeln!(
            f,
            "Solution Found: {}",
            if self.solution_found { "Yes" } else { "No" }
        )?;
        // IDDFS has always reported robot moves first - kept for
        // output compatibility with the other tooling that parses this.
        if self.algorithm == Algorithm::Iddfs {
            writeln!(f, "Robot Moves: {}", self.robot_moves)?;
            write!(f, "Box Moves: {}", self.box_moves)
        } else {
            writeln!(f, "Box Moves: {}", self.box_moves)?;
            write!(f, "Robot Moves: {}", self.robot_moves)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fringe_peak_is_running_max() {
        let mut stats = SearchStats::default();
        stats.observe_fringe(1);
        stats.observe_fringe(5);
        stats.observe_fringe(3);
        assert_eq!(stats.max_fringe_size, 5);
    }

    #[test]
    fn unsolved_uses_sentinels() {
        let mut stats = SearchStats::default();
        stats.visit();
        let outcome = SearchOutcome::unsolved(Algorithm::Bfs, stats);
        assert!(!outcome.solution_found);
        assert_eq!(outcome.box_moves, -1);
        assert_eq!(outcome.robot_moves, -1);
        assert_eq!(outcome.states_visited, 1);
    }

    #[test]
    fn summary_field_order() {
        let mut stats = SearchStats::default();
        stats.visit();
        stats.observe_fringe(1);

        let bfs = SearchOutcome::solved(Algorithm::Bfs, stats, 1, 2);
        assert_eq!(
            bfs.to_string(),
            "Algorithm Used: BFS\n\
             States Visited: 1\n\
             Max Fringe Size: 1\n\
             Solution Found: Yes\n\
             Box Moves: 1\n\
             Robot Moves: 2"
        );

        let iddfs = SearchOutcome::solved(Algorithm::Iddfs, stats, 1, 2);
        assert_eq!(
            iddfs.to_string(),
            "Algorithm Used: IDDFS\n\
             States Visited: 1\n\
             Max Fringe Size: 1\n\
             Solution Found: Yes\n\
             Robot Moves: 2\n\
             Box Moves: 1"
        );
    }

    #[test]
    fn json_names_match_summary_names() {
        let outcome = SearchOutcome::unsolved(Algorithm::AStar, SearchStats::default());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["algorithm"], "A*");
        assert_eq!(json["box_moves"], -1);
    }
}
