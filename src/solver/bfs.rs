use std::collections::{HashSet, VecDeque};

use super::comm::{transition, State};
use crate::config::Algorithm;
use crate::puzzle::{Pos, DIRECTIONS};
use crate::stats::{SearchOutcome, SearchStats};

/// Breadth-first search over the (robot, box) state space.
///
/// Every transition costs one robot move, so the first time the goal is
/// dequeued its robot move count is the shortest possible.
pub fn solve(robot: Pos, box_pos: Pos, target: Pos, walls: &HashSet<Pos>) -> SearchOutcome {
    let start = State::new(robot, box_pos);

    let mut stats = SearchStats::default();
    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();

    queue.push_back((start, 0, 0));
    visited.insert(start);

    loop {
        stats.observe_fringe(queue.len());
        let Some((state, box_moves, robot_moves)) = queue.pop_front() else {
            break;
        };
        stats.visit();

        if state.box_pos == target {
            return SearchOutcome::solved(Algorithm::Bfs, stats, box_moves, robot_moves);
        }

        for dir in DIRECTIONS {
            let Some((next, pushed)) = transition(state, dir, walls) else {
                continue;
            };
            if visited.insert(next) {
                let next_box_moves = if pushed { box_moves + 1 } else { box_moves };
                queue.push_back((next, next_box_moves, robot_moves + 1));
            }
        }
    }

    SearchOutcome::unsolved(Algorithm::Bfs, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Puzzle;

    const TRIVIAL: &str = "\
######
#T B@#
######";

    #[test]
    fn trivial_push() {
        let p: Puzzle = TRIVIAL.parse().unwrap();
        let outcome = solve(p.robot, p.box_pos, p.target, &p.walls);

        assert!(outcome.solution_found);
        assert_eq!(outcome.box_moves, 1);
        assert_eq!(outcome.robot_moves, 2);
        // one corridor, one state per step
        assert_eq!(outcome.states_visited, 3);
        assert_eq!(outcome.max_fringe_size, 1);
    }

    #[test]
    fn already_solved() {
        let p: Puzzle = TRIVIAL.parse().unwrap();
        // goal test fires on the very first dequeue
        let outcome = solve(p.robot, p.box_pos, p.box_pos, &p.walls);

        assert!(outcome.solution_found);
        assert_eq!(outcome.box_moves, 0);
        assert_eq!(outcome.robot_moves, 0);
        assert_eq!(outcome.states_visited, 1);
        assert_eq!(outcome.max_fringe_size, 1);
    }

    #[test]
    fn sealed_target() {
        let p: Puzzle = "\
#######
#T  B #
# ### #
# #@# #
# ### #
#######"
            .parse::<Puzzle>()
            .unwrap();
        let outcome = solve(p.robot, p.box_pos, p.target, &p.walls);

        assert!(!outcome.solution_found);
        assert_eq!(outcome.box_moves, -1);
        assert_eq!(outcome.robot_moves, -1);
        assert!(outcome.states_visited > 0);
    }
}
