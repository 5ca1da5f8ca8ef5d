use std::collections::HashSet;

use tracing::trace;

use super::comm::{transition, State};
use crate::config::Algorithm;
use crate::puzzle::{Pos, DIRECTIONS};
use crate::stats::{SearchOutcome, SearchStats};

/// Iterative-deepening depth-first search.
///
/// The depth bound grows one level per iteration up to 4 x rows x cols, a
/// generous bound on the number of distinct states that guarantees
/// termination without a separate "no solution" proof. Each iteration
/// runs a fresh depth-limited search with its own reached set - states
/// proven reachable under a shallower bound must be revisitable through a
/// different, longer route once the budget grows.
///
/// Statistics are cumulative over the iterations: `states_visited` sums
/// every iteration's reached-set size and `max_fringe_size` is the
/// deepest the explicit fringe stack ever got.
pub fn solve(
    robot: Pos,
    box_pos: Pos,
    target: Pos,
    walls: &HashSet<Pos>,
    rows: usize,
    cols: usize,
) -> SearchOutcome {
    let start = State::new(robot, box_pos);
    let depth_ceiling = 4 * rows * cols;

    let mut stats = SearchStats::default();

    for depth in 0..=depth_ceiling {
        let mut reached = HashSet::new();
        reached.insert(start);
        let mut fringe = vec![start];
        stats.observe_fringe(fringe.len());

        // the path includes the initial state, so a push on the very
        // first move still counts below
        let mut path = vec![start];
        let found = depth_limited(
            start,
            depth as i32,
            target,
            walls,
            &mut reached,
            &mut fringe,
            &mut path,
            &mut stats,
        );
        stats.states_visited += reached.len();

        if found {
            let robot_moves = (path.len() - 1) as i32;
            let box_moves = path
                .windows(2)
                .filter(|pair| pair[0].box_pos != pair[1].box_pos)
                .count() as i32;
            return SearchOutcome::solved(Algorithm::Iddfs, stats, box_moves, robot_moves);
        }
        trace!("depth bound {depth} exhausted, reached {} states", reached.len());
    }

    SearchOutcome::unsolved(Algorithm::Iddfs, stats)
}

/// Depth-limited DFS. The fringe entry pushed at each level is popped on
/// every backtrack, whichever branch caused the return.
#[allow(clippy::too_many_arguments)]
fn depth_limited(
    state: State,
    depth: i32,
    target: Pos,
    walls: &HashSet<Pos>,
    reached: &mut HashSet<State>,
    fringe: &mut Vec<State>,
    path: &mut Vec<State>,
    stats: &mut SearchStats,
) -> bool {
    if depth < 0 {
        return false;
    }
    if state.box_pos == target {
        return true;
    }

    for dir in DIRECTIONS {
        let Some((next, _)) = transition(state, dir, walls) else {
            continue;
        };
        if !reached.insert(next) {
            continue;
        }

        fringe.push(next);
        stats.observe_fringe(fringe.len());
        path.push(next);

        if depth_limited(next, depth - 1, target, walls, reached, fringe, path, stats) {
            return true;
        }

        path.pop();
        fringe.pop();
    }

    false
}
