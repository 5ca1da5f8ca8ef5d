use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::comm::{transition, State};
use super::heuristic::{box_distance, min_robot_approach};
use crate::config::Algorithm;
use crate::puzzle::{Pos, DIRECTIONS};
use crate::stats::{SearchOutcome, SearchStats};

/// A (box moves, robot moves) pair, compared lexicographically: the box
/// component dominates, robot moves break ties. Used both for accumulated
/// cost and for the cost-plus-estimate priority key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CostPair {
    pub(crate) box_moves: i32,
    pub(crate) robot_moves: i32,
}

impl Ord for CostPair {
    fn cmp(&self, other: &Self) -> Ordering {
        self.box_moves
            .cmp(&other.box_moves)
            .then_with(|| self.robot_moves.cmp(&other.robot_moves))
    }
}

impl PartialOrd for CostPair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl CostPair {
    /// Strict improvement: fewer box moves, or the same box moves with
    /// fewer robot moves. Equal-or-worse pairs are discarded.
    fn improves(self, recorded: CostPair) -> bool {
        self.box_moves < recorded.box_moves
            || (self.box_moves == recorded.box_moves && self.robot_moves < recorded.robot_moves)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenNode {
    f: CostPair,
    seq: u64,
    state: State,
    g: CostPair,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f.cmp(&other.f).then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* with a two-component priority key:
/// (box_moves + box_distance, robot_moves + min_robot_approach).
///
/// The key encodes the objective "fewest pushes first, fewest robot steps
/// second" rather than a single scalar cost. `min_robot_approach` is a
/// geometric relaxation, so this is a heuristic policy, not a proven
/// optimality guarantee - see the heuristic module.
///
/// A best-known-cost map replaces BFS's visited set: a state is re-queued
/// whenever it is reached with a strictly better cost pair, and stale
/// heap entries are skipped at dequeue through the closed set.
pub fn solve(robot: Pos, box_pos: Pos, target: Pos, walls: &HashSet<Pos>) -> SearchOutcome {
    let start = State::new(robot, box_pos);

    let mut stats = SearchStats::default();
    let mut heap = BinaryHeap::new();
    let mut closed = HashSet::new();
    let mut best_costs = HashMap::new();
    let mut seq = 0u64;

    let start_g = CostPair {
        box_moves: 0,
        robot_moves: 0,
    };
    heap.push(Reverse(OpenNode {
        f: CostPair {
            box_moves: box_distance(box_pos, target),
            robot_moves: min_robot_approach(robot, box_pos, walls),
        },
        seq,
        state: start,
        g: start_g,
    }));
    best_costs.insert(start, start_g);

    loop {
        stats.observe_fringe(heap.len());
        let Some(Reverse(node)) = heap.pop() else {
            break;
        };

        // stale entries (superseded by a better path) land here too
        if !closed.insert(node.state) {
            continue;
        }
        stats.visit();

        if node.state.box_pos == target {
            return SearchOutcome::solved(
                Algorithm::AStar,
                stats,
                node.g.box_moves,
                node.g.robot_moves,
            );
        }

        for dir in DIRECTIONS {
            let Some((next, pushed)) = transition(node.state, dir, walls) else {
                continue;
            };

            let g = CostPair {
                box_moves: if pushed { node.g.box_moves + 1 } else { node.g.box_moves },
                robot_moves: node.g.robot_moves + 1,
            };
            if let Some(&recorded) = best_costs.get(&next) {
                if !g.improves(recorded) {
                    continue;
                }
            }
            best_costs.insert(next, g);

            seq += 1;
            heap.push(Reverse(OpenNode {
                f: CostPair {
                    box_moves: g.box_moves + box_distance(next.box_pos, target),
                    robot_moves: g.robot_moves + min_robot_approach(next.robot, next.box_pos, walls),
                },
                seq,
                state: next,
                g,
            }));
        }
    }

    SearchOutcome::unsolved(Algorithm::AStar, stats)
}
