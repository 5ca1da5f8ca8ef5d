use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use super::comm::{transition, State};
use super::heuristic::box_distance;
use crate::config::Algorithm;
use crate::puzzle::{Pos, DIRECTIONS};
use crate::stats::{SearchOutcome, SearchStats};

/// Frontier entry ordered by the box-to-target distance computed at
/// insertion time; `seq` makes equal-distance entries pop in insertion
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenNode {
    h: i32,
    seq: u64,
    state: State,
    box_moves: i32,
    robot_moves: i32,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.h.cmp(&other.h).then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Greedy best-first search: expands whichever frontier state has the box
/// closest to the target, ignoring accumulated cost entirely. Fast and
/// myopic - no optimality guarantee of any kind.
pub fn solve(robot: Pos, box_pos: Pos, target: Pos, walls: &HashSet<Pos>) -> SearchOutcome {
    let start = State::new(robot, box_pos);

    let mut stats = SearchStats::default();
    let mut heap = BinaryHeap::new();
    let mut visited = HashSet::new();
    let mut seq = 0u64;

    heap.push(Reverse(OpenNode {
        h: box_distance(box_pos, target),
        seq,
        state: start,
        box_moves: 0,
        robot_moves: 0,
    }));
    visited.insert(start);

    loop {
        stats.observe_fringe(heap.len());
        let Some(Reverse(node)) = heap.pop() else {
            break;
        };
        stats.visit();

        if node.state.box_pos == target {
            return SearchOutcome::solved(Algorithm::Gbfs, stats, node.box_moves, node.robot_moves);
        }

        for dir in DIRECTIONS {
            let Some((next, pushed)) = transition(node.state, dir, walls) else {
                continue;
            };
            if visited.insert(next) {
                seq += 1;
                heap.push(Reverse(OpenNode {
                    h: box_distance(next.box_pos, target),
                    seq,
                    state: next,
                    box_moves: if pushed { node.box_moves + 1 } else { node.box_moves },
                    robot_moves: node.robot_moves + 1,
                }));
            }
        }
    }

    SearchOutcome::unsolved(Algorithm::Gbfs, stats)
}
