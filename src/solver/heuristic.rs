use std::collections::HashSet;

use crate::puzzle::{Pos, DIRECTIONS};

/// Manhattan distance from the box to the target. Every push changes
/// exactly one box coordinate by one, so this lower-bounds the remaining
/// pushes.
pub(crate) fn box_distance(box_pos: Pos, target: Pos) -> i32 {
    box_pos.dist(target)
}

/// Minimum Manhattan distance from the robot to a cell it could push the
/// box from, or 0 when every such cell is a wall.
///
/// This only checks wall adjacency, not whether the robot can actually
/// path to the pushing cell, so in mazes with internal obstacles it can
/// under- or over-estimate the true robot cost. It is a geometric
/// relaxation, not a guaranteed admissible estimate.
pub(crate) fn min_robot_approach(robot: Pos, box_pos: Pos, walls: &HashSet<Pos>) -> i32 {
    let mut best: Option<i32> = None;
    for dir in DIRECTIONS {
        // the cell the robot must occupy to push the box along `dir`
        let push_from = box_pos - dir;
        if walls.contains(&push_from) {
            continue;
        }
        let dist = robot.dist(push_from);
        best = Some(best.map_or(dist, |b| b.min(dist)));
    }
    best.unwrap_or(0)
}
