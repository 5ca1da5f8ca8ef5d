use std::collections::HashSet;

use crate::puzzle::{Dir, Pos};

/// A search state: where the robot stands and where the box sits.
/// Neither coordinate is ever a wall cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    pub robot: Pos,
    pub box_pos: Pos,
}

impl State {
    pub fn new(robot: Pos, box_pos: Pos) -> State {
        State { robot, box_pos }
    }
}

/// The transition function shared by all four strategies.
///
/// Returns the successor state and whether the move pushed the box, or
/// `None` when the move is illegal (robot into a wall, or pushing the box
/// into a wall).
pub(crate) fn transition(state: State, dir: Dir, walls: &HashSet<Pos>) -> Option<(State, bool)> {
    let new_robot = state.robot + dir;
    if walls.contains(&new_robot) {
        return None;
    }

    if new_robot == state.box_pos {
        let new_box = state.box_pos + dir;
        if walls.contains(&new_box) {
            return None;
        }
        Some((State::new(new_robot, new_box), true))
    } else {
        Some((State::new(new_robot, state.box_pos), false))
    }
}
