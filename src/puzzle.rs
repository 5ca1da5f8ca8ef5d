use std::collections::HashSet;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;

/// Grid coordinate as (row, col). Signed so candidate positions can be
/// formed one step past the grid edge before the wall test rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: usize, c: usize) -> Pos {
        Pos {
            r: r as i32,
            c: c as i32,
        }
    }

    /// Manhattan distance.
    pub fn dist(self, other: Pos) -> i32 {
        (self.r - other.r).abs() + (self.c - other.c).abs()
    }
}

/// Unit direction as a (row, col) delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dir {
    pub r: i32,
    pub c: i32,
}

pub const UP: Dir = Dir { r: -1, c: 0 };
pub const DOWN: Dir = Dir { r: 1, c: 0 };
pub const LEFT: Dir = Dir { r: 0, c: -1 };
pub const RIGHT: Dir = Dir { r: 0, c: 1 };

/// The one direction order shared by every strategy. Expansion order
/// decides tie-breaks, so statistics are only reproducible as long as
/// nothing iterates directions in any other order.
pub const DIRECTIONS: [Dir; 4] = [UP, DOWN, LEFT, RIGHT];

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        Pos {
            r: self.r + dir.r,
            c: self.c + dir.c,
        }
    }
}

impl Sub<Dir> for Pos {
    type Output = Pos;

    fn sub(self, dir: Dir) -> Pos {
        Pos {
            r: self.r - dir.r,
            c: self.c - dir.c,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleError {
    MissingMarker(char),
    DuplicateMarker(char),
    OpenBoundary,
}

impl Display for PuzzleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            PuzzleError::MissingMarker(m) => write!(f, "missing required marker '{m}'"),
            PuzzleError::DuplicateMarker(m) => write!(f, "marker '{m}' appears more than once"),
            PuzzleError::OpenBoundary => write!(
                f,
                "walls do not enclose the playing area - search could run forever"
            ),
        }
    }
}

impl Error for PuzzleError {}

/// A parsed single-box puzzle: `T` robot, `B` box, `@` target, `#` wall,
/// anything else is open floor.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub rows: usize,
    pub cols: usize,
    pub robot: Pos,
    pub box_pos: Pos,
    pub target: Pos,
    pub walls: HashSet<Pos>,
}

impl Puzzle {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Puzzle> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("can't read puzzle file {}", path.display()))?;
        let puzzle = text
            .parse::<Puzzle>()
            .with_context(|| format!("invalid puzzle file {}", path.display()))?;
        Ok(puzzle)
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.walls.contains(&pos)
    }

    /// Every non-wall cell reachable from the robot must stay inside the
    /// grid rectangle. Without this the strategies could enumerate an
    /// unbounded number of states on an unsolvable puzzle.
    fn check_boundary(&self) -> Result<(), PuzzleError> {
        let mut visited = HashSet::new();
        let mut to_visit = vec![self.robot];
        visited.insert(self.robot);

        while let Some(cur) = to_visit.pop() {
            for dir in DIRECTIONS {
                let next = cur + dir;
                if self.walls.contains(&next) || visited.contains(&next) {
                    continue;
                }
                if next.r < 0
                    || next.c < 0
                    || next.r >= self.rows as i32
                    || next.c >= self.cols as i32
                {
                    return Err(PuzzleError::OpenBoundary);
                }
                visited.insert(next);
                to_visit.push(next);
            }
        }

        Ok(())
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Puzzle, PuzzleError> {
        let mut robot = None;
        let mut box_pos = None;
        let mut target = None;
        let mut walls = HashSet::new();

        let mut rows = 0;
        let mut cols = 0;
        for (r, line) in s.lines().enumerate() {
            let line = line.trim_end();
            rows = r + 1;
            cols = cols.max(line.chars().count());
            for (c, ch) in line.chars().enumerate() {
                let pos = Pos::new(r, c);
                match ch {
                    'T' => set_marker(&mut robot, pos, 'T')?,
                    'B' => set_marker(&mut box_pos, pos, 'B')?,
                    '@' => set_marker(&mut target, pos, '@')?,
                    '#' => {
                        walls.insert(pos);
                    }
                    _ => {}
                }
            }
        }

        let puzzle = Puzzle {
            rows,
            cols,
            robot: robot.ok_or(PuzzleError::MissingMarker('T'))?,
            box_pos: box_pos.ok_or(PuzzleError::MissingMarker('B'))?,
            target: target.ok_or(PuzzleError::MissingMarker('@'))?,
            walls,
        };
        puzzle.check_boundary()?;
        Ok(puzzle)
    }
}

fn set_marker(slot: &mut Option<Pos>, pos: Pos, marker: char) -> Result<(), PuzzleError> {
    if slot.is_some() {
        return Err(PuzzleError::DuplicateMarker(marker));
    }
    *slot = Some(pos);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIVIAL: &str = "\
######
#T B@#
######";

    #[test]
    fn parse_trivial() {
        let puzzle: Puzzle = TRIVIAL.parse().unwrap();

        assert_eq!(puzzle.rows, 3);
        assert_eq!(puzzle.cols, 6);
        assert_eq!(puzzle.robot, Pos::new(1, 1));
        assert_eq!(puzzle.box_pos, Pos::new(1, 3));
        assert_eq!(puzzle.target, Pos::new(1, 4));

        assert!(puzzle.is_wall(Pos::new(0, 0)));
        assert!(puzzle.is_wall(Pos::new(2, 5)));
        assert!(!puzzle.is_wall(Pos::new(1, 2)));
        assert_eq!(puzzle.walls.len(), 14);
    }

    #[test]
    fn missing_marker() {
        let puzzle = "\
######
#T B #
######"
            .parse::<Puzzle>();
        assert_eq!(puzzle.unwrap_err(), PuzzleError::MissingMarker('@'));
    }

    #[test]
    fn duplicate_marker() {
        let puzzle = "\
#######
#TT B@#
#######"
            .parse::<Puzzle>();
        assert_eq!(puzzle.unwrap_err(), PuzzleError::DuplicateMarker('T'));
    }

    #[test]
    fn open_boundary_rejected() {
        let puzzle = "\
######
#T B@
######"
            .parse::<Puzzle>();
        assert_eq!(puzzle.unwrap_err(), PuzzleError::OpenBoundary);
    }

    #[test]
    fn manhattan_dist() {
        assert_eq!(Pos::new(1, 1).dist(Pos::new(4, 3)), 5);
        assert_eq!(Pos::new(4, 3).dist(Pos::new(1, 1)), 5);
        assert_eq!(Pos::new(2, 2).dist(Pos::new(2, 2)), 0);
    }

    #[test]
    fn direction_order_is_fixed() {
        assert_eq!(DIRECTIONS, [UP, DOWN, LEFT, RIGHT]);
        assert_eq!(Pos::new(1, 1) + UP, Pos { r: 0, c: 1 });
        assert_eq!(Pos::new(1, 1) - UP, Pos { r: 2, c: 1 });
    }
}
