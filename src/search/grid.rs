use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use strum_macros::EnumIter;

/// A single square of the grid, addressed as `(row, col)` with the origin in
/// the top-left corner. Rows grow downwards, columns grow to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: u16,
    pub col: u16,
}

impl Cell {
    pub fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to `other`, a lower bound on the number of moves
    /// between the two cells on any grid.
    pub fn manhattan_distance(&self, other: &Cell) -> u32 {
        let dr = u32::from(self.row.abs_diff(other.row));
        let dc = u32::from(self.col.abs_diff(other.col));
        dr + dc
    }
}

impl From<(u16, u16)> for Cell {
    fn from((row, col): (u16, u16)) -> Self {
        Self { row, col }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four movement directions. The declaration order UP, DOWN, LEFT, RIGHT
/// is load-bearing: action enumeration iterates directions in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
            Direction::Left => write!(f, "LEFT"),
            Direction::Right => write!(f, "RIGHT"),
        }
    }
}

/// The static board: extent plus the wall cells. Walls never change over the
/// lifetime of a problem, so the grid is shared read-only by task, successor
/// generation and heuristics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u16,
    cols: u16,
    walls: HashSet<Cell>,
}

impl Grid {
    pub fn new(rows: u16, cols: u16, walls: HashSet<Cell>) -> Self {
        Self { rows, cols, walls }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn in_bounds(&self, cell: &Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    pub fn is_wall(&self, cell: &Cell) -> bool {
        self.walls.contains(cell)
    }

    /// The neighbouring cell in `direction`, or [`None`] if that would leave
    /// the grid. Walls are not considered here, only the extent.
    pub fn step(&self, cell: &Cell, direction: Direction) -> Option<Cell> {
        let (row, col) = (cell.row, cell.col);
        let target = match direction {
            Direction::Up => Cell::new(row.checked_sub(1)?, col),
            Direction::Down => Cell::new(row + 1, col),
            Direction::Left => Cell::new(row, col.checked_sub(1)?),
            Direction::Right => Cell::new(row, col + 1),
        };
        if self.in_bounds(&target) {
            Some(target)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Cell::new(0, 2);
        let b = Cell::new(2, 0);
        assert_eq!(a.manhattan_distance(&b), 4);
        assert_eq!(b.manhattan_distance(&a), 4);
        assert_eq!(a.manhattan_distance(&a), 0);
    }

    #[test]
    fn step_respects_bounds() {
        let grid = Grid::new(3, 3, HashSet::new());
        assert_eq!(
            grid.step(&Cell::new(0, 0), Direction::Up),
            None,
            "stepping off the top edge"
        );
        assert_eq!(grid.step(&Cell::new(0, 0), Direction::Left), None);
        assert_eq!(
            grid.step(&Cell::new(0, 0), Direction::Down),
            Some(Cell::new(1, 0))
        );
        assert_eq!(
            grid.step(&Cell::new(2, 2), Direction::Right),
            None,
            "stepping off the right edge"
        );
    }

    #[test]
    fn step_ignores_walls() {
        let walls = HashSet::from([Cell::new(1, 1)]);
        let grid = Grid::new(3, 3, walls);
        // step only checks the extent, the transition function checks walls
        assert_eq!(
            grid.step(&Cell::new(0, 1), Direction::Down),
            Some(Cell::new(1, 1))
        );
        assert!(grid.is_wall(&Cell::new(1, 1)));
    }

    #[test]
    fn direction_order_matches_wire_syntax() {
        let rendered: Vec<String> = Direction::iter().map(|d| d.to_string()).collect();
        assert_eq!(rendered, vec!["UP", "DOWN", "LEFT", "RIGHT"]);
    }
}
