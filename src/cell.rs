use core::fmt;
use smallvec::SmallVec;

/// A position on a [MazeGrid](crate::maze_grid::MazeGrid), addressed by row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

/// The four cardinal moves. [Direction::ALL] fixes the order in which neighbours are generated,
/// which in turn fixes how ties are broken during search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    /// The cell one step away in `dir`, or [None] if that would leave the non-negative quadrant.
    /// Upper bounds are the grid's business.
    pub fn step(&self, dir: Direction) -> Option<Cell> {
        let (dr, dc) = dir.delta();
        Some(Cell::new(
            self.row.checked_add_signed(dr)?,
            self.col.checked_add_signed(dc)?,
        ))
    }

    /// Up to four candidate neighbours in [Direction::ALL] order, unfiltered by any grid.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Cell; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.step(dir))
            .collect()
    }

    pub fn manhattan_distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True if `other` is exactly one cardinal step away.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Cell {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
