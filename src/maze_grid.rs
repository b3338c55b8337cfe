use crate::cell::Cell;
use crate::config::MazeParams;
use crate::error::{GridError, MarkerRole};
use crate::PATH_MARKER;
use core::fmt;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::path::Path;
use std::str::FromStr;

/// [MazeGrid] holds the characters of a rectangular maze together with the resolved start and end
/// cells. It answers the structural queries a solver needs ([in_bounds](Self::in_bounds),
/// [passable](Self::passable), [neighbors](Self::neighbors)) and maintains a [UnionFind] over
/// 4-connected passable cells so that unreachable goals can be rejected without searching.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    rows: Vec<Vec<char>>,
    params: MazeParams,
    start: Cell,
    end: Cell,
    width: usize,
    height: usize,
    components: UnionFind<usize>,
}

impl MazeGrid {
    /// Parses a maze from text, one row per line. Only line terminators are stripped, trailing
    /// spaces are kept as cells. Blank lines at the very end of the text are ignored.
    ///
    /// If a marker occurs more than once, its first occurrence in row-major order is used.
    pub fn parse(text: &str, params: MazeParams) -> Result<MazeGrid, GridError> {
        let mut rows: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        if rows.is_empty() {
            return Err(GridError::Empty);
        }
        let width = rows[0].len();
        if let Some((row, found)) = rows
            .iter()
            .map(|r| r.len())
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GridError::MalformedGrid {
                row,
                expected: width,
                found,
            });
        }

        let mut start = None;
        let mut end = None;
        for (r, row) in rows.iter().enumerate() {
            for (c, &ch) in row.iter().enumerate() {
                if ch == params.begin {
                    start.get_or_insert(Cell::new(r, c));
                } else if ch == params.end {
                    end.get_or_insert(Cell::new(r, c));
                }
            }
        }
        let start = start.ok_or(GridError::MissingMarker {
            role: MarkerRole::Begin,
            marker: params.begin,
        })?;
        let end = end.ok_or(GridError::MissingMarker {
            role: MarkerRole::End,
            marker: params.end,
        })?;

        let height = rows.len();
        let mut grid = MazeGrid {
            rows,
            params,
            start,
            end,
            width,
            height,
            components: UnionFind::new(0),
        };
        grid.generate_components();
        info!(
            "Loaded {}x{} maze with start {} and end {}",
            grid.height, grid.width, grid.start, grid.end
        );
        Ok(grid)
    }

    /// Reads and parses a maze file.
    pub fn from_file<P: AsRef<Path>>(path: P, params: MazeParams) -> Result<MazeGrid, GridError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| GridError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, params)
    }

    pub fn start(&self) -> Cell {
        self.start
    }
    pub fn end(&self) -> Cell {
        self.end
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn params(&self) -> &MazeParams {
        &self.params
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// The character at `cell`, or [None] outside the grid.
    pub fn get(&self, cell: Cell) -> Option<char> {
        self.rows.get(cell.row)?.get(cell.col).copied()
    }

    /// Whether `cell` can be stood on. Cells outside the grid are never passable.
    pub fn passable(&self, cell: Cell) -> bool {
        self.get(cell).is_some_and(|ch| ch != self.params.wall)
    }

    /// In-bounds, passable cells one step away, in up, down, left, right order. Every call
    /// builds a fresh collection.
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        cell.neumann_neighborhood()
            .into_iter()
            .filter(|&n| self.in_bounds(n) && self.passable(n))
            .collect()
    }

    fn get_ix(&self, cell: Cell) -> usize {
        cell.row * self.width + cell.col
    }

    /// Generates a new [UnionFind] structure and links up passable neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.width * self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = Cell::new(row, col);
                if !self.passable(cell) {
                    continue;
                }
                let ix = self.get_ix(cell);
                // Linking down and right covers every edge exactly once.
                for n in [Cell::new(row + 1, col), Cell::new(row, col + 1)] {
                    if self.passable(n) {
                        components.union(ix, self.get_ix(n));
                    }
                }
            }
        }
        self.components = components;
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn get_component(&self, cell: Cell) -> usize {
        self.components.find(self.get_ix(cell))
    }

    /// Checks if `a` and `b` are passable and on the same component.
    pub fn reachable(&self, a: Cell, b: Cell) -> bool {
        self.passable(a)
            && self.passable(b)
            && self.components.equiv(self.get_ix(a), self.get_ix(b))
    }

    pub fn unreachable(&self, a: Cell, b: Cell) -> bool {
        !self.reachable(a, b)
    }

    /// Overwrites every cell of `path` with [PATH_MARKER], except the start and end cells.
    pub fn mark_path(&mut self, path: &[Cell]) {
        for &cell in path {
            if cell == self.start || cell == self.end || !self.in_bounds(cell) {
                continue;
            }
            self.rows[cell.row][cell.col] = PATH_MARKER;
        }
    }

    /// The current characters, one string per row.
    pub fn render(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.iter().collect()).collect()
    }
}

impl FromStr for MazeGrid {
    type Err = GridError;

    /// Parses with the default `B`/`E`/`#` markers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MazeGrid::parse(s, MazeParams::default())
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = "#####\n#B..#\n#.#.#\n#..E#\n#####\n";

    #[test]
    fn locates_markers() {
        let grid: MazeGrid = SIMPLE.parse().unwrap();
        assert_eq!(grid.start(), Cell::new(1, 1));
        assert_eq!(grid.end(), Cell::new(3, 3));
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.width(), 5);
    }

    #[test]
    fn first_marker_occurrence_wins() {
        let grid: MazeGrid = "B.B\nE.E\n".parse().unwrap();
        assert_eq!(grid.start(), Cell::new(0, 0));
        assert_eq!(grid.end(), Cell::new(1, 0));
    }

    #[test]
    fn missing_markers() {
        let err = "#.#\n#E#".parse::<MazeGrid>().unwrap_err();
        assert!(matches!(
            err,
            GridError::MissingMarker {
                role: MarkerRole::Begin,
                marker: 'B'
            }
        ));
        let err = "#.#\n#B#".parse::<MazeGrid>().unwrap_err();
        assert!(matches!(
            err,
            GridError::MissingMarker {
                role: MarkerRole::End,
                ..
            }
        ));
    }

    #[test]
    fn uneven_rows_are_rejected() {
        let err = "B..\n.\n..E".parse::<MazeGrid>().unwrap_err();
        assert!(matches!(
            err,
            GridError::MalformedGrid {
                row: 1,
                expected: 3,
                found: 1
            }
        ));
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!("".parse::<MazeGrid>(), Err(GridError::Empty)));
        assert!(matches!("\n\n".parse::<MazeGrid>(), Err(GridError::Empty)));
    }

    #[test]
    fn trailing_spaces_are_cells() {
        let grid: MazeGrid = "B  \n  E\r\n".parse().unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.get(Cell::new(0, 2)), Some(' '));
        assert!(grid.passable(Cell::new(0, 2)));
    }

    #[test]
    fn custom_markers() {
        let params = MazeParams::new('S', 'G', 'X');
        let grid = MazeGrid::parse("SX\n.G", params).unwrap();
        assert_eq!(grid.start(), Cell::new(0, 0));
        assert_eq!(grid.end(), Cell::new(1, 1));
        assert!(!grid.passable(Cell::new(0, 1)));
        // '#' is an ordinary passage under these parameters
        let grid = MazeGrid::parse("S#\n#G", params).unwrap();
        assert!(grid.passable(Cell::new(0, 1)));
    }

    #[test]
    fn bounds_and_passability() {
        let grid: MazeGrid = SIMPLE.parse().unwrap();
        assert!(grid.in_bounds(Cell::new(4, 4)));
        assert!(!grid.in_bounds(Cell::new(5, 0)));
        assert!(!grid.in_bounds(Cell::new(0, 5)));
        assert!(!grid.passable(Cell::new(0, 0)));
        assert!(!grid.passable(Cell::new(9, 9)));
        assert!(grid.passable(Cell::new(1, 1)));
        assert!(grid.passable(Cell::new(3, 3)));
    }

    #[test]
    fn neighbors_are_filtered_and_ordered() {
        let grid: MazeGrid = SIMPLE.parse().unwrap();
        assert_eq!(
            grid.neighbors(Cell::new(1, 1)).as_slice(),
            &[Cell::new(2, 1), Cell::new(1, 2)]
        );
        assert_eq!(
            grid.neighbors(Cell::new(2, 3)).as_slice(),
            &[Cell::new(1, 3), Cell::new(3, 3)]
        );
        // Restartable
        assert_eq!(grid.neighbors(Cell::new(1, 1)), grid.neighbors(Cell::new(1, 1)));
    }

    #[test]
    fn neighbors_at_grid_edge() {
        let grid: MazeGrid = "B.\n.E".parse().unwrap();
        assert_eq!(
            grid.neighbors(Cell::new(0, 0)).as_slice(),
            &[Cell::new(1, 0), Cell::new(0, 1)]
        );
        assert_eq!(
            grid.neighbors(Cell::new(1, 1)).as_slice(),
            &[Cell::new(0, 1), Cell::new(1, 0)]
        );
    }

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // B.#.
        // ..#E
        let grid: MazeGrid = "B.#.\n..#E".parse().unwrap();
        let start = grid.start();
        assert_eq!(
            grid.get_component(start),
            grid.get_component(Cell::new(1, 1))
        );
        assert_ne!(grid.get_component(start), grid.get_component(grid.end()));
        assert!(grid.unreachable(start, grid.end()));
        assert!(grid.reachable(grid.end(), Cell::new(0, 3)));
        assert!(grid.unreachable(start, Cell::new(0, 2)));
    }

    #[test]
    fn mark_path_skips_start_and_end() {
        let mut grid: MazeGrid = SIMPLE.parse().unwrap();
        let path = [
            Cell::new(1, 1),
            Cell::new(1, 2),
            Cell::new(1, 3),
            Cell::new(2, 3),
            Cell::new(3, 3),
        ];
        grid.mark_path(&path);
        assert_eq!(
            grid.render(),
            vec!["#####", "#BPP#", "#.#P#", "#..E#", "#####"]
        );
        assert_eq!(grid.to_string(), "#####\n#BPP#\n#.#P#\n#..E#\n#####\n");
    }

    #[test]
    fn mark_path_guards_start_and_end_mid_path() {
        let mut grid: MazeGrid = "B.E".parse().unwrap();
        let start = grid.start();
        let end = grid.end();
        grid.mark_path(&[Cell::new(0, 1), start, end, Cell::new(0, 1), Cell::new(7, 7)]);
        assert_eq!(grid.render(), vec!["BPE"]);
    }
}
