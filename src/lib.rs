//! # maze_pathfinding
//!
//! Shortest paths through character mazes. A maze is a rectangular block of text in which one
//! character marks the start, one marks the end and one marks walls; everything else is
//! walkable. Paths are found with [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over
//! the 4-connected grid using the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic. Ties in
//! the open set are broken by insertion order, so a given maze always yields the same path.
//! [Connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) are
//! pre-computed to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use maze_pathfinding::{AstarSolver, GridSolver, MazeGrid};
//!
//! let mut grid: MazeGrid = "#####\n#B..#\n#.#.#\n#..E#\n#####".parse().unwrap();
//! let path = AstarSolver::new().get_path(&grid).unwrap();
//! assert_eq!(path.len() - 1, 4);
//! grid.mark_path(&path);
//! assert_eq!(grid.render()[3], "#PPE#");
//! ```
pub mod astar;
pub mod cell;
pub mod config;
pub mod error;
pub mod maze_grid;
pub mod solver;

pub use cell::{Cell, Direction};
pub use config::{MazeConfig, MazeParams};
pub use error::{ConfigError, GridError, MarkerRole};
pub use maze_grid::MazeGrid;
pub use solver::{astar::AstarSolver, dijkstra::DijkstraSolver, is_valid_path, GridSolver};

/// Character written over the interior cells of a path by [MazeGrid::mark_path].
pub const PATH_MARKER: char = 'P';
/// Cost of a single cardinal move.
pub const STEP_COST: usize = 1;

/// Cells from start to end, both inclusive.
pub type Path = Vec<Cell>;
