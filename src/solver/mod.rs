use crate::{cell::Cell, maze_grid::MazeGrid, Path, STEP_COST};
use log::{info, warn};

pub mod astar;
pub mod dijkstra;

/// Checks that `path` runs from the grid's start to its end through in-bounds, passable cells,
/// each one cardinal step from the last.
pub fn is_valid_path(grid: &MazeGrid, path: &[Cell]) -> bool {
    match (path.first(), path.last()) {
        (Some(&first), Some(&last)) => {
            first == grid.start()
                && last == grid.end()
                && path.iter().all(|&c| grid.in_bounds(c) && grid.passable(c))
                && path.windows(2).all(|w| w[0].is_adjacent(&w[1]))
        }
        _ => false,
    }
}

pub trait GridSolver {
    type Successors: IntoIterator<Item = (Cell, usize)>;

    /// Estimated remaining cost from `p1` to `p2`. Must not overestimate for paths to be optimal.
    fn heuristic(&self, p1: &Cell, p2: &Cell) -> usize;

    fn successors(&self, grid: &MazeGrid, node: &Cell) -> Self::Successors;

    /// Every move is a single cardinal step of cost [STEP_COST].
    fn cost(&self, p1: &Cell, p2: &Cell) -> usize {
        p1.manhattan_distance(p2) * STEP_COST
    }

    fn get_path_cost(&self, path: &[Cell]) -> usize {
        path.windows(2).map(|w| self.cost(&w[0], &w[1])).sum()
    }

    /// Computes a path from the grid's start to its end. [None] means the end cannot be reached,
    /// which is an ordinary outcome rather than an error.
    fn get_path(&self, grid: &MazeGrid) -> Option<Path> {
        self.get_path_single_goal(grid, grid.start(), grid.end())
    }

    fn get_path_single_goal(&self, grid: &MazeGrid, start: Cell, goal: Cell) -> Option<Path> {
        // Check if start and goal are on the same connected component.
        if grid.unreachable(start, goal) {
            info!("{} is not reachable from {}", goal, start);
            return None;
        }
        info!("{} is reachable from {}, computing path", goal, start);
        let result = crate::astar::astar(
            &start,
            |node| self.successors(grid, node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        )
        .map(|(v, _c)| v);
        if result.is_none() {
            warn!("Reachable goal could not be pathed to, is reachable graph correct?");
        }
        result
    }
}
