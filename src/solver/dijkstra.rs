use smallvec::SmallVec;

use crate::{cell::Cell, maze_grid::MazeGrid, solver::GridSolver, STEP_COST};

/// Uniform-cost search: the same expansion as [AstarSolver](super::astar::AstarSolver) without
/// a heuristic. Finds paths of the same length and serves as a reference.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Successors = SmallVec<[(Cell, usize); 4]>;

    fn successors(&self, grid: &MazeGrid, node: &Cell) -> Self::Successors {
        grid.neighbors(*node)
            .into_iter()
            .map(|n| (n, STEP_COST))
            .collect()
    }

    fn heuristic(&self, _: &Cell, _: &Cell) -> usize {
        0
    }
}
