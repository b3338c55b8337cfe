use smallvec::SmallVec;

use crate::{cell::Cell, maze_grid::MazeGrid, solver::GridSolver, STEP_COST};

/// A* over the 4-connected maze with the Manhattan distance as heuristic. The heuristic is
/// consistent for unit cardinal steps, so the first time the goal is popped its path is a
/// shortest one.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver;

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver
    }
}

impl GridSolver for AstarSolver {
    type Successors = SmallVec<[(Cell, usize); 4]>;

    fn successors(&self, grid: &MazeGrid, node: &Cell) -> Self::Successors {
        grid.neighbors(*node)
            .into_iter()
            .map(|n| (n, STEP_COST))
            .collect()
    }

    fn heuristic(&self, p1: &Cell, p2: &Cell) -> usize {
        self.cost(p1, p2)
    }
}
