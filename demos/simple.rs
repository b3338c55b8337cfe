use maze_pathfinding::{AstarSolver, GridSolver, MazeGrid};

// In this example a path is found on a maze with shape
// #####
// #B  #
// # # #
// #  E#
// #####
// B marks the start
// E marks the end
fn main() {
    let mut grid: MazeGrid = "#####\n#B  #\n# # #\n#  E#\n#####".parse().unwrap();
    if let Some(path) = AstarSolver::new().get_path(&grid) {
        println!("A path has been found:");
        for p in &path {
            println!("{p}");
        }
        grid.mark_path(&path);
        print!("{grid}");
    }
}
