use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use maze_pathfinding::config::DEFAULT_CONFIG_PATH;
use maze_pathfinding::{AstarSolver, GridSolver, MazeConfig, MazeGrid};
use std::path::PathBuf;
use std::process::ExitCode;

/// Solve a maze using A* search.
#[derive(Debug, Parser)]
#[command(version, about)]
struct CLIArgs {
    /// Path to the maze text file
    maze_file: PathBuf,

    /// Path to the YAML config file for maze parameters
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log search progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = CLIArgs::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config = MazeConfig::from_yaml_file(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;
    let params = config
        .params_for_maze(&args.maze_file)
        .with_context(|| format!("Unusable config file {}", args.config.display()))?;
    let mut grid = MazeGrid::from_file(&args.maze_file, params).with_context(|| {
        format!(
            "Failed to read maze from given file({}).",
            args.maze_file.display()
        )
    })?;

    let Some(path) = AstarSolver::new().get_path(&grid) else {
        eprintln!("No path found from start to end.");
        return Ok(ExitCode::FAILURE);
    };

    println!("Found path of length {} steps.", path.len() - 1);
    grid.mark_path(&path);
    print!("{grid}");
    Ok(ExitCode::SUCCESS)
}
