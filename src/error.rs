use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the two required markers a [GridError::MissingMarker] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerRole {
    Begin,
    End,
}

impl std::fmt::Display for MarkerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkerRole::Begin => write!(f, "begin"),
            MarkerRole::End => write!(f, "end"),
        }
    }
}

/// Failures while building a [MazeGrid](crate::maze_grid::MazeGrid). All of these are detected
/// while parsing, never during search.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("Maze must contain a {role} marker '{marker}'")]
    MissingMarker { role: MarkerRole, marker: char },

    #[error("Row {row} has {found} column(s), expected {expected}")]
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Maze has no rows")]
    Empty,

    #[error("Failed to read maze file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("No configuration for '{key}'")]
    MissingEntry { key: String },
}
