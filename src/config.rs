//! Maze parameters and the YAML file that maps maze names to them.
use crate::error::ConfigError;
use log::info;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Default location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/astar_config.yaml";

fn default_passage() -> char {
    '.'
}

/// The characters that give meaning to a maze file. Any cell that is not `wall` is passable,
/// so `passage` is informational.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct MazeParams {
    pub begin: char,
    pub end: char,
    pub wall: char,
    #[serde(default = "default_passage")]
    pub passage: char,
}

impl MazeParams {
    pub fn new(begin: char, end: char, wall: char) -> MazeParams {
        MazeParams {
            begin,
            end,
            wall,
            passage: default_passage(),
        }
    }
}

impl Default for MazeParams {
    fn default() -> MazeParams {
        MazeParams::new('B', 'E', '#')
    }
}

/// Maps maze names (file stems) to their [MazeParams].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MazeConfig {
    mazes: BTreeMap<String, MazeParams>,
}

impl MazeConfig {
    pub fn from_yaml(yaml: &str) -> Result<MazeConfig, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: &Path) -> Result<MazeConfig, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&contents)?;
        info!(
            "Loaded {} maze configuration(s) from {}",
            config.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn get(&self, key: &str) -> Option<&MazeParams> {
        self.mazes.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, params: MazeParams) {
        self.mazes.insert(key.into(), params);
    }

    pub fn len(&self) -> usize {
        self.mazes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mazes.is_empty()
    }

    /// Looks up the parameters for a maze file by its stem, so `mazes/maze1.txt` uses the
    /// `maze1` entry.
    pub fn params_for_maze(&self, maze_path: &Path) -> Result<MazeParams, ConfigError> {
        let key = maze_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.get(&key)
            .copied()
            .ok_or(ConfigError::MissingEntry { key })
    }
}
