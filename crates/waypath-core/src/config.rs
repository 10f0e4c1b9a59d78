//! Engine configuration for waypath
//!
//! Configuration is read from a TOML file (`waypath.toml` by default).

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, WaypathError};
use crate::graph::grid::check_dimensions;

pub use types::{EngineConfig, GraphConfig, HeapConfig, LabyrinthConfig, CONFIG_FILE_NAME};

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load `path` if given, else `waypath.toml` in `dir` if it exists, else defaults
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WaypathError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.labyrinth.rows == 0 {
            crate::bail_invalid!("labyrinth.rows", self.labyrinth.rows);
        }
        if self.labyrinth.cols == 0 {
            crate::bail_invalid!("labyrinth.cols", self.labyrinth.cols);
        }
        check_dimensions(self.labyrinth.rows, self.labyrinth.cols)
    }
}
