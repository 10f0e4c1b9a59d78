//! Configuration type definitions

use crate::graph::NeighborView;
use crate::heap::{RepairStrategy, UpdateStrategy};
use serde::{Deserialize, Serialize};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "waypath.toml";

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Heap behavior used by priority queues
    #[serde(default)]
    pub heap: HeapConfig,

    /// Graph store behavior
    #[serde(default)]
    pub graph: GraphConfig,

    /// Defaults for the labyrinth command
    #[serde(default)]
    pub labyrinth: LabyrinthConfig,
}

/// Heap strategies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapConfig {
    /// How a queued element is replaced with a new value
    #[serde(default)]
    pub update: UpdateStrategy,

    /// How the heap property is restored after insert/delete
    #[serde(default)]
    pub repair: RepairStrategy,
}

/// Graph store options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Neighbor view used by traversals
    #[serde(default)]
    pub view: NeighborView,
}

/// Labyrinth generation defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabyrinthConfig {
    #[serde(default = "default_rows")]
    pub rows: usize,

    #[serde(default = "default_cols")]
    pub cols: usize,

    /// Largest value a cell may hold; 0 is a wall
    #[serde(default = "default_max_value")]
    pub max_value: u32,

    /// Value of the cell traversals start from
    #[serde(default = "default_target_value")]
    pub target_value: u32,
}

impl Default for LabyrinthConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            max_value: default_max_value(),
            target_value: default_target_value(),
        }
    }
}

fn default_rows() -> usize {
    5
}

fn default_cols() -> usize {
    5
}

fn default_max_value() -> u32 {
    6
}

fn default_target_value() -> u32 {
    6
}
