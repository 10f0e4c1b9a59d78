//! JSON graph files
//!
//! ```json
//! {
//!   "directed": true,
//!   "weighted": true,
//!   "vertices": ["A", "B", "C"],
//!   "relations": [["A", "B", 1], ["B", "C", 2]]
//! }
//! ```
//!
//! `directed` defaults to true and `weighted` to false. Relations are
//! `[from, to]` or `[from, to, weight]`.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use waypath_core::error::{Result, WaypathError};
use waypath_core::graph::{GraphOptions, GraphStore, NeighborView, Relation, Weight};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphFile {
    #[serde(default = "default_directed")]
    directed: bool,
    #[serde(default)]
    weighted: bool,
    vertices: Vec<String>,
    #[serde(default)]
    relations: Vec<RelationEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RelationEntry {
    Weighted(String, String, Weight),
    Plain(String, String),
}

impl From<RelationEntry> for Relation<String> {
    fn from(entry: RelationEntry) -> Self {
        match entry {
            RelationEntry::Weighted(from, to, weight) => Relation::weighted(from, to, weight),
            RelationEntry::Plain(from, to) => Relation::new(from, to),
        }
    }
}

fn default_directed() -> bool {
    true
}

/// Read a graph file and build its store, reading neighbors through `view`
pub fn load_graph(path: &Path, view: NeighborView) -> Result<GraphStore<String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        WaypathError::Other(format!("failed to read graph file {}: {}", path.display(), e))
    })?;
    parse_graph(&content, view)
}

/// Parse graph JSON and build its store
pub fn parse_graph(content: &str, view: NeighborView) -> Result<GraphStore<String>> {
    let file: GraphFile = serde_json::from_str(content)?;
    debug!(
        vertices = file.vertices.len(),
        relations = file.relations.len(),
        "parsed graph file"
    );

    GraphStore::new(
        file.vertices,
        file.relations.into_iter().map(Relation::from),
        GraphOptions {
            directed: file.directed,
            weighted: file.weighted,
            view,
        },
    )
}
