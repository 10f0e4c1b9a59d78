//! Graph storage and traversal
//!
//! Provides the immutable vertex/relation store and the algorithms over it:
//! - Vertex encoding and the two adjacency views (list and matrix)
//! - BFS, whole-graph DFS and Dijkstra producing per-vertex property tables
//! - Grid labyrinths converted into graphs
//! - Graph provider trait for pluggable data sources

pub mod algos;
pub mod encoding;
pub mod grid;
pub mod matrix;
pub mod props;
pub mod provider;
pub mod store;
pub mod types;

pub use algos::{bfs, dfs, dijkstra, reconstruct_path};
pub use encoding::VertexEncoding;
pub use grid::{Cell, Labyrinth};
pub use matrix::AdjacencyMatrix;
pub use props::{Color, PropertyTable, VertexProps, VertexRecord};
pub use provider::GraphProvider;
pub use store::GraphStore;
pub use types::{
    Distance, GraphOptions, Neighbor, NeighborView, Relation, Weight, UNIT_WEIGHT,
};
