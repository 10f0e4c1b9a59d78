//! Graph algorithm implementations
//!
//! - `bfs`: Breadth-first search from a source
//! - `dfs`: Whole-graph depth-first search with discovery/finish times
//! - `dijkstra`: Single-source shortest paths over a handle-addressed min-queue
//! - `path`: Path reconstruction from parent pointers

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod path;

pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use path::reconstruct_path;
