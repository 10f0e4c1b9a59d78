//! Waypath Core Library
//!
//! Graph store, handle-addressed binary heap and priority queue, and the
//! BFS/DFS/Dijkstra traversals built on them.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod heap;
pub mod logging;
pub mod queue;
