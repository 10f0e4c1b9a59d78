//! CLI commands for waypath

pub mod dispatch;
pub mod graph_file;
pub mod heapsort;
pub mod labyrinth;
pub mod show;
pub mod traverse;
