//! CLI argument parsing for waypath
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config, --view

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{GraphArgs, HeapsortArgs, LabyrinthArgs, TraversalArgs};
use parse::{parse_format, parse_view};
use waypath_core::format::OutputFormat;
use waypath_core::graph::NeighborView;

/// Waypath - graph traversal and shortest-path CLI
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, waypath_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./waypath.toml when present)
    #[arg(long, global = true, env = "WAYPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Neighbor view used by traversals (list, matrix); overrides the config
    #[arg(long, global = true, value_parser = parse_view)]
    pub view: Option<NeighborView>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the adjacency matrix and adjacency list of a graph
    Show(GraphArgs),

    /// Breadth-first search from a source vertex
    Bfs(TraversalArgs),

    /// Depth-first search over the whole graph
    Dfs(GraphArgs),

    /// Weighted shortest paths from a source vertex
    Dijkstra(TraversalArgs),

    /// Generate a random labyrinth and traverse it from a target cell
    Labyrinth(LabyrinthArgs),

    /// Sort integers through the binary heap
    Heapsort(HeapsortArgs),
}
