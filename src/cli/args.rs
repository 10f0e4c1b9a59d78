use std::path::PathBuf;

use clap::Args;

use super::parse::parse_order;
use waypath_core::heap::HeapOrder;

/// Arguments for commands that read a single graph file.
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Graph file (JSON)
    #[arg(long, short)]
    pub graph: PathBuf,
}

/// Arguments for single-source traversals.
#[derive(Args, Debug)]
pub struct TraversalArgs {
    /// Graph file (JSON)
    #[arg(long, short)]
    pub graph: PathBuf,

    /// Source vertex
    #[arg(long, short)]
    pub source: String,

    /// Only print the path to this vertex
    #[arg(long, short)]
    pub target: Option<String>,
}

/// Arguments for the labyrinth command. Unset values come from the config.
#[derive(Args, Debug)]
pub struct LabyrinthArgs {
    /// Number of rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of columns
    #[arg(long)]
    pub cols: Option<usize>,

    /// Largest cell value; cells are drawn uniformly from 0..=max, 0 is a wall
    #[arg(long)]
    pub max_value: Option<u32>,

    /// Value of the cell the traversals start from
    #[arg(long)]
    pub target_value: Option<u32>,

    /// Seed for a reproducible labyrinth
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the heapsort command.
#[derive(Args, Debug)]
pub struct HeapsortArgs {
    /// max sorts descending, min ascending
    #[arg(long, value_parser = parse_order, default_value = "max")]
    pub order: HeapOrder,

    /// Values to sort
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<i64>,
}
