//! `waypath labyrinth` command - random grid to graph, then BFS and DFS
//!
//! The grid is filled uniformly from `0..=max_value` (0 is a wall). BFS runs
//! from the first cell, in row-major order, holding `target_value`.

use rand::prelude::*;
use tracing::debug;

use crate::cli::LabyrinthArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::traverse::{print_dfs_table, report_table};
use waypath_core::{bail_invalid, bail_usage};
use waypath_core::config::LabyrinthConfig;
use waypath_core::error::Result;
use waypath_core::format::OutputFormat;
use waypath_core::graph::grid::{check_dimensions, WALL};
use waypath_core::graph::{Cell, Labyrinth};
use waypath_core::trace_time;

/// Execute the labyrinth command
pub fn execute(ctx: &CommandContext, args: &LabyrinthArgs) -> Result<()> {
    let settings = resolve_settings(&ctx.config.labyrinth, args)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let labyrinth = Labyrinth::generate(settings.rows, settings.cols, |_, _| {
        rng.gen_range(0..=settings.max_value)
    })?;
    debug!(
        rows = settings.rows,
        cols = settings.cols,
        seed = ?args.seed,
        "generated labyrinth"
    );

    let graph = labyrinth.to_graph_with_view(ctx.view())?;
    let start = labyrinth.find(settings.target_value);
    trace_time!(ctx.start, "labyrinth_graph", vertices = graph.vertex_count());

    match ctx.cli.format {
        OutputFormat::Json => {
            let bfs = start.map(|cell| graph.bfs(&cell)).transpose()?;
            let dfs = start.map(|_| graph.dfs());
            let output = serde_json::json!({
                "labyrinth": labyrinth.to_rows(),
                "target_value": settings.target_value,
                "start": start,
                "bfs": bfs.map(|table| table.records()),
                "dfs": dfs.map(|table| table.records()),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Generated labyrinth:");
            for row in labyrinth.to_rows() {
                let cells: Vec<String> = row.iter().map(u32::to_string).collect();
                println!("{}", cells.join(" "));
            }
            println!();

            let Some(cell) = start else {
                println!("No open cell holds {}", settings.target_value);
                return Ok(());
            };

            let bfs = graph.bfs(&cell)?;
            report_table(ctx, "bfs", &cell, &bfs, render_cell)?;
            println!();
            println!("dfs:");
            print_dfs_table(&graph.dfs(), render_cell);
        }
    }

    Ok(())
}

fn render_cell(&(row, col): &Cell) -> String {
    format!("({}, {})", row, col)
}

/// Command-line values over configured defaults
fn resolve_settings(config: &LabyrinthConfig, args: &LabyrinthArgs) -> Result<LabyrinthConfig> {
    let settings = LabyrinthConfig {
        rows: args.rows.unwrap_or(config.rows),
        cols: args.cols.unwrap_or(config.cols),
        max_value: args.max_value.unwrap_or(config.max_value),
        target_value: args.target_value.unwrap_or(config.target_value),
    };
    if settings.rows == 0 {
        bail_invalid!("--rows", settings.rows);
    }
    if settings.cols == 0 {
        bail_invalid!("--cols", settings.cols);
    }
    check_dimensions(settings.rows, settings.cols)?;
    if settings.target_value == WALL {
        bail_usage!("--target-value 0 marks walls and can never be a start cell");
    }
    Ok(settings)
}
