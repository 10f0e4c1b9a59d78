//! `waypath bfs|dfs|dijkstra` commands - run a traversal over a graph file
//!
//! Without `--target` every vertex is reported with its distance, parent and
//! path from the source. With `--target` only that path is printed, and an
//! unreached target fails with exit code 3.

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use crate::cli::{GraphArgs, TraversalArgs};
use crate::commands::dispatch::CommandContext;
use waypath_core::error::Result;
use waypath_core::format::OutputFormat;
use waypath_core::graph::PropertyTable;
use waypath_core::trace_time;

/// Execute the bfs command
pub fn execute_bfs(ctx: &CommandContext, args: &TraversalArgs) -> Result<()> {
    let graph = ctx.load_graph(&args.graph)?;
    let table = graph.bfs(&args.source)?;
    trace_time!(ctx.start, "bfs");
    report_single_source(ctx, "bfs", args, &table)
}

/// Execute the dijkstra command
pub fn execute_dijkstra(ctx: &CommandContext, args: &TraversalArgs) -> Result<()> {
    let graph = ctx.load_graph(&args.graph)?;
    let table = graph.dijkstra_with(&args.source, ctx.config.heap)?;
    trace_time!(ctx.start, "dijkstra");
    report_single_source(ctx, "dijkstra", args, &table)
}

/// Execute the dfs command
pub fn execute_dfs(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let graph = ctx.load_graph(&args.graph)?;
    let table = graph.dfs();
    trace_time!(ctx.start, "dfs");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "algorithm": "dfs",
                "vertices": table.records(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print_dfs_table(&table, |v| v.to_string()),
    }
    Ok(())
}

fn report_single_source(
    ctx: &CommandContext,
    algorithm: &str,
    args: &TraversalArgs,
    table: &PropertyTable<'_, String>,
) -> Result<()> {
    let Some(target) = &args.target else {
        return report_table(ctx, algorithm, &args.source, table, |v| v.to_string());
    };

    let path = table.path(target)?;
    let distance = table.distance(target);

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "algorithm": algorithm,
                "source": args.source,
                "target": target,
                "distance": distance,
                "path": path,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            let rendered: Vec<&str> = path.iter().map(|v| v.as_str()).collect();
            println!("{}", rendered.join(" -> "));
            if !ctx.cli.quiet {
                if let Some(distance) = distance {
                    println!("distance: {}", distance);
                }
            }
        }
    }
    Ok(())
}

/// Print every vertex of a single-source traversal
pub(crate) fn report_table<V, F>(
    ctx: &CommandContext,
    algorithm: &str,
    source: &V,
    table: &PropertyTable<'_, V>,
    render: F,
) -> Result<()>
where
    V: Clone + Eq + Hash + Debug + Serialize,
    F: Fn(&V) -> String,
{
    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "algorithm": algorithm,
                "source": source,
                "reached": table.reached(),
                "vertices": table.records(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "{} from {}: {} of {} vertices reached",
                    algorithm,
                    render(source),
                    table.reached(),
                    table.iter().count()
                );
            }
            for (vertex, props) in table.iter() {
                let path = match table.path(vertex) {
                    Ok(path) => path.into_iter().map(&render).collect::<Vec<_>>().join(" -> "),
                    Err(_) => "unreachable".to_string(),
                };
                println!(
                    "{}  distance={}  parent={}  path={}",
                    render(vertex),
                    props.distance,
                    parent_label(table, vertex, &render),
                    path
                );
            }
        }
    }
    Ok(())
}

/// Print discovery/finish times of a whole-graph DFS
pub(crate) fn print_dfs_table<V, F>(table: &PropertyTable<'_, V>, render: F)
where
    V: Clone + Eq + Hash + Debug,
    F: Fn(&V) -> String,
{
    for (vertex, props) in table.iter() {
        let finish = props
            .finish
            .map_or_else(|| "-".to_string(), |t| t.to_string());
        println!(
            "{}  discovered={}  finished={}  parent={}",
            render(vertex),
            props.distance,
            finish,
            parent_label(table, vertex, &render)
        );
    }
}

fn parent_label<V, F>(table: &PropertyTable<'_, V>, vertex: &V, render: &F) -> String
where
    V: Clone + Eq + Hash + Debug,
    F: Fn(&V) -> String,
{
    table
        .parent(vertex)
        .map_or_else(|| "-".to_string(), render)
}
