//! `waypath show` command - print both adjacency views of a graph

use crate::cli::GraphArgs;
use crate::commands::dispatch::CommandContext;
use waypath_core::error::Result;
use waypath_core::format::OutputFormat;
use waypath_core::graph::GraphStore;

/// Execute the show command
pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let graph = ctx.load_graph(&args.graph)?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let adjacency: Vec<serde_json::Value> = graph
                .adjacency_list()
                .into_iter()
                .map(|(vertex, neighbors)| {
                    serde_json::json!({
                        "vertex": vertex,
                        "neighbors": neighbors,
                    })
                })
                .collect();

            let output = serde_json::json!({
                "directed": graph.is_directed(),
                "weighted": graph.is_weighted(),
                "vertices": graph.vertices(),
                "matrix": graph.adjacency_matrix().to_rows(),
                "adjacency": adjacency,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            print_matrix(&graph);
            println!();
            print_adjacency_list(&graph);
        }
    }

    Ok(())
}

fn print_matrix(graph: &GraphStore<String>) {
    let width = graph
        .vertices()
        .iter()
        .map(String::len)
        .chain(
            graph
                .adjacency_matrix()
                .to_rows()
                .iter()
                .flatten()
                .map(|w| w.to_string().len()),
        )
        .max()
        .unwrap_or(1);

    println!("Adjacency matrix:");
    let header: Vec<String> = graph
        .vertices()
        .iter()
        .map(|v| format!("{:>width$}", v, width = width))
        .collect();
    println!("{:width$}  {}", "", header.join(" "), width = width);

    for (vertex, row) in graph
        .vertices()
        .iter()
        .zip(graph.adjacency_matrix().to_rows())
    {
        let cells: Vec<String> = row
            .iter()
            .map(|w| format!("{:>width$}", w, width = width))
            .collect();
        println!("{:<width$}  {}", vertex, cells.join(" "), width = width);
    }
}

fn print_adjacency_list(graph: &GraphStore<String>) {
    println!("Adjacency list:");
    for (vertex, neighbors) in graph.adjacency_list() {
        let rendered: Vec<String> = neighbors
            .iter()
            .map(|n| {
                if graph.is_weighted() {
                    format!("{} ({})", n.vertex, n.weight)
                } else {
                    n.vertex.to_string()
                }
            })
            .collect();
        if rendered.is_empty() {
            println!("{} ->", vertex);
        } else {
            println!("{} -> {}", vertex, rendered.join(", "));
        }
    }
}
