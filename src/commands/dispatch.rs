//! Command dispatch logic for waypath

use std::env;
use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::{graph_file, heapsort, labyrinth, show, traverse};
use waypath_core::config::EngineConfig;
use waypath_core::error::Result;
use waypath_core::graph::{GraphStore, NeighborView};
use waypath_core::trace_time;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: EngineConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: EngineConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// `--view` if given, else the configured view
    pub fn view(&self) -> NeighborView {
        self.cli.view.unwrap_or(self.config.graph.view)
    }

    pub fn load_graph(&self, path: &Path) -> Result<GraphStore<String>> {
        let graph = graph_file::load_graph(path, self.view())?;
        trace_time!(self.start, "load_graph", vertices = graph.vertex_count());
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("waypath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Graph traversal and shortest paths over JSON graphs and labyrinths.");
        println!();
        println!("Run `waypath --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Show(args) => show::execute(ctx, args),
            Commands::Bfs(args) => traverse::execute_bfs(ctx, args),
            Commands::Dfs(args) => traverse::execute_dfs(ctx, args),
            Commands::Dijkstra(args) => traverse::execute_dijkstra(ctx, args),
            Commands::Labyrinth(args) => labyrinth::execute(ctx, args),
            Commands::Heapsort(args) => heapsort::execute(ctx, args),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir()?;
    let config = EngineConfig::discover(cli.config.as_deref(), &cwd)?;

    debug!(elapsed = ?start.elapsed(), ?config, "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
