// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs parses arguments and dispatches here.

pub mod nearest;
pub mod route;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use roadroute_lib::{load_road_graph, RoadGraph};

/// Environment variable consulted when `--graph` is omitted.
pub const GRAPH_ENV_VAR: &str = "ROADROUTE_GRAPH";

/// Pick the road network file from the flag or the environment.
pub fn resolve_graph_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    std::env::var_os(GRAPH_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .with_context(|| format!("no road network given; pass --graph or set {GRAPH_ENV_VAR}"))
}

/// Load the road network named on the command line.
pub fn load_graph(explicit: Option<&Path>) -> Result<RoadGraph> {
    let path = resolve_graph_path(explicit)?;
    load_road_graph(&path)
        .with_context(|| format!("failed to load road network from {}", path.display()))
}
