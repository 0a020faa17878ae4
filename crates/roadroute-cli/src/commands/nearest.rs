//! Nearest command handler: snap a coordinate onto the road network.

use std::path::PathBuf;

use anyhow::{Context, Result};

use roadroute_cli::output::{render_nearest, NearestReport, OutputFormat};
use roadroute_cli::terminal::ColorPalette;
use roadroute_lib::{nearest_node, Coordinate, Error as RouteError};

use super::load_graph;

pub fn handle_nearest_command(
    graph: Option<PathBuf>,
    coordinate: Coordinate,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let graph = load_graph(graph.as_deref())?;
    let snap = nearest_node(&graph, coordinate).ok_or(RouteError::EmptyGraph)?;
    let node = graph
        .coordinate(snap.node)
        .ok_or(RouteError::InvalidNode { node: snap.node })?;

    let report = NearestReport::new(coordinate, snap, node);
    render_nearest(&report, format, palette).context("failed to write nearest-node output")
}
