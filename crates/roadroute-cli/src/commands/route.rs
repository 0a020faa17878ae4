//! Route command handler for computing directions between two points.

use std::path::PathBuf;

use anyhow::{Context, Result};

use roadroute_cli::output::{render_route, OutputFormat};
use roadroute_cli::terminal::ColorPalette;
use roadroute_lib::{plan_route, Endpoint, RouteAlgorithm, RouteRequest, SearchOptions};

use super::load_graph;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Road network file; falls back to the environment when absent.
    pub graph: Option<PathBuf>,
    pub from: Endpoint,
    pub to: Endpoint,
    pub algorithm: RouteAlgorithm,
    pub max_expansions: Option<usize>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest {
            source: self.from,
            destination: self.to,
            options: SearchOptions {
                algorithm: self.algorithm,
                max_expansions: self.max_expansions,
            },
        }
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    args: &RouteCommandArgs,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let graph = load_graph(args.graph.as_deref())?;
    let request = args.to_request();

    let summary = plan_route(&graph, &request).with_context(|| {
        format!(
            "failed to plan a route from {} to {}",
            describe(&request.source),
            describe(&request.destination)
        )
    })?;

    render_route(&summary, format, palette).context("failed to write route output")
}

fn describe(endpoint: &Endpoint) -> String {
    match endpoint {
        Endpoint::Node(node) => format!("node {node}"),
        Endpoint::Coordinate(coordinate) => coordinate.to_string(),
    }
}
