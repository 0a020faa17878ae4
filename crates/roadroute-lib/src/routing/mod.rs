//! Route planning on top of the search primitives.
//!
//! This module provides:
//! - [`Endpoint`] - A route endpoint given as a node id or a raw coordinate
//! - [`RouteRequest`] - High-level route planning request
//! - [`plan_route`] - Main entry point: resolve endpoints, search, summarise
//!
//! # Strategy Pattern
//!
//! Each search strategy is wrapped in a [`RoutePlanner`] so the orchestration in
//! [`plan_route`] stays the same whichever algorithm the request names.
//!
//! # Example
//!
//! ```ignore
//! use roadroute_lib::{load_road_graph, plan_route, Coordinate, RouteRequest};
//!
//! let graph = load_road_graph("docs/fixtures/small_town.json".as_ref())?;
//! let request = RouteRequest::new(Coordinate::new(28.2096, 83.9856), 1005);
//! let summary = plan_route(&graph, &request)?;
//! println!("{} steps", summary.steps.len());
//! ```

mod planner;

pub use planner::{select_planner, AStarPlanner, DijkstraPlanner, RoutePlanner};

use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::graph::{NodeId, RoadGraph};
use crate::output::RouteSummary;
use crate::path::{RouteAlgorithm, SearchOptions};
use crate::snap::nearest_node;

/// Where a route starts or ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Endpoint {
    /// A node that must exist in the graph.
    Node(NodeId),
    /// A position snapped to the nearest node before searching.
    Coordinate(Coordinate),
}

impl From<NodeId> for Endpoint {
    fn from(node: NodeId) -> Self {
        Endpoint::Node(node)
    }
}

impl From<Coordinate> for Endpoint {
    fn from(coordinate: Coordinate) -> Self {
        Endpoint::Coordinate(coordinate)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub source: Endpoint,
    pub destination: Endpoint,
    pub options: SearchOptions,
}

impl RouteRequest {
    /// Request with default search options (A*, no expansion budget).
    pub fn new(source: impl Into<Endpoint>, destination: impl Into<Endpoint>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            options: SearchOptions::default(),
        }
    }

    /// Convenience constructor for node-to-node routes.
    pub fn between_nodes(source: NodeId, destination: NodeId) -> Self {
        Self::new(source, destination)
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.options.algorithm = algorithm;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.options.max_expansions = Some(limit);
        self
    }
}

/// Plan a route and turn it into directions.
///
/// Coordinate endpoints are snapped to their nearest node first. A coordinate
/// that is not finite or lies outside latitude/longitude range fails with
/// [`Error::InvalidCoordinate`]; snapping fails with [`Error::EmptyGraph`] when
/// there is nothing to snap to.
pub fn plan_route(graph: &RoadGraph, request: &RouteRequest) -> Result<RouteSummary> {
    let source = resolve_endpoint(graph, request.source)?;
    let destination = resolve_endpoint(graph, request.destination)?;

    let planner = select_planner(request);
    debug!(
        algorithm = %planner.algorithm(),
        source,
        destination,
        "planning route"
    );
    let path = planner.find_path(graph, source, destination)?;

    RouteSummary::from_path(graph, path)
}

fn resolve_endpoint(graph: &RoadGraph, endpoint: Endpoint) -> Result<NodeId> {
    match endpoint {
        Endpoint::Node(node) => Ok(node),
        Endpoint::Coordinate(coordinate) => {
            if !coordinate.is_valid() {
                return Err(Error::InvalidCoordinate { coordinate });
            }
            let snap = nearest_node(graph, coordinate).ok_or(Error::EmptyGraph)?;
            debug!(
                %coordinate,
                node = snap.node,
                distance = snap.distance_meters,
                "snapped coordinate to nearest node"
            );
            Ok(snap.node)
        }
    }
}
