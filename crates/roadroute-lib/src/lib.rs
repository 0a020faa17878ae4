//! roadroute library entry points.
//!
//! This crate loads a road network into memory, runs A* over it, and turns
//! the resulting node sequence into turn-by-turn directions. Higher-level
//! consumers (the CLI, renderers) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod geo;
pub mod graph;
pub mod maneuver;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;
pub mod snap;

pub use error::{Error, Result};
pub use geo::{bearing, checked_bearing, distance, Coordinate, DegenerateBearing};
pub use graph::{Edge, Node, NodeId, RoadGraph, RoadGraphBuilder};
pub use maneuver::{classify, classify_turn, turn_angle, Instruction, Step, UNNAMED_ROAD};
pub use network::{load_road_graph, RoadNetwork};
pub use output::{RouteRenderMode, RouteSummary};
pub use path::{find_path, find_path_with, PathResult, RouteAlgorithm, SearchOptions};
pub use routing::{plan_route, Endpoint, RouteRequest};
pub use snap::{nearest_node, Snap};
