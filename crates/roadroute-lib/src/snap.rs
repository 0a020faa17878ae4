//! Coordinate to node snapping.

use serde::Serialize;

use crate::geo::{distance, Coordinate};
use crate::graph::{NodeId, RoadGraph};

/// Result of snapping a coordinate onto the graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snap {
    pub node: NodeId,
    pub distance_meters: f64,
}

/// Find the node closest to `coordinate` by great-circle distance.
///
/// Equidistant candidates resolve to the lowest node id so the answer does not
/// depend on hash-map iteration order. Returns `None` for an empty graph.
pub fn nearest_node(graph: &RoadGraph, coordinate: Coordinate) -> Option<Snap> {
    graph
        .nodes()
        .map(|node| Snap {
            node: node.id,
            distance_meters: distance(coordinate, node.coordinate),
        })
        .min_by(|a, b| {
            a.distance_meters
                .total_cmp(&b.distance_meters)
                .then_with(|| a.node.cmp(&b.node))
        })
}
