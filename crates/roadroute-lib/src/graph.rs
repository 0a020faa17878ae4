use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::geo::Coordinate;

/// Numeric identifier for a road network node (OSM node ids are signed 64-bit).
pub type NodeId = i64;

/// Graph vertex with its position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub coordinate: Coordinate,
}

/// Directed road segment between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub length_meters: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, length_meters: f64, name: Option<String>) -> Self {
        Self {
            from,
            to,
            length_meters,
            name,
        }
    }
}

/// Read-only directed weighted road graph.
///
/// The storage sits behind `Arc`s so clones are cheap and a single graph can
/// serve concurrent searches from several threads.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    nodes: Arc<HashMap<NodeId, Node>>,
    adjacency: Arc<HashMap<NodeId, Vec<Edge>>>,
    edge_count: usize,
}

impl RoadGraph {
    /// Start building a graph.
    pub fn builder() -> RoadGraphBuilder {
        RoadGraphBuilder::default()
    }

    /// Return the outgoing edges of `node` in insertion order.
    ///
    /// Unknown nodes and dead ends both yield an empty slice.
    pub fn neighbours(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Cheapest edge from `from` to `to`; the first inserted one wins ties.
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<&Edge> {
        self.neighbours(from)
            .iter()
            .filter(|edge| edge.to == to)
            .fold(None, |best: Option<&Edge>, edge| match best {
                Some(current)
                    if edge.length_meters.total_cmp(&current.length_meters) != Ordering::Less =>
                {
                    Some(current)
                }
                _ => Some(edge),
            })
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn coordinate(&self, id: NodeId) -> Option<Coordinate> {
        self.nodes.get(&id).map(|node| node.coordinate)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Iterate over every node in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

/// Incremental constructor that validates graph invariants on [`build`](Self::build).
#[derive(Debug, Default)]
pub struct RoadGraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl RoadGraphBuilder {
    pub fn add_node(&mut self, id: NodeId, coordinate: Coordinate) -> &mut Self {
        self.nodes.push(Node { id, coordinate });
        self
    }

    pub fn add_edge(&mut self, edge: Edge) -> &mut Self {
        self.edges.push(edge);
        self
    }

    /// Add a road segment; two-way roads produce one edge per direction.
    pub fn add_road(
        &mut self,
        from: NodeId,
        to: NodeId,
        length_meters: f64,
        name: Option<String>,
        oneway: bool,
    ) -> &mut Self {
        self.edges
            .push(Edge::new(from, to, length_meters, name.clone()));
        if !oneway {
            self.edges.push(Edge::new(to, from, length_meters, name));
        }
        self
    }

    /// Validate and freeze the graph.
    pub fn build(self) -> Result<RoadGraph> {
        let mut nodes: HashMap<NodeId, Node> = HashMap::with_capacity(self.nodes.len());
        for node in self.nodes {
            if !node.coordinate.is_valid() {
                return Err(Error::invalid_graph(format!(
                    "node {} has an invalid coordinate {}",
                    node.id, node.coordinate
                )));
            }
            if nodes.insert(node.id, node).is_some() {
                return Err(Error::invalid_graph(format!(
                    "duplicate node id {}",
                    node.id
                )));
            }
        }

        let edge_count = self.edges.len();
        let mut adjacency: HashMap<NodeId, Vec<Edge>> = HashMap::with_capacity(nodes.len());
        for edge in self.edges {
            for endpoint in [edge.from, edge.to] {
                if !nodes.contains_key(&endpoint) {
                    return Err(Error::invalid_graph(format!(
                        "edge {} -> {} references unknown node {}",
                        edge.from, edge.to, endpoint
                    )));
                }
            }
            if !edge.length_meters.is_finite() || edge.length_meters < 0.0 {
                return Err(Error::invalid_graph(format!(
                    "edge {} -> {} has invalid length {}",
                    edge.from, edge.to, edge.length_meters
                )));
            }
            adjacency.entry(edge.from).or_default().push(edge);
        }

        Ok(RoadGraph {
            nodes: Arc::new(nodes),
            adjacency: Arc::new(adjacency),
            edge_count,
        })
    }
}
