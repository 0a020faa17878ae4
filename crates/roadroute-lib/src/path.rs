use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::{distance, Coordinate};
use crate::graph::{NodeId, RoadGraph};

/// Supported search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// A* guided by great-circle distance to the destination.
    #[default]
    #[serde(rename = "a-star")]
    AStar,
    /// Uninformed search; same result as A*, more nodes expanded.
    Dijkstra,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::AStar => "a-star",
            RouteAlgorithm::Dijkstra => "dijkstra",
        };
        f.write_str(value)
    }
}

/// Knobs for a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub algorithm: RouteAlgorithm,
    /// Give up after expanding this many nodes.
    pub max_expansions: Option<usize>,
}

/// Ordered node sequence of a shortest path and its length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub nodes: Vec<NodeId>,
    pub total_distance_meters: f64,
}

impl PathResult {
    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn destination(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }
}

/// Find the shortest path from `source` to `destination` with A*.
pub fn find_path(graph: &RoadGraph, source: NodeId, destination: NodeId) -> Result<PathResult> {
    find_path_with(graph, source, destination, &SearchOptions::default())
}

/// Run a shortest-path search with explicit options.
///
/// Frontier entries are ordered by `f = g + h`, then by `h`, then by insertion
/// order, so identical inputs always produce the identical path. Nodes are
/// finalised when popped and never expanded twice.
pub fn find_path_with(
    graph: &RoadGraph,
    source: NodeId,
    destination: NodeId,
    options: &SearchOptions,
) -> Result<PathResult> {
    if !graph.contains(source) {
        return Err(Error::InvalidNode { node: source });
    }
    let goal = graph
        .coordinate(destination)
        .ok_or(Error::InvalidNode { node: destination })?;

    if source == destination {
        return Ok(PathResult {
            nodes: vec![source],
            total_distance_meters: 0.0,
        });
    }

    let heuristic = Heuristic {
        graph,
        goal,
        algorithm: options.algorithm,
    };

    let mut g_score: HashMap<NodeId, f64> = HashMap::new();
    let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
    let mut settled: HashSet<NodeId> = HashSet::new();
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;
    let mut expansions = 0usize;

    g_score.insert(source, 0.0);
    queue.push(FrontierEntry::new(
        source,
        0.0,
        heuristic.estimate(source),
        sequence,
    ));

    while let Some(entry) = queue.pop() {
        if settled.contains(&entry.node) {
            continue;
        }
        let current = match g_score.get(&entry.node) {
            Some(score) if entry.cost.0 > *score => continue,
            Some(score) => *score,
            None => continue,
        };

        if entry.node == destination {
            debug!(
                algorithm = %options.algorithm,
                source,
                destination,
                expansions,
                distance = current,
                "route found"
            );
            return Ok(PathResult {
                nodes: reconstruct_path(&parents, source, destination),
                total_distance_meters: current,
            });
        }

        if let Some(limit) = options.max_expansions {
            if expansions >= limit {
                debug!(limit, source, destination, "expansion budget exhausted");
                return Err(Error::SearchLimitExceeded { expansions });
            }
        }

        settled.insert(entry.node);
        expansions += 1;

        for edge in graph.neighbours(entry.node) {
            let next = edge.to;
            if settled.contains(&next) {
                continue;
            }

            let tentative = current + edge.length_meters;
            if tentative < *g_score.get(&next).unwrap_or(&f64::INFINITY) {
                g_score.insert(next, tentative);
                parents.insert(next, entry.node);
                sequence += 1;
                queue.push(FrontierEntry::new(
                    next,
                    tentative,
                    heuristic.estimate(next),
                    sequence,
                ));
            }
        }
    }

    debug!(
        algorithm = %options.algorithm,
        source,
        destination,
        expansions,
        "frontier exhausted"
    );
    Err(Error::NoRouteFound {
        start: source,
        goal: destination,
    })
}

struct Heuristic<'a> {
    graph: &'a RoadGraph,
    goal: Coordinate,
    algorithm: RouteAlgorithm,
}

impl Heuristic<'_> {
    fn estimate(&self, node: NodeId) -> f64 {
        match self.algorithm {
            RouteAlgorithm::Dijkstra => 0.0,
            RouteAlgorithm::AStar => self
                .graph
                .coordinate(node)
                .map(|coordinate| distance(coordinate, self.goal))
                .unwrap_or(0.0),
        }
    }
}

fn reconstruct_path(
    parents: &HashMap<NodeId, NodeId>,
    source: NodeId,
    destination: NodeId,
) -> Vec<NodeId> {
    let mut path = vec![destination];
    let mut current = destination;
    while current != source {
        match parents.get(&current) {
            Some(&parent) => {
                path.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct FrontierEntry {
    node: NodeId,
    cost: FloatOrd,
    heuristic: FloatOrd,
    estimate: FloatOrd,
    sequence: u64,
}

impl FrontierEntry {
    fn new(node: NodeId, cost: f64, heuristic: f64, sequence: u64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            heuristic: FloatOrd(heuristic),
            estimate: FloatOrd(cost + heuristic),
            sequence,
        }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap pops the lowest estimate first.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.heuristic.cmp(&self.heuristic))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
