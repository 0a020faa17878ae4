//! Search strategies behind a common trait.
//!
//! [`plan_route`](super::plan_route) asks [`select_planner`] for the strategy
//! named by the request and never matches on the algorithm itself.

use crate::error::Result;
use crate::graph::{NodeId, RoadGraph};
use crate::path::{find_path_with, PathResult, RouteAlgorithm, SearchOptions};

use super::RouteRequest;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Run the search between two resolved nodes.
    fn find_path(
        &self,
        graph: &RoadGraph,
        source: NodeId,
        destination: NodeId,
    ) -> Result<PathResult>;
}

/// Heuristic-guided search using great-circle distance to the destination.
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner {
    max_expansions: Option<usize>,
}

impl AStarPlanner {
    pub fn with_limit(max_expansions: Option<usize>) -> Self {
        Self { max_expansions }
    }
}

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(
        &self,
        graph: &RoadGraph,
        source: NodeId,
        destination: NodeId,
    ) -> Result<PathResult> {
        let options = SearchOptions {
            algorithm: RouteAlgorithm::AStar,
            max_expansions: self.max_expansions,
        };
        find_path_with(graph, source, destination, &options)
    }
}

/// Uninformed search; expands more nodes than A* but needs no coordinates.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner {
    max_expansions: Option<usize>,
}

impl DijkstraPlanner {
    pub fn with_limit(max_expansions: Option<usize>) -> Self {
        Self { max_expansions }
    }
}

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        graph: &RoadGraph,
        source: NodeId,
        destination: NodeId,
    ) -> Result<PathResult> {
        let options = SearchOptions {
            algorithm: RouteAlgorithm::Dijkstra,
            max_expansions: self.max_expansions,
        };
        find_path_with(graph, source, destination, &options)
    }
}

/// Select the appropriate planner for a given request.
pub fn select_planner(request: &RouteRequest) -> Box<dyn RoutePlanner> {
    let limit = request.options.max_expansions;
    match request.options.algorithm {
        RouteAlgorithm::AStar => Box::new(AStarPlanner::with_limit(limit)),
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner::with_limit(limit)),
    }
}
