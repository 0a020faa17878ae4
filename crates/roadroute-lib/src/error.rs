use thiserror::Error;

use crate::geo::Coordinate;
use crate::graph::NodeId;

/// Convenient result alias for the roadroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised before searching when an endpoint is not part of the graph.
    #[error("node {node} is not present in the road graph")]
    InvalidNode { node: NodeId },

    /// Raised when the frontier is exhausted without reaching the destination.
    #[error("no route found between {start} and {goal}")]
    NoRouteFound { start: NodeId, goal: NodeId },

    /// Raised when a caller-imposed expansion budget runs out.
    #[error("search gave up after expanding {expansions} nodes")]
    SearchLimitExceeded { expansions: usize },

    /// Raised when a road graph violates one of its construction invariants.
    #[error("invalid road graph: {message}")]
    InvalidGraph { message: String },

    /// Raised when a query coordinate is not a finite latitude/longitude pair.
    #[error("coordinate {coordinate} is outside the valid latitude/longitude range")]
    InvalidCoordinate { coordinate: Coordinate },

    /// Raised when a coordinate needs snapping but the graph has no nodes.
    #[error("road graph has no nodes to snap to")]
    EmptyGraph,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_graph(message: impl Into<String>) -> Self {
        Error::InvalidGraph {
            message: message.into(),
        }
    }
}
