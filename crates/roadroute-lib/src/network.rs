//! Road network documents on disk.
//!
//! A network file is the JSON form of whatever the graph provider exported:
//! a node list with coordinates and a list of road segments. Segment length
//! may be omitted (the great-circle distance between the endpoints is used)
//! and names may be a single string or the list OSM produces when several
//! ways were merged into one segment.

use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::geo::{distance, Coordinate};
use crate::graph::{NodeId, RoadGraph};

/// Serialized road network.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadNetwork {
    pub nodes: Vec<NetworkNode>,
    #[serde(default)]
    pub edges: Vec<NetworkEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: NodeId,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<StreetName>,
    #[serde(default = "default_oneway")]
    pub oneway: bool,
}

/// Street name as exported by OSM tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StreetName {
    Single(String),
    Merged(Vec<String>),
}

impl StreetName {
    /// Collapse to a single display name; blank names count as missing.
    fn into_label(self) -> Option<String> {
        let label = match self {
            StreetName::Single(name) => name.trim().to_string(),
            StreetName::Merged(names) => names
                .iter()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        };
        (!label.is_empty()).then_some(label)
    }
}

fn default_oneway() -> bool {
    true
}

impl RoadNetwork {
    /// Parse a network from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a network from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Build a validated [`RoadGraph`] from this document.
    pub fn into_graph(self) -> Result<RoadGraph> {
        let mut builder = RoadGraph::builder();
        let mut coordinates = HashMap::with_capacity(self.nodes.len());

        for node in &self.nodes {
            let coordinate = Coordinate::new(node.lat, node.lon);
            coordinates.insert(node.id, coordinate);
            builder.add_node(node.id, coordinate);
        }

        let mut derived_lengths = 0usize;
        for edge in self.edges {
            let length = match edge.length {
                Some(length) => length,
                None => {
                    let (Some(from), Some(to)) =
                        (coordinates.get(&edge.from), coordinates.get(&edge.to))
                    else {
                        return Err(Error::invalid_graph(format!(
                            "edge {} -> {} references an unknown node",
                            edge.from, edge.to
                        )));
                    };
                    derived_lengths += 1;
                    distance(*from, *to)
                }
            };
            let name = edge.name.and_then(StreetName::into_label);
            builder.add_road(edge.from, edge.to, length, name, edge.oneway);
        }

        if derived_lengths > 0 {
            debug!(derived_lengths, "filled missing edge lengths from node coordinates");
        }

        builder.build()
    }
}

/// Load and validate a road graph from a JSON network file.
pub fn load_road_graph(path: &Path) -> Result<RoadGraph> {
    debug!(path = %path.display(), "loading road network");
    let file = fs::File::open(path)?;
    let network = RoadNetwork::from_reader(BufReader::new(file))?;
    let graph = network.into_graph()?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded road network"
    );
    Ok(graph)
}
