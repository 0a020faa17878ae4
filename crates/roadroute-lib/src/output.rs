use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::graph::{NodeId, RoadGraph};
use crate::maneuver::{classify, Step};
use crate::path::PathResult;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub path: PathResult,
    pub steps: Vec<Step>,
    pub coordinates: Vec<Coordinate>,
}

impl RouteSummary {
    /// Classify `path` and attach the coordinate of every node.
    pub fn from_path(graph: &RoadGraph, path: PathResult) -> Result<Self> {
        let coordinates = path
            .nodes
            .iter()
            .map(|&node| {
                graph
                    .coordinate(node)
                    .ok_or(Error::InvalidNode { node })
            })
            .collect::<Result<Vec<_>>>()?;
        let steps = classify(graph, &path);

        Ok(Self {
            path,
            steps,
            coordinates,
        })
    }

    pub fn total_distance_meters(&self) -> f64 {
        self.path.total_distance_meters
    }

    /// Number of edges in the route.
    pub fn hop_count(&self) -> usize {
        self.path.hop_count()
    }

    pub fn source(&self) -> Option<NodeId> {
        self.path.source()
    }

    pub fn destination(&self) -> Option<NodeId> {
        self.path.destination()
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Shortest path found! Total distance: {:.2} km",
            self.total_distance_meters() / 1000.0
        );
        for (index, step) in self.steps.iter().enumerate() {
            let _ = writeln!(
                buffer,
                "Step {}: {} on {} for {:.0} meters",
                index + 1,
                step.instruction,
                step.street_label(),
                step.length_meters
            );
        }
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "Route coordinates:");
        for coordinate in &self.coordinates {
            let _ = writeln!(buffer, "{coordinate}");
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** ({} steps, {:.2} km)",
            self.steps.len(),
            self.total_distance_meters() / 1000.0
        );
        for (index, step) in self.steps.iter().enumerate() {
            let _ = writeln!(
                buffer,
                "{}. **{}** on _{}_ ({:.0} m)",
                index + 1,
                step.instruction,
                step.street_label(),
                step.length_meters
            );
        }
        buffer
    }
}
