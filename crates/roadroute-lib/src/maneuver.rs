//! Turn-by-turn instructions derived from a node path.
//!
//! Each traversed edge becomes one [`Step`]. The first step is always
//! [`Instruction::Start`]; every later step is classified from the change in
//! compass bearing between the incoming and the outgoing edge:
//!
//! | `diff` (degrees)          | instruction |
//! |---------------------------|-------------|
//! | `< 45` or `> 315`         | Straight    |
//! | `45 ..< 135`              | TurnRight   |
//! | `135 ..< 225`             | TurnBack    |
//! | `225 ..= 315`             | TurnLeft    |
//!
//! where `diff = (next_bearing - prev_bearing + 360) mod 360`.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::geo::{checked_bearing, DegenerateBearing};
use crate::graph::{NodeId, RoadGraph};
use crate::path::PathResult;

/// Display label for edges without a street name.
pub const UNNAMED_ROAD: &str = "Unnamed Road";

/// Navigation instruction attached to a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Instruction {
    Start,
    Straight,
    TurnRight,
    TurnLeft,
    TurnBack,
}

impl Instruction {
    /// Human-readable phrase used in directions.
    pub fn label(self) -> &'static str {
        match self {
            Instruction::Start => "Start",
            Instruction::Straight => "Go straight",
            Instruction::TurnRight => "Turn right",
            Instruction::TurnLeft => "Turn left",
            Instruction::TurnBack => "Turn back",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One leg of the route: what to do, on which street, for how long.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub instruction: Instruction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    pub length_meters: f64,
}

impl Step {
    /// Street name, or [`UNNAMED_ROAD`] when the edge has none.
    pub fn street_label(&self) -> &str {
        self.street_name.as_deref().unwrap_or(UNNAMED_ROAD)
    }
}

/// Change of heading from `prev_bearing` to `next_bearing`, in `[0, 360)`.
pub fn turn_angle(prev_bearing: f64, next_bearing: f64) -> f64 {
    (next_bearing - prev_bearing + 360.0).rem_euclid(360.0)
}

/// Bucket a heading change into an instruction.
pub fn classify_turn(diff: f64) -> Instruction {
    if !(45.0..=315.0).contains(&diff) {
        Instruction::Straight
    } else if diff < 135.0 {
        Instruction::TurnRight
    } else if diff < 225.0 {
        Instruction::TurnBack
    } else {
        Instruction::TurnLeft
    }
}

/// Produce one step per edge of `path`.
///
/// A single-node path yields a lone zero-length Start step. Consecutive nodes
/// without a connecting edge (which a [`PathResult`] from this crate never
/// has) produce a step of length zero with no name.
pub fn classify(graph: &RoadGraph, path: &PathResult) -> Vec<Step> {
    let nodes = &path.nodes;
    if nodes.len() < 2 {
        return nodes
            .first()
            .map(|_| Step {
                instruction: Instruction::Start,
                street_name: None,
                length_meters: 0.0,
            })
            .into_iter()
            .collect();
    }

    let mut steps = Vec::with_capacity(nodes.len() - 1);
    let mut heading: Option<f64> = None;

    for (index, pair) in nodes.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        let outgoing = segment_bearing(graph, from, to);

        let instruction = if index == 0 {
            Instruction::Start
        } else {
            let incoming = segment_bearing(graph, nodes[index - 1], from)
                .ok()
                .or(heading);
            match (incoming, outgoing) {
                (Some(prev), Ok(next)) => classify_turn(turn_angle(prev, next)),
                _ => {
                    warn!(node = from, "zero-length segment; assuming straight");
                    Instruction::Straight
                }
            }
        };

        if let Ok(value) = outgoing {
            heading = Some(value);
        }

        let edge = graph.edge_between(from, to);
        steps.push(Step {
            instruction,
            street_name: edge.and_then(|edge| edge.name.clone()),
            length_meters: edge.map(|edge| edge.length_meters).unwrap_or(0.0),
        });
    }

    steps
}

fn segment_bearing(graph: &RoadGraph, from: NodeId, to: NodeId) -> Result<f64, DegenerateBearing> {
    let (Some(a), Some(b)) = (graph.coordinate(from), graph.coordinate(to)) else {
        return Err(DegenerateBearing);
    };
    checked_bearing(a, b)
}
