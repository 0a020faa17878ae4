//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use roadroute_lib::{distance, Coordinate, NodeId, RoadGraph};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the small town network shared with the CLI tests.
#[allow(dead_code)]
pub fn small_town_path() -> PathBuf {
    fixtures_dir().join("small_town.json")
}

/// Id of the grid node at `row`, `col`.
#[allow(dead_code)]
pub fn grid_id(row: usize, col: usize, cols: usize) -> NodeId {
    (row * cols + col) as NodeId
}

/// Two-way street grid with 0.001 degree spacing.
///
/// Every edge is between 1.0x and 1.4x its straight-line length, picked
/// deterministically from its position, so routes have a unique optimum
/// more often than a uniform grid would and the heuristic stays admissible.
#[allow(dead_code)]
pub fn grid_graph(rows: usize, cols: usize) -> RoadGraph {
    let coordinate = |row: usize, col: usize| {
        Coordinate::new(27.70 + row as f64 * 0.001, 85.30 + col as f64 * 0.001)
    };

    let mut builder = RoadGraph::builder();
    for row in 0..rows {
        for col in 0..cols {
            builder.add_node(grid_id(row, col, cols), coordinate(row, col));
        }
    }

    for row in 0..rows {
        for col in 0..cols {
            let here = coordinate(row, col);
            let mut link = |to_row: usize, to_col: usize| {
                let factor = 1.0 + ((row * 7 + col * 13 + to_row * 3 + to_col) % 5) as f64 * 0.1;
                let length = distance(here, coordinate(to_row, to_col)) * factor;
                builder.add_road(
                    grid_id(row, col, cols),
                    grid_id(to_row, to_col, cols),
                    length,
                    Some(format!("Street {row}-{col}")),
                    false,
                );
            };
            if col + 1 < cols {
                link(row, col + 1);
            }
            if row + 1 < rows {
                link(row + 1, col);
            }
        }
    }

    builder.build().expect("grid graph is valid")
}
