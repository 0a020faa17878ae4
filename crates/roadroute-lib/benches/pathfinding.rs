use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use roadroute_lib::{
    classify, find_path, find_path_with, plan_route, Coordinate, NodeId, RoadGraph,
    RouteAlgorithm, RouteRequest, SearchOptions,
};
use std::hint::black_box;

const SIDE: usize = 60;

/// Two-way street grid with mildly uneven block lengths.
fn build_grid() -> RoadGraph {
    let id = |row: usize, col: usize| (row * SIDE + col) as NodeId;
    let coordinate = |row: usize, col: usize| {
        Coordinate::new(51.50 + row as f64 * 0.001, -0.12 + col as f64 * 0.001)
    };

    let mut builder = RoadGraph::builder();
    for row in 0..SIDE {
        for col in 0..SIDE {
            builder.add_node(id(row, col), coordinate(row, col));
        }
    }
    for row in 0..SIDE {
        for col in 0..SIDE {
            let factor = 1.0 + ((row * 5 + col * 3) % 4) as f64 * 0.15;
            if col + 1 < SIDE {
                let length = coordinate(row, col).distance_to(&coordinate(row, col + 1)) * factor;
                builder.add_road(id(row, col), id(row, col + 1), length, None, false);
            }
            if row + 1 < SIDE {
                let length = coordinate(row, col).distance_to(&coordinate(row + 1, col)) * factor;
                builder.add_road(id(row, col), id(row + 1, col), length, None, false);
            }
        }
    }
    builder.build().expect("grid graph is valid")
}

static GRID: Lazy<RoadGraph> = Lazy::new(build_grid);
const CORNER_TO_CORNER: (NodeId, NodeId) = (0, (SIDE * SIDE - 1) as NodeId);
static DIJKSTRA: Lazy<SearchOptions> = Lazy::new(|| SearchOptions {
    algorithm: RouteAlgorithm::Dijkstra,
    ..SearchOptions::default()
});
static SNAPPED_REQUEST: Lazy<RouteRequest> = Lazy::new(|| {
    RouteRequest::new(
        Coordinate::new(51.5003, -0.1198),
        Coordinate::new(51.5585, -0.0612),
    )
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = &*GRID;
    let (source, destination) = CORNER_TO_CORNER;

    c.bench_function("astar_grid_corner_to_corner", |b| {
        b.iter(|| {
            let path = find_path(graph, source, destination).expect("route exists");
            black_box(path.hop_count())
        });
    });

    c.bench_function("dijkstra_grid_corner_to_corner", |b| {
        let options = &*DIJKSTRA;
        b.iter(|| {
            let path = find_path_with(graph, source, destination, options).expect("route exists");
            black_box(path.total_distance_meters)
        });
    });

    c.bench_function("classify_grid_corner_to_corner", |b| {
        let path = find_path(graph, source, destination).expect("route exists");
        b.iter(|| black_box(classify(graph, &path).len()));
    });

    c.bench_function("plan_route_snapped_coordinates", |b| {
        let request = &*SNAPPED_REQUEST;
        b.iter(|| {
            let summary = plan_route(graph, request).expect("route exists");
            black_box(summary.steps.len())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
