//! Common test utilities and fixture graphs.
//!
//! Provides small hand-built road networks, a deterministic random graph
//! generator, and brute-force route enumeration used to check search results.

#![allow(dead_code)]

use std::collections::HashSet;

use roadmap_lib::{GeoPoint, Graph};

pub const LINE: [(f64, f64); 4] = [(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0)];

pub fn point(coords: (f64, f64)) -> GeoPoint {
    GeoPoint::new(coords.0, coords.1)
}

/// `A(0,0) - B(0,1) - C(0,2) - D(0,3)` with unit-length roads in both directions.
///
/// When `with_bridge` is false the B-C roads are left out.
pub fn line_graph(with_bridge: bool) -> Graph {
    let [a, b, c, d] = LINE.map(point);
    let mut graph = Graph::new();
    for vertex in [a, b, c, d] {
        graph.add_vertex(vertex);
    }

    let mut roads = vec![(a, b), (c, d)];
    if with_bridge {
        roads.push((b, c));
    }
    for (from, to) in roads {
        graph
            .add_edge(from, to, "Line St", "residential", 1.0)
            .expect("both endpoints exist");
        graph
            .add_edge(to, from, "Line St", "residential", 1.0)
            .expect("both endpoints exist");
    }
    graph
}

/// Small linear congruential generator so fixtures are reproducible without
/// pulling in a randomness crate.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(6364136223846793005).wrapping_add(1))
    }

    pub fn next_below(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

/// Random directed graph on integer grid points.
///
/// Every road is at least as long as the straight-line distance between its
/// endpoints, so the A* heuristic never overestimates.
pub fn random_graph(seed: u64, nodes: usize, roads: usize) -> (Graph, Vec<GeoPoint>) {
    let mut rng = Lcg::new(seed);
    let mut points = Vec::new();
    let mut seen = HashSet::new();
    while points.len() < nodes {
        let candidate = GeoPoint::new(rng.next_below(8) as f64, rng.next_below(8) as f64);
        if seen.insert(candidate) {
            points.push(candidate);
        }
    }

    let mut graph = Graph::new();
    for &p in &points {
        graph.add_vertex(p);
    }
    for _ in 0..roads {
        let from = points[rng.next_below(nodes as u64) as usize];
        let to = points[rng.next_below(nodes as u64) as usize];
        if from == to {
            continue;
        }
        let stretch = 1.0 + rng.next_below(4) as f64 / 4.0;
        graph
            .add_edge(from, to, "", "unclassified", from.distance(&to) * stretch)
            .expect("both endpoints exist");
    }
    (graph, points)
}

/// Fewest hops and shortest length over every simple path, or `None` when
/// `goal` is unreachable.
pub fn brute_force(graph: &Graph, start: GeoPoint, goal: GeoPoint) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    let mut on_path = HashSet::from([start]);
    explore(graph, start, goal, 0, 0.0, &mut on_path, &mut best);
    best
}

fn explore(
    graph: &Graph,
    current: GeoPoint,
    goal: GeoPoint,
    hops: usize,
    length: f64,
    on_path: &mut HashSet<GeoPoint>,
    best: &mut Option<(usize, f64)>,
) {
    if current == goal {
        *best = Some(match *best {
            Some((best_hops, best_length)) => (best_hops.min(hops), best_length.min(length)),
            None => (hops, length),
        });
        return;
    }

    for edge in graph.neighbours(&current) {
        let next = edge.end();
        if on_path.insert(next) {
            explore(
                graph,
                next,
                goal,
                hops + 1,
                length + edge.length(),
                on_path,
                best,
            );
            on_path.remove(&next);
        }
    }
}

/// Every consecutive pair of `path` is joined by a road.
pub fn follows_roads(graph: &Graph, path: &[GeoPoint]) -> bool {
    graph.path_length(path).is_some()
}
