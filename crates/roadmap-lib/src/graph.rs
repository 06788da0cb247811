use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::edge::Edge;
use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use crate::vertex::Vertex;

/// Directed road network keyed by intersection point.
///
/// The graph is built once (`add_vertex`/`add_edge`) and then queried; every
/// search takes `&self` and leaves the graph untouched.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: HashMap<GeoPoint, Vertex>,
    num_edges: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of intersections.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of successful `add_edge` calls.
    ///
    /// Re-adding an identical segment still counts even though the vertex keeps
    /// a single copy of it.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Owned copy of every vertex point.
    pub fn vertices(&self) -> HashSet<GeoPoint> {
        self.vertices.keys().copied().collect()
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.vertices.contains_key(point)
    }

    pub fn vertex(&self, point: &GeoPoint) -> Option<&Vertex> {
        self.vertices.get(point)
    }

    /// Outgoing edges of `point`, empty when the point is not a vertex.
    pub fn neighbours(&self, point: &GeoPoint) -> &[Edge] {
        self.vertices
            .get(point)
            .map(Vertex::edges)
            .unwrap_or(&[])
    }

    /// Add an intersection. Returns `false` for invalid or already-known points.
    pub fn add_vertex(&mut self, point: GeoPoint) -> bool {
        if !point.is_valid() || self.vertices.contains_key(&point) {
            return false;
        }
        self.vertices.insert(point, Vertex::new(point));
        true
    }

    /// Add a directed road segment from `from` to `to`.
    ///
    /// Both points must already be vertices. Checks run in a fixed order and the
    /// first failing one is reported.
    pub fn add_edge(
        &mut self,
        from: GeoPoint,
        to: GeoPoint,
        road_name: impl Into<String>,
        road_type: impl Into<String>,
        length: f64,
    ) -> Result<()> {
        if !from.is_valid() || !to.is_valid() {
            return Err(Error::InvalidEndpoint { from, to });
        }
        if length.is_nan() || length < 0.0 {
            return Err(Error::NegativeLength { length });
        }
        let to_known = self.vertices.contains_key(&to);
        let Some(vertex) = self.vertices.get_mut(&from) else {
            return Err(Error::UnknownStart { point: from });
        };
        if !to_known {
            return Err(Error::UnknownEnd { point: to });
        }

        vertex.add_edge(Edge::new(
            road_name.into(),
            road_type.into(),
            length,
            from,
            to,
        ));
        self.num_edges += 1;
        Ok(())
    }

    /// Total length of a point sequence, taking the shortest edge between each
    /// consecutive pair. `None` when some pair is not connected.
    pub fn path_length(&self, path: &[GeoPoint]) -> Option<f64> {
        path.windows(2).try_fold(0.0, |total, pair| {
            self.neighbours(&pair[0])
                .iter()
                .filter(|edge| edge.end() == pair[1])
                .map(Edge::length)
                .min_by(|a, b| compare_length(*a, *b))
                .map(|length| total + length)
        })
    }
}

fn compare_length(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Greater)
}
