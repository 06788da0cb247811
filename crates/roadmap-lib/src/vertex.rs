use std::hash::{Hash, Hasher};

use crate::edge::Edge;
use crate::geo::GeoPoint;

/// Intersection in the road network together with its outgoing road segments.
///
/// Edges keep insertion order; inserting an edge equal to one already held is a
/// no-op. Two vertices are equal when their points are equal, regardless of edges.
#[derive(Debug, Clone)]
pub struct Vertex {
    point: GeoPoint,
    edges: Vec<Edge>,
}

impl Vertex {
    pub(crate) fn new(point: GeoPoint) -> Self {
        Self {
            point,
            edges: Vec::new(),
        }
    }

    pub fn point(&self) -> GeoPoint {
        self.point
    }

    /// Outgoing edges in the order they were first inserted.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns `false` when an identical edge is already present.
    pub(crate) fn add_edge(&mut self, edge: Edge) -> bool {
        debug_assert_eq!(edge.start(), self.point);
        if self.edges.contains(&edge) {
            return false;
        }
        self.edges.push(edge);
        true
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.point.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(name: &str, from: GeoPoint, to: GeoPoint) -> Edge {
        Edge::new(name.to_string(), "residential".to_string(), 1.0, from, to)
    }

    #[test]
    fn duplicate_edges_collapse() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let mut vertex = Vertex::new(a);

        assert!(vertex.add_edge(edge("Main", a, b)));
        assert!(!vertex.add_edge(edge("Main", a, b)));
        assert!(vertex.add_edge(edge("High", a, b)));

        let names: Vec<_> = vertex.edges().iter().map(Edge::road_name).collect();
        assert_eq!(names, vec!["Main", "High"]);
    }

    #[test]
    fn equality_ignores_edges() {
        let a = GeoPoint::new(0.0, 0.0);
        let mut with_edge = Vertex::new(a);
        with_edge.add_edge(edge("Main", a, GeoPoint::new(1.0, 1.0)));

        assert_eq!(with_edge, Vertex::new(a));
        assert_ne!(with_edge, Vertex::new(GeoPoint::new(1.0, 0.0)));
    }
}
