//! Route planning strategies.
//!
//! Each algorithm sits behind the [`RoutePlanner`] trait so `plan_route` can
//! dispatch on the request without knowing which search runs.

use crate::geo::GeoPoint;
use crate::graph::Graph;

use super::{RouteAlgorithm, RouteRequest};

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search, calling `visit` for every point popped from the frontier.
    ///
    /// Returns `Some(path)` if a route is found, `None` otherwise.
    fn find_path(
        &self,
        graph: &Graph,
        start: GeoPoint,
        goal: GeoPoint,
        visit: &mut dyn FnMut(GeoPoint),
    ) -> Option<Vec<GeoPoint>>;
}

/// Breadth-first search planner.
///
/// Finds the route with the fewest road segments, ignoring their lengths.
#[derive(Debug, Clone, Default)]
pub struct BfsPlanner;

impl RoutePlanner for BfsPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Bfs
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: GeoPoint,
        goal: GeoPoint,
        visit: &mut dyn FnMut(GeoPoint),
    ) -> Option<Vec<GeoPoint>> {
        graph.bfs_with_visitor(start, goal, visit)
    }
}

/// Dijkstra's algorithm planner for shortest total length.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: GeoPoint,
        goal: GeoPoint,
        visit: &mut dyn FnMut(GeoPoint),
    ) -> Option<Vec<GeoPoint>> {
        graph.dijkstra_with_visitor(start, goal, visit)
    }
}

/// A* planner using straight-line distance to the goal as its heuristic.
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: GeoPoint,
        goal: GeoPoint,
        visit: &mut dyn FnMut(GeoPoint),
    ) -> Option<Vec<GeoPoint>> {
        graph.a_star_search_with_visitor(start, goal, visit)
    }
}

/// Select the appropriate planner for a given request.
pub fn select_planner(request: &RouteRequest) -> Box<dyn RoutePlanner> {
    match request.algorithm {
        RouteAlgorithm::Bfs => Box::new(BfsPlanner),
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
    }
}
