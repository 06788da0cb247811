//! Route planning on top of the graph searches.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported routing algorithms (BFS, Dijkstra, A*)
//! - [`RouteRequest`] - Start, goal and algorithm for one query
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! Unlike the raw searches on [`Graph`], planning reports *why* no route was
//! produced: unknown endpoints and unreachable goals are distinct errors.
//!
//! # Example
//!
//! ```ignore
//! use roadmap_lib::{load_road_map, plan_route, GeoPoint, RouteRequest};
//!
//! let graph = load_road_map("data/ucsd.map".as_ref())?;
//! let request = RouteRequest::bfs(GeoPoint::new(32.87, -117.24), GeoPoint::new(32.87, -117.23));
//! let plan = plan_route(&graph, &request)?;
//! println!("Route: {} hops", plan.hop_count());
//! ```

mod planner;

pub use planner::{select_planner, AStarPlanner, BfsPlanner, DijkstraPlanner, RoutePlanner};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use crate::graph::Graph;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Breadth-first search (fewest road segments).
    Bfs,
    /// Dijkstra's algorithm (shortest total length).
    Dijkstra,
    /// A* search (shortest total length, heuristic guided).
    #[default]
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Bfs => "bfs",
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(RouteAlgorithm::Bfs),
            "dijkstra" => Ok(RouteAlgorithm::Dijkstra),
            "a-star" | "a_star" | "astar" => Ok(RouteAlgorithm::AStar),
            _ => Err(Error::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    pub start: GeoPoint,
    pub goal: GeoPoint,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    pub fn new(start: GeoPoint, goal: GeoPoint, algorithm: RouteAlgorithm) -> Self {
        Self {
            start,
            goal,
            algorithm,
        }
    }

    /// Convenience constructor for BFS routes.
    pub fn bfs(start: GeoPoint, goal: GeoPoint) -> Self {
        Self::new(start, goal, RouteAlgorithm::Bfs)
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: GeoPoint,
    pub goal: GeoPoint,
    pub steps: Vec<GeoPoint>,
    /// Sum of segment lengths along `steps`.
    pub total_length: f64,
    /// Number of frontier pops performed by the search.
    pub visited: usize,
}

impl RoutePlan {
    /// Number of road segments in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a route using the requested algorithm.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    plan_route_with_visitor(graph, request, |_| {})
}

/// Compute a route, reporting every point the search takes off its frontier.
pub fn plan_route_with_visitor<F>(
    graph: &Graph,
    request: &RouteRequest,
    mut visit: F,
) -> Result<RoutePlan>
where
    F: FnMut(GeoPoint),
{
    if !graph.contains(&request.start) {
        return Err(Error::UnknownStart {
            point: request.start,
        });
    }
    if !graph.contains(&request.goal) {
        return Err(Error::UnknownEnd {
            point: request.goal,
        });
    }

    let planner = select_planner(request);
    let mut visited = 0_usize;
    let steps = planner
        .find_path(graph, request.start, request.goal, &mut |point| {
            visited += 1;
            visit(point);
        })
        .ok_or(Error::RouteNotFound {
            start: request.start,
            goal: request.goal,
        })?;

    // Every consecutive pair in `steps` comes from an existing edge.
    let total_length = graph.path_length(&steps).unwrap_or_default();
    debug!(
        algorithm = %request.algorithm,
        hops = steps.len().saturating_sub(1),
        total_length,
        visited,
        "route planned"
    );

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start: request.start,
        goal: request.goal,
        steps,
        total_length,
        visited,
    })
}
