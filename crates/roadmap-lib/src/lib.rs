//! Road network library entry points.
//!
//! This crate stores a road network as a directed graph of intersections,
//! loads it from line-oriented map files, and runs pathfinding algorithms
//! (breadth-first search, Dijkstra, A*) over it. Higher-level consumers such as
//! the CLI should only depend on the items exported here.
//!

#![deny(warnings)]

pub mod edge;
pub mod error;
mod frontier;
pub mod geo;
pub mod graph;
pub mod loader;
mod path;
pub mod routing;
pub mod vertex;

pub use edge::Edge;
pub use error::{Error, Result};
pub use geo::GeoPoint;
pub use graph::Graph;
pub use loader::{load_road_map, parse_road_map};
pub use routing::{
    plan_route, plan_route_with_visitor, RouteAlgorithm, RoutePlan, RouteRequest,
};
pub use vertex::Vertex;
