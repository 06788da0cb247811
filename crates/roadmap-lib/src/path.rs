use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use tracing::{debug, warn};

use crate::frontier::{AStarVertex, WeightedVertex};
use crate::geo::GeoPoint;
use crate::graph::Graph;

impl Graph {
    /// Fewest-hops route from `start` to `goal` using breadth-first search.
    pub fn bfs(&self, start: GeoPoint, goal: GeoPoint) -> Option<Vec<GeoPoint>> {
        self.bfs_with_visitor(start, goal, |_| {})
    }

    /// Breadth-first search that reports every point taken off the queue.
    ///
    /// Edges are expanded in insertion order, so the visit sequence is stable
    /// for a given build order.
    pub fn bfs_with_visitor<F>(
        &self,
        start: GeoPoint,
        goal: GeoPoint,
        mut visit: F,
    ) -> Option<Vec<GeoPoint>>
    where
        F: FnMut(GeoPoint),
    {
        if !self.can_search(start, goal) {
            return None;
        }
        debug!(%start, %goal, "running breadth-first search");

        let mut parents: HashMap<GeoPoint, GeoPoint> = HashMap::new();
        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            visit(current);
            if current == goal {
                return reconstruct_path(&parents, start, goal);
            }

            for edge in self.neighbours(&current) {
                let next = edge.end();
                if visited.insert(next) {
                    parents.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        debug!(%start, %goal, explored = visited.len(), "breadth-first search exhausted");
        None
    }

    /// Shortest route by total road length using Dijkstra's algorithm.
    pub fn dijkstra(&self, start: GeoPoint, goal: GeoPoint) -> Option<Vec<GeoPoint>> {
        self.dijkstra_with_visitor(start, goal, |_| {})
    }

    /// Dijkstra's algorithm reporting every entry popped from the frontier.
    ///
    /// Superseded entries are not discarded: a point queued several times is
    /// expanded, and reported, once per pop.
    pub fn dijkstra_with_visitor<F>(
        &self,
        start: GeoPoint,
        goal: GeoPoint,
        mut visit: F,
    ) -> Option<Vec<GeoPoint>>
    where
        F: FnMut(GeoPoint),
    {
        if !self.can_search(start, goal) {
            return None;
        }
        let origin = self.vertex(&start)?;
        debug!(%start, %goal, "running dijkstra search");

        let mut costs: HashMap<GeoPoint, f64> = HashMap::from([(start, 0.0)]);
        let mut parents: HashMap<GeoPoint, GeoPoint> = HashMap::new();
        let mut queue = BinaryHeap::new();
        let mut seq = 0_u64;

        queue.push(WeightedVertex::new(origin, 0.0, seq));

        while let Some(entry) = queue.pop() {
            let current = entry.vertex.point();
            visit(current);
            if current == goal {
                return reconstruct_path(&parents, start, goal);
            }

            for edge in entry.vertex.edges() {
                let next = edge.end();
                let next_cost = entry.cost + edge.length();
                if costs.get(&next).is_some_and(|known| next_cost >= *known) {
                    continue;
                }
                let Some(next_vertex) = self.vertex(&next) else {
                    continue;
                };

                costs.insert(next, next_cost);
                parents.insert(next, current);
                seq += 1;
                queue.push(WeightedVertex::new(next_vertex, next_cost, seq));
            }
        }

        debug!(%start, %goal, explored = costs.len(), "dijkstra search exhausted");
        None
    }

    /// Shortest route by total road length using A* guided by straight-line
    /// distance to `goal`.
    ///
    /// The heuristic works on raw coordinates, so the result is only optimal when
    /// edge lengths are never shorter than that distance.
    pub fn a_star_search(&self, start: GeoPoint, goal: GeoPoint) -> Option<Vec<GeoPoint>> {
        self.a_star_search_with_visitor(start, goal, |_| {})
    }

    /// A* search reporting every entry popped from the frontier.
    ///
    /// The best-known map stores total weights (cost so far plus heuristic) and
    /// a point is requeued only when its new total is strictly lower.
    pub fn a_star_search_with_visitor<F>(
        &self,
        start: GeoPoint,
        goal: GeoPoint,
        mut visit: F,
    ) -> Option<Vec<GeoPoint>>
    where
        F: FnMut(GeoPoint),
    {
        if !self.can_search(start, goal) {
            return None;
        }
        let origin = self.vertex(&start)?;
        debug!(%start, %goal, "running a* search");

        let mut totals: HashMap<GeoPoint, f64> = HashMap::from([(start, 0.0)]);
        let mut parents: HashMap<GeoPoint, GeoPoint> = HashMap::new();
        let mut queue = BinaryHeap::new();
        let mut seq = 0_u64;

        queue.push(AStarVertex::new(origin, 0.0, 0.0, seq));

        while let Some(entry) = queue.pop() {
            let current = entry.vertex.point();
            visit(current);
            if current == goal {
                return reconstruct_path(&parents, start, goal);
            }

            for edge in entry.vertex.edges() {
                let next = edge.end();
                let heuristic = next.distance(&goal);
                let next_cost = entry.cost + edge.length();
                let total = next_cost + heuristic;
                if totals.get(&next).is_some_and(|known| total >= *known) {
                    continue;
                }
                let Some(next_vertex) = self.vertex(&next) else {
                    continue;
                };

                totals.insert(next, total);
                parents.insert(next, current);
                seq += 1;
                queue.push(AStarVertex::new(next_vertex, next_cost, heuristic, seq));
            }
        }

        debug!(%start, %goal, explored = totals.len(), "a* search exhausted");
        None
    }

    /// A search needs valid points and a start that is a vertex. A goal missing
    /// from the graph is searched for anyway and simply never reached.
    fn can_search(&self, start: GeoPoint, goal: GeoPoint) -> bool {
        if !start.is_valid() || !goal.is_valid() {
            debug!(%start, %goal, "search endpoints are not valid points");
            return false;
        }
        if !self.contains(&start) {
            debug!(%start, "search start is not a vertex of the graph");
            return false;
        }
        true
    }
}

/// Walk predecessors back from `goal` to `start` and return the route in
/// travel order.
fn reconstruct_path(
    parents: &HashMap<GeoPoint, GeoPoint>,
    start: GeoPoint,
    goal: GeoPoint,
) -> Option<Vec<GeoPoint>> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        let Some(&parent) = parents.get(&current) else {
            warn!(%start, %goal, at = %current, "predecessor chain ends before start");
            return None;
        };
        if path.len() > parents.len() {
            warn!(%start, %goal, "predecessor chain contains a cycle");
            return None;
        }
        path.push(parent);
        current = parent;
    }
    path.reverse();
    Some(path)
}
