mod common;

use roadmap_lib::{
    plan_route, plan_route_with_visitor, Error, GeoPoint, Graph, RouteAlgorithm, RouteRequest,
};

use common::{brute_force, follows_roads, line_graph, point, random_graph, LINE};

const TOLERANCE: f64 = 1e-9;

#[test]
fn line_graph_routes_end_to_end() {
    let graph = line_graph(true);
    let [a, b, c, d] = LINE.map(point);

    assert_eq!(graph.bfs(a, d), Some(vec![a, b, c, d]));
    assert_eq!(graph.dijkstra(a, d), Some(vec![a, b, c, d]));
    assert_eq!(graph.a_star_search(a, d), Some(vec![a, b, c, d]));
    assert_eq!(graph.dijkstra(d, a), Some(vec![d, c, b, a]));
}

#[test]
fn removing_the_bridge_disconnects_the_line() {
    let graph = line_graph(false);
    let [a, _, _, d] = LINE.map(point);

    assert_eq!(graph.bfs(a, d), None);
    assert_eq!(graph.dijkstra(a, d), None);
    assert_eq!(graph.a_star_search(a, d), None);
}

#[test]
fn bfs_visit_order_matches_recorded_sequence() {
    let a = GeoPoint::new(0.0, 0.0);
    let b = GeoPoint::new(1.0, 0.0);
    let c = GeoPoint::new(0.0, 1.0);
    let d = GeoPoint::new(1.0, 1.0);
    let e = GeoPoint::new(2.0, 2.0);
    let f = GeoPoint::new(5.0, 5.0);

    let mut graph = Graph::new();
    for vertex in [a, b, c, d, e, f] {
        graph.add_vertex(vertex);
    }
    graph.add_edge(a, b, "North Rd", "residential", 1.0).unwrap();
    graph.add_edge(a, c, "East Rd", "residential", 1.0).unwrap();
    graph.add_edge(b, d, "East Rd", "residential", 1.0).unwrap();
    graph.add_edge(c, d, "North Rd", "residential", 1.0).unwrap();
    graph.add_edge(c, f, "Spur", "service", 1.0).unwrap();
    graph.add_edge(d, e, "Diagonal", "primary", 1.5).unwrap();

    let mut visited = Vec::new();
    let path = graph.bfs_with_visitor(a, e, |p| visited.push(p));

    assert_eq!(path, Some(vec![a, b, d, e]));
    assert_eq!(visited, vec![a, b, c, d, f, e]);
}

#[test]
fn a_star_visits_fewer_points_than_dijkstra_on_a_corridor() {
    // Two branches leave the start; only the eastern one heads for the goal.
    let start = GeoPoint::new(0.0, 0.0);
    let goal = GeoPoint::new(0.0, 4.0);
    let mut graph = Graph::new();
    graph.add_vertex(start);
    let mut prev_east = start;
    let mut prev_west = start;
    for step in 1..=4 {
        let east = GeoPoint::new(0.0, step as f64);
        let west = GeoPoint::new(0.0, -(step as f64));
        graph.add_vertex(east);
        graph.add_vertex(west);
        graph.add_edge(prev_east, east, "East", "primary", 1.0).unwrap();
        graph.add_edge(prev_west, west, "West", "primary", 1.0).unwrap();
        prev_east = east;
        prev_west = west;
    }

    let mut dijkstra_visits = 0;
    let mut a_star_visits = 0;
    let dijkstra = graph.dijkstra_with_visitor(start, goal, |_| dijkstra_visits += 1);
    let a_star = graph.a_star_search_with_visitor(start, goal, |_| a_star_visits += 1);

    assert_eq!(dijkstra, a_star);
    assert_eq!(a_star_visits, 5);
    assert!(dijkstra_visits > a_star_visits);
}

#[test]
fn a_star_reports_requeued_points_once_per_pop() {
    let s = GeoPoint::new(0.0, 0.0);
    let a = GeoPoint::new(1.0, 0.0);
    let b = GeoPoint::new(2.0, 0.0);
    let g = GeoPoint::new(3.0, 0.0);

    let mut graph = Graph::new();
    for vertex in [s, a, b, g] {
        graph.add_vertex(vertex);
    }
    // b is first queued at total 5 + 1, then improved through a to 2 + 1.
    graph.add_edge(s, b, "Slow Rd", "tertiary", 5.0).unwrap();
    graph.add_edge(s, a, "Fast Rd", "primary", 1.0).unwrap();
    graph.add_edge(a, b, "Fast Rd", "primary", 1.0).unwrap();
    graph.add_edge(a, s, "Fast Rd", "primary", 1.0).unwrap();
    graph.add_edge(b, g, "Long Rd", "trunk", 10.0).unwrap();

    let mut visited = Vec::new();
    let path = graph.a_star_search_with_visitor(s, g, |p| visited.push(p));

    assert_eq!(path, Some(vec![s, a, b, g]));
    assert_eq!(visited, vec![s, a, b, b, g]);
}

#[test]
fn searches_are_optimal_against_brute_force() {
    for seed in 0..40 {
        let (graph, points) = random_graph(seed, 7, 16);
        for &start in &points {
            for &goal in &points {
                let expected = brute_force(&graph, start, goal);
                let bfs = graph.bfs(start, goal);
                let dijkstra = graph.dijkstra(start, goal);
                let a_star = graph.a_star_search(start, goal);

                let Some((min_hops, min_length)) = expected else {
                    assert_eq!(bfs, None, "seed {seed}: bfs {start} -> {goal}");
                    assert_eq!(dijkstra, None, "seed {seed}: dijkstra {start} -> {goal}");
                    assert_eq!(a_star, None, "seed {seed}: a* {start} -> {goal}");
                    continue;
                };

                let bfs = bfs.expect("bfs finds reachable goal");
                assert!(follows_roads(&graph, &bfs));
                assert_eq!(bfs.len() - 1, min_hops, "seed {seed}: bfs hop count");

                for (name, route) in [("dijkstra", dijkstra), ("a*", a_star)] {
                    let route = route.expect("weighted search finds reachable goal");
                    assert_eq!(route.first(), Some(&start));
                    assert_eq!(route.last(), Some(&goal));
                    let length = graph.path_length(&route).expect("route follows roads");
                    assert!(
                        (length - min_length).abs() < TOLERANCE,
                        "seed {seed}: {name} length {length} vs optimum {min_length}"
                    );
                }
            }
        }
    }
}

#[test]
fn searches_never_mutate_the_graph() {
    let graph = line_graph(true);
    let before = (graph.num_vertices(), graph.num_edges(), graph.vertices());
    let [a, _, _, d] = LINE.map(point);

    graph.bfs(a, d);
    graph.dijkstra(a, d);
    graph.a_star_search(a, d);

    assert_eq!(
        before,
        (graph.num_vertices(), graph.num_edges(), graph.vertices())
    );
}

#[test]
fn plan_route_reports_length_and_visits() {
    let graph = line_graph(true);
    let [a, _, _, d] = LINE.map(point);

    let mut seen = Vec::new();
    let request = RouteRequest::new(a, d, RouteAlgorithm::Dijkstra);
    let plan = plan_route_with_visitor(&graph, &request, |p| seen.push(p)).expect("route exists");

    assert_eq!(plan.algorithm, RouteAlgorithm::Dijkstra);
    assert_eq!(plan.hop_count(), 3);
    assert!((plan.total_length - 3.0).abs() < TOLERANCE);
    assert_eq!(plan.visited, seen.len());
    assert_eq!(seen.first(), Some(&a));
    assert_eq!(seen.last(), Some(&d));
}

#[test]
fn plan_route_separates_unknown_points_from_missing_routes() {
    let graph = line_graph(false);
    let [a, _, _, d] = LINE.map(point);
    let nowhere = GeoPoint::new(10.0, 10.0);

    let error = plan_route(&graph, &RouteRequest::bfs(nowhere, d)).expect_err("unknown start");
    assert!(matches!(error, Error::UnknownStart { .. }));

    let error = plan_route(&graph, &RouteRequest::bfs(a, nowhere)).expect_err("unknown goal");
    assert!(matches!(error, Error::UnknownEnd { .. }));

    let error = plan_route(&graph, &RouteRequest::bfs(a, d)).expect_err("disconnected");
    assert!(format!("{error}").contains("no route found"));
}
