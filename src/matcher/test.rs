use crate::error::{Error, ErrorKind};
use crate::frechet::frechet_distance;
use crate::graph::Graph;
use crate::index::{IndexOptions, ShortestPathIndex};
use crate::matcher::{get_closest_path, ClosestPath, Endpoints, MatchError, MatchOptions};
use crate::primitive::{distance, EdgeId, NodeId};
use crate::util::env;
use crate::util::fixture::ladder;

use approx::assert_relative_eq;
use geo::Point;

const TOLERANCE: f64 = 1e-3;

fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Runs down the left of the ladder, along the bottom, and up the middle.
fn hook_trajectory() -> Vec<Point> {
    points(&[(0.8, 2.2), (0.8, 0.8), (3.2, 0.8), (2.8, 2.2)])
}

fn within_radius(graph: &Graph, node: NodeId, trajectory: &[Point], radius: f64) -> bool {
    let position = graph.position(node).expect("matched nodes exist");
    trajectory
        .iter()
        .any(|point| distance(position, *point) <= radius)
}

#[test_log::test]
fn corner_trajectory() {
    let (graph, [v11, v12, v31, ..]) = ladder();
    let index = ShortestPathIndex::build(&graph);
    let trajectory = points(&[(1.0, 2.0), (3.0, 2.0)]);

    let (path, d) = graph
        .closest_path(&index, &trajectory, 10.0)
        .expect("ladder is connected");

    // No route reaches (3, 2) from (1, 2) without dropping to y = 1.
    assert_relative_eq!(d, 1.0, epsilon = TOLERANCE);
    assert_eq!(path.start.edge, EdgeId::new(0));
    assert_eq!(path.end.edge, EdgeId::new(2));
    assert!(path.path.is_empty());
    assert_eq!(path.nodes(&graph), Ok(vec![v11, v12, v11, v31]));
    assert!(path.is_connected(&graph));
}

#[test_log::test]
fn hook_trajectory_projected() {
    let (graph, [v11, ..]) = ladder();
    let index = ShortestPathIndex::build(&graph);
    let trajectory = hook_trajectory();

    let (path, d) = graph
        .closest_path(&index, &trajectory, 10.0)
        .expect("ladder is connected");

    assert_relative_eq!(d, 2f64.sqrt() / 5.0, epsilon = TOLERANCE);
    assert_eq!(path.path, vec![v11]);
    assert_eq!(
        (path.start.edge, path.end.edge),
        (EdgeId::new(0), EdgeId::new(4))
    );
    assert_relative_eq!(path.start.fraction, 1.0);
    assert_relative_eq!(path.end.fraction, 1.0);
    assert_eq!(
        path.geometry(&graph),
        Ok(points(&[(1.0, 2.0), (1.0, 2.0), (1.0, 1.0), (3.0, 1.0), (3.0, 2.0)]))
    );
}

#[test_log::test]
fn hook_trajectory_whole_edges() {
    let (graph, [v11, v12, v31, v32, ..]) = ladder();
    let index = ShortestPathIndex::build(&graph);
    let options = MatchOptions::new(10.0).with_endpoints(Endpoints::Whole);

    let (path, d) = graph
        .closest_path_with(&index, &hook_trajectory(), &options)
        .expect("ladder is connected");

    assert_relative_eq!(d, 2f64.sqrt() / 5.0, epsilon = TOLERANCE);
    assert_eq!(path.nodes(&graph), Ok(vec![v12, v11, v31, v32]));
    assert_eq!(
        path.edges(&graph),
        Ok(vec![EdgeId::new(1), EdgeId::new(2), EdgeId::new(4)])
    );
}

#[test]
fn returned_distance_scores_the_geometry() {
    let (graph, _) = ladder();
    let index = ShortestPathIndex::build(&graph);

    let trajectories = [
        hook_trajectory(),
        points(&[(1.0, 2.0), (3.0, 2.0)]),
        points(&[(5.2, 2.1), (4.0, 2.0), (3.1, 1.9), (3.0, 1.2), (1.5, 1.0)]),
        points(&[(2.0, 1.1)]),
    ];

    for trajectory in &trajectories {
        for endpoints in [Endpoints::Projected, Endpoints::Whole] {
            let options = MatchOptions::new(1.5).with_endpoints(endpoints);
            let (path, d) = graph
                .closest_path_with(&index, trajectory, &options)
                .expect("ladder is connected");

            let geometry = path.geometry(&graph).expect("path resolves");
            let rescored = frechet_distance(&geometry, trajectory).expect("non-empty");

            assert_eq!(d, rescored);
            assert!(path.is_connected(&graph), "{path:?} is disconnected");
        }
    }
}

#[test]
fn matched_nodes_are_admissible() {
    let (graph, _) = ladder();
    let index = ShortestPathIndex::build(&graph);
    let trajectory = hook_trajectory();
    let radius = 0.5;

    let (path, _) = graph
        .closest_path(&index, &trajectory, radius)
        .expect("every corner has a node within the radius");

    let start = graph.edge(path.start.edge).expect("start edge exists");
    let end = graph.edge(path.end.edge).expect("end edge exists");

    for node in path.path.iter().chain([&start.target, &end.source]) {
        assert!(
            within_radius(&graph, *node, &trajectory, radius),
            "{node:?} lies outside the radius"
        );
    }
}

#[test]
fn single_edge_match() {
    let mut graph = Graph::new();
    let a = graph.add_node(Point::new(0.0, 0.0));
    let b = graph.add_node(Point::new(10.0, 0.0));
    let (forward, _) = graph.add_bidirectional_edge(a, b).expect("a and b exist");

    let index = ShortestPathIndex::build(&graph);
    let trajectory = points(&[(2.0, 0.5), (8.0, 0.5)]);

    let (path, d) = graph
        .closest_path(&index, &trajectory, 3.0)
        .expect("both nodes are admissible");

    assert!(path.is_single_edge());
    assert_eq!(path.start.edge, forward);
    assert_relative_eq!(path.start.fraction, 0.2);
    assert_relative_eq!(path.end.fraction, 0.8);
    assert_relative_eq!(d, 0.5);
    assert_eq!(path.nodes(&graph), Ok(vec![a, b]));
    assert_eq!(path.edges(&graph), Ok(vec![forward]));
}

#[test]
fn skeleton_must_stay_within_radius() {
    let mut graph = Graph::new();
    let a = graph.add_node(Point::new(0.0, 0.0));
    let b = graph.add_node(Point::new(1.0, 0.0));
    let apex = graph.add_node(Point::new(5.0, 10.0));
    let d = graph.add_node(Point::new(9.0, 0.0));
    let e = graph.add_node(Point::new(10.0, 0.0));

    for (source, target) in [(a, b), (b, apex), (apex, d), (d, e)] {
        graph.add_edge(source, target).expect("nodes exist");
    }

    let index = ShortestPathIndex::build(&graph);
    let trajectory = points(&[(0.0, 0.0), (10.0, 0.0)]);

    assert_eq!(
        graph.closest_path(&index, &trajectory, 1.5),
        Err(MatchError::NoConnectedRoute)
    );

    // At this radius the apex is admissible and the detour is allowed.
    assert!(graph.closest_path(&index, &trajectory, 12.0).is_ok());
}

#[test]
fn no_admissible_nodes() {
    let (graph, _) = ladder();
    let index = ShortestPathIndex::build(&graph);

    let error = graph
        .closest_path(&index, &points(&[(100.0, 100.0), (101.0, 100.0)]), 1.0)
        .expect_err("nothing lies near the trajectory");

    assert_eq!(error, MatchError::NoAdmissibleNodes { radius: 1.0 });
    assert_eq!(error.kind(), ErrorKind::NoPathFound);
}

#[test]
fn disconnected_components() {
    let mut graph = Graph::new();
    let a = graph.add_node(Point::new(0.0, 0.0));
    let b = graph.add_node(Point::new(1.0, 0.0));
    let c = graph.add_node(Point::new(10.0, 0.0));
    let d = graph.add_node(Point::new(11.0, 0.0));
    graph.add_edge(a, b).expect("a and b exist");
    graph.add_edge(c, d).expect("c and d exist");

    let index = ShortestPathIndex::build(&graph);
    let trajectory = points(&[(0.0, 0.0), (11.0, 0.0)]);

    // `b` is out of range, so `a -> b` cannot start a route.
    assert_eq!(
        graph.closest_path(&index, &trajectory, 0.5),
        Err(MatchError::NoConnectedRoute)
    );

    // Every node is admissible, but `b` never reaches `c`.
    let error = get_closest_path(&graph, &index, &trajectory, 1.5)
        .expect_err("components are disconnected");
    assert_eq!(error, MatchError::NoConnectedRoute);
    assert_eq!(Error::from(error).kind(), ErrorKind::NoPathFound);
}

#[test]
fn invalid_input() {
    let (graph, _) = ladder();
    let index = ShortestPathIndex::build(&graph);
    let trajectory = hook_trajectory();

    assert_eq!(
        graph.closest_path(&index, &[], 1.0),
        Err(MatchError::EmptyTrajectory)
    );

    for radius in [0.0, -0.0, -1.0, f64::NAN, f64::NEG_INFINITY] {
        let error = graph
            .closest_path(&index, &trajectory, radius)
            .expect_err("radius is rejected");

        assert!(matches!(error, MatchError::InvalidRadius(_)));
        assert_eq!(error.kind(), ErrorKind::InvalidInput);
    }
}

#[test]
fn infinite_radius_admits_every_node() {
    let (graph, _) = ladder();
    let index = ShortestPathIndex::build(&graph);
    let trajectory = hook_trajectory();

    let unbounded = graph
        .closest_path(&index, &trajectory, f64::INFINITY)
        .expect("every node is admissible");

    // A radius of 10 already covers the whole ladder.
    assert_eq!(Ok(unbounded.clone()), graph.closest_path(&index, &trajectory, 10.0));
    assert_relative_eq!(unbounded.1, 2f64.sqrt() / 5.0, epsilon = TOLERANCE);
}

/// Two vertical edges mirrored about the trajectory `(0, 0) -> (0, 2)`,
/// built left first or right first.
fn mirrored(left_first: bool) -> (Graph, EdgeId, EdgeId) {
    let mut graph = Graph::new();
    let mut side = |x: f64| {
        let bottom = graph.add_node(Point::new(x, 0.0));
        let top = graph.add_node(Point::new(x, 2.0));
        graph.add_edge(bottom, top).expect("both nodes exist")
    };

    let (left, right) = if left_first {
        let left = side(-1.0);
        (left, side(1.0))
    } else {
        let right = side(1.0);
        (side(-1.0), right)
    };

    (graph, left, right)
}

#[test]
fn equal_candidates_resolve_to_smallest_edge_pair() {
    let trajectory = points(&[(0.0, 0.0), (0.0, 2.0)]);

    for left_first in [true, false] {
        let (graph, left, right) = mirrored(left_first);
        let index = ShortestPathIndex::build(&graph);

        let (path, d) = graph
            .closest_path(&index, &trajectory, 1.5)
            .expect("both edges are admissible");

        // Either edge lies exactly 1 from the trajectory.
        assert_eq!(d, 1.0);
        let expected = left.min(right);
        assert_eq!((path.start.edge, path.end.edge), (expected, expected));
        assert!(path.is_single_edge());
    }
}

#[test]
fn free_function_matches_trait() {
    let (graph, _) = ladder();
    let index = ShortestPathIndex::build(&graph);
    let trajectory = hook_trajectory();

    assert_eq!(
        get_closest_path(&graph, &index, &trajectory, 2.0),
        graph.closest_path(&index, &trajectory, 2.0)
    );
}

#[test]
fn concurrent_matching_on_shared_inputs() {
    let (graph, _) = ladder();
    let index = ShortestPathIndex::build(&graph);
    let trajectory = hook_trajectory();

    let expected = graph.closest_path(&index, &trajectory, 2.0);
    std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| scope.spawn(|| graph.closest_path(&index, &trajectory, 2.0)))
            .collect::<Vec<_>>();

        for handle in handles {
            assert_eq!(handle.join().expect("matcher does not panic"), expected);
        }
    });
}

#[test]
fn options_from_environment() {
    std::env::set_var(MatchOptions::RADIUS_VAR, "12.5");
    std::env::set_var(MatchOptions::ENDPOINTS_VAR, "Whole");
    std::env::set_var(IndexOptions::THRESHOLD_VAR, "3");

    let options = MatchOptions::from_env().expect("variables are well-formed");
    assert_eq!(options, MatchOptions::new(12.5).with_endpoints(Endpoints::Whole));

    let index = IndexOptions::from_env().expect("variables are well-formed");
    assert_relative_eq!(index.threshold, 3.0);

    std::env::set_var(MatchOptions::RADIUS_VAR, "wide");
    assert!(MatchOptions::from_env().is_err());

    std::env::remove_var(MatchOptions::RADIUS_VAR);
    std::env::remove_var(MatchOptions::ENDPOINTS_VAR);
    std::env::remove_var(IndexOptions::THRESHOLD_VAR);
}

#[test]
fn unset_variables_read_as_absent() {
    // Read directly, so a `.env` file in the working tree cannot interfere.
    assert_eq!(env::read::<f64>("FRECHET_TEST_NEVER_SET"), Ok(None));

    std::env::set_var("FRECHET_TEST_PADDED", " 4.5 ");
    assert_eq!(env::read::<f64>("FRECHET_TEST_PADDED"), Ok(Some(4.5)));
    std::env::remove_var("FRECHET_TEST_PADDED");
}
