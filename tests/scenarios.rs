//! Fixed instances with known heuristic output.

use rand::rngs::StdRng;
use rand::SeedableRng;
use u_tsp::christofides::{
    christofides, eulerian_circuit, greedy_matching, minimum_spanning_tree, shortcut,
    ChristofidesConfig,
};
use u_tsp::constructive::{cheapest_link_edges, cheapest_link_tour, nearest_neighbor_tour};
use u_tsp::evaluation::{path_length, tour_length};
use u_tsp::graph::{Graph, Multigraph};
use u_tsp::instance::parse_points;
use u_tsp::models::{Edge, Tour};
use u_tsp::solver::{solve_all, Heuristic, SolverConfig};
use u_tsp::Error;

fn pairs(edges: &[Edge]) -> Vec<[usize; 2]> {
    edges.iter().map(|e| e.pair()).collect()
}

fn six_points() -> Graph {
    Graph::build(&[
        (10.0, 10.0),
        (110.0, 10.0),
        (50.0, 500.0),
        (110.0, 500.0),
        (50.0, 550.0),
        (10.0, 1000.0),
    ])
    .expect("valid")
}

#[test]
fn nearest_neighbor_five_points_from_zero() {
    let graph = Graph::build(&[(1.0, 1.0), (10.0, 1.0), (10.0, 10.0), (20.0, 20.0), (100.0, 50.0)])
        .expect("valid");
    let tour = nearest_neighbor_tour(&graph, 0).expect("tour");
    assert_eq!(tour.vertices(), &[0, 1, 2, 3, 4, 0]);
}

#[test]
fn cheapest_link_six_points_edge_set() {
    let edges = cheapest_link_edges(&six_points()).expect("edges");
    assert_eq!(pairs(&edges), vec![[2, 4], [2, 3], [0, 1], [4, 5], [1, 3]]);
}

#[test]
fn cheapest_link_tour_is_the_closed_path() {
    let graph = six_points();
    let tour = cheapest_link_tour(&graph).expect("tour");
    let edges = cheapest_link_edges(&graph).expect("edges");
    let path_weight: f64 = edges.iter().map(Edge::weight).sum();
    let closing = graph.distance(0, 5).expect("valid");
    assert!((tour_length(&graph, &tour) - (path_weight + closing)).abs() < 1e-9);
}

#[test]
fn spanning_tree_four_points_and_path_length() {
    let graph = Graph::build(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (20.0, 10.0)])
        .expect("valid");
    let tree = minimum_spanning_tree(&graph).expect("tree");
    assert_eq!(pairs(tree.edges()), vec![[0, 1], [1, 2], [2, 3]]);

    let length = path_length(&graph, &[1, 0, 2, 3, 1]).expect("valid");
    assert!((length - (20.0 + 2.0 * 200f64.sqrt())).abs() < 1e-10);

    let tour = Tour::new(vec![1, 0, 2, 3, 1], 4).expect("valid");
    assert_eq!(tour_length(&graph, &tour), tour_length(&graph, &tour));
}

#[test]
fn christofides_pipeline_by_hand() {
    let graph = Graph::build(&[(10.0, 10.0), (20.0, 10.0), (30.0, 30.0), (15.0, 50.0), (35.0, 35.0)])
        .expect("valid");
    let mut rng = StdRng::seed_from_u64(42);

    let tree = minimum_spanning_tree(&graph).expect("tree");
    let odd = tree.adjacency().odd_degree_vertices();
    assert_eq!(odd.len() % 2, 0);

    let matching = greedy_matching(&graph, &odd, &mut rng).expect("pairs");
    assert_eq!(matching.len(), odd.len() / 2);

    let multigraph =
        Multigraph::from_edges(graph.size(), tree.edges().iter().chain(&matching)).expect("valid");
    assert!(multigraph.odd_degree_vertices().is_empty());

    let walk = (0..graph.size())
        .find_map(|start| eulerian_circuit(multigraph.clone(), start, 0).expect("even"))
        .expect("some start succeeds");
    assert_eq!(walk.len(), multigraph.edge_count());

    let tour = shortcut(&walk, graph.size()).expect("tour");
    assert_eq!(tour.num_cities(), 5);
}

#[test]
fn christofides_reports_exhausted_attempts() {
    let graph = six_points();
    let config = ChristofidesConfig::default()
        .with_max_attempts(2)
        .with_max_steps_per_attempt(1);
    let mut rng = StdRng::seed_from_u64(0);
    let err = christofides(&graph, &config, &mut rng).expect_err("capped");
    assert!(matches!(err, Error::Construction(_)));
}

#[test]
fn parsed_points_feed_all_heuristics() {
    let input = "10, 10\n110, 10\n50, 500\n110, 500\n50, 550\n10, 1000\n";
    let graph = Graph::build(&parse_points(input).expect("parse")).expect("valid");
    let runs = solve_all(&graph, &SolverConfig::default().with_seed(1).with_start(0))
        .expect("runs");
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[0].heuristic, Heuristic::NearestNeighbor);
    assert_eq!(runs[1].tour.vertices(), &[0, 1, 3, 2, 4, 5, 0]);
    for run in &runs {
        assert!(run.length > 0.0);
    }
}

#[test]
fn heuristic_run_serializes_to_json() {
    let graph = six_points();
    let runs = solve_all(&graph, &SolverConfig::default().with_seed(3)).expect("runs");
    let json = serde_json::to_string(&runs[1]).expect("serialize");
    assert!(json.contains("\"heuristic\":\"CheapestLink\""));
    assert!(json.contains("\"vertices\":[0,1,3,2,4,5,0]"));
}

#[test]
fn invalid_inputs_are_rejected() {
    assert!(matches!(Graph::build(&[(0.0, 0.0)]), Err(Error::InvalidInput(_))));
    assert!(matches!(
        Graph::build(&[(0.0, 0.0), (f64::NAN, 0.0)]),
        Err(Error::InvalidInput(_))
    ));
    let graph = six_points();
    assert!(matches!(graph.distance(3, 3), Err(Error::IndexOutOfRange(_))));
    assert!(matches!(graph.distance(0, 6), Err(Error::IndexOutOfRange(_))));
}
