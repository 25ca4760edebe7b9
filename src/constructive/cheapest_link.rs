//! Cheapest-link (greedy edge) tour construction.
//!
//! # Algorithm
//!
//! Scan all edges in ascending length. Accept an edge unless it would give
//! a city a third neighbour or close a cycle over fewer than all cities.
//! After `n - 1` acceptances the edges form a Hamiltonian path; joining its
//! two ends closes the tour.
//!
//! Only an edge whose endpoints are both already attached can close a
//! cycle, so the cycle walk runs only in that case.
//!
//! # Complexity
//!
//! O(n² log n) for sorting the edges, plus O(n) per cycle check.

use crate::error::{Error, Result};
use crate::graph::{Adjacency, Graph};
use crate::models::{Edge, Tour};

/// Returns the `n - 1` edges accepted by the cheapest-link heuristic, in
/// acceptance order.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::Graph;
/// use u_tsp::constructive::cheapest_link_edges;
///
/// let graph = Graph::build(&[(0.0, 0.0), (1.0, 0.0), (3.0, 0.0)]).unwrap();
/// let edges = cheapest_link_edges(&graph).unwrap();
/// let pairs: Vec<[usize; 2]> = edges.iter().map(|e| e.pair()).collect();
/// assert_eq!(pairs, vec![[0, 1], [1, 2]]);
/// ```
pub fn cheapest_link_edges(graph: &Graph) -> Result<Vec<Edge>> {
    let n = graph.size();
    let mut adjacency = Adjacency::new(n);
    let mut accepted = Vec::with_capacity(n - 1);

    for edge in graph.sorted_edges() {
        if accepted.len() == n - 1 {
            break;
        }
        let (u, v) = edge.endpoints();
        if adjacency.degree(u) >= 2 || adjacency.degree(v) >= 2 {
            continue;
        }

        let both_attached = adjacency.degree(u) > 0 && adjacency.degree(v) > 0;
        adjacency.add_edge(u, v);
        if both_attached && adjacency.closes_cycle(u) {
            adjacency.remove_edge(u, v);
            continue;
        }
        accepted.push(*edge);
    }

    if accepted.len() != n - 1 {
        return Err(Error::construction(format!(
            "cheapest link accepted {} of {} edges",
            accepted.len(),
            n - 1
        )));
    }
    Ok(accepted)
}

/// Builds a tour with the cheapest-link heuristic.
pub fn cheapest_link_tour(graph: &Graph) -> Result<Tour> {
    let edges = cheapest_link_edges(graph)?;
    Tour::from_path_edges(&edges, graph.size())
}
