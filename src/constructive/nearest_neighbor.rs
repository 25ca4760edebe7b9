//! Nearest-neighbour tour construction.
//!
//! Starting from a chosen city, repeatedly move to the closest city not yet
//! visited, then return to the start.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.
//!
//! # Reference
//!
//! The simplest constructive TSP heuristic. Tours are typically about 25%
//! above optimal on random Euclidean instances.

use rand::Rng;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::models::Tour;

/// Builds a tour with the nearest-neighbour heuristic from `start`.
///
/// Ties between equally near cities go to the lowest index.
///
/// # Errors
///
/// - [`Error::IndexOutOfRange`] if `start >= graph.size()`
/// - [`Error::Construction`] if no unvisited city is found before the tour
///   is complete (unreachable on a complete graph)
///
/// # Examples
///
/// ```
/// use u_tsp::graph::Graph;
/// use u_tsp::constructive::nearest_neighbor_tour;
///
/// let graph = Graph::build(&[(0.0, 0.0), (3.0, 0.0), (1.0, 0.0), (2.0, 0.0)]).unwrap();
/// let tour = nearest_neighbor_tour(&graph, 0).unwrap();
/// assert_eq!(tour.vertices(), &[0, 2, 3, 1, 0]);
/// ```
pub fn nearest_neighbor_tour(graph: &Graph, start: usize) -> Result<Tour> {
    let n = graph.size();
    if start >= n {
        return Err(Error::index_out_of_range(format!(
            "start vertex {start} for {n} vertices"
        )));
    }

    let distances = graph.distances();
    let mut visited = vec![false; n];
    visited[start] = true;
    let mut sequence = Vec::with_capacity(n + 1);
    sequence.push(start);

    let mut current = start;
    for _ in 1..n {
        let next = distances
            .nearest_unvisited(current, &visited)
            .ok_or_else(|| {
                Error::construction(format!(
                    "no unvisited vertex reachable from {current} after {} of {n} vertices",
                    sequence.len()
                ))
            })?;
        visited[next] = true;
        sequence.push(next);
        current = next;
    }
    sequence.push(start);

    Tour::constructed(sequence, n)
}

/// Builds a nearest-neighbour tour from a uniformly random start.
pub fn nearest_neighbor_random_start<R: Rng>(graph: &Graph, rng: &mut R) -> Result<Tour> {
    let start = rng.random_range(0..graph.size());
    nearest_neighbor_tour(graph, start)
}
