//! Tour and path length.

use crate::error::Result;
use crate::graph::Graph;
use crate::models::Tour;

/// Total length of a tour, closing leg included.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::Graph;
/// use u_tsp::models::Tour;
/// use u_tsp::evaluation::tour_length;
///
/// let graph = Graph::build(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]).unwrap();
/// let tour = Tour::new(vec![0, 1, 2, 0], 3).unwrap();
/// assert!((tour_length(&graph, &tour) - 12.0).abs() < 1e-10);
/// ```
///
/// # Panics
///
/// The tour must cover exactly the vertices of `graph`. A tour for a larger
/// graph panics on lookup; debug builds also reject a smaller one.
pub fn tour_length(graph: &Graph, tour: &Tour) -> f64 {
    debug_assert_eq!(
        tour.num_cities(),
        graph.size(),
        "tour and graph disagree on the number of cities"
    );
    let distances = graph.distances();
    tour.legs().map(|(a, b)| distances.get(a, b)).sum()
}

/// Sum of the distances between consecutive vertices of `path`.
///
/// Fails with [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange)
/// if a vertex is out of range or two consecutive entries are equal.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::Graph;
/// use u_tsp::evaluation::path_length;
///
/// let graph = Graph::build(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (20.0, 10.0)]).unwrap();
/// let length = path_length(&graph, &[1, 0, 2, 3, 1]).unwrap();
/// assert!((length - (20.0 + 2.0 * 200f64.sqrt())).abs() < 1e-10);
/// ```
pub fn path_length(graph: &Graph, path: &[usize]) -> Result<f64> {
    path.windows(2)
        .map(|w| graph.distance(w[0], w[1]))
        .sum()
}
