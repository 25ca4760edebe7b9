//! Greedy pairing of odd-degree vertices.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::models::Edge;

/// Pairs up `vertices` greedily, approximating a minimum-weight perfect
/// matching.
///
/// The vertices are shuffled; then each unmatched vertex in turn is paired
/// with the nearest vertex still unmatched. Ties go to the vertex that comes
/// first in the shuffled pool.
///
/// # Errors
///
/// [`Error::InvalidInput`] if the count is odd or a vertex repeats,
/// [`Error::IndexOutOfRange`] if a vertex is not in the graph.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::graph::Graph;
/// use u_tsp::christofides::greedy_matching;
///
/// let graph = Graph::build(&[(0.0, 0.0), (1.0, 0.0), (100.0, 0.0), (101.0, 0.0)]).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let pairs = greedy_matching(&graph, &[0, 1, 2, 3], &mut rng).unwrap();
/// let mut pairs: Vec<[usize; 2]> = pairs.iter().map(|e| e.pair()).collect();
/// pairs.sort();
/// assert_eq!(pairs, vec![[0, 1], [2, 3]]);
/// ```
pub fn greedy_matching<R: Rng>(graph: &Graph, vertices: &[usize], rng: &mut R) -> Result<Vec<Edge>> {
    let n = graph.size();
    if vertices.len() % 2 == 1 {
        return Err(Error::invalid_input(format!(
            "cannot pair an odd number of vertices ({})",
            vertices.len()
        )));
    }
    let mut seen = vec![false; n];
    for &v in vertices {
        if v >= n {
            return Err(Error::index_out_of_range(format!(
                "vertex {v} for {n} vertices"
            )));
        }
        if seen[v] {
            return Err(Error::invalid_input(format!("vertex {v} listed twice")));
        }
        seen[v] = true;
    }

    let distances = graph.distances();
    let mut pool = vertices.to_vec();
    pool.shuffle(rng);

    let mut pairs = Vec::with_capacity(pool.len() / 2);
    while let Some(v) = pool.pop() {
        let (pos, weight) = pool
            .iter()
            .enumerate()
            .map(|(pos, &u)| (pos, distances.get(v, u)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .ok_or_else(|| Error::construction(format!("vertex {v} left without a partner")))?;
        let u = pool.remove(pos);
        pairs.push(Edge::new(v, u, weight));
    }
    Ok(pairs)
}
