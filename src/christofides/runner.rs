//! Christofides pipeline.

use rand::Rng;

use super::config::ChristofidesConfig;
use super::euler::eulerian_circuit;
use super::matching::greedy_matching;
use super::mst::minimum_spanning_tree;
use super::shortcut::shortcut;
use crate::error::{Error, Result};
use crate::graph::{Graph, Multigraph};
use crate::models::Tour;

/// Builds a tour with the Christofides heuristic.
///
/// Spanning tree, pairing of its odd-degree vertices, Eulerian circuit of
/// the union, then shortcutting. Circuit extraction is retried from a fresh
/// random start on a fresh copy of the multigraph, up to
/// `config.max_attempts` times.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if `config` is invalid
/// - [`Error::Construction`] if every circuit attempt fails
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::graph::Graph;
/// use u_tsp::christofides::{christofides, ChristofidesConfig};
///
/// let graph = Graph::build(&[(10.0, 10.0), (20.0, 10.0), (30.0, 30.0), (15.0, 50.0), (35.0, 35.0)])
///     .unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// let tour = christofides(&graph, &ChristofidesConfig::default(), &mut rng).unwrap();
/// assert_eq!(tour.num_cities(), 5);
/// ```
pub fn christofides<R: Rng>(graph: &Graph, config: &ChristofidesConfig, rng: &mut R) -> Result<Tour> {
    config.validate().map_err(Error::invalid_input)?;
    let n = graph.size();

    let tree = minimum_spanning_tree(graph)?;
    let odd = tree.adjacency().odd_degree_vertices();
    let matching = greedy_matching(graph, &odd, rng)?;
    let multigraph = Multigraph::from_edges(n, tree.edges().iter().chain(&matching))?;
    log::debug!(
        "christofides: n={n} tree_weight={:.3} odd={} edges={}",
        tree.weight(),
        odd.len(),
        multigraph.edge_count()
    );

    for attempt in 1..=config.max_attempts {
        let start = rng.random_range(0..n);
        let mut working = multigraph.clone();
        if config.shuffle_edge_order {
            working.shuffle_incidence(rng);
        }
        match eulerian_circuit(working, start, config.max_steps_per_attempt)? {
            Some(walk) => {
                log::debug!("christofides: circuit found attempt={attempt} start={start}");
                return shortcut(&walk, n);
            }
            None => {
                log::debug!("christofides: circuit attempt failed attempt={attempt} start={start}");
            }
        }
    }

    log::warn!(
        "christofides: no eulerian circuit after {} attempts n={n}",
        config.max_attempts
    );
    Err(Error::construction(format!(
        "no eulerian circuit found in {} attempts",
        config.max_attempts
    )))
}
