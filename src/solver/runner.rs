//! Heuristic execution.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::SolverConfig;
use super::types::{Heuristic, HeuristicRun};
use crate::christofides::christofides;
use crate::constructive::{cheapest_link_tour, nearest_neighbor_random_start, nearest_neighbor_tour};
use crate::error::{Error, Result};
use crate::evaluation::tour_length;
use crate::graph::Graph;

/// Runs one heuristic and times it.
///
/// `config.seed` is ignored here; randomness comes from `rng`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::graph::Graph;
/// use u_tsp::solver::{solve, Heuristic, SolverConfig};
///
/// let graph = Graph::build(&[(1.0, 1.0), (10.0, 1.0), (10.0, 10.0), (20.0, 20.0), (100.0, 50.0)])
///     .unwrap();
/// let config = SolverConfig::default().with_start(0);
/// let mut rng = StdRng::seed_from_u64(42);
/// let run = solve(&graph, Heuristic::NearestNeighbor, &config, &mut rng).unwrap();
/// assert_eq!(run.tour.vertices(), &[0, 1, 2, 3, 4, 0]);
/// ```
pub fn solve<R: Rng>(
    graph: &Graph,
    heuristic: Heuristic,
    config: &SolverConfig,
    rng: &mut R,
) -> Result<HeuristicRun> {
    let started = Instant::now();
    let tour = match heuristic {
        Heuristic::NearestNeighbor => match config.start {
            Some(start) => nearest_neighbor_tour(graph, start)?,
            None => nearest_neighbor_random_start(graph, rng)?,
        },
        Heuristic::CheapestLink => cheapest_link_tour(graph)?,
        Heuristic::Christofides => christofides(graph, &config.christofides, rng)?,
    };
    let length = tour_length(graph, &tour);
    let elapsed = started.elapsed();

    log::debug!(
        "solver.run: done heuristic={heuristic} n={} length={length:.3} elapsed_ms={:.3}",
        graph.size(),
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(HeuristicRun {
        heuristic,
        tour,
        length,
        elapsed,
    })
}

/// Runs every heuristic in [`Heuristic::ALL`] order.
///
/// Each heuristic gets its own random source derived from the seed, so the
/// results do not depend on whether the runs are sequential or parallel.
pub fn solve_all(graph: &Graph, config: &SolverConfig) -> Result<Vec<HeuristicRun>> {
    config.validate().map_err(Error::invalid_input)?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let heuristics: &[Heuristic] = &Heuristic::ALL;

    let run_one = |(idx, &heuristic): (usize, &Heuristic)| {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(idx as u64));
        solve(graph, heuristic, config, &mut rng)
    };

    #[cfg(feature = "parallel")]
    let runs: Vec<HeuristicRun> = heuristics
        .par_iter()
        .enumerate()
        .map(run_one)
        .collect::<Result<_>>()?;
    #[cfg(not(feature = "parallel"))]
    let runs: Vec<HeuristicRun> = heuristics
        .iter()
        .enumerate()
        .map(run_one)
        .collect::<Result<_>>()?;

    log::info!(
        "solver: n={} seed={seed} {}",
        graph.size(),
        runs.iter()
            .map(|r| format!("{}={:.3}", r.heuristic, r.length))
            .collect::<Vec<_>>()
            .join(" ")
    );
    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> Graph {
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
    fn test_solve_each_heuristic() {
        let g = graph();
        let config = SolverConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        for heuristic in Heuristic::ALL {
            let run = solve(&g, heuristic, &config, &mut rng).expect("run");
            assert_eq!(run.heuristic, heuristic);
            assert_eq!(run.tour.num_cities(), 6);
            assert!((run.length - tour_length(&g, &run.tour)).abs() < 1e-10);
        }
    }

    #[test]
    fn test_solve_bad_start() {
        let g = graph();
        let config = SolverConfig::default().with_start(6);
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            solve(&g, Heuristic::NearestNeighbor, &config, &mut rng),
            Err(Error::IndexOutOfRange(_))
        ));
    }

    #[test]
    fn test_solve_all_order_and_reproducibility() {
        let g = graph();
        let config = SolverConfig::default().with_seed(7);
        let a = solve_all(&g, &config).expect("runs");
        let b = solve_all(&g, &config).expect("runs");
        let order: Vec<Heuristic> = a.iter().map(|r| r.heuristic).collect();
        assert_eq!(order, Heuristic::ALL.to_vec());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.tour, y.tour);
            assert_eq!(x.length, y.length);
        }
    }

    #[test]
    fn test_solve_all_invalid_config() {
        let g = graph();
        let config = SolverConfig::default().with_christofides(
            crate::christofides::ChristofidesConfig::default().with_max_attempts(0),
        );
        assert!(matches!(solve_all(&g, &config), Err(Error::InvalidInput(_))));
    }
}
