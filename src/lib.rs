//! # u-tsp
//!
//! Construction heuristics for the Euclidean travelling salesman problem:
//! nearest neighbour, cheapest link, and Christofides.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Edge, Tour)
//! - [`distance`] — Upper-triangular distance table
//! - [`graph`] — Complete graph, adjacency map, and multigraph
//! - [`constructive`] — Nearest-neighbour and cheapest-link heuristics
//! - [`christofides`] — Spanning tree, odd-vertex pairing, Eulerian circuit, shortcutting
//! - [`evaluation`] — Tour and path length
//! - [`instance`] — Random and text point sources
//! - [`solver`] — Runs and times the heuristics
//!
//! ## Example
//!
//! ```
//! use u_tsp::graph::Graph;
//! use u_tsp::solver::{solve_all, SolverConfig};
//!
//! let graph = Graph::build(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0), (2.0, 5.0)]).unwrap();
//! let runs = solve_all(&graph, &SolverConfig::default().with_seed(42)).unwrap();
//! for run in &runs {
//!     assert_eq!(run.tour.num_cities(), 5);
//! }
//! ```

pub mod christofides;
pub mod constructive;
pub mod distance;
mod error;
pub mod evaluation;
pub mod graph;
pub mod instance;
pub mod models;
pub mod solver;

pub use error::{Error, Result};
