//! Christofides tour construction.
//!
//! Composes a minimum spanning tree, a greedy pairing of its odd-degree
//! vertices, an Eulerian circuit of the combined multigraph, and shortcutting
//! of repeated visits.
//!
//! - [`minimum_spanning_tree`] — Greedy cycle-avoiding edge selection (Kruskal order)
//! - [`greedy_matching`] — Nearest-available pairing of odd-degree vertices
//! - [`eulerian_circuit`] — Backtracking edge-removal search from one start vertex
//! - [`shortcut`] — Keeps first visits to turn a closed walk into a tour
//! - [`christofides`] — The full pipeline with bounded start-vertex retries
//!
//! The pairing is an approximation of a minimum-weight perfect matching, so
//! the classic 1.5 bound is not guaranteed, but tours are usually close to it.
//!
//! # References
//!
//! - Christofides (1976), "Worst-case analysis of a new heuristic for the
//!   travelling salesman problem"
//! - Kruskal (1956), "On the shortest spanning subtree of a graph"

mod config;
mod euler;
mod matching;
mod mst;
mod runner;
mod shortcut;

pub use config::ChristofidesConfig;
pub use euler::eulerian_circuit;
pub use matching::greedy_matching;
pub use mst::{minimum_spanning_tree, SpanningTree};
pub use runner::christofides;
pub use shortcut::shortcut;
