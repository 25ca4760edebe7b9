//! Running and timing the heuristics.
//!
//! - [`Heuristic`] — Which constructor to run
//! - [`SolverConfig`] — Seed, nearest-neighbour start, Christofides settings
//! - [`solve`] — One heuristic with an injected random source
//! - [`solve_all`] — All three heuristics, in parallel with the `parallel` feature

mod config;
mod runner;
mod types;

pub use config::SolverConfig;
pub use runner::{solve, solve_all};
pub use types::{Heuristic, HeuristicRun};
