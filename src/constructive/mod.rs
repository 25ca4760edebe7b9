//! Constructive heuristics for building TSP tours.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbour walk, O(n²)
//! - [`cheapest_link_edges`] — Greedy edge selection with degree and sub-tour checks, O(n² log n)
//!
//! Christofides lives in [`crate::christofides`].

mod cheapest_link;
mod nearest_neighbor;

pub use cheapest_link::{cheapest_link_edges, cheapest_link_tour};
pub use nearest_neighbor::{nearest_neighbor_random_start, nearest_neighbor_tour};
