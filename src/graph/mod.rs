//! Graph structures.
//!
//! - [`Graph`] — complete Euclidean graph over a point set (immutable)
//! - [`Adjacency`] — incrementally built simple graph with cycle checks
//! - [`Multigraph`] — edge-indexed multigraph for Eulerian walks

mod adjacency;
mod complete;
mod multigraph;

pub use adjacency::Adjacency;
pub use complete::Graph;
pub use multigraph::Multigraph;
