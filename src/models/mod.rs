//! Domain model types for Euclidean TSP instances.
//!
//! Points with stable indices, weighted undirected edges, and closed tours.

mod edge;
mod point;
mod tour;

pub use edge::Edge;
pub use point::Point;
pub use tour::Tour;
