//! Distance storage.
//!
//! Provides the compact upper-triangular distance table behind a [`Graph`](crate::graph::Graph).

mod table;

pub use table::DistanceTable;
