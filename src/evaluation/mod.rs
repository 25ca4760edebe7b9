//! Tour evaluation.
//!
//! Length of a tour or of an arbitrary vertex path over a [`Graph`](crate::graph::Graph).

mod length;

pub use length::{path_length, tour_length};
