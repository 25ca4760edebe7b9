//! Point sources for building instances.
//!
//! - [`random_points`] — Uniform integer-valued coordinates in a rectangle
//! - [`parse_points`] — One `x, y` pair per line

mod generate;
mod parse;

pub use generate::{random_points, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use parse::parse_points;
