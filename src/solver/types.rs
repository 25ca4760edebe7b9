//! Heuristic selector and run record.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::Tour;

/// A tour construction heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heuristic {
    /// Greedy nearest-neighbour walk.
    NearestNeighbor,
    /// Greedy edge selection (cheapest link).
    CheapestLink,
    /// Spanning tree, odd-vertex pairing, Eulerian circuit, shortcutting.
    Christofides,
}

impl Heuristic {
    /// Every heuristic, in reporting order.
    pub const ALL: [Heuristic; 3] = [
        Heuristic::NearestNeighbor,
        Heuristic::CheapestLink,
        Heuristic::Christofides,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::NearestNeighbor => "Nearest Neighbour",
            Heuristic::CheapestLink => "Cheapest-link",
            Heuristic::Christofides => "Christofides",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of running one heuristic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicRun {
    /// Which heuristic produced the tour.
    pub heuristic: Heuristic,
    /// The tour.
    pub tour: Tour,
    /// Total tour length.
    pub length: f64,
    /// Wall-clock construction time, length evaluation included.
    pub elapsed: Duration,
}
