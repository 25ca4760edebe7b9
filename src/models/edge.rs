//! Weighted undirected edge.

use serde::{Deserialize, Serialize};

/// An undirected edge between two distinct vertices.
///
/// Endpoints are normalized so that `u() < v()`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Edge;
///
/// let e = Edge::new(4, 2, 50.0);
/// assert_eq!(e.endpoints(), (2, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEdge")]
pub struct Edge {
    u: usize,
    v: usize,
    weight: f64,
}

#[derive(Deserialize)]
struct RawEdge {
    u: usize,
    v: usize,
    weight: f64,
}

impl From<RawEdge> for Edge {
    fn from(raw: RawEdge) -> Self {
        Edge::new(raw.u, raw.v, raw.weight)
    }
}

impl Edge {
    /// Creates an edge, ordering the endpoints.
    pub fn new(a: usize, b: usize, weight: f64) -> Self {
        let (u, v) = if a <= b { (a, b) } else { (b, a) };
        Self { u, v, weight }
    }

    /// Smaller endpoint.
    pub fn u(&self) -> usize {
        self.u
    }

    /// Larger endpoint.
    pub fn v(&self) -> usize {
        self.v
    }

    /// Edge length.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Both endpoints, smaller first.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.u, self.v)
    }

    /// Endpoints as a pair array, handy for comparing against literal edge lists.
    pub fn pair(&self) -> [usize; 2] {
        [self.u, self.v]
    }
}
