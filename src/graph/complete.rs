//! Complete Euclidean graph.

use std::sync::OnceLock;

use crate::distance::DistanceTable;
use crate::error::{Error, Result};
use crate::models::{Edge, Point};

/// A complete undirected graph over `n >= 2` points with Euclidean weights.
///
/// Immutable after construction. The ascending edge list is computed on
/// first use and cached.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::Graph;
///
/// let graph = Graph::build(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]).unwrap();
/// assert_eq!(graph.size(), 3);
/// assert!((graph.distance(1, 0).unwrap() - 5.0).abs() < 1e-10);
/// assert!(graph.distance(1, 1).is_err());
///
/// let edges = graph.sorted_edges();
/// assert_eq!(edges.len(), 3);
/// assert_eq!(edges[2].pair(), [0, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    points: Vec<Point>,
    distances: DistanceTable,
    sorted_edges: OnceLock<Vec<Edge>>,
}

impl Graph {
    /// Builds a graph from `(x, y)` coordinates; point `i` gets index `i`.
    ///
    /// Fails with [`Error::InvalidInput`] for fewer than two points or any
    /// non-finite coordinate.
    pub fn build(coordinates: &[(f64, f64)]) -> Result<Self> {
        let points = coordinates
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Point::new(i, x, y))
            .collect();
        Self::from_points(points)
    }

    /// Builds a graph from points whose ids equal their positions.
    pub fn from_points(points: Vec<Point>) -> Result<Self> {
        if points.len() < 2 {
            return Err(Error::invalid_input(format!(
                "need at least 2 points, got {}",
                points.len()
            )));
        }
        for (i, p) in points.iter().enumerate() {
            if p.id() != i {
                return Err(Error::invalid_input(format!(
                    "point at position {i} has id {}",
                    p.id()
                )));
            }
            if !p.is_finite() {
                return Err(Error::invalid_input(format!(
                    "point {i} has non-finite coordinates ({}, {})",
                    p.x(),
                    p.y()
                )));
            }
        }

        let distances = DistanceTable::from_points(&points);
        Ok(Self {
            points,
            distances,
            sorted_edges: OnceLock::new(),
        })
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// The points, in index order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Distance between two distinct vertices.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if `i == j` or either index is `>= n`.
    pub fn distance(&self, i: usize, j: usize) -> Result<f64> {
        self.distances.try_get(i, j)
    }

    /// The underlying distance table.
    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// All edges in ascending weight order, ties broken by `(u, v)`.
    pub fn sorted_edges(&self) -> &[Edge] {
        self.sorted_edges.get_or_init(|| {
            let mut edges: Vec<Edge> = self.distances.edges().collect();
            // Stable sort keeps the row-major (u, v) order among equal weights.
            edges.sort_by(|a, b| a.weight().total_cmp(&b.weight()));
            edges
        })
    }
}
