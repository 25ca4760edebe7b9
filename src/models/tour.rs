//! Closed tour type.

use serde::{Deserialize, Serialize};

use super::Edge;
use crate::error::{Error, Result};
use crate::graph::Adjacency;

/// A closed tour over `n` vertices.
///
/// Stored as `n + 1` vertex indices: the first and last entries are equal and
/// the `n` entries before the closing one are a permutation of `0..n`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1, 2], 3).unwrap();
/// assert_eq!(tour.num_cities(), 3);
/// assert_eq!(tour.start(), 2);
/// assert!(Tour::new(vec![0, 1, 1, 0], 3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTour")]
pub struct Tour {
    vertices: Vec<usize>,
}

/// Unchecked wire form of [`Tour`].
#[derive(Deserialize)]
struct RawTour {
    vertices: Vec<usize>,
}

impl TryFrom<RawTour> for Tour {
    type Error = Error;

    /// Validates against `n = len - 1` vertices.
    fn try_from(raw: RawTour) -> Result<Self> {
        let n = raw
            .vertices
            .len()
            .checked_sub(1)
            .ok_or_else(|| Error::invalid_input("tour has no vertices"))?;
        Self::new(raw.vertices, n)
    }
}

impl Tour {
    /// Creates a tour, validating it against `n` vertices.
    pub fn new(vertices: Vec<usize>, n: usize) -> Result<Self> {
        validate(&vertices, n).map_err(Error::invalid_input)?;
        Ok(Self { vertices })
    }

    /// Like [`Tour::new`], but reports a violation as a construction failure.
    pub(crate) fn constructed(vertices: Vec<usize>, n: usize) -> Result<Self> {
        validate(&vertices, n).map_err(Error::construction)?;
        Ok(Self { vertices })
    }

    /// Converts a Hamiltonian path, given as its `n - 1` edges, into a tour.
    ///
    /// The walk starts at the lowest-indexed degree-1 vertex, follows the
    /// path to the other end, and returns to the start.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::models::{Edge, Tour};
    ///
    /// let edges = [Edge::new(0, 1, 1.0), Edge::new(0, 2, 1.0), Edge::new(2, 3, 1.0)];
    /// let tour = Tour::from_path_edges(&edges, 4).unwrap();
    /// assert_eq!(tour.vertices(), &[1, 0, 2, 3, 1]);
    /// ```
    pub fn from_path_edges(edges: &[Edge], n: usize) -> Result<Self> {
        if n < 2 || edges.len() != n - 1 {
            return Err(Error::construction(format!(
                "a path over {n} vertices needs {} edges, got {}",
                n.saturating_sub(1),
                edges.len()
            )));
        }

        let adjacency = Adjacency::from_edges(n, edges)?;
        if let Some(v) = (0..n).find(|&v| adjacency.degree(v) > 2) {
            return Err(Error::construction(format!(
                "vertex {v} has degree {} in a path",
                adjacency.degree(v)
            )));
        }
        let start = adjacency
            .leaves()
            .next()
            .ok_or_else(|| Error::construction("path has no endpoint"))?;

        let mut vertices = Vec::with_capacity(n + 1);
        vertices.push(start);
        let mut prev = start;
        let mut current = start;
        while vertices.len() < n {
            let next = adjacency
                .neighbours(current)
                .iter()
                .copied()
                .find(|&w| w != prev)
                .ok_or_else(|| {
                    Error::construction(format!(
                        "path ends at vertex {current} after {} of {n} vertices",
                        vertices.len()
                    ))
                })?;
            vertices.push(next);
            prev = current;
            current = next;
        }
        vertices.push(start);

        Self::constructed(vertices, n)
    }

    /// The vertex sequence, including the closing return to the start.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Number of entries, `n + 1`.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false` for a validated tour.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of distinct cities visited, `n`.
    pub fn num_cities(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// First (and last) vertex.
    pub fn start(&self) -> usize {
        self.vertices[0]
    }

    /// Consecutive vertex pairs, closing edge included.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Checks the closed-permutation shape of a tour over `n` vertices.
fn validate(vertices: &[usize], n: usize) -> std::result::Result<(), String> {
    if n < 2 {
        return Err(format!("a tour needs at least 2 vertices, got {n}"));
    }
    if vertices.len() != n + 1 {
        return Err(format!(
            "tour over {n} vertices must have {} entries, got {}",
            n + 1,
            vertices.len()
        ));
    }
    if vertices[0] != vertices[n] {
        return Err(format!(
            "tour is not closed: starts at {} but ends at {}",
            vertices[0], vertices[n]
        ));
    }
    let mut seen = vec![false; n];
    for &v in &vertices[..n] {
        if v >= n {
            return Err(format!("vertex {v} out of range for {n} vertices"));
        }
        if seen[v] {
            return Err(format!("vertex {v} visited twice"));
        }
        seen[v] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_valid() {
        let t = Tour::new(vec![0, 2, 1, 3, 0], 4).expect("valid");
        assert_eq!(t.len(), 5);
        assert_eq!(t.num_cities(), 4);
        assert_eq!(t.start(), 0);
        assert!(!t.is_empty());
        assert_eq!(t.legs().collect::<Vec<_>>(), vec![(0, 2), (2, 1), (1, 3), (3, 0)]);
    }

    #[test]
    fn test_tour_rejects_bad_shapes() {
        assert!(Tour::new(vec![0, 1, 2], 3).is_err()); // not closed, too short
        assert!(Tour::new(vec![0, 1, 2, 1], 3).is_err()); // not closed
        assert!(Tour::new(vec![0, 1, 1, 0], 3).is_err()); // duplicate
        assert!(Tour::new(vec![0, 5, 1, 0], 3).is_err()); // out of range
        assert!(Tour::new(vec![0, 0], 1).is_err()); // too few vertices
    }

    #[test]
    fn test_tour_error_kind() {
        let err = Tour::new(vec![0, 1, 1, 0], 3).expect_err("duplicate");
        assert!(matches!(err, Error::InvalidInput(_)));
        let err = Tour::constructed(vec![0, 1, 1, 0], 3).expect_err("duplicate");
        assert!(matches!(err, Error::Construction(_)));
    }

    #[test]
    fn test_deserialize_validates() {
        let t: Tour = serde_json::from_str(r#"{"vertices":[1,0,2,1]}"#).expect("valid");
        assert_eq!(t.num_cities(), 3);
        assert_eq!(t.start(), 1);

        assert!(serde_json::from_str::<Tour>(r#"{"vertices":[0,1,1,7]}"#).is_err());
        assert!(serde_json::from_str::<Tour>(r#"{"vertices":[]}"#).is_err());
        assert!(serde_json::from_str::<Tour>(r#"{"vertices":[0]}"#).is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let t = Tour::new(vec![2, 0, 1, 2], 3).expect("valid");
        let json = serde_json::to_string(&t).expect("serialize");
        assert_eq!(json, r#"{"vertices":[2,0,1,2]}"#);
        assert_eq!(serde_json::from_str::<Tour>(&json).expect("valid"), t);
    }

    #[test]
    fn test_from_path_edges() {
        let edges = [
            Edge::new(0, 1, 0.0),
            Edge::new(0, 2, 0.0),
            Edge::new(2, 3, 0.0),
        ];
        let t = Tour::from_path_edges(&edges, 4).expect("path");
        assert_eq!(t.vertices(), &[1, 0, 2, 3, 1]);
    }

    #[test]
    fn test_from_path_edges_two_vertices() {
        let t = Tour::from_path_edges(&[Edge::new(0, 1, 1.0)], 2).expect("path");
        assert_eq!(t.vertices(), &[0, 1, 0]);
    }

    #[test]
    fn test_from_path_edges_rejects_non_path() {
        // Star: vertex 0 has degree 3.
        let star = [
            Edge::new(0, 1, 0.0),
            Edge::new(0, 2, 0.0),
            Edge::new(0, 3, 0.0),
        ];
        assert!(Tour::from_path_edges(&star, 4).is_err());

        // Triangle plus an isolated vertex: no endpoint to start from.
        let cycle = [
            Edge::new(0, 1, 0.0),
            Edge::new(1, 2, 0.0),
            Edge::new(0, 2, 0.0),
        ];
        assert!(Tour::from_path_edges(&cycle, 4).is_err());

        // Wrong edge count.
        assert!(Tour::from_path_edges(&star[..2], 4).is_err());
    }
}
