//! Upper-triangular distance table.

use crate::error::{Error, Result};
use crate::models::{Edge, Point};

/// Pairwise distances of a complete undirected graph.
///
/// Only the strict upper triangle is stored: row `i` holds the distances to
/// every `j > i`, so `rows[i][j - i - 1] == d(i, j)`. The diagonal is
/// implicit and never stored.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceTable;
///
/// let points = vec![
///     Point::new(0, 0.0, 0.0),
///     Point::new(1, 3.0, 4.0),
///     Point::new(2, 6.0, 8.0),
/// ];
/// let table = DistanceTable::from_points(&points);
/// assert!((table.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!((table.get(2, 0) - 10.0).abs() < 1e-10);
/// assert_eq!(table.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceTable {
    rows: Vec<Vec<f64>>,
    size: usize,
}

impl DistanceTable {
    /// Computes Euclidean distances between all pairs of points.
    pub fn from_points(points: &[Point]) -> Self {
        let size = points.len();
        let rows = (0..size)
            .map(|i| {
                points[i + 1..]
                    .iter()
                    .map(|other| points[i].distance_to(other))
                    .collect()
            })
            .collect();
        Self { rows, size }
    }

    /// Returns the distance between `i` and `j`, in either order.
    ///
    /// # Panics
    ///
    /// Panics if `i == j` or either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert_ne!(i, j, "distance of a vertex to itself is not stored");
        if i < j {
            self.rows[i][j - i - 1]
        } else {
            self.rows[j][i - j - 1]
        }
    }

    /// Checked variant of [`get`](Self::get).
    pub fn try_get(&self, i: usize, j: usize) -> Result<f64> {
        if i >= self.size || j >= self.size {
            return Err(Error::index_out_of_range(format!(
                "pair ({i}, {j}) for {} vertices",
                self.size
            )));
        }
        if i == j {
            return Err(Error::index_out_of_range(format!(
                "pair ({i}, {j}) is not two distinct vertices"
            )));
        }
        Ok(self.get(i, j))
    }

    /// Distances from `i` to every `j > i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All `n(n-1)/2` edges in row-major `(i, j)` order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(k, &d)| Edge::new(i, i + k + 1, d))
        })
    }

    /// Returns the unvisited vertex nearest to `from`.
    ///
    /// Scans the column above `from` (pairs `(k, from)` with `k < from`) and
    /// then its row (`(from, k)` with `k > from`), so ties resolve to the
    /// lowest index. Returns `None` when every other vertex is visited.
    pub fn nearest_unvisited(&self, from: usize, visited: &[bool]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        let column = (0..from).map(|k| (k, self.rows[k][from - k - 1]));
        let row = self
            .row(from)
            .iter()
            .enumerate()
            .map(|(offset, &d)| (from + offset + 1, d));
        for (k, d) in column.chain(row) {
            if visited[k] {
                continue;
            }
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((k, d));
            }
        }
        best.map(|(k, _)| k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(0, 0.0, 0.0),
            Point::new(1, 3.0, 4.0),
            Point::new(2, 0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_points() {
        let t = DistanceTable::from_points(&sample_points());
        assert_eq!(t.size(), 3);
        assert_eq!(t.row(0).len(), 2);
        assert_eq!(t.row(1).len(), 1);
        assert!(t.row(2).is_empty());
        assert!((t.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((t.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((t.get(1, 2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric_lookup() {
        let t = DistanceTable::from_points(&sample_points());
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    assert_eq!(t.get(i, j), t.get(j, i));
                }
            }
        }
    }

    #[test]
    fn test_try_get_errors() {
        let t = DistanceTable::from_points(&sample_points());
        assert!(matches!(t.try_get(1, 1), Err(Error::IndexOutOfRange(_))));
        assert!(matches!(t.try_get(0, 3), Err(Error::IndexOutOfRange(_))));
        assert!(matches!(t.try_get(9, 0), Err(Error::IndexOutOfRange(_))));
        assert!((t.try_get(2, 0).expect("valid") - 8.0).abs() < 1e-10);
    }

    #[test]
    #[should_panic]
    fn test_get_diagonal_panics() {
        let t = DistanceTable::from_points(&sample_points());
        t.get(1, 1);
    }

    #[test]
    fn test_edges_row_major() {
        let t = DistanceTable::from_points(&sample_points());
        let pairs: Vec<[usize; 2]> = t.edges().map(|e| e.pair()).collect();
        assert_eq!(pairs, vec![[0, 1], [0, 2], [1, 2]]);
    }

    #[test]
    fn test_nearest_unvisited() {
        let t = DistanceTable::from_points(&sample_points());
        // From 2: vertex 1 at 5.0 beats vertex 0 at 8.0 (both in the column).
        assert_eq!(t.nearest_unvisited(2, &[false, false, true]), Some(1));
        assert_eq!(t.nearest_unvisited(2, &[false, true, true]), Some(0));
        // From 1: 0 and 2 tie at 5.0, lowest index wins.
        assert_eq!(t.nearest_unvisited(1, &[false, true, false]), Some(0));
        assert_eq!(t.nearest_unvisited(0, &[true, true, true]), None);
    }
}
