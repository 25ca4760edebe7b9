//! Minimum spanning tree by greedy edge selection.

use crate::error::{Error, Result};
use crate::graph::{Adjacency, Graph};
use crate::models::Edge;

/// A spanning tree: its edges in acceptance order and its adjacency map.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    adjacency: Adjacency,
}

impl SpanningTree {
    /// Tree edges, in the order they were accepted.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Adjacency map of the tree.
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Total edge weight.
    pub fn weight(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }

    /// Splits the tree into its edges and adjacency map.
    pub fn into_parts(self) -> (Vec<Edge>, Adjacency) {
        (self.edges, self.adjacency)
    }
}

/// Builds a minimum spanning tree.
///
/// Edges are taken in ascending order (ties by index) and accepted unless
/// both endpoints are already joined by a path. Stops after `n - 1` edges.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::Graph;
/// use u_tsp::christofides::minimum_spanning_tree;
///
/// let graph = Graph::build(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (20.0, 10.0)]).unwrap();
/// let tree = minimum_spanning_tree(&graph).unwrap();
/// let pairs: Vec<[usize; 2]> = tree.edges().iter().map(|e| e.pair()).collect();
/// assert_eq!(pairs, vec![[0, 1], [1, 2], [2, 3]]);
/// ```
pub fn minimum_spanning_tree(graph: &Graph) -> Result<SpanningTree> {
    let n = graph.size();
    let mut adjacency = Adjacency::new(n);
    let mut edges = Vec::with_capacity(n - 1);

    for edge in graph.sorted_edges() {
        if edges.len() == n - 1 {
            break;
        }
        let (u, v) = edge.endpoints();
        let both_attached = adjacency.degree(u) > 0 && adjacency.degree(v) > 0;
        if both_attached && adjacency.connects(u, v) {
            continue;
        }
        adjacency.add_edge(u, v);
        edges.push(*edge);
    }

    if edges.len() != n - 1 {
        return Err(Error::construction(format!(
            "spanning tree has {} of {} edges",
            edges.len(),
            n - 1
        )));
    }
    Ok(SpanningTree { edges, adjacency })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mst_four_points() {
        let g = Graph::build(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (20.0, 10.0)])
            .expect("valid");
        let tree = minimum_spanning_tree(&g).expect("tree");
        let pairs: Vec<[usize; 2]> = tree.edges().iter().map(|e| e.pair()).collect();
        assert_eq!(pairs, vec![[0, 1], [1, 2], [2, 3]]);

        let adj = tree.adjacency();
        assert_eq!(adj.neighbours(0), &[1]);
        assert_eq!(adj.neighbours(1), &[0, 2]);
        assert_eq!(adj.neighbours(2), &[1, 3]);
        assert_eq!(adj.neighbours(3), &[2]);
        assert!((tree.weight() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_mst_allows_high_degree() {
        // Hub at the origin with four spokes.
        let g = Graph::build(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (0.0, 10.0),
            (-10.0, 0.0),
            (0.0, -10.0),
        ])
        .expect("valid");
        let tree = minimum_spanning_tree(&g).expect("tree");
        assert_eq!(tree.edges().len(), 4);
        assert_eq!(tree.adjacency().degree(0), 4);
        assert!((tree.weight() - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_mst_skips_cycle_edges() {
        // Square: the fourth side of length 10 would close a cycle.
        let g = Graph::build(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
            .expect("valid");
        let (edges, adj) = minimum_spanning_tree(&g).expect("tree").into_parts();
        let pairs: Vec<[usize; 2]> = edges.iter().map(|e| e.pair()).collect();
        assert_eq!(pairs, vec![[0, 1], [0, 3], [1, 2]]);
        assert_eq!(adj.edge_count(), 3);
    }
}
