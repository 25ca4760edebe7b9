//! Adjacency map used while edges are accepted one at a time.

use crate::error::{Error, Result};
use crate::models::Edge;

/// Simple undirected graph as per-vertex neighbour lists.
///
/// A vertex with degree 0 has not been touched yet. Neighbour lists keep
/// insertion order.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::Adjacency;
///
/// let mut adj = Adjacency::new(4);
/// adj.add_edge(0, 1);
/// adj.add_edge(1, 2);
/// assert_eq!(adj.degree(1), 2);
/// assert!(adj.connects(0, 2));
/// assert!(!adj.connects(0, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    neighbours: Vec<Vec<usize>>,
}

impl Adjacency {
    /// Creates an adjacency map over `n` isolated vertices.
    pub fn new(n: usize) -> Self {
        Self {
            neighbours: vec![Vec::new(); n],
        }
    }

    /// Builds the adjacency of an edge list.
    pub fn from_edges(n: usize, edges: &[Edge]) -> Result<Self> {
        let mut adjacency = Self::new(n);
        for edge in edges {
            if edge.v() >= n {
                return Err(Error::index_out_of_range(format!(
                    "edge ({}, {}) for {n} vertices",
                    edge.u(),
                    edge.v()
                )));
            }
            adjacency.add_edge(edge.u(), edge.v());
        }
        Ok(adjacency)
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.neighbours.len()
    }

    /// Number of neighbours of `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.neighbours[v].len()
    }

    /// Neighbours of `v` in insertion order.
    pub fn neighbours(&self, v: usize) -> &[usize] {
        &self.neighbours[v]
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.neighbours.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Vertices of degree 1, ascending.
    pub fn leaves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.size()).filter(|&v| self.degree(v) == 1)
    }

    /// Vertices of odd degree, ascending.
    pub fn odd_degree_vertices(&self) -> Vec<usize> {
        (0..self.size()).filter(|&v| self.degree(v) % 2 == 1).collect()
    }

    /// Adds the edge `{u, v}`.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.neighbours[u].push(v);
        self.neighbours[v].push(u);
    }

    /// Removes one occurrence of the edge `{u, v}`. Returns `false` if absent.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        let Some(pos_u) = self.neighbours[u].iter().position(|&w| w == v) else {
            return false;
        };
        let Some(pos_v) = self.neighbours[v].iter().position(|&w| w == u) else {
            return false;
        };
        self.neighbours[u].remove(pos_u);
        self.neighbours[v].remove(pos_v);
        true
    }

    /// Walks from `start` through a graph of maximum degree 2 and reports
    /// whether the walk comes back to `start`.
    ///
    /// The walk never steps back to the vertex it just left and stops at the
    /// first dead end.
    pub fn closes_cycle(&self, start: usize) -> bool {
        let mut prev = start;
        let mut current = start;
        for _ in 0..self.size() {
            let next = self.neighbours[current].iter().copied().find(|&w| w != prev);
            match next {
                None => return false,
                Some(w) if w == start => return true,
                Some(w) => {
                    prev = current;
                    current = w;
                }
            }
        }
        false
    }

    /// Returns `true` if a path joins `from` and `to`.
    pub fn connects(&self, from: usize, to: usize) -> bool {
        if from == to {
            return true;
        }
        let mut seen = vec![false; self.size()];
        let mut stack = vec![from];
        seen[from] = true;
        while let Some(v) = stack.pop() {
            for &w in &self.neighbours[v] {
                if w == to {
                    return true;
                }
                if !seen[w] {
                    seen[w] = true;
                    stack.push(w);
                }
            }
        }
        false
    }
}
