//! Edge-indexed undirected multigraph.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::models::Edge;

/// Undirected multigraph where every edge has its own id.
///
/// Parallel edges between the same pair of vertices are distinct edges.
/// Each vertex keeps the ids of its incident edges in a fixed order, which is
/// the order an Eulerian search tries them in.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::Multigraph;
///
/// let mut g = Multigraph::new(3);
/// g.add_edge(0, 1).unwrap();
/// g.add_edge(0, 1).unwrap();
/// assert_eq!(g.edge_count(), 2);
/// assert_eq!(g.degree(1), 2);
/// assert!(g.odd_degree_vertices().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multigraph {
    endpoints: Vec<(usize, usize)>,
    incidence: Vec<Vec<usize>>,
}

impl Multigraph {
    /// Creates a multigraph over `n` isolated vertices.
    pub fn new(n: usize) -> Self {
        Self {
            endpoints: Vec::new(),
            incidence: vec![Vec::new(); n],
        }
    }

    /// Builds a multigraph from edges; repeated pairs become parallel edges.
    pub fn from_edges<'a, I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        let mut graph = Self::new(n);
        for edge in edges {
            graph.add_edge(edge.u(), edge.v())?;
        }
        Ok(graph)
    }

    /// Adds an edge and returns its id. Self-loops are rejected.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<usize> {
        let n = self.size();
        if u >= n || v >= n {
            return Err(Error::index_out_of_range(format!(
                "edge ({u}, {v}) for {n} vertices"
            )));
        }
        if u == v {
            return Err(Error::invalid_input(format!("self-loop at vertex {u}")));
        }
        let id = self.endpoints.len();
        self.endpoints.push((u, v));
        self.incidence[u].push(id);
        self.incidence[v].push(id);
        Ok(id)
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.incidence.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Number of edges incident to `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.incidence[v].len()
    }

    /// Ids of the edges incident to `v`.
    pub fn incident(&self, v: usize) -> &[usize] {
        &self.incidence[v]
    }

    /// Endpoints of edge `id`.
    pub fn endpoints(&self, id: usize) -> (usize, usize) {
        self.endpoints[id]
    }

    /// The endpoint of edge `id` that is not `v`.
    pub fn opposite(&self, id: usize, v: usize) -> usize {
        let (a, b) = self.endpoints[id];
        if a == v {
            b
        } else {
            a
        }
    }

    /// Vertices of odd degree, ascending.
    pub fn odd_degree_vertices(&self) -> Vec<usize> {
        (0..self.size()).filter(|&v| self.degree(v) % 2 == 1).collect()
    }

    /// Randomizes the order in which each vertex lists its incident edges.
    pub fn shuffle_incidence<R: Rng>(&mut self, rng: &mut R) {
        for ids in &mut self.incidence {
            ids.shuffle(rng);
        }
    }
}
