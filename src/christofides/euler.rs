//! Eulerian circuit search with backtracking.
//!
//! # Algorithm
//!
//! A depth-first walk from the start vertex. On reaching a vertex the
//! unconsumed incident edges are ordered with non-bridges first (Fleury's
//! rule): an edge whose removal would cut its far endpoint off from the
//! remaining edges is only taken when nothing else is left. An edge is
//! marked consumed before moving along it.
//!
//! If a vertex still runs out of edges while edges remain elsewhere, the
//! walk steps back, restores the edge it arrived by, and tries the next
//! candidate at the previous vertex. On a connected multigraph the bridge
//! rule means this never happens; it only matters when some edges cannot be
//! reached from the start.
//!
//! The walk is kept on an explicit stack of frames, so depth is bounded by
//! the edge count rather than the call stack. Success means every edge of
//! the original multigraph has been consumed.
//!
//! # Complexity
//!
//! Each bridge test is a graph search over the unconsumed edges, so a
//! successful walk costs O(E * (V + E)) in the worst case.

use crate::error::{Error, Result};
use crate::graph::Multigraph;

/// One vertex on the current walk.
#[derive(Debug)]
struct Frame {
    vertex: usize,
    /// Unconsumed incident edges on arrival, non-bridges first.
    candidates: Vec<usize>,
    /// Next position to try in `candidates`.
    cursor: usize,
    /// Edge the walk arrived by (`None` for the start).
    via: Option<usize>,
}

impl Frame {
    fn enter(multigraph: &Multigraph, used: &[bool], vertex: usize, via: Option<usize>) -> Self {
        let free: Vec<usize> = multigraph
            .incident(vertex)
            .iter()
            .copied()
            .filter(|&id| !used[id])
            .collect();
        let candidates = if free.len() > 1 {
            let (mut safe, bridges): (Vec<usize>, Vec<usize>) = free
                .into_iter()
                .partition(|&id| !is_bridge(multigraph, used, id, vertex));
            safe.extend(bridges);
            safe
        } else {
            free
        };
        Self {
            vertex,
            candidates,
            cursor: 0,
            via,
        }
    }
}

/// Whether taking edge `id` out of `from` would leave its far endpoint
/// unreachable from `from` over the remaining unconsumed edges.
fn is_bridge(multigraph: &Multigraph, used: &[bool], id: usize, from: usize) -> bool {
    let to = multigraph.opposite(id, from);
    let mut seen = vec![false; multigraph.size()];
    let mut stack = vec![from];
    seen[from] = true;
    while let Some(v) = stack.pop() {
        for &e in multigraph.incident(v) {
            if e == id || used[e] {
                continue;
            }
            let w = multigraph.opposite(e, v);
            if w == to {
                return false;
            }
            if !seen[w] {
                seen[w] = true;
                stack.push(w);
            }
        }
    }
    true
}

/// Searches for a closed walk from `start` that uses every edge once.
///
/// The multigraph is consumed as the attempt's working state. On success the
/// walk is returned as the vertex left along each edge, so its length equals
/// the edge count and the implicit final step returns to `start`.
///
/// Returns `Ok(None)` if the search exhausts every option or takes more than
/// `max_steps` edge traversals (0 = unlimited).
///
/// # Errors
///
/// [`Error::InvalidInput`] if `start` is out of range, the multigraph has no
/// edges, or some vertex has odd degree.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::Multigraph;
/// use u_tsp::christofides::eulerian_circuit;
///
/// // Two triangles sharing vertex 0.
/// let mut g = Multigraph::new(5);
/// for (u, v) in [(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)] {
///     g.add_edge(u, v).unwrap();
/// }
/// let walk = eulerian_circuit(g, 0, 0).unwrap().unwrap();
/// assert_eq!(walk, vec![0, 1, 2, 0, 3, 4]);
/// ```
pub fn eulerian_circuit(
    multigraph: Multigraph,
    start: usize,
    max_steps: usize,
) -> Result<Option<Vec<usize>>> {
    let n = multigraph.size();
    if start >= n {
        return Err(Error::invalid_input(format!(
            "start vertex {start} for {n} vertices"
        )));
    }
    if multigraph.edge_count() == 0 {
        return Err(Error::invalid_input("multigraph has no edges"));
    }
    if let Some(&v) = multigraph.odd_degree_vertices().first() {
        return Err(Error::invalid_input(format!(
            "vertex {v} has odd degree {}",
            multigraph.degree(v)
        )));
    }

    let mut used = vec![false; multigraph.edge_count()];
    let mut remaining = multigraph.edge_count();
    let mut steps = 0usize;
    let mut stack = vec![Frame::enter(&multigraph, &used, start, None)];

    loop {
        if remaining == 0 {
            let walk: Vec<usize> = stack[..stack.len() - 1].iter().map(|f| f.vertex).collect();
            debug_assert_eq!(stack.last().map(|f| f.vertex), Some(start));
            return Ok(Some(walk));
        }

        let Some(frame) = stack.last_mut() else {
            return Ok(None);
        };
        let vertex = frame.vertex;
        let mut next = None;
        while let Some(&id) = frame.candidates.get(frame.cursor) {
            frame.cursor += 1;
            if !used[id] {
                next = Some(id);
                break;
            }
        }

        match next {
            Some(id) => {
                if max_steps > 0 && steps >= max_steps {
                    return Ok(None);
                }
                steps += 1;
                used[id] = true;
                remaining -= 1;
                let to = multigraph.opposite(id, vertex);
                stack.push(Frame::enter(&multigraph, &used, to, Some(id)));
            }
            None => match stack.pop().and_then(|f| f.via) {
                Some(id) => {
                    used[id] = false;
                    remaining += 1;
                }
                None => return Ok(None),
            },
        }
    }
}
