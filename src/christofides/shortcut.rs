//! Shortcutting a closed walk into a tour.

use crate::error::{Error, Result};
use crate::models::Tour;

/// Keeps the first visit to each vertex of `walk` and closes the result.
///
/// Fails with [`Error::Construction`] if the walk misses any of the `n`
/// vertices, or [`Error::IndexOutOfRange`] if it names one outside `0..n`.
///
/// # Examples
///
/// ```
/// use u_tsp::christofides::shortcut;
///
/// let tour = shortcut(&[0, 1, 2, 1, 3, 2, 4], 5).unwrap();
/// assert_eq!(tour.vertices(), &[0, 1, 2, 3, 4, 0]);
/// ```
pub fn shortcut(walk: &[usize], n: usize) -> Result<Tour> {
    let mut seen = vec![false; n];
    let mut sequence = Vec::with_capacity(n + 1);
    for &v in walk {
        if v >= n {
            return Err(Error::index_out_of_range(format!(
                "walk vertex {v} for {n} vertices"
            )));
        }
        if !seen[v] {
            seen[v] = true;
            sequence.push(v);
        }
    }
    let first = *sequence
        .first()
        .ok_or_else(|| Error::construction("cannot shortcut an empty walk"))?;
    sequence.push(first);
    Tour::constructed(sequence, n)
}
