//! Random instance generation.

use rand::Rng;

/// Default width of the generation area.
pub const DEFAULT_WIDTH: u32 = 1000;

/// Default height of the generation area.
pub const DEFAULT_HEIGHT: u32 = 1000;

/// Draws `n` points with integer coordinates uniformly from
/// `[0, width] x [0, height]`.
///
/// Points may coincide; the heuristics do not require distinct locations.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::instance::{random_points, DEFAULT_HEIGHT, DEFAULT_WIDTH};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let points = random_points(25, DEFAULT_WIDTH, DEFAULT_HEIGHT, &mut rng);
/// assert_eq!(points.len(), 25);
/// ```
pub fn random_points<R: Rng>(n: usize, width: u32, height: u32, rng: &mut R) -> Vec<(f64, f64)> {
    (0..n)
        .map(|_| {
            let x = rng.random_range(0..=width);
            let y = rng.random_range(0..=height);
            (f64::from(x), f64::from(y))
        })
        .collect()
}
