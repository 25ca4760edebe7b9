//! Text point lists.

use crate::error::{Error, Result};

/// Parses one point per line as `x, y`.
///
/// The two coordinates may be separated by a comma, whitespace, or both.
/// Blank lines and lines starting with `#` are skipped.
///
/// # Examples
///
/// ```
/// use u_tsp::instance::parse_points;
///
/// let points = parse_points("1, 1\n10, 1\n\n10 10\n").unwrap();
/// assert_eq!(points, vec![(1.0, 1.0), (10.0, 1.0), (10.0, 10.0)]);
/// ```
pub fn parse_points(input: &str) -> Result<Vec<(f64, f64)>> {
    let mut points = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty());
        let x_s = fields
            .next()
            .ok_or_else(|| Error::invalid_input(format!("line {}: missing x", idx + 1)))?;
        let y_s = fields
            .next()
            .ok_or_else(|| Error::invalid_input(format!("line {}: missing y", idx + 1)))?;
        if fields.next().is_some() {
            return Err(Error::invalid_input(format!(
                "line {}: expected 'x, y' but got extra fields: {line}",
                idx + 1
            )));
        }

        let x: f64 = x_s.parse().map_err(|_| {
            Error::invalid_input(format!("line {}: invalid x: {x_s}", idx + 1))
        })?;
        let y: f64 = y_s.parse().map_err(|_| {
            Error::invalid_input(format!("line {}: invalid y: {y_s}", idx + 1))
        })?;
        points.push((x, y));
    }
    Ok(points)
}
