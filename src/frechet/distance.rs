use crate::frechet::error::{ensure_valid, FrechetError};
use crate::primitive::distance;

use geo::{LineString, Point};

/// Computes the discrete Fréchet distance between two point sequences.
///
/// Both sequences must hold at least one point. The metric is symmetric,
/// which lets the longer sequence drive the outer loop so only a row the
/// size of the shorter one is retained.
///
/// O(nm) time, O(min(n, m)) space.
///
/// ```rust
/// use geo::Point;
/// use routers_frechet::frechet_distance;
///
/// let straight = [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(4.0, 0.0)];
/// let looping = [
///     Point::new(0.0, 0.0),
///     Point::new(4.0, 0.0),
///     Point::new(0.0, 0.0),
///     Point::new(4.0, 0.0),
/// ];
///
/// let d = frechet_distance(&straight, &looping)?;
/// assert!((d - 2.0).abs() < 1e-10);
/// # Ok::<(), routers_frechet::FrechetError>(())
/// ```
pub fn frechet_distance(a: &[Point], b: &[Point]) -> Result<f64, FrechetError> {
    ensure_valid(a, b)?;

    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    // row[j] holds dp[i][j] for the outer point currently being visited.
    let mut row = Vec::with_capacity(inner.len());
    let mut running = 0.0_f64;
    for q in inner {
        running = running.max(distance(outer[0], *q));
        row.push(running);
    }

    for p in &outer[1..] {
        // dp[i-1][j-1], carried along the row.
        let mut diagonal = row[0];
        row[0] = row[0].max(distance(*p, inner[0]));

        for j in 1..inner.len() {
            let above = row[j];
            let reachable = above.min(row[j - 1]).min(diagonal);

            diagonal = above;
            row[j] = distance(*p, inner[j]).max(reachable);
        }
    }

    Ok(row[inner.len() - 1])
}

/// Discrete Fréchet distance between polylines.
pub trait DiscreteFrechet<Rhs: ?Sized = Self> {
    fn discrete_frechet(&self, other: &Rhs) -> Result<f64, FrechetError>;
}

impl DiscreteFrechet for [Point] {
    #[inline]
    fn discrete_frechet(&self, other: &[Point]) -> Result<f64, FrechetError> {
        frechet_distance(self, other)
    }
}

impl DiscreteFrechet for LineString {
    fn discrete_frechet(&self, other: &LineString) -> Result<f64, FrechetError> {
        let a = self.points().collect::<Vec<_>>();
        let b = other.points().collect::<Vec<_>>();
        frechet_distance(&a, &b)
    }
}
