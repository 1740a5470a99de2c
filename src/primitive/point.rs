use geo::{Distance, Euclidean, Line, LineLocatePoint, Point};

/// The Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    Euclidean.distance(a, b)
}

/// Orthogonally projects `point` onto the segment `source -> target`.
///
/// Returns the fraction along the segment, clamped to `[0, 1]`, and the
/// projected position. A zero-length segment projects onto its source.
pub fn project(point: Point, source: Point, target: Point) -> (f64, Point) {
    let line = Line::new(source, target);

    let fraction = line
        .line_locate_point(&point)
        .filter(|fraction| fraction.is_finite())
        .map(|fraction| fraction.clamp(0.0, 1.0))
        .unwrap_or(0.0);

    (fraction, Point::from(line.start + line.delta() * fraction))
}
