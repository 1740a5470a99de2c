use crate::index::PathLookup;
use crate::matcher::{MatchError, MatchOptions, MatchedPath};

use geo::Point;

pub trait ClosestPath {
    /// Finds the route whose geometry is closest, by discrete Fréchet
    /// distance, to the given trajectory.
    ///
    /// Every node fully traversed by the returned route lies within
    /// `radius` of some trajectory point. The returned distance is exactly
    /// the Fréchet distance between [`MatchedPath::geometry`] and the
    /// trajectory. Equally distant candidates resolve to the one with the
    /// lexicographically smallest `(start edge, end edge)` identifiers.
    fn closest_path<L: PathLookup>(
        &self,
        index: &L,
        trajectory: &[Point],
        radius: f64,
    ) -> Result<(MatchedPath, f64), MatchError>;

    /// As [`ClosestPath::closest_path`], with explicit [`MatchOptions`].
    fn closest_path_with<L: PathLookup>(
        &self,
        index: &L,
        trajectory: &[Point],
        options: &MatchOptions,
    ) -> Result<(MatchedPath, f64), MatchError>;
}
