use crate::frechet::frechet_distance;
use crate::graph::Graph;
use crate::index::PathLookup;
use crate::matcher::candidate::Admissible;
use crate::matcher::*;
use crate::primitive::Edge;

use geo::Point;
use itertools::Itertools;
use log::{debug, info};
use measure_time::debug_time;
#[cfg(feature = "tracing")]
use tracing::Level;

/// Finds the route through `graph` closest to `trajectory`.
///
/// See [`ClosestPath::closest_path`].
pub fn get_closest_path<L: PathLookup>(
    graph: &Graph,
    index: &L,
    trajectory: &[Point],
    radius: f64,
) -> Result<(MatchedPath, f64), MatchError> {
    graph.closest_path(index, trajectory, radius)
}

impl ClosestPath for Graph {
    fn closest_path<L: PathLookup>(
        &self,
        index: &L,
        trajectory: &[Point],
        radius: f64,
    ) -> Result<(MatchedPath, f64), MatchError> {
        self.closest_path_with(index, trajectory, &MatchOptions::new(radius))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::INFO))]
    fn closest_path_with<L: PathLookup>(
        &self,
        index: &L,
        trajectory: &[Point],
        options: &MatchOptions,
    ) -> Result<(MatchedPath, f64), MatchError> {
        let radius = options.radius;
        if radius.is_nan() || radius <= 0.0 {
            return Err(MatchError::InvalidRadius(radius));
        }

        let (Some(first), Some(last)) = (trajectory.first(), trajectory.last()) else {
            return Err(MatchError::EmptyTrajectory);
        };

        debug_time!("Closest path search");
        info!(
            "Finding closest path for {} positions within {radius}",
            trajectory.len()
        );

        let admissible = Admissible::scan(self, trajectory, radius);
        if admissible.is_empty() {
            return Err(MatchError::NoAdmissibleNodes { radius });
        }

        let starts = admissible.starts(self, first);
        let ends = admissible.ends(self, last);
        debug!(
            "{} admissible nodes, {} start and {} end candidates",
            admissible.len(),
            starts.len(),
            ends.len()
        );

        let mut best: Option<(MatchedPath, f64)> = None;

        // Both candidate lists are ordered by identifier, so pairs are
        // visited lexicographically and a tie keeps the earlier pair.
        for (start, end) in starts.iter().cartesian_product(ends.iter()) {
            let Some(candidate) =
                self.candidate(index, start, end, (*first, *last), options, &admissible)?
            else {
                continue;
            };

            let geometry = candidate.geometry(self)?;
            let distance = frechet_distance(&geometry, trajectory)?;
            debug!(
                "Candidate {:?} -> {:?} via {} nodes scored {distance}",
                start.id,
                end.id,
                candidate.path.len()
            );

            if best.as_ref().map_or(true, |(_, score)| distance < *score) {
                best = Some((candidate, distance));
            }
        }

        let (path, distance) = best.ok_or(MatchError::NoConnectedRoute)?;
        info!(
            "Matched {:?} -> {:?} at distance {distance}",
            path.start.edge, path.end.edge
        );

        Ok((path, distance))
    }
}

impl Graph {
    /// Assembles the route for a single `(start, end)` edge pair, or `None`
    /// when the pair has no admissible skeleton.
    fn candidate<L: PathLookup>(
        &self,
        index: &L,
        start: &Edge,
        end: &Edge,
        (first, last): (Point, Point),
        options: &MatchOptions,
        admissible: &Admissible,
    ) -> Result<Option<MatchedPath>, MatchError> {
        let (entry, exit) = match options.endpoints {
            Endpoints::Projected => (
                PathSegment::projected(start, self, first)?,
                PathSegment::projected(end, self, last)?,
            ),
            Endpoints::Whole => (
                PathSegment::at_source(start, self)?,
                PathSegment::at_target(end, self)?,
            ),
        };

        if start.id == end.id && entry.fraction <= exit.fraction {
            return Ok(Some(MatchedPath::new(entry, vec![], exit)));
        }

        let Some(route) = index.lookup(start.target, end.source) else {
            debug!(
                "No route {:?} -> {:?}, skipping {:?} -> {:?}",
                start.target, end.source, start.id, end.id
            );
            return Ok(None);
        };

        let path = route.interior();
        if let Some(outside) = path.iter().find(|node| !admissible.contains(**node)) {
            debug!(
                "Skeleton {:?} -> {:?} leaves the radius at {outside:?}",
                start.id, end.id
            );
            return Ok(None);
        }

        Ok(Some(MatchedPath::new(entry, path.to_vec(), exit)))
    }
}
