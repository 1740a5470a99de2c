//! Closest-path map matching.
//!
//! Given a trajectory and a radius, the matcher enumerates candidate start
//! and end edges near the trajectory's first and last points, joins each
//! pair by its shortest-path skeleton, and keeps the route whose geometry
//! has the smallest [discrete Fréchet distance](crate::frechet) to the
//! trajectory.
//!
//! This is a heuristic. Only the metric is exact, the shortest-path
//! skeleton stands in for every other route between the same pair of edges.

#[doc(hidden)]
pub mod candidate;
#[doc(hidden)]
pub mod definition;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod implementation;
#[doc(hidden)]
pub mod options;
#[doc(hidden)]
pub mod path;
#[cfg(test)]
mod test;

#[doc(inline)]
pub use definition::ClosestPath;
#[doc(inline)]
pub use error::MatchError;
#[doc(inline)]
pub use implementation::get_closest_path;
#[doc(inline)]
pub use options::{Endpoints, MatchOptions};
#[doc(inline)]
pub use path::{MatchedPath, PathSegment};
