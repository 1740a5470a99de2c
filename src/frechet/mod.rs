//! Discrete Fréchet distance.
//!
//! The Fréchet distance measures similarity between curves while respecting
//! the ordering of their points. Picture a person walking one polyline and a
//! dog walking the other, joined by a leash: both may vary their speed but
//! neither may backtrack. The discrete variant only lets them stand on
//! vertices, and the distance is the shortest leash that allows both to
//! reach the end.
//!
//! The distance is computed by the monotone-coupling dynamic program of
//! Eiter & Mannila. [`frechet_distance`] keeps a single row of the table,
//! while [`frechet_coupling`] keeps the whole table to recover the optimal
//! pairing of vertices.

#[doc(hidden)]
pub mod coupling;
#[doc(hidden)]
pub mod distance;
#[doc(hidden)]
pub mod error;

#[doc(inline)]
pub use coupling::{frechet_coupling, CoupledPair, Coupling};
#[doc(inline)]
pub use distance::{frechet_distance, DiscreteFrechet};
#[doc(inline)]
pub use error::{FrechetError, Side};
