//! The spatial graph matched against.
//!
//! Nodes and directed edges live in a flat [petgraph](petgraph::Graph) arena
//! indexed by stable identifiers, alongside an [`RTree`](rstar::RTree) over
//! node positions used by the [`Scan`] radius queries.

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod item;
#[doc(hidden)]
pub mod scan;

#[doc(inline)]
pub use error::GraphError;
#[doc(inline)]
pub use item::{Graph, GraphStructure};
#[doc(inline)]
pub use scan::Scan;
