//! Geometric and graph primitives shared by the [`frechet`](crate::frechet)
//! engine and the [`matcher`](crate::matcher).

#[doc(hidden)]
pub mod edge;
#[doc(hidden)]
pub mod node;
#[doc(hidden)]
pub mod point;

#[doc(inline)]
pub use edge::Edge;
#[doc(inline)]
pub use node::Node;
#[doc(inline)]
pub use point::{distance, project};

/// Stable identifier of a [`Node`] within its [`Graph`](crate::Graph) arena.
pub type NodeId = petgraph::graph::NodeIndex;

/// Stable identifier of an [`Edge`] within its [`Graph`](crate::Graph) arena.
pub type EdgeId = petgraph::graph::EdgeIndex;
