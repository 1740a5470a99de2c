//! Precomputed single-source shortest paths over a [`Graph`](crate::Graph).
//!
//! The matcher only ever consumes the [`PathLookup`] surface. The
//! [`ShortestPathIndex`] is the reference implementation, holding one
//! [`ShortestPathTable`] of predecessors and distances per source node.

#[doc(hidden)]
pub mod dijkstra;
#[doc(hidden)]
pub mod item;
#[doc(hidden)]
pub mod options;
#[doc(hidden)]
pub mod table;

#[doc(inline)]
pub use dijkstra::{Dijkstra, DijkstraReachable, DijkstraReachableItem};
#[doc(inline)]
pub use item::ShortestPathIndex;
#[doc(inline)]
pub use options::IndexOptions;
#[doc(inline)]
pub use table::{Predecessor, ShortestPathTable};

use crate::primitive::NodeId;

/// A resolved shortest path between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Total length of the route.
    pub distance: f64,

    /// The ordered chain `source, …, target`.
    /// Contains only the source when it is also the target.
    pub nodes: Vec<NodeId>,
}

impl Route {
    /// The nodes strictly between the source and the target.
    pub fn interior(&self) -> &[NodeId] {
        match self.nodes.len() {
            0..=2 => &[],
            len => &self.nodes[1..len - 1],
        }
    }
}

/// Read-only query surface over precomputed shortest paths.
pub trait PathLookup {
    /// Resolves the shortest route from `source` to `target`.
    ///
    /// Returns `None` when `target` is unreachable from `source`, or either
    /// node is unknown to the index.
    fn lookup(&self, source: NodeId, target: NodeId) -> Option<Route>;
}
