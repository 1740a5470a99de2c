use crate::primitive::{EdgeId, NodeId};

/// A directed edge between two nodes of the same [`Graph`](crate::Graph).
///
/// Endpoints are held as identifiers into the graph arena, the edge never
/// owns its nodes. The `length` is the Euclidean distance between the
/// endpoint positions and is the weight used by the
/// [`ShortestPathIndex`](crate::ShortestPathIndex).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub length: f64,
}

impl Edge {
    /// Whether the edge starts or ends at the given node.
    #[inline]
    pub fn is_incident(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }
}
