use crate::primitive::{EdgeId, NodeId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("node {0:?} does not exist in the graph")]
    UnknownNode(NodeId),

    #[error("edge {0:?} does not exist in the graph")]
    UnknownEdge(EdgeId),

    #[error("no edge connects {0:?} to {1:?}")]
    Disconnected(NodeId, NodeId),
}
