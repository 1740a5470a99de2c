use crate::graph::GraphError;
use crate::primitive::{distance, Edge, EdgeId, Node, NodeId};

use geo::Point;
use petgraph::Direction;
use rstar::RTree;

use std::fmt::{Debug, Formatter};

pub type GraphStructure = petgraph::graph::DiGraph<Node, Edge>;

/// Spatial graph, owning every [`Node`] and [`Edge`].
///
/// Identifiers are handed out in insertion order and are never reused,
/// since the graph does not support removal. Every read-only accessor may
/// therefore be shared freely across threads once construction is done.
pub struct Graph {
    pub(crate) graph: GraphStructure,
    pub(crate) index: RTree<Node>,
}

impl Debug for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph with Nodes: {}, Edges: {}",
            self.graph.node_count(),
            self.graph.edge_count()
        )
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            graph: GraphStructure::new(),
            index: RTree::new(),
        }
    }

    pub fn index(&self) -> &RTree<Node> {
        &self.index
    }

    /// Number of nodes in the graph.
    pub fn size(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Inserts a node at the given position, returning its identifier.
    pub fn add_node(&mut self, position: Point) -> NodeId {
        let id = NodeId::new(self.graph.node_count());
        let node = Node::new(position, id);

        self.index.insert(node);
        self.graph.add_node(node)
    }

    /// Inserts a directed edge `source -> target`, weighted by its
    /// Euclidean length.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> Result<EdgeId, GraphError> {
        let from = self.position(source)?;
        let to = self.position(target)?;

        let edge = Edge {
            id: EdgeId::new(self.graph.edge_count()),
            source,
            target,
            length: distance(from, to),
        };

        Ok(self.graph.add_edge(source, target, edge))
    }

    /// Inserts the edge pair `a -> b` and `b -> a`, in that order.
    pub fn add_bidirectional_edge(
        &mut self,
        a: NodeId,
        b: NodeId,
    ) -> Result<(EdgeId, EdgeId), GraphError> {
        let forward = self.add_edge(a, b)?;
        let backward = self.add_edge(b, a)?;
        Ok((forward, backward))
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.graph.node_weight(id)
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.graph.edge_weight(id)
    }

    #[inline]
    pub fn position(&self, id: NodeId) -> Result<Point, GraphError> {
        self.node(id)
            .map(|node| node.position)
            .ok_or(GraphError::UnknownNode(id))
    }

    /// Resolves the positions of both endpoints of an edge.
    #[inline]
    pub fn endpoints(&self, edge: &Edge) -> Result<(Point, Point), GraphError> {
        Ok((self.position(edge.source)?, self.position(edge.target)?))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edge_weights()
    }

    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item = &Edge> {
        self.graph
            .edges_directed(node, Direction::Outgoing)
            .map(|edge| edge.weight())
    }

    pub fn incoming(&self, node: NodeId) -> impl Iterator<Item = &Edge> {
        self.graph
            .edges_directed(node, Direction::Incoming)
            .map(|edge| edge.weight())
    }

    /// The shortest edge `source -> target`, preferring the lowest id among
    /// equally long parallel edges.
    pub fn edge_between(&self, source: NodeId, target: NodeId) -> Option<&Edge> {
        self.outgoing(source)
            .filter(|edge| edge.target == target)
            .min_by(|a, b| a.length.total_cmp(&b.length).then(a.id.cmp(&b.id)))
    }

    /// Positions of the given nodes, in order.
    #[inline]
    pub fn get_line(&self, nodes: &[NodeId]) -> Result<Vec<Point>, GraphError> {
        nodes.iter().map(|node| self.position(*node)).collect()
    }
}
