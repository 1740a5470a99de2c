use crate::graph::{Graph, Scan};
use crate::primitive::{Edge, NodeId};

use geo::Point;
use rustc_hash::FxHashSet;

/// The nodes within the search radius of at least one trajectory point.
#[derive(Debug, Default)]
pub struct Admissible {
    nodes: FxHashSet<NodeId>,
    radius: f64,
}

impl Admissible {
    pub fn scan(graph: &Graph, trajectory: &[Point], radius: f64) -> Self {
        let nodes = trajectory
            .iter()
            .flat_map(|point| graph.scan_nodes(point, radius))
            .map(|node| node.id)
            .collect::<FxHashSet<_>>();

        Self { nodes, radius }
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Edges near `point` on which a route may begin, ordered by
    /// identifier. The edge's target is the first node the route fully
    /// reaches, so it must itself be admissible.
    pub fn starts<'a>(&self, graph: &'a Graph, point: &Point) -> Vec<&'a Edge> {
        graph
            .scan_edges(point, self.radius)
            .into_iter()
            .filter(|edge| self.contains(edge.target))
            .collect()
    }

    /// Edges near `point` on which a route may finish, ordered by
    /// identifier. The edge's source must be admissible.
    pub fn ends<'a>(&self, graph: &'a Graph, point: &Point) -> Vec<&'a Edge> {
        graph
            .scan_edges(point, self.radius)
            .into_iter()
            .filter(|edge| self.contains(edge.source))
            .collect()
    }
}
