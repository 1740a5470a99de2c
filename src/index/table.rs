use crate::graph::Graph;
use crate::index::Dijkstra;
use crate::primitive::NodeId;

use log::warn;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// An entry of a [`ShortestPathTable`]: the node preceding some target on
/// the shortest path from the table source, and the distance to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Predecessor {
    pub node: NodeId,
    pub distance: f64,
}

impl Predecessor {
    /// The sentinel for a node with no path from the source: the node
    /// precedes itself at infinite distance.
    #[inline]
    pub const fn unreachable(node: NodeId) -> Self {
        Self {
            node,
            distance: f64::INFINITY,
        }
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Single-source shortest paths from [`source`](Self::source).
///
/// Only reachable nodes are stored, every other node resolves to the
/// [unreachable](Predecessor::unreachable) sentinel. The source maps to
/// itself at distance zero.
#[derive(Debug, Clone)]
pub struct ShortestPathTable {
    source: NodeId,
    entries: FxHashMap<NodeId, Predecessor>,
}

impl ShortestPathTable {
    /// Runs a [`Dijkstra`] from `source` over the graph's Euclidean edge
    /// lengths, recording every node reached within `threshold`.
    pub fn compute(graph: &Graph, source: NodeId, threshold: f64) -> Self {
        let entries = Dijkstra
            .reach(&source, |node| {
                graph
                    .outgoing(*node)
                    .map(|edge| (edge.target, edge.length))
                    .collect::<SmallVec<[(NodeId, f64); 4]>>()
            })
            .take_while(|reached| reached.node == source || reached.total_cost <= threshold)
            .map(|reached| {
                let predecessor = Predecessor {
                    node: reached.parent.unwrap_or(reached.node),
                    distance: reached.total_cost,
                };

                (reached.node, predecessor)
            })
            .collect::<FxHashMap<_, _>>();

        Self { source, entries }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Number of reachable nodes, including the source.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The predecessor of `node`, or the unreachable sentinel.
    #[inline]
    pub fn get(&self, node: NodeId) -> Predecessor {
        self.entries
            .get(&node)
            .copied()
            .unwrap_or(Predecessor::unreachable(node))
    }

    #[inline]
    pub fn distance(&self, node: NodeId) -> f64 {
        self.get(node).distance
    }

    #[inline]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.get(node).is_reachable()
    }

    /// Follows predecessors back from `target`, returning the ordered chain
    /// `source, …, target`, or `None` when the sentinel is hit first.
    pub fn chain(&self, target: NodeId) -> Option<Vec<NodeId>> {
        let mut chain = vec![target];
        let mut current = target;

        while current != self.source {
            let predecessor = self.get(current);
            if !predecessor.is_reachable() || predecessor.node == current {
                return None;
            }

            // A well-formed chain visits each stored node at most once.
            if chain.len() > self.entries.len() {
                warn!(
                    "Predecessor cycle walking {:?} -> {:?}, abandoning lookup",
                    self.source, target
                );
                return None;
            }

            current = predecessor.node;
            chain.push(current);
        }

        chain.reverse();
        Some(chain)
    }
}
