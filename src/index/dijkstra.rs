use crate::primitive::NodeId;

use indexmap::map::Entry;
use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

type Cost = f64;

/// Insertion slot of a node within the visit map.
type Slot = usize;

/// Best known way of reaching a node.
#[derive(Debug, Clone, Copy)]
struct Visit {
    parent: Option<Slot>,
    cost: Cost,
}

/// A heap entry. Ordered in reverse so that [`BinaryHeap`] pops the
/// cheapest entry first.
#[derive(Debug)]
struct Frontier {
    cost: Cost,
    slot: Slot,
}

impl PartialEq for Frontier {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
    }
}

/// Iterator returned by [`Dijkstra::reach`], settling one node per step.
pub struct DijkstraReachable<FN> {
    frontier: BinaryHeap<Frontier>,
    settled: FxHashSet<Slot>,
    visits: IndexMap<NodeId, Visit, FxBuildHasher>,
    successors: FN,
}

/// A node settled by [`Dijkstra::reach`].
#[derive(Debug, PartialEq, Clone)]
pub struct DijkstraReachableItem {
    pub node: NodeId,
    /// The node this one was reached from, `None` for the start.
    pub parent: Option<NodeId>,
    /// Length of the shortest path from the start.
    pub total_cost: Cost,
}

impl<FN, IN> DijkstraReachable<FN>
where
    FN: FnMut(&NodeId) -> IN,
    IN: IntoIterator<Item = (NodeId, Cost)>,
{
    /// Offers `node` a path through `parent` of the given cost, queueing it
    /// when the path improves on the best known one.
    fn relax(&mut self, node: NodeId, parent: Slot, cost: Cost) {
        let visit = Visit {
            parent: Some(parent),
            cost,
        };

        let slot = match self.visits.entry(node) {
            Entry::Vacant(entry) => {
                let slot = entry.index();
                entry.insert(visit);
                slot
            }
            Entry::Occupied(mut entry) if cost < entry.get().cost => {
                entry.insert(visit);
                entry.index()
            }
            Entry::Occupied(_) => return,
        };

        self.frontier.push(Frontier { cost, slot });
    }
}

impl<FN, IN> Iterator for DijkstraReachable<FN>
where
    FN: FnMut(&NodeId) -> IN,
    IN: IntoIterator<Item = (NodeId, Cost)>,
{
    type Item = DijkstraReachableItem;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(Frontier { cost, slot }) = self.frontier.pop() {
            // Stale entries, superseded by a cheaper path, are skipped.
            if !self.settled.insert(slot) {
                continue;
            }

            let Some((&node, &visit)) = self.visits.get_index(slot) else {
                continue;
            };

            let parent = visit
                .parent
                .and_then(|parent| self.visits.get_index(parent))
                .map(|(parent, _)| *parent);

            for (successor, length) in (self.successors)(&node) {
                self.relax(successor, slot, cost + length);
            }

            return Some(DijkstraReachableItem {
                node,
                parent,
                total_cost: cost,
            });
        }

        None
    }
}

pub struct Dijkstra;

impl Dijkstra {
    /// Lazily visits every node reachable from `start`, cheapest first.
    ///
    /// `successors` yields the out-neighbours of a node with the
    /// non-negative cost of moving to each. Among equally cheap paths to a
    /// node, the first one discovered is kept.
    pub fn reach<FN, IN>(&self, start: &NodeId, successors: FN) -> DijkstraReachable<FN>
    where
        FN: FnMut(&NodeId) -> IN,
        IN: IntoIterator<Item = (NodeId, Cost)>,
    {
        let mut visits = IndexMap::with_capacity_and_hasher(64, FxBuildHasher);
        visits.insert(
            *start,
            Visit {
                parent: None,
                cost: 0.0,
            },
        );

        let mut frontier = BinaryHeap::with_capacity(256);
        frontier.push(Frontier { cost: 0.0, slot: 0 });

        DijkstraReachable {
            frontier,
            settled: FxHashSet::default(),
            visits,
            successors,
        }
    }
}
