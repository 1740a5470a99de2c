use crate::graph::scan::definition::Scan;
use crate::graph::Graph;
use crate::primitive::{Edge, Node};

use geo::Point;
use itertools::Itertools;

#[cfg(feature = "tracing")]
use tracing::Level;

impl Scan for Graph {
    #[inline]
    fn scan_nodes<'a>(&'a self, point: &Point, radius: f64) -> impl Iterator<Item = &'a Node> {
        self.index().locate_within_distance(*point, radius * radius)
    }

    #[inline]
    fn scan_node(&self, point: Point) -> Option<&Node> {
        self.index.nearest_neighbor(&point)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip(self)))]
    fn scan_edges<'a>(&'a self, point: &Point, radius: f64) -> Vec<&'a Edge> {
        self.scan_nodes(point, radius)
            .flat_map(|node| self.outgoing(node.id).chain(self.incoming(node.id)))
            .sorted_by_key(|edge| edge.id)
            .dedup_by(|a, b| a.id == b.id)
            .collect()
    }
}
