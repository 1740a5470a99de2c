use crate::primitive::{Edge, Node};

use geo::Point;

/// Trait containing utility functions to find nodes and edges upon a root structure.
pub trait Scan {
    /// Returns an unsorted iterator of [`Node`] references whose Euclidean
    /// distance to `point` is at most `radius`.
    ///
    /// ### Note
    /// Unlike a square-scan, this is a circular scan: every returned node
    /// lies within the radius, and every node within the radius is returned.
    fn scan_nodes<'a>(&'a self, point: &Point, radius: f64) -> impl Iterator<Item = &'a Node>;

    /// Searches for, and returns a reference to nearest node from the origin [point](Point).
    /// This node may not exist, and therefore the return type is optional.
    fn scan_node(&self, point: Point) -> Option<&Node>;

    /// Every edge which starts or ends at a node returned by
    /// [`Scan::scan_nodes`], without duplicates and ordered by identifier.
    fn scan_edges<'a>(&'a self, point: &Point, radius: f64) -> Vec<&'a Edge>;
}
