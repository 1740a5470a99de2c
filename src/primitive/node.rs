use geo::Point;
use rstar::{PointDistance, RTreeObject, AABB};

use crate::primitive::NodeId;

/// A graph vertex: a stable identifier and the [`Point`] it sits at.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub position: Point,
}

impl Node {
    pub fn new(position: Point, id: NodeId) -> Self {
        Self { id, position }
    }
}

/// Squared Euclidean, as `rstar` compares against the squared radius.
impl PointDistance for Node {
    fn distance_2(&self, point: &Point) -> f64 {
        let delta = self.position - *point;
        delta.x() * delta.x() + delta.y() * delta.y()
    }
}

impl RTreeObject for Node {
    type Envelope = AABB<Point>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}
