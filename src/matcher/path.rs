use crate::graph::{Graph, GraphError};
use crate::primitive::{project, Edge, EdgeId, NodeId};

use geo::Point;

/// An edge together with the point at which a matched route enters
/// (for a start segment) or leaves (for an end segment) it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegment {
    pub edge: EdgeId,

    /// Fraction along the edge, from source (0) to target (1).
    pub fraction: f64,

    /// The entry or exit position upon the edge.
    pub position: Point,
}

impl PathSegment {
    pub fn new(edge: EdgeId, fraction: f64, position: Point) -> Self {
        Self {
            edge,
            fraction,
            position,
        }
    }

    /// Attaches `point` to the edge at its orthogonal projection.
    pub fn projected(edge: &Edge, graph: &Graph, point: Point) -> Result<Self, GraphError> {
        let (source, target) = graph.endpoints(edge)?;
        let (fraction, position) = project(point, source, target);

        Ok(Self::new(edge.id, fraction, position))
    }

    /// The segment positioned at the edge's source.
    pub fn at_source(edge: &Edge, graph: &Graph) -> Result<Self, GraphError> {
        Ok(Self::new(edge.id, 0.0, graph.position(edge.source)?))
    }

    /// The segment positioned at the edge's target.
    pub fn at_target(edge: &Edge, graph: &Graph) -> Result<Self, GraphError> {
        Ok(Self::new(edge.id, 1.0, graph.position(edge.target)?))
    }
}

/// A contiguous route through a [`Graph`].
///
/// The route travels from [`start.position`](PathSegment::position) to the
/// end of the start edge, through every node of [`path`](Self::path) in
/// order, and from the beginning of the end edge to
/// [`end.position`](PathSegment::position).
///
/// ### Joins
///
/// Consecutive elements `(start.target, path[0])`, `(path[i], path[i + 1])`
/// and `(path[last], end.source)` are each connected by a graph edge. With
/// an empty path, the start edge's target either connects to the end
/// edge's source, or is the same node. When the start and end edges are
/// the same edge and the route enters before it leaves, the route never
/// leaves that edge (see [`MatchedPath::is_single_edge`]).
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedPath {
    pub start: PathSegment,
    pub path: Vec<NodeId>,
    pub end: PathSegment,
}

impl MatchedPath {
    pub fn new(start: PathSegment, path: Vec<NodeId>, end: PathSegment) -> Self {
        Self { start, path, end }
    }

    /// Whether the route stays on a single edge.
    #[inline]
    pub fn is_single_edge(&self) -> bool {
        self.start.edge == self.end.edge
            && self.path.is_empty()
            && self.start.fraction <= self.end.fraction
    }

    fn resolve(&self, graph: &Graph) -> Result<(Edge, Edge), GraphError> {
        let start = graph
            .edge(self.start.edge)
            .copied()
            .ok_or(GraphError::UnknownEdge(self.start.edge))?;
        let end = graph
            .edge(self.end.edge)
            .copied()
            .ok_or(GraphError::UnknownEdge(self.end.edge))?;

        Ok((start, end))
    }

    /// The fully traversed nodes, from the start edge's target to the end
    /// edge's source, with a shared join collapsed.
    fn spine(&self, start: &Edge, end: &Edge) -> Vec<NodeId> {
        let mut spine = Vec::with_capacity(self.path.len() + 2);
        spine.push(start.target);
        spine.extend_from_slice(&self.path);

        if spine.last() != Some(&end.source) {
            spine.push(end.source);
        }

        spine
    }

    /// Every node touched by the route, including the partially travelled
    /// start edge's source and end edge's target.
    pub fn nodes(&self, graph: &Graph) -> Result<Vec<NodeId>, GraphError> {
        let (start, end) = self.resolve(graph)?;
        if self.is_single_edge() {
            return Ok(vec![start.source, start.target]);
        }

        let mut nodes = vec![start.source];
        nodes.extend(self.spine(&start, &end));
        nodes.push(end.target);

        Ok(nodes)
    }

    /// The polyline traced by the route, as scored against the trajectory.
    pub fn geometry(&self, graph: &Graph) -> Result<Vec<Point>, GraphError> {
        if self.is_single_edge() {
            return Ok(vec![self.start.position, self.end.position]);
        }

        let (start, end) = self.resolve(graph)?;

        let mut geometry = Vec::with_capacity(self.path.len() + 4);
        geometry.push(self.start.position);
        geometry.extend(graph.get_line(&self.spine(&start, &end))?);
        geometry.push(self.end.position);

        Ok(geometry)
    }

    /// The identifiers of every edge traversed, in order.
    ///
    /// Fails with [`GraphError::Disconnected`] where two consecutive nodes
    /// of the route share no edge.
    pub fn edges(&self, graph: &Graph) -> Result<Vec<EdgeId>, GraphError> {
        let (start, end) = self.resolve(graph)?;
        if self.is_single_edge() {
            return Ok(vec![start.id]);
        }

        let spine = self.spine(&start, &end);

        let mut edges = Vec::with_capacity(spine.len() + 1);
        edges.push(start.id);
        for pair in spine.windows(2) {
            let edge = graph
                .edge_between(pair[0], pair[1])
                .ok_or(GraphError::Disconnected(pair[0], pair[1]))?;
            edges.push(edge.id);
        }
        edges.push(end.id);

        Ok(edges)
    }

    /// Whether every join of the route is backed by a graph edge.
    pub fn is_connected(&self, graph: &Graph) -> bool {
        self.edges(graph).is_ok()
    }
}
