//! Graphs shared by the unit tests.

use crate::graph::Graph;
use crate::primitive::NodeId;

use geo::Point;

/// Two rows of three nodes, every edge bidirectional.
///
/// ```text
/// v12      v32 ---- v52        (y = 2)
///  |        |        |
/// v11 ---- v31 ---- v51        (y = 1)
/// ```
pub(crate) fn ladder() -> (Graph, [NodeId; 6]) {
    let mut graph = Graph::new();
    let v11 = graph.add_node(Point::new(1.0, 1.0));
    let v12 = graph.add_node(Point::new(1.0, 2.0));
    let v31 = graph.add_node(Point::new(3.0, 1.0));
    let v32 = graph.add_node(Point::new(3.0, 2.0));
    let v51 = graph.add_node(Point::new(5.0, 1.0));
    let v52 = graph.add_node(Point::new(5.0, 2.0));

    for (a, b) in [
        (v11, v12),
        (v11, v31),
        (v31, v32),
        (v31, v51),
        (v32, v52),
        (v51, v52),
    ] {
        graph.add_bidirectional_edge(a, b).expect("ladder nodes exist");
    }

    (graph, [v11, v12, v31, v32, v51, v52])
}

