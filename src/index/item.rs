use crate::graph::Graph;
use crate::index::{IndexOptions, PathLookup, Route, ShortestPathTable};
use crate::primitive::NodeId;

use log::info;
use measure_time::debug_time;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use rustc_hash::FxHashMap;

use std::fmt::{Debug, Formatter};
#[cfg(feature = "tracing")]
use tracing::Level;

/// One [`ShortestPathTable`] per node of a [`Graph`].
///
/// Built once, read-only thereafter. The index is not invalidated when the
/// graph changes, and must be rebuilt by the caller if it does.
pub struct ShortestPathIndex {
    tables: FxHashMap<NodeId, ShortestPathTable>,
    options: IndexOptions,
}

impl Debug for ShortestPathIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ShortestPathIndex with Tables: {}", self.tables.len())
    }
}

impl ShortestPathIndex {
    /// Builds an unbounded index over every node of the graph.
    pub fn build(graph: &Graph) -> Self {
        Self::build_with(graph, IndexOptions::default())
    }

    /// Builds an index, computing the per-source tables in parallel.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::INFO, skip(graph)))]
    pub fn build_with(graph: &Graph, options: IndexOptions) -> Self {
        debug_time!("Shortest-path index construction");

        let tables = graph
            .nodes()
            .map(|node| node.id)
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|source| {
                let table = ShortestPathTable::compute(graph, source, options.threshold);
                (source, table)
            })
            .collect::<FxHashMap<_, _>>();

        info!(
            "Indexed shortest paths from {} sources (threshold: {})",
            tables.len(),
            options.threshold
        );

        ShortestPathIndex { tables, options }
    }

    #[inline]
    pub fn table(&self, source: NodeId) -> Option<&ShortestPathTable> {
        self.tables.get(&source)
    }

    pub fn tables(&self) -> impl Iterator<Item = &ShortestPathTable> {
        self.tables.values()
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl PathLookup for ShortestPathIndex {
    fn lookup(&self, source: NodeId, target: NodeId) -> Option<Route> {
        let table = self.table(source)?;
        let nodes = table.chain(target)?;

        Some(Route {
            distance: table.distance(target),
            nodes,
        })
    }
}
