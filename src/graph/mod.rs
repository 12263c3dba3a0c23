//! Graph normalization and representation
//!
//! This module turns a caller's identifier-labeled graph into the dense,
//! position-indexed structures the solver iterates over.

pub mod builder;
pub mod csr;

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::errors::Result;
use crate::types::Graph;
use builder::GraphBuilder;
use csr::CsrGraph;

/// A normalized graph plus the identifier -> position map needed to resolve
/// seed identifiers. The solver only ever touches `csr`.
#[derive(Debug, Clone)]
pub struct NormalizedGraph<K> {
    /// Incoming-edge adjacency, out-degrees, and dangling positions
    pub csr: CsrGraph,
    positions: FxHashMap<K, u32>,
}

impl<K> NormalizedGraph<K>
where
    K: Eq + Hash + Clone + Debug,
{
    pub(crate) fn new(csr: CsrGraph, positions: FxHashMap<K, u32>) -> Self {
        Self { csr, positions }
    }

    /// Normalize a graph: intern identifiers, drop self-loops, collapse
    /// parallel edges, and build incoming adjacency.
    pub fn from_graph(graph: &Graph<K>) -> Result<Self> {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!(
            "normalize",
            nodes = graph.nodes.len(),
            edges = graph.edges.len()
        )
        .entered();

        let normalized = GraphBuilder::from_graph(graph)?.finish();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            distinct_edges = normalized.csr.num_edges(),
            dangling = normalized.csr.dangling_nodes().len(),
            "graph normalized"
        );

        Ok(normalized)
    }

    /// Get a position by identifier
    pub fn position_of(&self, key: &K) -> Option<u32> {
        self.positions.get(key).copied()
    }

    /// Number of nodes
    pub fn num_nodes(&self) -> usize {
        self.csr.num_nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_keeps_map_and_structure() {
        let graph = Graph::new(vec!["x", "y"]).with_edges([("x", "y"), ("y", "y")]);
        let normalized = NormalizedGraph::from_graph(&graph).unwrap();

        assert_eq!(normalized.num_nodes(), 2);
        assert_eq!(normalized.position_of(&"y"), Some(1));
        assert_eq!(normalized.csr.predecessors(1), &[0]);
        assert_eq!(normalized.csr.dangling_nodes(), &[1]);
    }
}
