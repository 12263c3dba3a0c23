//! Graph builder with identifier interning and edge deduplication
//!
//! This module maps arbitrary node identifiers onto dense `u32` positions
//! (in insertion order) and collects each node's distinct successors in an
//! FxHashSet, so parallel edges collapse and self-loops never enter.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use super::csr::CsrGraph;
use super::NormalizedGraph;
use crate::errors::{PageRankError, Result};
use crate::types::Graph;

/// A node in the graph builder
#[derive(Debug, Clone, Default)]
pub struct BuilderNode {
    /// Distinct successor positions, self excluded
    pub successors: FxHashSet<u32>,
}

impl BuilderNode {
    /// Create a node with no outgoing edges
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct successors
    pub fn out_degree(&self) -> usize {
        self.successors.len()
    }
}

/// A mutable graph builder optimized for incremental construction
#[derive(Debug)]
pub struct GraphBuilder<K> {
    /// Maps identifier -> position
    key_to_id: FxHashMap<K, u32>,
    /// Identifiers by position
    keys: Vec<K>,
    /// Node storage, indexed by position
    nodes: Vec<BuilderNode>,
    /// Number of distinct non-self-loop edges
    edge_count: usize,
}

impl<K> Default for GraphBuilder<K> {
    fn default() -> Self {
        Self {
            key_to_id: FxHashMap::default(),
            keys: Vec::new(),
            nodes: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<K> GraphBuilder<K>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            key_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            keys: Vec::with_capacity(node_capacity),
            nodes: Vec::with_capacity(node_capacity),
            edge_count: 0,
        }
    }

    /// Normalize a caller-owned graph.
    ///
    /// Positions follow `graph.nodes` order. Fails on a repeated node
    /// identifier or on an edge whose endpoint is not a node.
    pub fn from_graph(graph: &Graph<K>) -> Result<Self> {
        let mut builder = Self::with_capacity(graph.nodes.len());

        for key in &graph.nodes {
            builder.add_node(key.clone())?;
        }
        for (from, to) in &graph.edges {
            builder.add_edge(from, to)?;
        }

        Ok(builder)
    }

    /// Register a node, returning its position
    pub fn add_node(&mut self, key: K) -> Result<u32> {
        if self.key_to_id.contains_key(&key) {
            return Err(PageRankError::DuplicateNode {
                node: format!("{key:?}"),
            });
        }

        let id = self.nodes.len() as u32;
        self.key_to_id.insert(key.clone(), id);
        self.keys.push(key);
        self.nodes.push(BuilderNode::new());
        Ok(id)
    }

    /// Add a directed edge between two registered identifiers.
    ///
    /// Returns `true` if the edge was new; self-loops and repeats return
    /// `false` and leave the builder unchanged.
    pub fn add_edge(&mut self, from: &K, to: &K) -> Result<bool> {
        let from_id = self.resolve_endpoint(from)?;
        let to_id = self.resolve_endpoint(to)?;
        Ok(self.add_edge_ids(from_id, to_id))
    }

    /// Add a directed edge between two positions
    pub fn add_edge_ids(&mut self, from: u32, to: u32) -> bool {
        if from == to {
            return false; // No self-loops
        }

        let inserted = match self.nodes.get_mut(from as usize) {
            Some(node) if (to as usize) < self.keys.len() => node.successors.insert(to),
            _ => false,
        };
        if inserted {
            self.edge_count += 1;
        }
        inserted
    }

    fn resolve_endpoint(&self, key: &K) -> Result<u32> {
        self.position_of(key)
            .ok_or_else(|| PageRankError::UnknownEdgeEndpoint {
                node: format!("{key:?}"),
            })
    }

    /// Get a position by identifier
    pub fn position_of(&self, key: &K) -> Option<u32> {
        self.key_to_id.get(key).copied()
    }

    /// Get the identifier at a position
    pub fn key(&self, id: u32) -> Option<&K> {
        self.keys.get(id as usize)
    }

    /// Convert into the solver-facing representation
    pub fn finish(self) -> NormalizedGraph<K> {
        let csr = CsrGraph::from_builder(&self);
        NormalizedGraph::new(csr, self.key_to_id)
    }
}

impl<K> GraphBuilder<K> {
    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of distinct directed edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Get a node by position
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
