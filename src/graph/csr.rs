//! Compressed Sparse Row (CSR) graph representation
//!
//! Rows are indexed by destination: row `v` lists the predecessors of `v`.
//! That is the access pattern of a pull-style power iteration, where each
//! node gathers rank from its incoming edges.

use super::builder::GraphBuilder;

/// A normalized graph in incoming-edge CSR format
///
/// Predecessors within a row are sorted by position, so iteration order is
/// deterministic regardless of hashing.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node v's predecessors are at indices row_ptr[v]..row_ptr[v+1]
    pub row_ptr: Vec<usize>,
    /// Predecessor positions for each incoming edge
    pub col_idx: Vec<u32>,
    /// Number of distinct successors for each node
    pub out_degree: Vec<u32>,
    /// Positions with no outgoing edges
    pub dangling: Vec<u32>,
}

impl CsrGraph {
    /// Convert a GraphBuilder into incoming CSR format
    pub fn from_builder<K>(builder: &GraphBuilder<K>) -> Self {
        let num_nodes = builder.node_count();
        let mut in_degree = vec![0usize; num_nodes];
        let mut out_degree = Vec::with_capacity(num_nodes);

        for (_, node) in builder.nodes() {
            out_degree.push(node.out_degree() as u32);
            for &target in &node.successors {
                in_degree[target as usize] += 1;
            }
        }

        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        row_ptr.push(0);
        for degree in &in_degree {
            let last = row_ptr[row_ptr.len() - 1];
            row_ptr.push(last + degree);
        }

        // Sources are visited in ascending order, so each row comes out sorted.
        let mut cursor = row_ptr[..num_nodes].to_vec();
        let mut col_idx = vec![0u32; builder.edge_count()];
        for (source, node) in builder.nodes() {
            for &target in &node.successors {
                let slot = &mut cursor[target as usize];
                col_idx[*slot] = source;
                *slot += 1;
            }
        }

        let dangling = (0..num_nodes as u32)
            .filter(|&n| out_degree[n as usize] == 0)
            .collect();

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            out_degree,
            dangling,
        }
    }

    /// Predecessors of a node
    pub fn predecessors(&self, node: u32) -> &[u32] {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        &self.col_idx[start..end]
    }

    /// Get the out-degree of a node
    pub fn degree(&self, node: u32) -> u32 {
        self.out_degree[node as usize]
    }

    /// Nodes with no outgoing edges
    pub fn dangling_nodes(&self) -> &[u32] {
        &self.dangling
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of distinct directed edges
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            out_degree: Vec::new(),
            dangling: Vec::new(),
        }
    }
}
