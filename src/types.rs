//! Core input types: the caller-owned graph and the solver configuration.

use serde::{Deserialize, Serialize};

use crate::errors::{PageRankError, Result};

/// A directed graph over caller-chosen node identifiers.
///
/// `nodes` fixes the output order: position `i` of every rank vector
/// corresponds to `nodes[i]`. Edges may repeat and may be self-loops; both
/// are ignored during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph<K> {
    /// Unique node identifiers, in output order
    pub nodes: Vec<K>,
    /// Directed edges as `(from, to)` pairs
    pub edges: Vec<(K, K)>,
}

impl<K> Default for Graph<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<K> Graph<K> {
    /// Create a graph with the given nodes and no edges
    pub fn new(nodes: Vec<K>) -> Self {
        Self {
            nodes,
            edges: Vec::new(),
        }
    }

    /// Append edges, builder style
    pub fn with_edges(mut self, edges: impl IntoIterator<Item = (K, K)>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Append a single directed edge
    pub fn add_edge(&mut self, from: K, to: K) {
        self.edges.push((from, to));
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Solver configuration shared by standard and personalized PageRank.
///
/// Missing fields in a JSON document fall back to the defaults:
///
/// ```json
/// { "damping": 0.85, "max_iterations": 100, "tolerance": 1e-6 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Fraction of rank mass propagated along edges, in (0, 1)
    pub damping: f64,
    /// Hard cap on the number of iterations
    pub max_iterations: usize,
    /// L1 convergence threshold; also the slack allowed when checking that an
    /// explicit personalization vector sums to 1
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl PageRankConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Parse a config from JSON, filling omitted fields with defaults.
    ///
    /// The parsed config is validated before it is returned.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the damping factor and tolerance describe a well-defined
    /// contraction.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(PageRankError::InvalidDamping(self.damping));
        }
        if !(self.tolerance >= 0.0 && self.tolerance.is_finite()) {
            return Err(PageRankError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}
