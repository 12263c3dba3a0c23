//! PageRank algorithms
//!
//! This module provides standard and personalized PageRank over a
//! [`CsrGraph`](crate::graph::csr::CsrGraph), plus the teleport
//! distributions and per-iteration observers they use.

pub mod observer;
pub mod personalization;
pub mod personalized;
pub mod standard;

use serde::Serialize;

/// Result of a PageRank computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRankResult {
    /// Scores for each node (indexed by position)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta (L1 distance between the last two iterates)
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get top N nodes by score
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }

    /// Pair each identifier with its score, in input order.
    ///
    /// `nodes` must be the node sequence the result was computed from.
    pub fn labeled<'a, K>(&self, nodes: &'a [K]) -> Vec<(&'a K, f64)> {
        nodes.iter().zip(self.scores.iter().copied()).collect()
    }

    /// Total rank mass
    pub fn sum(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Number of scored nodes
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if there are no scores
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
