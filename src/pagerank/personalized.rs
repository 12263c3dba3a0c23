//! Personalized PageRank (PPR) algorithm
//!
//! PPR uses a custom teleport distribution instead of uniform teleportation.
//! Each iteration computes, for every node `v`,
//!
//! ```text
//! R'[v] = (1 - d) p[v] + d * dangling(R) * p[v] + d * sum_{u -> v} R[u] / outdeg(u)
//! ```
//!
//! where `dangling(R)` is the mass currently resting on nodes with no
//! outgoing edges. Routing that mass through `p` keeps the total at 1.

use super::observer::{NoopObserver, RankObserver};
use super::personalization::PersonalizationVector;
use super::PageRankResult;
use crate::graph::csr::CsrGraph;
use crate::types::PageRankConfig;

/// Personalized PageRank implementation
#[derive(Debug, Clone)]
pub struct PersonalizedPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold
    pub threshold: f64,
}

impl Default for PersonalizedPageRank {
    fn default() -> Self {
        Self::from_config(&PageRankConfig::default())
    }
}

impl PersonalizedPageRank {
    /// Create a new PersonalizedPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a shared config
    pub fn from_config(config: &PageRankConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.tolerance,
        }
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

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run Personalized PageRank on a graph, starting from the
    /// personalization vector itself.
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &CsrGraph, personalization: &PersonalizationVector) -> PageRankResult {
        self.run_with_observer(graph, personalization, &mut NoopObserver)
    }

    /// Same as [`run`](Self::run), notifying `observer` after each iteration.
    pub fn run_with_observer(
        &self,
        graph: &CsrGraph,
        personalization: &PersonalizationVector,
        observer: &mut impl RankObserver,
    ) -> PageRankResult {
        let initial = personalization.as_slice().to_vec();
        self.iterate(graph, personalization.as_slice(), initial, observer)
    }

    /// Power iteration from an arbitrary starting vector.
    ///
    /// `p` and `initial` must both have `graph.num_nodes` entries.
    pub(crate) fn iterate(
        &self,
        graph: &CsrGraph,
        p: &[f64],
        initial: Vec<f64>,
        observer: &mut impl RankObserver,
    ) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            let result = PageRankResult::new(vec![], 0, 0.0, true);
            observer.on_finish(&result);
            return result;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!(
            "power_iteration",
            nodes = n,
            edges = graph.num_edges(),
            damping = self.damping
        )
        .entered();

        // Hot loop divides by out-degree; precompute the reciprocals once
        let inv_out_degree: Vec<f64> = graph
            .out_degree
            .iter()
            .map(|&d| if d > 0 { 1.0 / d as f64 } else { 0.0 })
            .collect();

        let mut scores = initial;
        let mut new_scores = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::INFINITY;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;

            // Calculate dangling mass (goes to personalization distribution)
            let dangling_mass: f64 = graph
                .dangling_nodes()
                .iter()
                .map(|&d| scores[d as usize])
                .sum();
            let teleport_scale = (1.0 - self.damping) + self.damping * dangling_mass;

            // Gather rank along incoming edges
            for (node, new_score) in new_scores.iter_mut().enumerate() {
                let inflow: f64 = graph
                    .predecessors(node as u32)
                    .iter()
                    .map(|&u| scores[u as usize] * inv_out_degree[u as usize])
                    .sum();
                *new_score = teleport_scale * p[node] + self.damping * inflow;
            }

            // Calculate convergence delta (L1 norm)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            // Swap buffers
            std::mem::swap(&mut scores, &mut new_scores);
            observer.on_iteration(iterations, delta);

            if delta < self.threshold {
                converged = true;
                break;
            }
        }

        // Normalize scores (they should already sum to ~1, but ensure numerical stability)
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        #[cfg(feature = "tracing")]
        {
            if converged {
                tracing::debug!(iterations, delta, "pagerank converged");
            } else {
                tracing::warn!(
                    iterations,
                    delta,
                    threshold = self.threshold,
                    "pagerank stopped at iteration budget without converging"
                );
            }
        }

        let result = PageRankResult::new(scores, iterations, delta, converged);
        observer.on_finish(&result);
        result
    }
}
