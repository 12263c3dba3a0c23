//! Standard PageRank algorithm
//!
//! Classic PageRank: teleportation and dangling-node mass are spread
//! uniformly over all nodes, and iteration starts from the uniform vector.
//! This is personalized PageRank with `p = 1/N` everywhere.

use super::observer::{NoopObserver, RankObserver};
use super::personalization::PersonalizationVector;
use super::personalized::PersonalizedPageRank;
use super::PageRankResult;
use crate::graph::csr::CsrGraph;
use crate::types::PageRankConfig;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self::from_config(&PageRankConfig::default())
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
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

    /// Run PageRank on a graph
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        self.run_with_observer(graph, &mut NoopObserver)
    }

    /// Same as [`run`](Self::run), notifying `observer` after each iteration.
    pub fn run_with_observer(
        &self,
        graph: &CsrGraph,
        observer: &mut impl RankObserver,
    ) -> PageRankResult {
        let uniform = PersonalizationVector::uniform(graph.num_nodes);
        let initial = vec![1.0 / graph.num_nodes.max(1) as f64; graph.num_nodes];

        PersonalizedPageRank {
            damping: self.damping,
            max_iterations: self.max_iterations,
            threshold: self.threshold,
        }
        .iterate(graph, uniform.as_slice(), initial, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NormalizedGraph;
    use crate::types::Graph;

    fn build_graph(nodes: Vec<&'static str>, edges: &[(&'static str, &'static str)]) -> CsrGraph {
        let graph = Graph::new(nodes).with_edges(edges.iter().copied());
        NormalizedGraph::from_graph(&graph).unwrap().csr
    }

    fn build_cycle_graph() -> CsrGraph {
        build_graph(vec!["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")])
    }

    fn build_star_graph() -> CsrGraph {
        // Three spokes all pointing at the hub
        build_graph(
            vec!["hub", "s1", "s2", "s3"],
            &[("s1", "hub"), ("s2", "hub"), ("s3", "hub")],
        )
    }

    #[test]
    fn test_cycle_graph_equal_scores() {
        let graph = build_cycle_graph();
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        // All nodes should have equal score in a symmetric graph
        let expected = 1.0 / 3.0;
        for score in &result.scores {
            assert!((score - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_star_graph_hub_highest() {
        let graph = build_star_graph();
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        let hub_score = result.scores[0];
        for &score in &result.scores[1..] {
            assert!(hub_score > score);
        }
    }

    #[test]
    fn test_all_dangling_stays_uniform() {
        let graph = build_graph(vec!["a", "b", "c", "d"], &[]);
        let result = StandardPageRank::new().run(&graph);

        for score in &result.scores {
            assert!((score - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_scores_sum_to_one() {
        let graph = build_star_graph();
        let result = StandardPageRank::new().run(&graph);

        assert!((result.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_graph() {
        let graph = CsrGraph::default();
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let graph = build_star_graph();
        let pr = StandardPageRank::new()
            .with_max_iterations(1)
            .with_threshold(0.0); // Never converge

        let result = pr.run(&graph);

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
    }

    #[test]
    fn test_damping_factor() {
        let graph = build_star_graph();

        // Lower damping = more teleportation = more uniform scores
        let result_low = StandardPageRank::new().with_damping(0.5).run(&graph);
        let result_high = StandardPageRank::new().with_damping(0.95).run(&graph);

        let hub_advantage_low = result_low.scores[0] - result_low.scores[1];
        let hub_advantage_high = result_high.scores[0] - result_high.scores[1];

        assert!(hub_advantage_high > hub_advantage_low);
    }

    #[test]
    fn test_top_n() {
        let graph = build_star_graph();
        let result = StandardPageRank::new().run(&graph);

        let top_2 = result.top_n(2);
        assert_eq!(top_2.len(), 2);
        // Hub should be first
        assert_eq!(top_2[0].0, 0);
    }
}
