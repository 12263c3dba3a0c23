//! Property-based tests for PageRank invariants.
//!
//! Uses proptest to check mass conservation, equivalences between request
//! forms, and edge-noise insensitivity across random small graphs.

use proptest::prelude::*;
use rapid_pagerank::{
    compute_pagerank, compute_personalized_pagerank, Graph, PageRankConfig, Personalization,
};

/// Strategy for a graph on nodes `0..n` with arbitrary (possibly repeated or
/// self-looping) edges.
fn graph_strategy() -> impl Strategy<Value = Graph<u32>> {
    (1u32..10).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..30)
            .prop_map(move |edges| Graph::new((0..n).collect()).with_edges(edges))
    })
}

/// Strategy for a graph plus one of its node identifiers.
fn graph_and_node() -> impl Strategy<Value = (Graph<u32>, u32)> {
    graph_strategy().prop_flat_map(|graph| {
        let n = graph.node_count() as u32;
        (Just(graph), 0..n)
    })
}

fn reachable_from(graph: &Graph<u32>, seed: u32) -> Vec<bool> {
    let mut seen = vec![false; graph.node_count()];
    let mut stack = vec![seed];
    seen[seed as usize] = true;
    while let Some(u) = stack.pop() {
        for &(from, to) in &graph.edges {
            if from == u && !seen[to as usize] {
                seen[to as usize] = true;
                stack.push(to);
            }
        }
    }
    seen
}

proptest! {
    /// Plain PageRank returns one score in [0, 1] per node, summing to 1.
    #[test]
    fn plain_scores_are_a_distribution(graph in graph_strategy()) {
        let result = compute_pagerank(&graph, &PageRankConfig::default()).unwrap();

        prop_assert_eq!(result.scores.len(), graph.node_count());
        for &s in &result.scores {
            prop_assert!((0.0..=1.0).contains(&s));
        }
        prop_assert!((result.sum() - 1.0).abs() < 1e-6);
    }

    /// Seeded PageRank returns a distribution too.
    #[test]
    fn seeded_scores_are_a_distribution((graph, seed) in graph_and_node()) {
        let result = compute_personalized_pagerank(
            &graph,
            &Personalization::seeds([seed]),
            &PageRankConfig::default(),
        )
        .unwrap();

        prop_assert_eq!(result.scores.len(), graph.node_count());
        for &s in &result.scores {
            prop_assert!((0.0..=1.0).contains(&s));
        }
        prop_assert!((result.sum() - 1.0).abs() < 1e-6);
    }

    /// A uniform explicit vector reproduces plain PageRank.
    #[test]
    fn uniform_vector_matches_plain(graph in graph_strategy()) {
        let config = PageRankConfig::default();
        let n = graph.node_count();
        let plain = compute_pagerank(&graph, &config).unwrap();
        let uniform = compute_personalized_pagerank(
            &graph,
            &Personalization::vector(vec![1.0 / n as f64; n]),
            &config,
        )
        .unwrap();

        for (a, b) in plain.scores.iter().zip(&uniform.scores) {
            prop_assert!((a - b).abs() < 1e-6);
        }
    }

    /// A one-hot vector is the same request as a single seed.
    #[test]
    fn one_hot_matches_seed((graph, seed) in graph_and_node()) {
        let config = PageRankConfig::default();
        let mut one_hot = vec![0.0; graph.node_count()];
        one_hot[seed as usize] = 1.0;

        let by_vector =
            compute_personalized_pagerank(&graph, &Personalization::vector(one_hot), &config)
                .unwrap();
        let by_seed =
            compute_personalized_pagerank(&graph, &Personalization::seeds([seed]), &config)
                .unwrap();

        for (a, b) in by_vector.scores.iter().zip(&by_seed.scores) {
            prop_assert!((a - b).abs() < 1e-6);
        }
    }

    /// Adding self-loops and repeating existing edges changes nothing.
    #[test]
    fn edge_noise_is_ignored(graph in graph_strategy(), repeats in 1usize..4) {
        let config = PageRankConfig::default();
        let mut noisy = graph.clone();
        for node in graph.nodes.clone() {
            noisy.add_edge(node, node);
        }
        for _ in 0..repeats {
            noisy.edges.extend(graph.edges.iter().copied());
        }

        let clean = compute_pagerank(&graph, &config).unwrap();
        let dirty = compute_pagerank(&noisy, &config).unwrap();

        for (a, b) in clean.scores.iter().zip(&dirty.scores) {
            prop_assert!((a - b).abs() < 1e-12);
        }
    }

    /// Nodes with no path from the seed receive exactly zero rank.
    #[test]
    fn unreachable_nodes_get_zero((graph, seed) in graph_and_node()) {
        let result = compute_personalized_pagerank(
            &graph,
            &Personalization::seeds([seed]),
            &PageRankConfig::default(),
        )
        .unwrap();

        let reachable = reachable_from(&graph, seed);
        for (score, reached) in result.scores.iter().zip(reachable) {
            if !reached {
                prop_assert_eq!(*score, 0.0);
            }
        }
    }
}
