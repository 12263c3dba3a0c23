//! Entry points over caller-owned graphs.
//!
//! Both operations validate everything (config, graph, personalization)
//! before the first iteration and never return a partial result alongside
//! an error. Scores come back in `graph.nodes` order.

use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::Result;
use crate::graph::NormalizedGraph;
use crate::pagerank::observer::{NoopObserver, RankObserver};
use crate::pagerank::personalization::{resolve as resolve_personalization, Personalization};
use crate::pagerank::personalized::PersonalizedPageRank;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::PageRankResult;
use crate::types::{Graph, PageRankConfig};

/// Plain PageRank with uniform teleportation.
///
/// ```
/// use rapid_pagerank::{compute_pagerank, Graph, PageRankConfig};
///
/// let graph = Graph::new(vec![1, 2, 3]).with_edges([(1, 2), (2, 3), (3, 1)]);
/// let result = compute_pagerank(&graph, &PageRankConfig::default()).unwrap();
/// assert!((result.sum() - 1.0).abs() < 1e-6);
/// ```
pub fn compute_pagerank<K>(graph: &Graph<K>, config: &PageRankConfig) -> Result<PageRankResult>
where
    K: Eq + Hash + Clone + Debug,
{
    compute_pagerank_with_observer(graph, config, &mut NoopObserver)
}

/// [`compute_pagerank`] with a per-iteration observer.
pub fn compute_pagerank_with_observer<K>(
    graph: &Graph<K>,
    config: &PageRankConfig,
    observer: &mut impl RankObserver,
) -> Result<PageRankResult>
where
    K: Eq + Hash + Clone + Debug,
{
    config.validate()?;
    let normalized = NormalizedGraph::from_graph(graph)?;

    Ok(StandardPageRank::from_config(config).run_with_observer(&normalized.csr, observer))
}

/// PageRank biased toward a seed set or an explicit teleport distribution.
///
/// An explicit vector must be aligned with `graph.nodes` and sum to 1 within
/// `config.tolerance`.
pub fn compute_personalized_pagerank<K>(
    graph: &Graph<K>,
    personalization: &Personalization<K>,
    config: &PageRankConfig,
) -> Result<PageRankResult>
where
    K: Eq + Hash + Clone + Debug,
{
    compute_personalized_pagerank_with_observer(graph, personalization, config, &mut NoopObserver)
}

/// [`compute_personalized_pagerank`] with a per-iteration observer.
pub fn compute_personalized_pagerank_with_observer<K>(
    graph: &Graph<K>,
    personalization: &Personalization<K>,
    config: &PageRankConfig,
    observer: &mut impl RankObserver,
) -> Result<PageRankResult>
where
    K: Eq + Hash + Clone + Debug,
{
    config.validate()?;
    let normalized = NormalizedGraph::from_graph(graph)?;
    let p = resolve_personalization(&normalized, personalization, config.tolerance)?;

    Ok(PersonalizedPageRank::from_config(config).run_with_observer(&normalized.csr, &p, observer))
}
