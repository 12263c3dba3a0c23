//! Personalization (teleport) distributions
//!
//! A personalization request is either a seed set, turned into the uniform
//! distribution over the seed positions, or an explicit vector that must
//! already be a probability distribution. Both resolve to a validated
//! [`PersonalizationVector`] before any solving starts.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::errors::{PageRankError, Result};
use crate::graph::NormalizedGraph;

/// How the random walk teleports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Personalization<K> {
    /// Uniform over the listed nodes
    Seeds(Vec<K>),
    /// Explicit distribution, aligned with the graph's node order
    Vector(Vec<f64>),
}

impl<K> Personalization<K> {
    /// Build a seed-set request
    pub fn seeds(seeds: impl IntoIterator<Item = K>) -> Self {
        Self::Seeds(seeds.into_iter().collect())
    }

    /// Build an explicit-vector request
    pub fn vector(weights: impl Into<Vec<f64>>) -> Self {
        Self::Vector(weights.into())
    }
}

/// A validated teleport distribution: non-negative, one entry per node,
/// summing to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalizationVector(Vec<f64>);

impl PersonalizationVector {
    /// The uniform distribution over `n` nodes
    pub fn uniform(n: usize) -> Self {
        if n == 0 {
            return Self(Vec::new());
        }
        Self(vec![1.0 / n as f64; n])
    }

    /// Probability mass per position
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the vector has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the underlying weights
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

/// Resolve a personalization request against a normalized graph.
///
/// `tolerance` is the slack allowed when checking that an explicit vector
/// sums to 1.
pub fn resolve<K>(
    graph: &NormalizedGraph<K>,
    personalization: &Personalization<K>,
    tolerance: f64,
) -> Result<PersonalizationVector>
where
    K: Eq + Hash + Clone + Debug,
{
    match personalization {
        Personalization::Seeds(seeds) => resolve_seeds(graph, seeds),
        Personalization::Vector(weights) => resolve_vector(graph.num_nodes(), weights, tolerance),
    }
}

/// Spread mass `1/|seeds|` over each seed position.
///
/// A seed listed twice receives its share twice; the result still sums to 1.
pub fn resolve_seeds<K>(graph: &NormalizedGraph<K>, seeds: &[K]) -> Result<PersonalizationVector>
where
    K: Eq + Hash + Clone + Debug,
{
    if seeds.is_empty() {
        return Err(PageRankError::EmptySeeds);
    }

    let positions = seeds
        .iter()
        .map(|seed| {
            graph
                .position_of(seed)
                .ok_or_else(|| PageRankError::UnknownSeedNode {
                    node: format!("{seed:?}"),
                })
        })
        .collect::<Result<Vec<u32>>>()?;

    let share = 1.0 / seeds.len() as f64;
    let mut weights = vec![0.0; graph.num_nodes()];
    for position in positions {
        weights[position as usize] += share;
    }

    Ok(PersonalizationVector(weights))
}

/// Validate an explicit distribution over `num_nodes` positions.
pub fn resolve_vector(
    num_nodes: usize,
    weights: &[f64],
    tolerance: f64,
) -> Result<PersonalizationVector> {
    if weights.len() != num_nodes {
        return Err(PageRankError::VectorLengthMismatch {
            expected: num_nodes,
            actual: weights.len(),
        });
    }

    if let Some((index, &value)) = weights.iter().enumerate().find(|(_, &w)| w < 0.0) {
        return Err(PageRankError::VectorNegativeEntry { index, value });
    }

    // Written so that a NaN or infinite sum fails too
    let sum: f64 = weights.iter().sum();
    if !((sum - 1.0).abs() <= tolerance) {
        return Err(PageRankError::VectorNotNormalized { sum, tolerance });
    }

    Ok(PersonalizationVector(weights.to_vec()))
}
