//! Error types
//!
//! Every failure is an input-validation failure detected before the power
//! iteration starts. Each kind gets its own variant so callers can match on
//! the cause.

use thiserror::Error;

/// Errors produced while validating a graph, a personalization request, or a
/// solver configuration.
#[derive(Debug, Error)]
pub enum PageRankError {
    /// Seed-set personalization was requested with no seeds.
    #[error("seed set is empty")]
    EmptySeeds,

    /// A seed identifier does not appear in the graph's node sequence.
    #[error("seed node {node} is not in the graph")]
    UnknownSeedNode { node: String },

    /// An edge references an identifier absent from the node sequence.
    #[error("edge endpoint {node} is not in the graph")]
    UnknownEdgeEndpoint { node: String },

    /// The node sequence lists the same identifier twice.
    #[error("node {node} appears more than once in the node sequence")]
    DuplicateNode { node: String },

    /// Explicit personalization vector has the wrong number of entries.
    #[error("personalization vector has {actual} entries, graph has {expected} nodes")]
    VectorLengthMismatch { expected: usize, actual: usize },

    /// Explicit personalization vector does not sum to 1 within tolerance.
    #[error("personalization vector sums to {sum}, expected 1 within {tolerance}")]
    VectorNotNormalized { sum: f64, tolerance: f64 },

    /// Explicit personalization vector has a negative entry.
    #[error("personalization vector entry {index} is negative ({value})")]
    VectorNegativeEntry { index: usize, value: f64 },

    /// Damping factor outside the open interval (0, 1).
    #[error("damping factor must lie in (0, 1), got {0}")]
    InvalidDamping(f64),

    /// Convergence tolerance is negative or not finite.
    #[error("tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    /// A JSON configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PageRankError>;
