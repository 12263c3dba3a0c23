//! # rapid_pagerank
//!
//! Standard and personalized PageRank over directed graphs with arbitrary
//! node identifiers.
//!
//! A [`Graph`] is normalized into an incoming-edge [`CsrGraph`] (self-loops
//! dropped, parallel edges collapsed), a [`Personalization`] request is
//! resolved into a validated teleport distribution, and power iteration runs
//! until the L1 change between iterates drops below the tolerance or the
//! iteration budget runs out.
//!
//! ## Features
//!
//! - **Mass-preserving**: rank on dangling nodes is redistributed through the
//!   personalization vector, so scores always sum to 1
//! - **Fail-fast**: every input problem is a distinct [`PageRankError`]
//!   variant, reported before the first iteration
//! - **Diagnostics**: results carry iteration count, final delta, and a
//!   converged flag; [`RankObserver`] sees each iteration
//! - **tracing** (optional feature): spans around normalization and solving

pub mod compute;
pub mod errors;
pub mod graph;
pub mod pagerank;
pub mod types;

// Re-export commonly used types
pub use errors::{PageRankError, Result};
pub use types::{Graph, PageRankConfig};

// Re-export main functionality
pub use compute::{
    compute_pagerank, compute_pagerank_with_observer, compute_personalized_pagerank,
    compute_personalized_pagerank_with_observer,
};
pub use graph::{builder::GraphBuilder, csr::CsrGraph, NormalizedGraph};
pub use pagerank::{
    observer::{IterationLog, NoopObserver, RankObserver},
    personalization::{Personalization, PersonalizationVector},
    personalized::PersonalizedPageRank,
    standard::StandardPageRank,
    PageRankResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
