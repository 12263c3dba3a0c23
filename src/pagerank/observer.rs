//! Solver observers: hooks for per-iteration diagnostics.
//!
//! Observers are notified between iterations, never inside the per-node
//! loop. They see convergence progress but cannot alter or stop the solve.

use super::PageRankResult;

/// Receives notifications while a solver runs.
///
/// All methods default to no-ops so implementors override only what they
/// need.
pub trait RankObserver {
    /// Called after each iteration with its 1-based index and L1 delta.
    fn on_iteration(&mut self, _iteration: usize, _delta: f64) {}

    /// Called once with the final result.
    fn on_finish(&mut self, _result: &PageRankResult) {}
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RankObserver for NoopObserver {}

/// Observer that records every iteration's L1 delta.
#[derive(Debug, Clone, Default)]
pub struct IterationLog {
    /// Delta per iteration, in order
    pub deltas: Vec<f64>,
    /// Whether the solve converged, once finished
    pub converged: Option<bool>,
}

impl IterationLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RankObserver for IterationLog {
    fn on_iteration(&mut self, _iteration: usize, delta: f64) {
        self.deltas.push(delta);
    }

    fn on_finish(&mut self, result: &PageRankResult) {
        self.converged = Some(result.converged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_log_records() {
        let mut log = IterationLog::new();
        log.on_iteration(1, 0.5);
        log.on_iteration(2, 0.1);
        log.on_finish(&PageRankResult::new(vec![1.0], 2, 0.1, false));

        assert_eq!(log.deltas, vec![0.5, 0.1]);
        assert_eq!(log.converged, Some(false));
    }

    #[test]
    fn test_observer_as_trait_object() {
        let mut observer: Box<dyn RankObserver> = Box::new(NoopObserver);
        observer.on_iteration(1, 0.0);
    }
}
