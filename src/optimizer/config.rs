//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use super::PackingStrategy;

/// Order of jobs within each processor once its group is formed.
///
/// Grouping fixes cost and makespan; the sequence only moves flow times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobSequence {
    /// Keep jobs in the order the strategy selected them.
    #[default]
    Selection,
    /// Shortest execution time first (stable).
    ///
    /// # Reference
    /// Smith (1956), optimal for minimizing mean flow time on a single machine.
    ShortestFirst,
}

/// Settings for [`PlacementOptimizer`](super::PlacementOptimizer).
///
/// # Example
///
/// ```
/// use peak_placement::optimizer::{JobSequence, OptimizerConfig, PackingStrategy};
///
/// let config: OptimizerConfig =
///     serde_json::from_str(r#"{"strategy":"best_fit_decreasing"}"#).unwrap();
/// assert_eq!(config.strategy, PackingStrategy::BestFitDecreasing);
/// assert_eq!(config.sequence, JobSequence::Selection);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Grouping heuristic.
    pub strategy: PackingStrategy,
    /// Job order inside each processor.
    pub sequence: JobSequence,
}

impl OptimizerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grouping heuristic.
    pub fn with_strategy(mut self, strategy: PackingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the job order inside each processor.
    pub fn with_sequence(mut self, sequence: JobSequence) -> Self {
        self.sequence = sequence;
        self
    }
}
