//! Placement optimizer and KPI evaluation.
//!
//! Groups a batch of jobs onto identical processors so that no processor
//! exceeds its time budget, aiming for a low total cost (sum of per-processor
//! peak memory usage).
//!
//! # Algorithm
//!
//! The default [`PackingStrategy::PeakAnchored`] heuristic repeatedly takes
//! the heaviest remaining job as the anchor of a new processor and fills it
//! with the next heaviest jobs that still fit. Every job added after the
//! anchor is free with respect to cost. It is not optimal, but its cost never
//! exceeds that of one processor per job.
//!
//! # KPI
//!
//! [`PlacementKpi`] reports cost, makespan, flow times, utilization, and the
//! gap to [`cost_lower_bound`].
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5
//! - Coffman, Garey & Johnson (1996), "Approximation Algorithms for Bin Packing"

mod config;
mod kpi;
mod strategy;

pub use config::{JobSequence, OptimizerConfig};
pub use kpi::{cost_lower_bound, PlacementKpi};
pub use strategy::PackingStrategy;

use tracing::{debug, info, warn};

use crate::error::PlacementResult;
use crate::models::{Job, Placement};
use crate::validation::validate_input;

/// Builds placements from job batches.
///
/// Stateless apart from its configuration; every call to
/// [`arrange`](Self::arrange) is independent.
///
/// # Example
///
/// ```
/// use peak_placement::models::Job;
/// use peak_placement::optimizer::PlacementOptimizer;
///
/// let jobs = vec![Job::new(4, 10), Job::new(4, 4), Job::new(6, 7)];
/// let placement = PlacementOptimizer::new().arrange(&jobs, 10).unwrap();
///
/// assert_eq!(placement.job_count(), 3);
/// assert!(placement.processors().iter().all(|p| p.total_computation_time() <= 10));
/// assert_eq!(placement.cost(), 14);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlacementOptimizer {
    config: OptimizerConfig,
}

impl PlacementOptimizer {
    /// Creates an optimizer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an optimizer from a configuration.
    pub fn with_config(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Sets the grouping heuristic.
    pub fn with_strategy(mut self, strategy: PackingStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Sets the job order inside each processor.
    pub fn with_sequence(mut self, sequence: JobSequence) -> Self {
        self.config.sequence = sequence;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Places every job on exactly one processor of `time_limit`.
    ///
    /// # Errors
    /// Fails before any placement work when the limit is zero, a job has
    /// zero execution time, or a job is longer than the limit
    /// ([`crate::PlacementError::UnplaceableJob`]). The first problem in input
    /// order is reported.
    pub fn arrange(&self, jobs: &[Job], time_limit: u64) -> PlacementResult<Placement> {
        if let Err(errors) = validate_input(jobs, time_limit) {
            warn!(
                jobs = jobs.len(),
                time_limit,
                problems = errors.len(),
                "rejecting placement input"
            );
            if let Some(first) = errors.into_iter().next() {
                return Err(first.into());
            }
        }

        let mut builder = Placement::builder();
        for (index, mut processor) in self
            .config
            .strategy
            .pack(jobs, time_limit)
            .into_iter()
            .enumerate()
        {
            if self.config.sequence == JobSequence::ShortestFirst {
                processor.sort_shortest_first();
            }
            debug!(
                processor = index,
                jobs = processor.job_count(),
                time_used = processor.total_computation_time(),
                peak_memory = processor.peak_memory_usage(),
                "processor formed"
            );
            builder.add_processor(processor);
        }
        let placement = builder.build();

        info!(
            strategy = self.config.strategy.name(),
            jobs = jobs.len(),
            processors = placement.processor_count(),
            cost = placement.cost(),
            makespan = placement.makespan(),
            "placement built"
        );
        Ok(placement)
    }
}

/// Places `jobs` with the default optimizer.
///
/// Shorthand for `PlacementOptimizer::new().arrange(jobs, time_limit)`.
pub fn arrange(jobs: &[Job], time_limit: u64) -> PlacementResult<Placement> {
    PlacementOptimizer::new().arrange(jobs, time_limit)
}
