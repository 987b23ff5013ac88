//! Placement (solution) model.
//!
//! A placement is an ordered list of processors. It owns the schedule
//! metrics: cost (sum of per-processor peak memory), makespan, and the
//! mean and median job flow time.
//!
//! Placements are assembled through [`PlacementBuilder`]; a built
//! [`Placement`] only exposes read accessors.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2

use serde::{Deserialize, Serialize};

use super::{Job, Processor};

/// An assignment of jobs to processors.
///
/// Read-only once built. Processors are appended through
/// [`PlacementBuilder`], which the optimizer uses internally.
///
/// Equality is positional: the same processors in a different order make
/// a different placement, even though cost and makespan agree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    processors: Vec<Processor>,
}

impl Placement {
    /// Creates an empty placement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an empty builder.
    pub fn builder() -> PlacementBuilder {
        PlacementBuilder::new()
    }

    /// Processors in placement order.
    pub fn processors(&self) -> &[Processor] {
        &self.processors
    }

    /// Number of processors.
    pub fn processor_count(&self) -> usize {
        self.processors.len()
    }

    /// Number of jobs across all processors.
    pub fn job_count(&self) -> usize {
        self.processors.iter().map(|p| p.job_count()).sum()
    }

    /// All jobs, processor by processor, in schedule order.
    pub fn iter_jobs(&self) -> impl Iterator<Item = &Job> {
        self.processors.iter().flat_map(|p| p.jobs())
    }

    /// Cost: sum of each processor's peak memory usage.
    ///
    /// Saturates at `u64::MAX`.
    pub fn cost(&self) -> u64 {
        self.processors
            .iter()
            .map(|p| p.peak_memory_usage())
            .fold(0, u64::saturating_add)
    }

    /// Makespan: the longest processor load.
    pub fn makespan(&self) -> u64 {
        self.processors
            .iter()
            .map(|p| p.total_computation_time())
            .max()
            .unwrap_or(0)
    }

    /// Flow time of every job, processor by processor, in schedule order.
    pub fn flow_times(&self) -> Vec<u64> {
        self.processors.iter().flat_map(|p| p.flow_times()).collect()
    }

    /// Mean flow time over all jobs.
    ///
    /// Returns 0.0 when there are no jobs.
    pub fn mean_flow_time(&self) -> f64 {
        let flow_times = self.flow_times();
        if flow_times.is_empty() {
            return 0.0;
        }
        let sum: u128 = flow_times.iter().map(|&t| u128::from(t)).sum();
        sum as f64 / flow_times.len() as f64
    }

    /// Median flow time over all jobs.
    ///
    /// Even counts average the two middle values. Returns 0.0 when there
    /// are no jobs.
    pub fn median_flow_time(&self) -> f64 {
        let mut flow_times = self.flow_times();
        if flow_times.is_empty() {
            return 0.0;
        }
        flow_times.sort_unstable();
        let mid = flow_times.len() / 2;
        if flow_times.len() % 2 == 0 {
            (flow_times[mid - 1] as f64 + flow_times[mid] as f64) / 2.0
        } else {
            flow_times[mid] as f64
        }
    }
}

/// Append-only builder for [`Placement`].
#[derive(Debug, Clone, Default)]
pub struct PlacementBuilder {
    processors: Vec<Processor>,
}

impl PlacementBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a processor.
    pub fn add_processor(&mut self, processor: Processor) {
        self.processors.push(processor);
    }

    /// Appends a processor (chainable).
    pub fn with_processor(mut self, processor: Processor) -> Self {
        self.processors.push(processor);
        self
    }

    /// Number of processors appended so far.
    pub fn processor_count(&self) -> usize {
        self.processors.len()
    }

    /// Freezes the processors into a placement.
    pub fn build(self) -> Placement {
        Placement {
            processors: self.processors,
        }
    }
}
