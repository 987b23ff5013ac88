//! Packing heuristics.
//!
//! Both heuristics visit jobs heaviest-memory first, so the job that
//! opens a processor is also its peak. They differ in where the later,
//! lighter jobs go.
//!
//! # Approximation
//! Minimizing the sum of per-processor maxima under a time budget is
//! NP-hard; neither heuristic is optimal. Both always produce a feasible
//! placement whose cost lies between
//! [`cost_lower_bound`](super::cost_lower_bound) and the sum of all
//! memory usages.
//!
//! # Reference
//! Coffman, Garey & Johnson (1996), "Approximation Algorithms for Bin
//! Packing: A Survey"

use serde::{Deserialize, Serialize};

use crate::models::{Job, Processor};

/// How jobs are grouped into processors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackingStrategy {
    /// Anchor each processor on the heaviest remaining job, then fill it
    /// with the next heaviest jobs that still fit before opening another.
    #[default]
    PeakAnchored,
    /// Put each job, heaviest first, on the open processor with the least
    /// time left that can still take it.
    BestFitDecreasing,
}

impl PackingStrategy {
    /// Short identifier used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            PackingStrategy::PeakAnchored => "peak_anchored",
            PackingStrategy::BestFitDecreasing => "best_fit_decreasing",
        }
    }

    /// Groups `jobs` into processors of `time_limit`.
    ///
    /// Callers must have validated the input: a positive limit and no job
    /// longer than it.
    pub(crate) fn pack(&self, jobs: &[Job], time_limit: u64) -> Vec<Processor> {
        match self {
            PackingStrategy::PeakAnchored => peak_anchored(jobs, time_limit),
            PackingStrategy::BestFitDecreasing => best_fit_decreasing(jobs, time_limit),
        }
    }
}

/// Job indices by memory usage, descending. Stable: ties keep input order.
fn memory_descending(jobs: &[Job]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..jobs.len()).collect();
    order.sort_by(|&a, &b| jobs[b].memory_usage().cmp(&jobs[a].memory_usage()));
    order
}

fn peak_anchored(jobs: &[Job], time_limit: u64) -> Vec<Processor> {
    let mut pool = memory_descending(jobs);
    let mut processors = Vec::new();

    while !pool.is_empty() {
        // pool[0] is the anchor and always fits an empty processor, so
        // every round removes at least one job.
        let mut processor = Processor::new(time_limit);
        pool.retain(|&i| !processor.add_job(jobs[i]));
        debug_assert!(!processor.is_empty());
        processors.push(processor);
    }

    processors
}

fn best_fit_decreasing(jobs: &[Job], time_limit: u64) -> Vec<Processor> {
    let mut processors: Vec<Processor> = Vec::new();

    for i in memory_descending(jobs) {
        let job = jobs[i];
        let best = processors
            .iter_mut()
            .filter(|p| p.can_fit(&job))
            .min_by_key(|p| p.remaining_time());

        let admitted = match best {
            Some(processor) => processor.add_job(job),
            None => {
                let mut processor = Processor::new(time_limit);
                let admitted = processor.add_job(job);
                processors.push(processor);
                admitted
            }
        };
        debug_assert!(admitted);
    }

    processors
}
