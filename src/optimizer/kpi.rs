//! Placement quality metrics (KPIs).
//!
//! Summarizes a finished placement and measures how far its cost can be
//! from optimal.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Cost | Sum of per-processor peak memory |
//! | Makespan (C_max) | Longest processor load |
//! | Mean / Median Flow Time | Over per-job completion times |
//! | Utilization | Busy time / total time budget |
//! | Cost Gap | Cost / cost lower bound |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use crate::models::{Job, Placement};

/// Placement performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementKpi {
    /// Sum of per-processor peak memory usage.
    pub cost: u64,
    /// Longest processor load.
    pub makespan: u64,
    /// Mean job flow time.
    pub mean_flow_time: f64,
    /// Median job flow time.
    pub median_flow_time: f64,
    /// Number of processors.
    pub processor_count: usize,
    /// Number of jobs.
    pub job_count: usize,
    /// Busy time over the summed time budgets (0.0..1.0).
    pub utilization: f64,
    /// Lower bound on the cost of any feasible placement of the same jobs.
    pub cost_lower_bound: u64,
    /// `cost / cost_lower_bound`; 1.0 when the bound is 0.
    pub cost_gap: f64,
}

impl PlacementKpi {
    /// Computes KPIs for a placement.
    ///
    /// The lower bound uses the largest processor time limit present, which
    /// keeps it valid for hand-built placements with mixed limits.
    pub fn calculate(placement: &Placement) -> Self {
        let cost = placement.cost();
        let processors = placement.processors();

        let busy: u128 = processors
            .iter()
            .map(|p| u128::from(p.total_computation_time()))
            .sum();
        let budget: u128 = processors.iter().map(|p| u128::from(p.time_limit())).sum();
        let utilization = if budget == 0 {
            0.0
        } else {
            busy as f64 / budget as f64
        };

        let time_limit = processors.iter().map(|p| p.time_limit()).max().unwrap_or(0);
        let jobs: Vec<Job> = placement.iter_jobs().copied().collect();
        let bound = cost_lower_bound(&jobs, time_limit);
        let cost_gap = if bound == 0 {
            1.0
        } else {
            cost as f64 / bound as f64
        };

        Self {
            cost,
            makespan: placement.makespan(),
            mean_flow_time: placement.mean_flow_time(),
            median_flow_time: placement.median_flow_time(),
            processor_count: placement.processor_count(),
            job_count: placement.job_count(),
            utilization,
            cost_lower_bound: bound,
            cost_gap,
        }
    }

    /// Whether the placement stays within the given cost and makespan.
    pub fn meets_thresholds(&self, max_cost: u64, max_makespan: u64) -> bool {
        self.cost <= max_cost && self.makespan <= max_makespan
    }
}

/// Lower bound on the cost of placing `jobs` with `time_limit` per processor.
///
/// Take jobs heaviest-memory first. The i heaviest jobs need at least
/// `ceil(T_i / time_limit)` processors, and each of those processors has
/// a peak of at least `m_i`, the i-th largest memory usage. The bound is
/// the maximum of `ceil(T_i / time_limit) * m_i` over all prefixes.
///
/// Returns 0 for an empty batch or a zero limit. Saturates at `u64::MAX`.
///
/// # Example
///
/// ```
/// use peak_placement::models::Job;
/// use peak_placement::optimizer::cost_lower_bound;
///
/// // Two jobs of 6 cannot share a processor of 10.
/// let jobs = vec![Job::new(6, 5), Job::new(6, 5)];
/// assert_eq!(cost_lower_bound(&jobs, 10), 10);
/// ```
pub fn cost_lower_bound(jobs: &[Job], time_limit: u64) -> u64 {
    if time_limit == 0 {
        return 0;
    }

    let mut sorted: Vec<&Job> = jobs.iter().collect();
    sorted.sort_by(|a, b| b.memory_usage().cmp(&a.memory_usage()));

    let limit = u128::from(time_limit);
    let mut total_time: u128 = 0;
    let mut bound: u128 = 0;
    for job in sorted {
        total_time += u128::from(job.execution_time());
        let processors_needed = total_time.div_ceil(limit);
        bound = bound.max(processors_needed.saturating_mul(u128::from(job.memory_usage())));
    }
    u64::try_from(bound).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Processor;

    fn processor(limit: u64, jobs: &[(u64, u64)]) -> Processor {
        let mut p = Processor::new(limit);
        for &(time, mem) in jobs {
            assert!(p.add_job(Job::new(time, mem)));
        }
        p
    }

    #[test]
    fn test_kpi_basic() {
        let placement = Placement::builder()
            .with_processor(processor(10, &[(4, 10), (4, 4)]))
            .with_processor(processor(10, &[(6, 7)]))
            .build();

        let kpi = PlacementKpi::calculate(&placement);
        assert_eq!(kpi.cost, 17);
        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.processor_count, 2);
        assert_eq!(kpi.job_count, 3);
        assert!((kpi.mean_flow_time - 6.0).abs() < 1e-10);
        assert!((kpi.median_flow_time - 6.0).abs() < 1e-10);
        // 14 busy / 20 budget
        assert!((kpi.utilization - 0.7).abs() < 1e-10);
        // Total time 14 > 10: the two heaviest (10, 7) alone need 1 processor
        // (t=10), all three need 2 with peak ≥ 4 → max(10, 7, 8) = 10
        assert_eq!(kpi.cost_lower_bound, 10);
        assert!((kpi.cost_gap - 1.7).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = PlacementKpi::calculate(&Placement::new());
        assert_eq!(kpi.cost, 0);
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.mean_flow_time, 0.0);
        assert_eq!(kpi.median_flow_time, 0.0);
        assert_eq!(kpi.utilization, 0.0);
        assert_eq!(kpi.cost_lower_bound, 0);
        assert!((kpi.cost_gap - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let placement = Placement::builder()
            .with_processor(processor(10, &[(8, 5)]))
            .build();
        let kpi = PlacementKpi::calculate(&placement);
        assert!(kpi.meets_thresholds(5, 8));
        assert!(!kpi.meets_thresholds(4, 8));
        assert!(!kpi.meets_thresholds(5, 7));
    }

    #[test]
    fn test_lower_bound_single_processor_batch() {
        // Everything fits together: the bound is the heaviest job.
        let jobs = vec![Job::new(2, 3), Job::new(2, 9), Job::new(2, 1)];
        assert_eq!(cost_lower_bound(&jobs, 10), 9);
    }

    #[test]
    fn test_lower_bound_forced_split() {
        // The three heavy jobs total 18 time units: at least two
        // processors, each with a peak of at least 8.
        let jobs = vec![Job::new(6, 8), Job::new(6, 9), Job::new(6, 8), Job::new(1, 1)];
        assert_eq!(cost_lower_bound(&jobs, 10), 16);
    }

    #[test]
    fn test_lower_bound_degenerate() {
        assert_eq!(cost_lower_bound(&[], 10), 0);
        assert_eq!(cost_lower_bound(&[Job::new(1, 5)], 0), 0);
    }

    #[test]
    fn test_lower_bound_with_max_length_jobs() {
        // Each job fills a whole processor; their total time exceeds u64.
        let jobs = vec![Job::new(u64::MAX, 1), Job::new(u64::MAX, 1)];
        assert_eq!(cost_lower_bound(&jobs, u64::MAX), 2);
    }

    #[test]
    fn test_lower_bound_saturates() {
        let jobs = vec![Job::new(u64::MAX, u64::MAX), Job::new(u64::MAX, u64::MAX)];
        assert_eq!(cost_lower_bound(&jobs, u64::MAX), u64::MAX);
    }

    #[test]
    fn test_kpi_near_u64_max() {
        let placement = Placement::builder()
            .with_processor(processor(u64::MAX, &[(u64::MAX, 1)]))
            .with_processor(processor(u64::MAX, &[(u64::MAX, 1)]))
            .build();

        let kpi = PlacementKpi::calculate(&placement);
        assert_eq!(kpi.cost, 2);
        assert_eq!(kpi.makespan, u64::MAX);
        assert!((kpi.utilization - 1.0).abs() < 1e-12);
        assert_eq!(kpi.cost_lower_bound, 2);
        assert!((kpi.cost_gap - 1.0).abs() < 1e-12);
        assert_eq!(kpi.mean_flow_time, u64::MAX as f64);
    }

    #[test]
    fn test_kpi_serde() {
        let placement = Placement::builder()
            .with_processor(processor(4, &[(2, 2)]))
            .build();
        let kpi = PlacementKpi::calculate(&placement);
        let json = serde_json::to_string(&kpi).unwrap();
        let back: PlacementKpi = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kpi);
    }
}
