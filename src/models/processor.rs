//! Processor model.
//!
//! A processor runs its jobs strictly one after another, in insertion
//! order, within a fixed time budget. The budget is enforced at
//! admission: [`Processor::add_job`] is the only way in, and it refuses
//! any job that would push the used time past the limit.

use serde::{Deserialize, Serialize};

use super::Job;
use crate::error::PlacementError;

/// A time-budgeted, append-only sequence of jobs.
///
/// Invariant: `total_computation_time() <= time_limit()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProcessorSnapshot")]
pub struct Processor {
    time_limit: u64,
    jobs: Vec<Job>,
    #[serde(skip_serializing)]
    time_used: u64,
}

/// Unchecked wire form; converted through the admission check.
#[derive(Deserialize)]
struct ProcessorSnapshot {
    time_limit: u64,
    jobs: Vec<Job>,
}

impl TryFrom<ProcessorSnapshot> for Processor {
    type Error = PlacementError;

    fn try_from(snapshot: ProcessorSnapshot) -> Result<Self, Self::Error> {
        if snapshot.time_limit == 0 {
            return Err(PlacementError::InvalidTimeLimit);
        }
        let mut processor = Processor::new(snapshot.time_limit);
        for job in snapshot.jobs {
            if !processor.add_job(job) {
                return Err(PlacementError::CapacityExceeded {
                    time_limit: processor.time_limit,
                    time_required: processor.time_used.saturating_add(job.execution_time()),
                });
            }
        }
        Ok(processor)
    }
}

impl Processor {
    /// Creates an empty processor with the given time budget.
    pub fn new(time_limit: u64) -> Self {
        Self {
            time_limit,
            jobs: Vec::new(),
            time_used: 0,
        }
    }

    /// Whether `job` fits in the remaining budget.
    #[inline]
    pub fn can_fit(&self, job: &Job) -> bool {
        job.execution_time() <= self.remaining_time()
    }

    /// Appends `job` to the end of the schedule if it fits.
    ///
    /// Returns `false` and leaves the processor untouched otherwise.
    pub fn add_job(&mut self, job: Job) -> bool {
        if !self.can_fit(&job) {
            return false;
        }
        self.time_used += job.execution_time();
        self.jobs.push(job);
        true
    }

    /// Largest memory usage among the jobs, or 0 when empty.
    pub fn peak_memory_usage(&self) -> u64 {
        self.jobs
            .iter()
            .map(|j| j.memory_usage())
            .max()
            .unwrap_or(0)
    }

    /// Sum of execution times of all jobs.
    #[inline]
    pub fn total_computation_time(&self) -> u64 {
        self.time_used
    }

    /// Budget left before the limit is reached.
    #[inline]
    pub fn remaining_time(&self) -> u64 {
        self.time_limit - self.time_used
    }

    /// Jobs in schedule order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// The fixed time budget.
    #[inline]
    pub fn time_limit(&self) -> u64 {
        self.time_limit
    }

    /// Number of jobs.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Whether no job has been admitted yet.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Completion time of each job, in schedule order.
    ///
    /// Jobs run back to back from t=0, so the k-th value is the sum of
    /// the first k execution times.
    pub fn flow_times(&self) -> impl Iterator<Item = u64> + '_ {
        self.jobs.iter().scan(0u64, |clock, job| {
            *clock += job.execution_time();
            Some(*clock)
        })
    }

    /// Reorders jobs by ascending execution time (stable).
    ///
    /// The job set is unchanged, so peak memory and total time are too.
    pub(crate) fn sort_shortest_first(&mut self) {
        self.jobs.sort_by_key(|j| j.execution_time());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processor_admission() {
        let mut p = Processor::new(10);
        assert!(p.add_job(Job::new(4, 1)));
        assert!(p.add_job(Job::new(6, 1)));
        assert_eq!(p.total_computation_time(), 10);
        assert_eq!(p.remaining_time(), 0);

        // Full: rejected without side effects
        assert!(!p.can_fit(&Job::new(1, 1)));
        assert!(!p.add_job(Job::new(1, 1)));
        assert_eq!(p.job_count(), 2);
        assert_eq!(p.total_computation_time(), 10);
    }

    #[test]
    fn test_processor_rejects_oversized_job() {
        let mut p = Processor::new(10);
        assert!(!p.add_job(Job::new(11, 0)));
        assert!(p.is_empty());
    }

    #[test]
    fn test_processor_peak_memory() {
        let mut p = Processor::new(100);
        assert_eq!(p.peak_memory_usage(), 0);
        p.add_job(Job::new(1, 10));
        p.add_job(Job::new(1, 40));
        p.add_job(Job::new(1, 25));
        assert_eq!(p.peak_memory_usage(), 40);
    }

    #[test]
    fn test_processor_jobs_in_insertion_order() {
        let mut p = Processor::new(100);
        p.add_job(Job::new(3, 1));
        p.add_job(Job::new(1, 2));
        assert_eq!(p.jobs(), &[Job::new(3, 1), Job::new(1, 2)]);
    }

    #[test]
    fn test_processor_flow_times() {
        let mut p = Processor::new(10);
        p.add_job(Job::new(3, 0));
        p.add_job(Job::new(5, 0));
        p.add_job(Job::new(2, 0));
        assert_eq!(p.flow_times().collect::<Vec<_>>(), vec![3, 8, 10]);
    }

    #[test]
    fn test_processor_equality_is_order_sensitive() {
        let mut a = Processor::new(10);
        a.add_job(Job::new(1, 1));
        a.add_job(Job::new(2, 2));

        let mut b = Processor::new(10);
        b.add_job(Job::new(1, 1));
        b.add_job(Job::new(2, 2));
        assert_eq!(a, b);

        let mut reversed = Processor::new(10);
        reversed.add_job(Job::new(2, 2));
        reversed.add_job(Job::new(1, 1));
        assert_ne!(a, reversed);

        let mut other_limit = Processor::new(11);
        other_limit.add_job(Job::new(1, 1));
        other_limit.add_job(Job::new(2, 2));
        assert_ne!(a, other_limit);

        let mut shorter = Processor::new(10);
        shorter.add_job(Job::new(1, 1));
        assert_ne!(a, shorter);
    }

    #[test]
    fn test_processor_sort_shortest_first() {
        let mut p = Processor::new(20);
        p.add_job(Job::new(5, 9));
        p.add_job(Job::new(2, 3));
        p.add_job(Job::new(5, 1));
        p.add_job(Job::new(1, 4));
        p.sort_shortest_first();
        assert_eq!(
            p.jobs(),
            &[Job::new(1, 4), Job::new(2, 3), Job::new(5, 9), Job::new(5, 1)]
        );
        assert_eq!(p.total_computation_time(), 13);
        assert_eq!(p.peak_memory_usage(), 9);
    }

    #[test]
    fn test_processor_serde_roundtrip() {
        let mut p = Processor::new(10);
        p.add_job(Job::new(4, 2));
        let json = serde_json::to_string(&p).unwrap();
        assert!(!json.contains("time_used"));
        let back: Processor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert_eq!(back.total_computation_time(), 4);
    }

    #[test]
    fn test_processor_deserialize_enforces_capacity() {
        let json = r#"{"time_limit":5,"jobs":[
            {"execution_time":3,"memory_usage":1},
            {"execution_time":3,"memory_usage":1}
        ]}"#;
        let err = serde_json::from_str::<Processor>(json).unwrap_err();
        assert!(err.to_string().contains("exceeds"));

        let zero = r#"{"time_limit":0,"jobs":[]}"#;
        assert!(serde_json::from_str::<Processor>(zero).is_err());
    }

    #[test]
    fn test_processor_deserialize_rejects_overflowing_load() {
        let json = format!(
            r#"{{"time_limit":{max},"jobs":[
                {{"execution_time":{max},"memory_usage":0}},
                {{"execution_time":{max},"memory_usage":0}}
            ]}}"#,
            max = u64::MAX
        );
        let err = serde_json::from_str::<Processor>(&json).unwrap_err();
        assert!(err.to_string().contains("exceeds"));

        let snapshot = ProcessorSnapshot {
            time_limit: u64::MAX,
            jobs: vec![Job::new(u64::MAX, 0), Job::new(u64::MAX, 0)],
        };
        assert_eq!(
            Processor::try_from(snapshot).unwrap_err(),
            PlacementError::CapacityExceeded {
                time_limit: u64::MAX,
                time_required: u64::MAX,
            }
        );
    }
}
