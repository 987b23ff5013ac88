//! Job model.
//!
//! A job is an indivisible unit of work with a fixed execution time and
//! memory footprint. Jobs are plain values: two jobs with the same fields
//! compare equal, while the optimizer tracks them by input position so
//! that duplicates are still placed individually.

use serde::{Deserialize, Serialize};

/// A unit of work to be placed on a processor.
///
/// # Units
/// Execution time and memory are abstract integer units. The consumer
/// decides what they mean (e.g., ms and MiB).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Job {
    execution_time: u64,
    memory_usage: u64,
}

impl Job {
    /// Creates a job.
    ///
    /// `execution_time` is expected to be positive; zero-length jobs are
    /// rejected by [`crate::validation::validate_input`].
    pub fn new(execution_time: u64, memory_usage: u64) -> Self {
        Self {
            execution_time,
            memory_usage,
        }
    }

    /// Time the job occupies its processor.
    #[inline]
    pub fn execution_time(&self) -> u64 {
        self.execution_time
    }

    /// Memory the job holds while running.
    #[inline]
    pub fn memory_usage(&self) -> u64 {
        self.memory_usage
    }
}
