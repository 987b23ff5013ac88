//! Input validation for placement problems.
//!
//! Checks a job batch and a per-processor time limit before any
//! placement work starts. Detects:
//! - A zero time limit
//! - Jobs with zero execution time
//! - Jobs too long to fit on any processor

use crate::models::Job;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The per-processor time limit is zero.
    InvalidTimeLimit,
    /// A job takes no time at all.
    ZeroExecutionTime { index: usize },
    /// A job is longer than the per-processor time limit.
    JobExceedsTimeLimit {
        index: usize,
        execution_time: u64,
        time_limit: u64,
    },
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a job batch against a per-processor time limit.
///
/// Checks:
/// 1. The time limit is positive
/// 2. Every job has a positive execution time
/// 3. Every job fits on an empty processor
///
/// Oversized jobs are only reported when the limit itself is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues,
/// in input order.
pub fn validate_input(jobs: &[Job], time_limit: u64) -> ValidationResult {
    let mut errors = Vec::new();

    if time_limit == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTimeLimit,
            "Time limit per processor must be positive",
        ));
    }

    for (index, job) in jobs.iter().enumerate() {
        if job.execution_time() == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroExecutionTime { index },
                format!("Job {index} has zero execution time"),
            ));
        } else if time_limit > 0 && job.execution_time() > time_limit {
            errors.push(ValidationError::new(
                ValidationErrorKind::JobExceedsTimeLimit {
                    index,
                    execution_time: job.execution_time(),
                    time_limit,
                },
                format!(
                    "Job {index} needs {} time units but the limit is {time_limit}",
                    job.execution_time()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
