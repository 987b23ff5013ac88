//! Placement error types.

use thiserror::Error;

use crate::validation::{ValidationError, ValidationErrorKind};

/// Errors that can occur while building a placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("time limit per processor must be positive")]
    InvalidTimeLimit,

    #[error("job {index} has zero execution time")]
    InvalidJob { index: usize },

    #[error("job {index} exceeds time limit: needs {execution_time}, limit is {time_limit}")]
    UnplaceableJob {
        index: usize,
        execution_time: u64,
        time_limit: u64,
    },

    #[error("processor load exceeds time limit: needs {time_required}, limit is {time_limit}")]
    CapacityExceeded { time_limit: u64, time_required: u64 },
}

pub type PlacementResult<T> = Result<T, PlacementError>;

impl From<ValidationError> for PlacementError {
    fn from(err: ValidationError) -> Self {
        match err.kind {
            ValidationErrorKind::InvalidTimeLimit => PlacementError::InvalidTimeLimit,
            ValidationErrorKind::ZeroExecutionTime { index } => {
                PlacementError::InvalidJob { index }
            }
            ValidationErrorKind::JobExceedsTimeLimit {
                index,
                execution_time,
                time_limit,
            } => PlacementError::UnplaceableJob {
                index,
                execution_time,
                time_limit,
            },
        }
    }
}
