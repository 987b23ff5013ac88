//! Offline job placement on identical processors.
//!
//! Assigns a batch of jobs to processors that share a per-processor time
//! budget, keeping the total cost low. The cost of a processor is the
//! peak memory usage among its jobs; the cost of a placement is the sum
//! over its processors.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `Processor`, `Placement`
//! - **`optimizer`**: `PlacementOptimizer`, packing strategies, and
//!   `PlacementKpi` metrics
//! - **`validation`**: Input checks (time limit, job lengths)
//! - **`error`**: `PlacementError`
//!
//! # Example
//!
//! ```
//! use peak_placement::models::Job;
//! use peak_placement::optimizer::arrange;
//!
//! let jobs = vec![Job::new(3, 64), Job::new(5, 32), Job::new(2, 16)];
//! let placement = arrange(&jobs, 10).unwrap();
//!
//! assert_eq!(placement.processor_count(), 1);
//! assert_eq!(placement.cost(), 64);
//! assert_eq!(placement.makespan(), 10);
//! ```
//!
//! # Scope
//!
//! Scheduling is static and non-preemptive: all jobs are known up front,
//! jobs are independent, and processors are identical.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Coffman, Garey & Johnson (1996), "Approximation Algorithms for Bin Packing"

pub mod error;
pub mod models;
pub mod optimizer;
pub mod validation;

pub use error::{PlacementError, PlacementResult};
