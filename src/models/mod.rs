//! Placement domain models.
//!
//! Provides the data types for describing a job batch and the
//! processor assignment built from it.
//!
//! # Domain Mappings
//!
//! | peak-placement | Datacenter | Batch cluster | Build farm |
//! |----------------|------------|---------------|------------|
//! | Job | Workload | Batch job | Build step |
//! | Processor | Server | Node | Worker |
//! | Placement | Rack plan | Allocation | Build plan |

mod job;
mod placement;
mod processor;

pub use job::Job;
pub use placement::{Placement, PlacementBuilder};
pub use processor::Processor;
