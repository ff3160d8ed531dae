//! # Models
//!
//! Snapshot types supplied by the Rails side, plus the computed insight views.

pub mod insights;
pub mod integration;
pub mod queue;
pub mod workload;

// Re-export core models for easy access
pub use insights::{IntegrationStatus, IntegrationStatusSummary};
pub use integration::Integration;
pub use queue::Queue;
pub use workload::{Workload, WorkloadMode};
