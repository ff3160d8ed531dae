//! # Integration Status Aggregation
//!
//! Joins integrations, queues, and workloads into one [`IntegrationStatus`] per
//! integration. Pure and synchronous: no I/O, no shared state, inputs are only
//! read.
//!
//! 1. [`QueueOwnershipIndex`] groups queues by owning integration.
//! 2. [`AssociationPolicy`] decides which integrations each workload counts toward.
//! 3. [`IntegrationsStatusBuilder`] tallies workloads and assembles statuses in
//!    input order.
//!
//! [`IntegrationStatus`]: crate::models::IntegrationStatus

pub mod association_policy;
pub mod builder;
pub mod ownership_index;

pub use association_policy::AssociationPolicy;
pub use builder::{build_statuses, IntegrationsStatusBuilder};
pub use ownership_index::QueueOwnershipIndex;
