//! # Insights Models
//!
//! Computed views for the integrations dashboard. Nothing in this module is
//! stored: every value is derived on demand from integration, queue, and
//! workload snapshots by [`crate::status`].
//!
//! - `IntegrationStatus`: per-integration connection state and workload counts
//! - `IntegrationStatusSummary`: roll-up across a tenant's integrations

pub mod integration_status;

pub use integration_status::{IntegrationStatus, IntegrationStatusSummary};
