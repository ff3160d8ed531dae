#![allow(clippy::doc_markdown)] // Allow technical terms like Rails, YAML in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Integration Status Core
//!
//! Rust core behind the integrations health dashboard.
//!
//! ## Overview
//!
//! For each external-system integration of a tenant, the core reports its
//! connection state together with how many data-sync workloads read from its
//! queues and how many of those run in live mode. The Rails engine loads and
//! tenant-scopes the integrations, queues, and workloads; this crate only joins
//! and counts them.
//!
//! ## Module Organization
//!
//! - [`models`] - Snapshot types and computed insight views
//! - [`status`] - The status aggregation
//! - [`config`] - Configuration management
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust
//! use integration_status::models::{Integration, Queue, Workload, WorkloadMode};
//! use integration_status::build_statuses;
//!
//! let integrations = vec![
//!     Integration::new(1, 1, "freshdesk", "connected"),
//!     Integration::new(2, 1, "csv", "disconnected"),
//! ];
//! let queues = vec![Queue::new(1, 1), Queue::new(2, 2)];
//! let workloads = vec![
//!     Workload::new(1, vec![1], WorkloadMode::Test),
//!     Workload::new(2, vec![1, 2], WorkloadMode::Live),
//! ];
//!
//! let statuses = build_statuses(&integrations, &queues, &workloads);
//!
//! assert_eq!(statuses[0].workload_count, 2);
//! assert_eq!(statuses[0].live_workload_count, 1);
//! assert_eq!(statuses[1].workload_count, 1);
//! assert_eq!(statuses[1].live_workload_count, 1);
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib    # Unit tests
//! cargo test          # All tests, including property-based tests
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod status;

pub use config::{ConfigManager, LoggingConfig, StatusConfig};
pub use constants::connection_status;
pub use error::{Result, StatusError};
pub use models::{
    Integration, IntegrationStatus, IntegrationStatusSummary, Queue, Workload, WorkloadMode,
};
pub use status::{build_statuses, AssociationPolicy, IntegrationsStatusBuilder, QueueOwnershipIndex};
