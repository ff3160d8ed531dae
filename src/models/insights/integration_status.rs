//! # Integration Status
//!
//! **CRITICAL**: This is NOT a database table - it's a computed view.
//!
//! ## Overview
//!
//! `IntegrationStatus` is the per-integration record behind the integrations
//! dashboard. It answers two questions at a glance:
//!
//! - **"Is it connected?"** (the integration's own connection-state label)
//! - **"Is anything using it?"** (workloads reading from its queues, and how many are live)
//!
//! ### Real-World Example
//!
//! ```text
//! freshdesk  connected     workloads: 4 | live: 2
//! csv        disconnected  workloads: 2 | live: 1   <- live sync on a dead connection
//! zendesk    connected     workloads: 0 | live: 0
//! ```
//!
//! A workload reading from queues of several integrations shows up in each of
//! their counts, so the per-row counts are not meant to be summed.

use serde::{Deserialize, Serialize};

use crate::constants::connection_status;
use crate::models::integration::Integration;

/// Computed status for one integration.
///
/// Built by [`crate::status::IntegrationsStatusBuilder`]; there are no CRUD
/// operations. `workload_count >= live_workload_count` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationStatus {
    pub integration_id: i64,
    pub tenant_id: i64,
    pub external_system: String,
    pub status: String,
    pub workload_count: u64,
    pub live_workload_count: u64,
}

impl IntegrationStatus {
    /// Status for an integration with no associated workloads
    pub fn idle(integration: &Integration) -> Self {
        Self::with_counts(integration, 0, 0)
    }

    pub(crate) fn with_counts(
        integration: &Integration,
        workload_count: u64,
        live_workload_count: u64,
    ) -> Self {
        debug_assert!(workload_count >= live_workload_count);
        Self {
            integration_id: integration.id,
            tenant_id: integration.tenant_id,
            external_system: integration.external_system.clone(),
            status: integration.status.clone(),
            workload_count,
            live_workload_count,
        }
    }

    /// Count of associated workloads running in test or basic mode.
    pub fn non_live_workload_count(&self) -> u64 {
        self.workload_count - self.live_workload_count
    }

    pub fn has_workloads(&self) -> bool {
        self.workload_count > 0
    }

    pub fn has_live_workloads(&self) -> bool {
        self.live_workload_count > 0
    }

    pub fn is_connected(&self) -> bool {
        self.status == connection_status::CONNECTED
    }

    /// Live workloads depending on an integration that is not connected.
    ///
    /// This is the row a dashboard should highlight first.
    pub fn needs_attention(&self) -> bool {
        self.has_live_workloads() && !self.is_connected()
    }
}

/// Roll-up of integration statuses for a tenant dashboard header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationStatusSummary {
    pub total_integrations: u64,
    pub connected_integrations: u64,
    pub integrations_with_workloads: u64,
    pub integrations_with_live_workloads: u64,
    pub integrations_needing_attention: u64,
}

impl IntegrationStatusSummary {
    pub fn from_statuses(statuses: &[IntegrationStatus]) -> Self {
        statuses
            .iter()
            .fold(Self::default(), |mut summary, status| {
                summary.total_integrations += 1;
                summary.connected_integrations += u64::from(status.is_connected());
                summary.integrations_with_workloads += u64::from(status.has_workloads());
                summary.integrations_with_live_workloads +=
                    u64::from(status.has_live_workloads());
                summary.integrations_needing_attention += u64::from(status.needs_attention());
                summary
            })
    }

    pub fn disconnected_integrations(&self) -> u64 {
        self.total_integrations - self.connected_integrations
    }

    /// Share of integrations that are connected (0.0 to 1.0).
    pub fn connected_rate(&self) -> f64 {
        if self.total_integrations == 0 {
            0.0
        } else {
            self.connected_integrations as f64 / self.total_integrations as f64
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.integrations_needing_attention == 0
    }
}
