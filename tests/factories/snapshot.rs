#![allow(dead_code)]

use integration_status::models::{Integration, Queue, Workload, WorkloadMode};
use integration_status::status::{AssociationPolicy, IntegrationsStatusBuilder};
use integration_status::IntegrationStatus;

pub const DEFAULT_TENANT_ID: i64 = 1;

/// One tenant-scoped input to the status builder
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub integrations: Vec<Integration>,
    pub queues: Vec<Queue>,
    pub workloads: Vec<Workload>,
}

impl Snapshot {
    pub fn builder(&self) -> IntegrationsStatusBuilder<'_> {
        IntegrationsStatusBuilder::new(&self.integrations, &self.queues, &self.workloads)
    }

    pub fn statuses(&self) -> Vec<IntegrationStatus> {
        self.builder().statuses()
    }

    pub fn statuses_with(&self, policy: AssociationPolicy) -> Vec<IntegrationStatus> {
        self.builder().with_policy(policy).statuses()
    }

    /// Status lookup by integration id, panicking with context when absent
    pub fn status_of(&self, integration_id: i64) -> IntegrationStatus {
        find_status_by_id(&self.statuses(), integration_id)
    }
}

pub fn find_status_by_id(statuses: &[IntegrationStatus], integration_id: i64) -> IntegrationStatus {
    statuses
        .iter()
        .find(|status| status.integration_id == integration_id)
        .cloned()
        .unwrap_or_else(|| panic!("no status for integration {integration_id}"))
}

/// Builder pattern for creating test snapshots
#[derive(Debug, Default)]
pub struct SnapshotFactory {
    tenant_id: Option<i64>,
    snapshot: Snapshot,
}

impl SnapshotFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_tenant(mut self, tenant_id: i64) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }

    pub fn integration(mut self, id: i64, external_system: &str, status: &str) -> Self {
        let tenant_id = self.tenant_id.unwrap_or(DEFAULT_TENANT_ID);
        self.snapshot
            .integrations
            .push(Integration::new(id, tenant_id, external_system, status));
        self
    }

    pub fn queue(mut self, id: i64, integration_id: i64) -> Self {
        self.snapshot.queues.push(Queue::new(id, integration_id));
        self
    }

    pub fn queues_for(self, integration_id: i64, queue_ids: &[i64]) -> Self {
        queue_ids
            .iter()
            .fold(self, |factory, queue_id| factory.queue(*queue_id, integration_id))
    }

    pub fn workload(mut self, id: i64, queue_ids: &[i64], mode: WorkloadMode) -> Self {
        self.snapshot
            .workloads
            .push(Workload::new(id, queue_ids.to_vec(), mode));
        self
    }

    pub fn live_workload(self, id: i64, queue_ids: &[i64]) -> Self {
        self.workload(id, queue_ids, WorkloadMode::Live)
    }

    pub fn build(self) -> Snapshot {
        self.snapshot
    }
}
