use std::collections::HashMap;
use tracing::{debug, trace};

use super::association_policy::AssociationPolicy;
use super::ownership_index::QueueOwnershipIndex;
use crate::config::StatusConfig;
use crate::models::{
    Integration, IntegrationStatus, IntegrationStatusSummary, Queue, Workload,
};

/// Workload tallies for one integration id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct WorkloadTally {
    total: u64,
    live: u64,
}

impl WorkloadTally {
    fn record(&mut self, workload: &Workload) {
        self.total += 1;
        if workload.is_live() {
            self.live += 1;
        }
    }
}

/// Builds the dashboard status of every integration in a tenant snapshot.
///
/// The builder borrows its inputs and holds no state between calls; each call to
/// [`statuses`](Self::statuses) recomputes from scratch. Callers are expected to
/// pass collections already scoped to one tenant, with unique ids.
///
/// ```rust
/// use integration_status::models::{Integration, Queue, Workload, WorkloadMode};
/// use integration_status::status::IntegrationsStatusBuilder;
///
/// let integrations = vec![Integration::new(1, 1, "freshdesk", "connected")];
/// let queues = vec![Queue::new(10, 1)];
/// let workloads = vec![Workload::new(100, vec![10], WorkloadMode::Live)];
///
/// let builder = IntegrationsStatusBuilder::new(&integrations, &queues, &workloads);
/// let status = builder.find_status(1).unwrap();
///
/// assert_eq!(status.workload_count, 1);
/// assert_eq!(status.live_workload_count, 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IntegrationsStatusBuilder<'a> {
    integrations: &'a [Integration],
    queues: &'a [Queue],
    workloads: &'a [Workload],
    policy: AssociationPolicy,
}

impl<'a> IntegrationsStatusBuilder<'a> {
    pub fn new(
        integrations: &'a [Integration],
        queues: &'a [Queue],
        workloads: &'a [Workload],
    ) -> Self {
        Self {
            integrations,
            queues,
            workloads,
            policy: AssociationPolicy::default(),
        }
    }

    /// Builder using the association policy from loaded configuration
    pub fn from_config(
        config: &StatusConfig,
        integrations: &'a [Integration],
        queues: &'a [Queue],
        workloads: &'a [Workload],
    ) -> Self {
        Self::new(integrations, queues, workloads).with_policy(config.association_policy)
    }

    pub fn with_policy(mut self, policy: AssociationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> AssociationPolicy {
        self.policy
    }

    /// One status per input integration, in input order.
    pub fn statuses(&self) -> Vec<IntegrationStatus> {
        let index = QueueOwnershipIndex::build(self.integrations, self.queues);
        let tallies = self.tally_workloads(&index);

        let statuses: Vec<IntegrationStatus> = self
            .integrations
            .iter()
            .map(|integration| {
                let tally = tallies.get(&integration.id).copied().unwrap_or_default();
                trace!(
                    integration_id = integration.id,
                    owned_queues = index.owned_queue_count(integration.id),
                    workload_count = tally.total,
                    live_workload_count = tally.live,
                    "Integration status computed"
                );
                IntegrationStatus::with_counts(integration, tally.total, tally.live)
            })
            .collect();

        debug!(
            integrations = self.integrations.len(),
            queues = self.queues.len(),
            workloads = self.workloads.len(),
            policy = %self.policy,
            unresolved_queues = index.unresolved_queue_count(),
            "Built integration statuses"
        );

        statuses
    }

    /// Status of a single integration, looked up by id
    pub fn find_status(&self, integration_id: i64) -> Option<IntegrationStatus> {
        self.statuses()
            .into_iter()
            .find(|status| status.integration_id == integration_id)
    }

    pub fn summary(&self) -> IntegrationStatusSummary {
        IntegrationStatusSummary::from_statuses(&self.statuses())
    }

    fn tally_workloads(&self, index: &QueueOwnershipIndex) -> HashMap<i64, WorkloadTally> {
        let mut tallies: HashMap<i64, WorkloadTally> = HashMap::new();
        let mut unresolved_queue_refs = 0usize;

        for workload in self.workloads {
            unresolved_queue_refs += workload
                .history_source_queue_ids
                .iter()
                .filter(|queue_id| !index.contains_queue(**queue_id))
                .count();

            for integration_id in self.policy.associated_integrations(workload, index) {
                tallies.entry(integration_id).or_default().record(workload);
            }
        }

        if unresolved_queue_refs > 0 {
            debug!(
                unresolved_queue_refs = unresolved_queue_refs,
                "Workloads reference queues without a known owner"
            );
        }

        tallies
    }
}

/// Compute integration statuses with the default association policy.
pub fn build_statuses(
    integrations: &[Integration],
    queues: &[Queue],
    workloads: &[Workload],
) -> Vec<IntegrationStatus> {
    IntegrationsStatusBuilder::new(integrations, queues, workloads).statuses()
}
