use std::collections::{HashMap, HashSet};

use crate::models::{Integration, Queue, Workload};

/// Queue ownership for one aggregation call.
///
/// Maps each integration to the set of queue ids it owns, and each queue back to
/// its owner(s). Only integrations present in the snapshot can own queues: a queue
/// whose `integration_id` does not resolve is counted as unresolved and otherwise
/// ignored, so it can never cause an association.
///
/// A queue id normally has one owner. Duplicate queue ids with different owners
/// are kept as given rather than reconciled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueOwnershipIndex {
    owned_queues: HashMap<i64, HashSet<i64>>,
    queue_owners: HashMap<i64, Vec<i64>>,
    unresolved_queue_count: usize,
}

impl QueueOwnershipIndex {
    /// Build the index for the given integrations.
    pub fn build(integrations: &[Integration], queues: &[Queue]) -> Self {
        let known: HashSet<i64> = integrations.iter().map(|i| i.id).collect();
        Self::from_queues_with(queues, |integration_id| known.contains(&integration_id))
    }

    /// Build the index trusting every queue's `integration_id`.
    pub fn from_queues(queues: &[Queue]) -> Self {
        Self::from_queues_with(queues, |_| true)
    }

    fn from_queues_with(queues: &[Queue], resolves: impl Fn(i64) -> bool) -> Self {
        let mut index = Self::default();

        for queue in queues {
            if !resolves(queue.integration_id) {
                index.unresolved_queue_count += 1;
                continue;
            }

            index
                .owned_queues
                .entry(queue.integration_id)
                .or_default()
                .insert(queue.id);

            let owners = index.queue_owners.entry(queue.id).or_default();
            if !owners.contains(&queue.integration_id) {
                owners.push(queue.integration_id);
            }
        }

        index
    }

    /// Queue ids owned by an integration, if it owns any.
    pub fn owned_queues(&self, integration_id: i64) -> Option<&HashSet<i64>> {
        self.owned_queues.get(&integration_id)
    }

    pub fn owned_queue_count(&self, integration_id: i64) -> usize {
        self.owned_queues(integration_id).map_or(0, HashSet::len)
    }

    /// The integration owning a queue, if the queue resolved to one.
    pub fn owner_of(&self, queue_id: i64) -> Option<i64> {
        self.owners_of(queue_id).first().copied()
    }

    pub(crate) fn owners_of(&self, queue_id: i64) -> &[i64] {
        self.queue_owners
            .get(&queue_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains_queue(&self, queue_id: i64) -> bool {
        self.queue_owners.contains_key(&queue_id)
    }

    /// Queues skipped because their owner is not in the snapshot
    pub fn unresolved_queue_count(&self) -> usize {
        self.unresolved_queue_count
    }

    /// Shared-queue association test.
    ///
    /// True when the workload reads from at least one queue the integration owns.
    pub fn is_associated(&self, integration_id: i64, workload: &Workload) -> bool {
        self.owned_queues(integration_id).is_some_and(|owned| {
            workload
                .history_source_queue_ids
                .iter()
                .any(|queue_id| owned.contains(queue_id))
        })
    }
}
