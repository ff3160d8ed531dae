use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::ownership_index::QueueOwnershipIndex;
use crate::error::StatusError;
use crate::models::Workload;

/// Rule deciding which integrations a workload counts toward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationPolicy {
    /// A workload counts toward every integration owning at least one of its
    /// source queues. This is the dashboard's official rule.
    #[default]
    SharedIntersection,
    /// A workload counts toward one integration at most: the owner of the first
    /// source queue, in configured order, that resolves to an integration.
    /// Per-integration counts then sum to no more than the workload total.
    ExclusiveFirstQueue,
}

impl AssociationPolicy {
    /// Integrations the workload is associated with under this policy.
    ///
    /// For `SharedIntersection` this resolves each source queue through the
    /// ownership index, which yields exactly the integrations whose owned-queue
    /// set intersects the workload's source queues.
    pub fn associated_integrations(
        &self,
        workload: &Workload,
        index: &QueueOwnershipIndex,
    ) -> HashSet<i64> {
        match self {
            Self::SharedIntersection => workload
                .history_source_queue_ids
                .iter()
                .flat_map(|queue_id| index.owners_of(*queue_id).iter().copied())
                .collect(),
            Self::ExclusiveFirstQueue => workload
                .history_source_queue_ids
                .iter()
                .find_map(|queue_id| index.owner_of(*queue_id))
                .into_iter()
                .collect(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SharedIntersection => "shared_intersection",
            Self::ExclusiveFirstQueue => "exclusive_first_queue",
        }
    }
}

impl fmt::Display for AssociationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AssociationPolicy {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shared_intersection" => Ok(Self::SharedIntersection),
            "exclusive_first_queue" => Ok(Self::ExclusiveFirstQueue),
            _ => Err(StatusError::invalid_association_policy(s)),
        }
    }
}
