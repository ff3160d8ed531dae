#![allow(dead_code)]

use integration_status::models::{Integration, Queue, Workload, WorkloadMode};
use proptest::prelude::*;
use std::collections::HashSet;

/// Integration ids and queue ids are drawn from small ranges so that
/// generated references collide often, and sometimes dangle.
pub const MAX_INTEGRATION_ID: i64 = 8;
pub const MAX_QUEUE_ID: i64 = 24;

#[derive(Debug, Clone)]
pub struct GeneratedSnapshot {
    pub integrations: Vec<Integration>,
    pub queues: Vec<Queue>,
    pub workloads: Vec<Workload>,
}

pub fn workload_mode_strategy() -> impl Strategy<Value = WorkloadMode> {
    prop_oneof![
        Just(WorkloadMode::Test),
        Just(WorkloadMode::Basic),
        Just(WorkloadMode::Live),
    ]
}

pub fn connection_status_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("connected".to_string()),
        Just("disconnected".to_string()),
        "[a-z_]{1,12}",
    ]
}

/// Integrations with unique ids, in shuffled order
pub fn integrations_strategy() -> impl Strategy<Value = Vec<Integration>> {
    prop::collection::btree_set(1..=MAX_INTEGRATION_ID, 0..6)
        .prop_flat_map(|ids| {
            let ids: Vec<i64> = ids.into_iter().collect();
            let count = ids.len();
            (
                Just(ids).prop_shuffle(),
                prop::collection::vec(connection_status_strategy(), count),
            )
        })
        .prop_map(|(ids, statuses)| {
            ids.into_iter()
                .zip(statuses)
                .map(|(id, status)| Integration::new(id, 1, format!("system_{id}"), status))
                .collect()
        })
}

/// Queues with unique ids; owners may point outside the integration range
pub fn queues_strategy() -> impl Strategy<Value = Vec<Queue>> {
    prop::collection::btree_map(1..=MAX_QUEUE_ID, 1..=MAX_INTEGRATION_ID + 2, 0..16)
        .prop_map(|owners| {
            owners
                .into_iter()
                .map(|(queue_id, integration_id)| Queue::new(queue_id, integration_id))
                .collect()
        })
}

/// Workloads with unique ids; queue refs may dangle past `MAX_QUEUE_ID`
pub fn workloads_strategy() -> impl Strategy<Value = Vec<Workload>> {
    prop::collection::vec(
        (
            prop::collection::vec(1..=MAX_QUEUE_ID + 4, 0..5),
            workload_mode_strategy(),
        ),
        0..12,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (queue_ids, mode))| Workload::new(i as i64 + 1, queue_ids, mode))
            .collect()
    })
}

pub fn snapshot_strategy() -> impl Strategy<Value = GeneratedSnapshot> {
    (integrations_strategy(), queues_strategy(), workloads_strategy()).prop_map(
        |(integrations, queues, workloads)| GeneratedSnapshot {
            integrations,
            queues,
            workloads,
        },
    )
}

/// Reference count by nested scan, independent of the ownership index
pub fn naive_counts(snapshot: &GeneratedSnapshot, integration_id: i64) -> (u64, u64) {
    let owned: HashSet<i64> = snapshot
        .queues
        .iter()
        .filter(|queue| queue.is_owned_by(integration_id))
        .map(|queue| queue.id)
        .collect();

    snapshot
        .workloads
        .iter()
        .filter(|workload| {
            owned
                .iter()
                .any(|queue_id| workload.reads_from(*queue_id))
        })
        .fold((0, 0), |(total, live), workload| {
            (total + 1, live + u64::from(workload.mode == WorkloadMode::Live))
        })
}
