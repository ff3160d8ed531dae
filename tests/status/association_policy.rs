use crate::factories::{fixtures, SnapshotFactory};
use integration_status::AssociationPolicy;

#[test]
fn test_shared_intersection_is_the_default() {
    let snapshot = fixtures::multiple_integrations();

    assert_eq!(snapshot.builder().policy(), AssociationPolicy::SharedIntersection);
    assert_eq!(
        snapshot.statuses(),
        snapshot.statuses_with(AssociationPolicy::SharedIntersection)
    );
}

#[test]
fn test_shared_intersection_counts_spanning_workload_for_each_owner() {
    let snapshot = SnapshotFactory::new()
        .integration(1, "freshdesk", "connected")
        .integration(2, "csv", "disconnected")
        .queue(1, 1)
        .queue(2, 2)
        .live_workload(1, &[1, 2])
        .build();

    let statuses = snapshot.statuses_with(AssociationPolicy::SharedIntersection);

    assert_eq!(statuses[0].live_workload_count, 1);
    assert_eq!(statuses[1].live_workload_count, 1);
}

/// Exclusive counting on the multi-integration fixture: every workload's first
/// queue belongs to freshdesk, so csv reports nothing. Neither policy yields the
/// `(3, 1)` / `(2, 1)` the Rails fixture expects; those totals add up to five
/// with only four workloads in the snapshot.
#[test]
fn test_exclusive_first_queue_on_multiple_integrations() {
    let snapshot = fixtures::multiple_integrations();

    let statuses = snapshot.statuses_with(AssociationPolicy::ExclusiveFirstQueue);

    assert_eq!((statuses[0].workload_count, statuses[0].live_workload_count), (4, 2));
    assert_eq!((statuses[1].workload_count, statuses[1].live_workload_count), (0, 0));
}

#[test]
fn test_exclusive_first_queue_totals_never_exceed_workloads() {
    let snapshot = SnapshotFactory::new()
        .integration(1, "freshdesk", "connected")
        .integration(2, "csv", "disconnected")
        .integration(3, "zendesk", "connected")
        .queues_for(1, &[1, 2])
        .queues_for(2, &[3])
        .queue(4, 77)
        .live_workload(1, &[3, 1])
        .live_workload(2, &[4, 2])
        .live_workload(3, &[4])
        .build();

    let statuses = snapshot.statuses_with(AssociationPolicy::ExclusiveFirstQueue);
    let total: u64 = statuses.iter().map(|s| s.workload_count).sum();

    assert_eq!(total, 2);
    assert_eq!(statuses[0].workload_count, 1);
    assert_eq!(statuses[1].workload_count, 1);
    assert_eq!(statuses[2].workload_count, 0);
}
