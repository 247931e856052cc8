//! Bound progression locks.
//!
//! Proves the restart sequence of every canonical episode: bounds strictly
//! increase, the first bound equals the start heuristic, and step events
//! never report an f-cost above the bound in force.

use lock_tests::fixtures::{all_canonical_reports, serpentine_report};
use wayfind_search::TraceEventV1;

#[test]
fn restart_bounds_strictly_increase_in_every_canonical_episode() {
    for report in all_canonical_reports() {
        let mut current_bound = None;
        for event in report.trace.events() {
            match event {
                TraceEventV1::EpisodeStart { bound, .. } => {
                    current_bound = Some(*bound);
                }
                TraceEventV1::Restart {
                    old_bound,
                    new_bound,
                    ..
                } => {
                    assert_eq!(
                        current_bound,
                        Some(*old_bound),
                        "{}: restart does not chain from the active bound",
                        report.world_id
                    );
                    assert!(
                        new_bound > old_bound,
                        "{}: restart lowered the bound {old_bound} -> {new_bound}",
                        report.world_id
                    );
                    current_bound = Some(*new_bound);
                }
                _ => {}
            }
        }
    }
}

#[test]
fn step_events_carry_the_bound_in_force() {
    for report in all_canonical_reports() {
        let mut current_bound = 0;
        for event in report.trace.events() {
            match event {
                TraceEventV1::EpisodeStart { bound, .. }
                | TraceEventV1::Restart {
                    new_bound: bound, ..
                } => current_bound = *bound,
                TraceEventV1::Step { bound, .. } => {
                    assert_eq!(
                        *bound, current_bound,
                        "{}: step tagged with a stale bound",
                        report.world_id
                    );
                }
                TraceEventV1::Outcome { .. } => {}
            }
        }
    }
}

#[test]
fn restart_attempt_indices_count_up_from_one() {
    let report = serpentine_report();
    let mut expected = 1;
    for event in report.trace.events() {
        if let TraceEventV1::Restart { attempt, .. } = event {
            assert_eq!(*attempt, expected, "restart indices must be sequential");
            expected += 1;
        }
    }
    assert!(expected > 1, "serpentine fixture should restart at least once");
}
