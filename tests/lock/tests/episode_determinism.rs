//! Episode determinism locks.
//!
//! Proves that the canonical episode runs are deterministic: same trace
//! bytes, same transcript bytes, same digests on every invocation, and
//! distinct digests across distinct worlds.

use std::collections::BTreeSet;

use lock_tests::fixtures::{
    all_canonical_reports, detour_report, fixture_output, open_grid_report,
};
use wayfind_harness::transcript::render_transcript;
use wayfind_maze::Cell;

#[test]
fn repeated_runs_render_identical_trace_bytes() {
    let a = detour_report().trace.to_canonical_bytes().expect("render");
    let b = detour_report().trace.to_canonical_bytes().expect("render");
    assert_eq!(a, b, "trace bytes differ across identical runs");
}

#[test]
fn repeated_runs_render_identical_transcripts() {
    let a = render_transcript(&detour_report()).expect("render");
    let b = render_transcript(&detour_report()).expect("render");
    assert_eq!(a, b, "transcript bytes differ across identical runs");
}

#[test]
fn repeated_fixture_output_is_identical() {
    assert_eq!(
        fixture_output(),
        fixture_output(),
        "fixture output differs across identical runs"
    );
}

#[test]
fn distinct_worlds_produce_distinct_trace_digests() {
    let mut digests = BTreeSet::new();
    for report in all_canonical_reports() {
        let digest = report.trace.digest().expect("digest");
        assert!(
            digests.insert(digest.clone()),
            "duplicate trace digest {digest} for {}",
            report.world_id
        );
    }
}

#[test]
fn world_ids_are_unique_across_canonical_reports() {
    let mut ids = BTreeSet::new();
    for report in all_canonical_reports() {
        assert!(ids.insert(report.world_id.clone()), "duplicate world id");
    }
}

#[test]
fn canonical_outcomes_hold() {
    let open = open_grid_report();
    assert_eq!(open.restarts, 0);
    assert_eq!(open.final_bound, 4);

    let detour = detour_report();
    assert_eq!(detour.restarts, 1);
    assert_eq!(detour.final_bound, 6);
    assert_eq!(detour.path.len(), 7);
    assert_eq!(detour.path.first(), Some(&Cell::new(0, 0)));
    assert_eq!(detour.path.last(), Some(&Cell::new(2, 2)));
}
