//! Canonical episode fixtures shared by the lock tests and the
//! cross-process fixture binary.
//!
//! Determinism in this suite is proved by re-running, never by pinned hex
//! literals: the canonical runs are executed twice (or in a second process)
//! and their artifacts compared byte for byte. A pinned literal would lock
//! the schema as well as the behavior; re-running locks only the behavior,
//! which is what these tests are for.

use wayfind_harness::runner::{run_with_manhattan, EpisodeReport, RunPolicy};
use wayfind_harness::transcript::render_transcript;
use wayfind_harness::worlds::{DetourWorld, OpenGridWorld, SealedStartWorld, SerpentineWorld};

/// Run the canonical detour episode (one restart, cost 6).
#[must_use]
pub fn detour_report() -> EpisodeReport {
    run_with_manhattan(&DetourWorld::new(), &RunPolicy::default())
}

/// Run the canonical open-grid episode (no restart, cost 4).
#[must_use]
pub fn open_grid_report() -> EpisodeReport {
    run_with_manhattan(&OpenGridWorld::three_by_three(), &RunPolicy::default())
}

/// Run the canonical sealed-start episode (immediate unsolvable).
#[must_use]
pub fn sealed_report() -> EpisodeReport {
    run_with_manhattan(&SealedStartWorld::new(), &RunPolicy::default())
}

/// Run the canonical 4x4 serpentine episode (several restarts).
#[must_use]
pub fn serpentine_report() -> EpisodeReport {
    run_with_manhattan(&SerpentineWorld::new(4, 4), &RunPolicy::default())
}

/// All canonical reports, in a fixed order.
#[must_use]
pub fn all_canonical_reports() -> Vec<EpisodeReport> {
    vec![
        open_grid_report(),
        detour_report(),
        sealed_report(),
        serpentine_report(),
    ]
}

/// Render one report as the `key=value` lines the cross-process fixture
/// binary prints. Line order is fixed.
///
/// # Panics
///
/// Panics if trace or transcript rendering fails. These are fixture-only
/// invariants.
#[must_use]
pub fn report_lines(report: &EpisodeReport) -> String {
    let trace_digest = report.trace.digest().unwrap();
    let transcript_bytes = render_transcript(report).unwrap();
    let transcript_hex = hex::encode(&transcript_bytes);
    format!(
        "world_id={}\nticks={}\nrestarts={}\nfinal_bound={}\ntrace_digest={}\ntranscript_hex={}\n",
        report.world_id, report.ticks, report.restarts, report.final_bound, trace_digest,
        transcript_hex,
    )
}

/// The full fixture output: every canonical report's lines, concatenated.
#[must_use]
pub fn fixture_output() -> String {
    all_canonical_reports()
        .iter()
        .map(report_lines)
        .collect::<Vec<_>>()
        .join("---\n")
}
