//! Transcript artifacts: a canonical JSON record of one episode run.
//!
//! A transcript is the host-level counterpart to the controller's episode
//! trace. It captures the run outcome, tick and restart counts, the final
//! bound, the reconstructed path, and the digest of the full trace, rendered
//! as canonical JSON (sorted keys, integer numbers). The digest sidecar lets
//! a later reader verify the artifact without re-running the episode.

use std::fs;
use std::path::{Path, PathBuf};

use wayfind_maze::Cell;
use wayfind_search::trace::content_digest;

use crate::runner::{EpisodeReport, RunOutcome};

/// Domain prefix for transcript digests (null-terminated).
pub const DOMAIN_TRANSCRIPT: &[u8] = b"WAYFIND::TRANSCRIPT::V1\0";

/// Schema version string embedded in every rendered transcript.
pub const TRANSCRIPT_SCHEMA_VERSION: &str = "transcript.v1";

/// File name of the transcript artifact inside a run directory.
pub const TRANSCRIPT_FILE: &str = "transcript.json";

/// File name of the digest sidecar inside a run directory.
pub const DIGEST_FILE: &str = "transcript.digest";

/// Failure while rendering, writing, or verifying a transcript.
#[derive(Debug)]
pub enum TranscriptError {
    /// JSON rendering of the report or its trace failed.
    Render { detail: String },
    /// Filesystem read or write failed.
    Io { path: PathBuf, detail: String },
    /// The digest sidecar is not a `sha256:<64 hex>` string.
    MalformedDigest { detail: String },
    /// The sidecar digest does not match the transcript bytes.
    DigestMismatch { expected: String, found: String },
}

impl std::fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render { detail } => write!(f, "transcript rendering failed: {detail}"),
            Self::Io { path, detail } => {
                write!(f, "transcript io failed at {}: {detail}", path.display())
            }
            Self::MalformedDigest { detail } => write!(f, "malformed digest: {detail}"),
            Self::DigestMismatch { expected, found } => {
                write!(f, "digest mismatch: expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for TranscriptError {}

fn cell_value(cell: Cell) -> serde_json::Value {
    serde_json::json!([cell.row, cell.col])
}

fn outcome_value(outcome: &RunOutcome) -> serde_json::Value {
    match outcome {
        RunOutcome::GoalReached { cost } => serde_json::json!({
            "kind": "goal_reached",
            "cost": cost,
        }),
        RunOutcome::Unsolvable { bound } => serde_json::json!({
            "kind": "unsolvable",
            "bound": bound,
        }),
        RunOutcome::TickBudgetExceeded => serde_json::json!({
            "kind": "tick_budget_exceeded",
        }),
        RunOutcome::BlockedMoveProposed { from, mv } => serde_json::json!({
            "kind": "blocked_move_proposed",
            "from": cell_value(*from),
            "move": mv.as_str(),
        }),
        RunOutcome::ControllerFault { detail } => serde_json::json!({
            "kind": "controller_fault",
            "detail": detail,
        }),
    }
}

/// Render the canonical transcript bytes for one report.
///
/// # Errors
///
/// Returns [`TranscriptError::Render`] if the trace or the transcript fails
/// to serialize.
pub fn render_transcript(report: &EpisodeReport) -> Result<Vec<u8>, TranscriptError> {
    let trace_digest = report.trace.digest().map_err(|e| TranscriptError::Render {
        detail: e.to_string(),
    })?;
    let path: Vec<serde_json::Value> = report.path.iter().map(|&c| cell_value(c)).collect();
    let value = serde_json::json!({
        "schema_version": TRANSCRIPT_SCHEMA_VERSION,
        "world_id": report.world_id,
        "outcome": outcome_value(&report.outcome),
        "ticks": report.ticks,
        "restarts": report.restarts,
        "final_bound": report.final_bound,
        "path": path,
        "trace_digest": trace_digest,
    });
    serde_json::to_vec(&value).map_err(|e| TranscriptError::Render {
        detail: e.to_string(),
    })
}

fn io_err(path: &Path, e: &std::io::Error) -> TranscriptError {
    TranscriptError::Io {
        path: path.to_path_buf(),
        detail: e.to_string(),
    }
}

/// Write `transcript.json` and its digest sidecar into `dir`.
///
/// Returns the transcript digest.
///
/// # Errors
///
/// Returns [`TranscriptError::Render`] on serialization failure and
/// [`TranscriptError::Io`] on filesystem failure.
pub fn write_transcript(dir: &Path, report: &EpisodeReport) -> Result<String, TranscriptError> {
    let bytes = render_transcript(report)?;
    let digest = content_digest(DOMAIN_TRANSCRIPT, &bytes);

    let transcript_path = dir.join(TRANSCRIPT_FILE);
    fs::write(&transcript_path, &bytes).map_err(|e| io_err(&transcript_path, &e))?;

    let digest_path = dir.join(DIGEST_FILE);
    fs::write(&digest_path, format!("{digest}\n")).map_err(|e| io_err(&digest_path, &e))?;

    Ok(digest)
}

/// Parse and validate a `sha256:<64 hex>` digest string.
///
/// # Errors
///
/// Returns [`TranscriptError::MalformedDigest`] if the prefix or hex body is
/// wrong.
pub fn parse_digest(raw: &str) -> Result<String, TranscriptError> {
    let trimmed = raw.trim();
    let hex_part = trimmed
        .strip_prefix("sha256:")
        .ok_or_else(|| TranscriptError::MalformedDigest {
            detail: "missing sha256: prefix".to_string(),
        })?;
    let decoded = hex::decode(hex_part).map_err(|e| TranscriptError::MalformedDigest {
        detail: e.to_string(),
    })?;
    if decoded.len() != 32 {
        return Err(TranscriptError::MalformedDigest {
            detail: format!("expected 32 digest bytes, found {}", decoded.len()),
        });
    }
    Ok(trimmed.to_string())
}

/// Re-verify a previously written transcript directory.
///
/// # Errors
///
/// Returns [`TranscriptError::Io`] if either file is unreadable,
/// [`TranscriptError::MalformedDigest`] if the sidecar is malformed, and
/// [`TranscriptError::DigestMismatch`] if the transcript bytes no longer
/// hash to the sidecar digest.
pub fn verify_transcript(dir: &Path) -> Result<String, TranscriptError> {
    let transcript_path = dir.join(TRANSCRIPT_FILE);
    let bytes = fs::read(&transcript_path).map_err(|e| io_err(&transcript_path, &e))?;

    let digest_path = dir.join(DIGEST_FILE);
    let raw = fs::read_to_string(&digest_path).map_err(|e| io_err(&digest_path, &e))?;
    let expected = parse_digest(&raw)?;

    let found = content_digest(DOMAIN_TRANSCRIPT, &bytes);
    if found != expected {
        return Err(TranscriptError::DigestMismatch { expected, found });
    }
    Ok(found)
}
