//! Episode trace: a deterministic JSON artifact of one episode.
//!
//! The trace records the controller's externally visible decisions in order:
//! episode start, every settled step, every bound restart, and the terminal
//! outcome (with the backpointer-reconstructed path on success). It is
//! purely observational — nothing in the search loop reads it back.
//!
//! Rendering is canonical: `serde_json` object keys are sorted (the
//! `preserve_order` feature is not enabled) and all numbers are integers,
//! so identical episodes render byte-identical artifacts. The digest is a
//! domain-separated SHA-256 over those bytes in `"sha256:<hex>"` form.

use sha2::{Digest, Sha256};

use wayfind_maze::{Cell, Move};

/// Domain prefix for episode trace digests (null-terminated).
pub const DOMAIN_EPISODE_TRACE: &[u8] = b"WAYFIND::EPISODE_TRACE::V1\0";

/// Schema version string embedded in every rendered trace.
pub const TRACE_SCHEMA_VERSION: &str = "episode_trace.v1";

/// How an episode ended, as reported by the host at `end_episode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeOutcome {
    /// The agent stepped onto the goal cell.
    GoalReached { cell: Cell },
    /// The controller reported the maze unsolvable at this bound.
    Unsolvable { bound: u32 },
    /// The host ended the episode early (external timeout or shutdown).
    Aborted,
}

/// One entry in the episode trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEventV1 {
    /// Episode start: the recorded start cell and the initial bound.
    EpisodeStart { start: Cell, bound: u32 },
    /// One settled step: the controller committed to moving `from` → `to`.
    Step {
        attempt: u32,
        bound: u32,
        from: Cell,
        mv: Move,
        to: Cell,
    },
    /// A bound restart. `attempt` is the index of the new attempt.
    Restart {
        attempt: u32,
        old_bound: u32,
        new_bound: u32,
    },
    /// Terminal outcome. `path` is the reconstructed start-to-goal chain on
    /// success, empty otherwise.
    Outcome {
        outcome: EpisodeOutcome,
        path: Vec<Cell>,
    },
}

/// Rendering failure for the trace artifact.
#[derive(Debug)]
pub enum TraceRenderError {
    /// JSON serialization failed.
    Serialize { detail: String },
}

impl std::fmt::Display for TraceRenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize { detail } => write!(f, "trace serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for TraceRenderError {}

/// Ordered event log for one episode.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EpisodeTrace {
    events: Vec<TraceEventV1>,
}

impl EpisodeTrace {
    /// An empty trace.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event.
    pub fn push(&mut self, event: TraceEventV1) {
        self.events.push(event);
    }

    /// The ordered events.
    #[must_use]
    pub fn events(&self) -> &[TraceEventV1] {
        &self.events
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Render the canonical JSON bytes of this trace.
    ///
    /// # Errors
    ///
    /// Returns [`TraceRenderError::Serialize`] if JSON serialization fails.
    pub fn to_canonical_bytes(&self) -> Result<Vec<u8>, TraceRenderError> {
        let events: Vec<serde_json::Value> = self.events.iter().map(event_value).collect();
        let value = serde_json::json!({
            "schema_version": TRACE_SCHEMA_VERSION,
            "events": events,
        });
        serde_json::to_vec(&value).map_err(|e| TraceRenderError::Serialize {
            detail: e.to_string(),
        })
    }

    /// Digest of the canonical bytes, in `"sha256:<hex>"` form.
    ///
    /// # Errors
    ///
    /// Returns [`TraceRenderError::Serialize`] if rendering fails.
    pub fn digest(&self) -> Result<String, TraceRenderError> {
        Ok(content_digest(
            DOMAIN_EPISODE_TRACE,
            &self.to_canonical_bytes()?,
        ))
    }
}

/// Compute a domain-separated SHA-256 digest in `"sha256:<hex>"` form.
#[must_use]
pub fn content_digest(domain: &[u8], bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(bytes);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

fn cell_value(cell: Cell) -> serde_json::Value {
    serde_json::json!([cell.row, cell.col])
}

fn event_value(event: &TraceEventV1) -> serde_json::Value {
    match event {
        TraceEventV1::EpisodeStart { start, bound } => serde_json::json!({
            "type": "episode_start",
            "start": cell_value(*start),
            "bound": bound,
        }),
        TraceEventV1::Step {
            attempt,
            bound,
            from,
            mv,
            to,
        } => serde_json::json!({
            "type": "step",
            "attempt": attempt,
            "bound": bound,
            "from": cell_value(*from),
            "move": mv.as_str(),
            "to": cell_value(*to),
        }),
        TraceEventV1::Restart {
            attempt,
            old_bound,
            new_bound,
        } => serde_json::json!({
            "type": "restart",
            "attempt": attempt,
            "old_bound": old_bound,
            "new_bound": new_bound,
        }),
        TraceEventV1::Outcome { outcome, path } => {
            let path_values: Vec<serde_json::Value> = path.iter().map(|&c| cell_value(c)).collect();
            match outcome {
                EpisodeOutcome::GoalReached { cell } => serde_json::json!({
                    "type": "outcome",
                    "outcome": "goal_reached",
                    "cell": cell_value(*cell),
                    "path": path_values,
                }),
                EpisodeOutcome::Unsolvable { bound } => serde_json::json!({
                    "type": "outcome",
                    "outcome": "unsolvable",
                    "bound": bound,
                    "path": path_values,
                }),
                EpisodeOutcome::Aborted => serde_json::json!({
                    "type": "outcome",
                    "outcome": "aborted",
                    "path": path_values,
                }),
            }
        }
    }
}
