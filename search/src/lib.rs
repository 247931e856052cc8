//! Wayfind Search: an incremental IDA* controller for partially observed mazes.
//!
//! The controller is invoked once per simulation tick with the agent's
//! current cell and local blocked flags, and returns a single move. It
//! discovers maze topology lazily: each cell's admissible neighbors are
//! cached the first time the cell is reached within a search attempt,
//! filtered by the attempt's f-cost bound and sorted by heuristic value.
//! When an attempt drains back to the start cell, the controller restarts
//! with the bound tightened to the minimum excluded f-cost — the IDA* inner
//! loop, with memory proportional to the cells visited in the current
//! attempt rather than all generated nodes.
//!
//! This crate depends only on `wayfind_maze` — it does NOT depend on
//! `wayfind_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfind_maze  ←  wayfind_search  ←  wayfind_harness
//! (cells, moves)   (IDA* controller)   (worlds, runner)
//! ```
//!
//! # Key types
//!
//! - [`SearchController`] — per-tick decision logic and episode lifecycle
//! - [`AttemptState`] — all attempt-scoped search state, cleared as a unit
//! - [`Heuristic`] — pluggable remaining-cost estimate (must be admissible
//!   for optimality)
//! - [`Environment`] — host collaborator for repositioning and cosmetic marks
//! - [`EpisodeTrace`] — deterministic JSON artifact of the episode

#![forbid(unsafe_code)]

pub mod attempt;
pub mod controller;
pub mod environment;
pub mod error;
pub mod heuristic;
pub mod trace;

pub use attempt::AttemptState;
pub use controller::SearchController;
pub use environment::{Environment, NullEnvironment};
pub use error::SearchError;
pub use heuristic::{Heuristic, ManhattanToGoal};
pub use trace::{EpisodeOutcome, EpisodeTrace, TraceEventV1};
