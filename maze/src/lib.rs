//! Wayfind Maze: the pure domain carrier for grid-maze exploration.
//!
//! This crate defines the value types shared by the search controller and the
//! simulation harness. It has no external dependencies and no I/O.
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
//! - [`cell::Cell`] — an integer grid coordinate with value semantics
//! - [`movement::Move`] — the fixed move set in its published enumeration order
//! - [`observation::Observation`] — a validated per-tick sensor snapshot
//! - [`grid::MazeGrid`] — wall topology, owned by the host side only

#![forbid(unsafe_code)]

pub mod cell;
pub mod grid;
pub mod movement;
pub mod observation;

pub use cell::Cell;
pub use grid::MazeGrid;
pub use movement::Move;
pub use observation::{Observation, ObservationError};
