//! Wayfind Harness: the host side of the maze episode.
//!
//! The harness owns everything the search controller is not allowed to see:
//! the full maze topology, the simulation clock, and movement execution. It
//! feeds the controller one observation per tick, executes the returned
//! move, and turns the finished episode into a transcript artifact.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfind_maze  ←  wayfind_search  ←  wayfind_harness
//! ```
//!
//! # Key pieces
//!
//! - [`contract::MazeWorld`] — the trait a fixture maze implements
//! - [`worlds`] — fixture worlds (open grid, detour, sealed start, serpentine)
//! - [`runner`] — the tick loop producing an [`runner::EpisodeReport`]
//! - [`transcript`] — canonical JSON transcript persistence

#![forbid(unsafe_code)]

pub mod contract;
pub mod runner;
pub mod transcript;
pub mod worlds;
