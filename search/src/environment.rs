//! Host environment collaborator.
//!
//! The controller has one physical side effect outside of returned moves:
//! on restart it asks the host to teleport the agent back to the start cell
//! before the new attempt's first move is computed. The mark hooks are
//! purely cosmetic (visualization); implementations may ignore them and
//! algorithm behavior is unchanged.

use wayfind_maze::Cell;

/// The host surface the controller is allowed to touch.
pub trait Environment {
    /// Teleport the agent to `cell`. Called only during a bound restart,
    /// always with the episode's start cell.
    fn reposition(&mut self, cell: Cell);

    /// Cosmetic: `cell` was settled by the search this tick.
    fn mark_visited(&mut self, _cell: Cell) {}

    /// Cosmetic: `cell` was admitted to an adjacency list this tick.
    fn mark_frontier(&mut self, _cell: Cell) {}
}

/// An environment that ignores everything. Useful for driving the
/// controller directly in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEnvironment;

impl Environment for NullEnvironment {
    fn reposition(&mut self, _cell: Cell) {}
}
