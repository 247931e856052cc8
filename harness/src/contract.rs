//! Maze world contract: the minimal trait a fixture maze implements.
//!
//! A world provides topology and episode anchors. It does NOT drive the
//! simulation loop, execute moves, or write transcripts — those are runner
//! concerns, kept out of worlds so every world stays a plain data fixture.

use wayfind_maze::{Cell, MazeGrid, Observation};

/// The contract a maze world must implement to be run by the harness.
pub trait MazeWorld {
    /// Unique world identifier (e.g., `"open_grid:3x3"`).
    fn world_id(&self) -> &str;

    /// The wall topology.
    fn grid(&self) -> &MazeGrid;

    /// The episode's start cell.
    fn start(&self) -> Cell;

    /// The episode's goal cell.
    fn goal(&self) -> Cell;

    /// Build the observation for an agent standing at `cell`.
    ///
    /// Default: derived from the grid. Worlds only override this to model
    /// non-wall sensing differences, which none of the fixtures need.
    fn observe(&self, cell: Cell) -> Observation {
        self.grid().observe(cell)
    }
}
