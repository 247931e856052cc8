//! `DetourWorld`: a 3x3 grid whose barrier forces one bound restart.
//!
//! Layout (walls drawn as `=`):
//!
//! ```text
//! (0,0) (0,1) (0,2)
//!  ===== =====
//! (1,0) (1,1) (1,2)
//!              =====
//! (2,0) (2,1) (2,2)
//! ```
//!
//! Descending from (0,0) or (0,1) is walled, and the goal (2,2) cannot be
//! entered from above. Every cost-4 monotone path is cut; the cheapest route
//! is the cost-6 chain (0,0) → (0,1) → (0,2) → (1,2) → (1,1) → (2,1) → (2,2).
//! Against the initial bound of 4 the first attempt drains with a minimum
//! excluded f-cost of 6, producing exactly one restart.

use wayfind_maze::{Cell, MazeGrid, Move};

use crate::contract::MazeWorld;

/// The single-restart detour fixture.
pub struct DetourWorld {
    grid: MazeGrid,
}

impl DetourWorld {
    /// Build the fixture.
    #[must_use]
    pub fn new() -> Self {
        let mut grid = MazeGrid::open(3, 3);
        grid.add_wall(Cell::new(0, 0), Move::Down);
        grid.add_wall(Cell::new(0, 1), Move::Down);
        grid.add_wall(Cell::new(1, 2), Move::Down);
        Self { grid }
    }

    /// The known optimal cost of this fixture.
    pub const TRUE_COST: u32 = 6;
}

impl Default for DetourWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl MazeWorld for DetourWorld {
    fn world_id(&self) -> &str {
        "detour:3x3"
    }

    fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    fn start(&self) -> Cell {
        Cell::new(0, 0)
    }

    fn goal(&self) -> Cell {
        Cell::new(2, 2)
    }
}
