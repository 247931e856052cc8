//! `SealedStartWorld`: the start cell is walled on every side.
//!
//! No attempt can place a single node on the frontier, so the controller
//! reports `Unsolvable` at the initial bound without ever moving.

use wayfind_maze::{Cell, MazeGrid, Move};

use crate::contract::MazeWorld;

/// A 3x3 grid whose start cell (1,1) is sealed off.
pub struct SealedStartWorld {
    grid: MazeGrid,
}

impl SealedStartWorld {
    #[must_use]
    pub fn new() -> Self {
        let mut grid = MazeGrid::open(3, 3);
        let start = Cell::new(1, 1);
        for mv in Move::ALL {
            grid.add_wall(start, mv);
        }
        Self { grid }
    }
}

impl Default for SealedStartWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl MazeWorld for SealedStartWorld {
    fn world_id(&self) -> &str {
        "sealed:3x3"
    }

    fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    fn start(&self) -> Cell {
        Cell::new(1, 1)
    }

    fn goal(&self) -> Cell {
        Cell::new(2, 2)
    }
}
