//! `SerpentineWorld`: a parameterised corridor maze.
//!
//! Every pair of adjacent rows is walled off except for one gap that
//! alternates between the right and left edge, so the only route from the
//! top-left corner to the bottom-right one snakes across every row. The
//! optimal cost is `(cols - 1) * rows + (rows - 1)` for even row counts
//! (the goal sits at the far end of the last sweep); it is the standard
//! stress fixture for long single-corridor episodes.

use wayfind_maze::{Cell, MazeGrid, Move};

use crate::contract::MazeWorld;

pub struct SerpentineWorld {
    id: String,
    grid: MazeGrid,
    rows: i32,
    cols: i32,
}

impl SerpentineWorld {
    /// Build a serpentine maze. Requires at least 2 rows and 2 columns.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is below 2.
    #[must_use]
    pub fn new(rows: i32, cols: i32) -> Self {
        assert!(rows >= 2 && cols >= 2, "serpentine needs a 2x2 grid or larger");
        let mut grid = MazeGrid::open(rows, cols);
        for r in 0..rows - 1 {
            // Even rows keep the right edge open, odd rows the left edge.
            let gap = if r % 2 == 0 { cols - 1 } else { 0 };
            for c in 0..cols {
                if c != gap {
                    grid.add_wall(Cell::new(r, c), Move::Down);
                }
            }
        }
        Self {
            id: format!("serpentine:{rows}x{cols}"),
            grid,
            rows,
            cols,
        }
    }

    /// Cost of the single corridor from start to goal.
    #[must_use]
    pub fn corridor_cost(&self) -> u32 {
        let sweeps = (self.cols - 1) * self.rows;
        let drops = self.rows - 1;
        u32::try_from(sweeps + drops).unwrap_or(u32::MAX)
    }
}

impl MazeWorld for SerpentineWorld {
    fn world_id(&self) -> &str {
        &self.id
    }

    fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    fn start(&self) -> Cell {
        Cell::new(0, 0)
    }

    fn goal(&self) -> Cell {
        let col = if (self.rows - 1) % 2 == 0 {
            self.cols - 1
        } else {
            0
        };
        Cell::new(self.rows - 1, col)
    }
}
