//! Host-side maze topology.
//!
//! `MazeGrid` stores one wall bitmask per cell (bit i = wall toward
//! `Move::ALL[i]`). The grid boundary is implicitly walled: any step that
//! would leave the grid reads as blocked. The agent never sees this type —
//! it only receives [`Observation`]s derived from it one cell at a time.

use crate::cell::Cell;
use crate::movement::Move;
use crate::observation::Observation;

/// Wall topology for a rectangular maze.
#[derive(Debug, Clone)]
pub struct MazeGrid {
    rows: i32,
    cols: i32,
    walls: Vec<u8>,
}

const fn wall_bit(mv: Move) -> u8 {
    1 << mv.index()
}

impl MazeGrid {
    /// An open grid with boundary walls only.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is not positive; fixture dimensions are
    /// compile-time constants in practice.
    #[must_use]
    pub fn open(rows: i32, cols: i32) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive");
        #[allow(clippy::cast_sign_loss)]
        let cell_count = (rows as usize) * (cols as usize);
        Self {
            rows,
            cols,
            walls: vec![0; cell_count],
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether `cell` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.col >= 0 && cell.col < self.cols
    }

    #[allow(clippy::cast_sign_loss)]
    const fn cell_index(&self, cell: Cell) -> usize {
        (cell.row as usize) * (self.cols as usize) + (cell.col as usize)
    }

    /// Add a wall on the edge between `cell` and its neighbor toward `mv`.
    ///
    /// The wall is recorded on both sides so observations stay consistent
    /// regardless of which cell the agent observes from. Out-of-grid edges
    /// are ignored (the boundary is already walled).
    pub fn add_wall(&mut self, cell: Cell, mv: Move) {
        if !self.contains(cell) {
            return;
        }
        let index = self.cell_index(cell);
        self.walls[index] |= wall_bit(mv);

        let neighbor = mv.apply(cell);
        if self.contains(neighbor) {
            let neighbor_index = self.cell_index(neighbor);
            self.walls[neighbor_index] |= wall_bit(mv.opposite());
        }
    }

    /// Whether stepping from `cell` toward `mv` is blocked.
    ///
    /// Blocked means: `cell` is outside the grid, the step would leave the
    /// grid, or a wall sits on that edge.
    #[must_use]
    pub fn is_blocked(&self, cell: Cell, mv: Move) -> bool {
        if !self.contains(cell) || !self.contains(mv.apply(cell)) {
            return true;
        }
        self.walls[self.cell_index(cell)] & wall_bit(mv) != 0
    }

    /// Build the per-tick observation for an agent standing at `cell`.
    #[must_use]
    pub fn observe(&self, cell: Cell) -> Observation {
        let mut blocked = [false; Move::COUNT];
        for (flag, mv) in blocked.iter_mut().zip(Move::ALL) {
            *flag = self.is_blocked(cell, mv);
        }
        Observation::new(cell, blocked)
    }
}
