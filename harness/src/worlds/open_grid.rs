//! `OpenGridWorld`: a rectangular grid with boundary walls only.
//!
//! Corner to corner, Manhattan distance equals the true cost, so an
//! admissible-heuristic search completes on its first attempt with zero
//! restarts. The 3x3 instance is the canonical smoke fixture.

use wayfind_maze::{Cell, MazeGrid};

use crate::contract::MazeWorld;

/// An open grid, start at the top-left corner, goal at the bottom-right.
pub struct OpenGridWorld {
    id: String,
    grid: MazeGrid,
    start: Cell,
    goal: Cell,
}

impl OpenGridWorld {
    /// An open `rows x cols` grid from (0,0) to the opposite corner.
    #[must_use]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            id: format!("open_grid:{rows}x{cols}"),
            grid: MazeGrid::open(rows, cols),
            start: Cell::new(0, 0),
            goal: Cell::new(rows - 1, cols - 1),
        }
    }

    /// The canonical 3x3 smoke fixture.
    #[must_use]
    pub fn three_by_three() -> Self {
        Self::new(3, 3)
    }
}

impl MazeWorld for OpenGridWorld {
    fn world_id(&self) -> &str {
        &self.id
    }

    fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    fn start(&self) -> Cell {
        self.start
    }

    fn goal(&self) -> Cell {
        self.goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_maze::Move;

    #[test]
    fn three_by_three_has_expected_anchors() {
        let world = OpenGridWorld::three_by_three();
        assert_eq!(world.world_id(), "open_grid:3x3");
        assert_eq!(world.start(), Cell::new(0, 0));
        assert_eq!(world.goal(), Cell::new(2, 2));
        assert_eq!(world.start().manhattan_distance(world.goal()), 4);
    }

    #[test]
    fn interior_cell_is_fully_open() {
        let world = OpenGridWorld::three_by_three();
        let obs = world.observe(Cell::new(1, 1));
        for mv in Move::ALL {
            assert!(!obs.is_blocked(mv), "{mv} should be open at the center");
        }
    }
}
