//! Remaining-cost heuristics.
//!
//! The heuristic is an external collaborator: the controller consumes it
//! through the [`Heuristic`] trait and never validates admissibility. An
//! inadmissible estimate silently costs optimality, not correctness — the
//! controller still terminates and still returns a path if one exists.

use wayfind_maze::Cell;

/// Estimate of the remaining cost from a cell to the goal.
///
/// # Contract
///
/// For the returned path to be optimal the estimate must be admissible:
/// `estimate(cell) <= true_remaining_cost(cell)` for every reachable cell.
/// Estimates must also be stable — the controller may query the same cell
/// several times within one attempt and assumes identical answers.
pub trait Heuristic {
    /// Estimated number of remaining unit-cost moves from `cell` to goal.
    fn estimate(&self, cell: Cell) -> u32;
}

/// Manhattan distance to a fixed goal cell.
///
/// Admissible for the 4-move unit-cost grid: no wall placement can make the
/// true path shorter than the coordinate distance.
#[derive(Debug, Clone, Copy)]
pub struct ManhattanToGoal {
    goal: Cell,
}

impl ManhattanToGoal {
    /// Construct the heuristic for a fixed goal.
    #[must_use]
    pub const fn new(goal: Cell) -> Self {
        Self { goal }
    }

    /// The goal this heuristic measures toward.
    #[must_use]
    pub const fn goal(&self) -> Cell {
        self.goal
    }
}

impl Heuristic for ManhattanToGoal {
    fn estimate(&self, cell: Cell) -> u32 {
        cell.manhattan_distance(self.goal)
    }
}
