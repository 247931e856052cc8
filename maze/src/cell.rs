//! Grid cell coordinates.
//!
//! `Cell` is an immutable value type: equality, hashing, and ordering are by
//! coordinate value. The `Ord` impl is (row, col) lexicographic so that
//! `BTreeMap`/`BTreeSet` iteration over cells is deterministic.

/// A maze position identified by (row, column).
///
/// Coordinates are signed so that neighbor arithmetic at the grid edge cannot
/// wrap; out-of-grid cells are representable and rejected by the topology
/// layer, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Construct a cell at (row, col).
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell displaced by (dr, dc).
    #[must_use]
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The (dr, dc) displacement from `self` to `other`.
    #[must_use]
    pub const fn delta_to(self, other: Self) -> (i32, i32) {
        (other.row - self.row, other.col - self.col)
    }

    /// Manhattan distance to `other`.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
