//! The fixed move set.
//!
//! The maze's allowed step directions are known in advance and published as
//! [`Move::ALL`]. The order of that array is part of the host contract: the
//! blocked flags in an [`crate::observation::Observation`] and the move index
//! on the wire both follow it. Rows grow downward, so `Up` is `(-1, 0)`.

use crate::cell::Cell;

/// One of the four allowed step directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Move {
    Up,
    Right,
    Down,
    Left,
}

impl Move {
    /// The published enumeration order. Observation flags, wire indices, and
    /// the adjacency tie-break all use this order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Number of moves in the fixed set.
    pub const COUNT: usize = 4;

    /// The (dr, dc) direction vector for this move.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
        }
    }

    /// Index of this move in [`Move::ALL`] (the wire identifier).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }

    /// Recover a move from a unit direction vector.
    ///
    /// Returns `None` for any (dr, dc) outside the fixed set, including the
    /// zero vector and diagonal steps.
    #[must_use]
    pub fn from_delta(dr: i32, dc: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.delta() == (dr, dc))
    }

    /// The inverse direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// The neighbor of `cell` in this direction.
    #[must_use]
    pub const fn apply(self, cell: Cell) -> Cell {
        let (dr, dc) = self.delta();
        cell.offset(dr, dc)
    }

    /// Stable lowercase name (used in trace artifacts).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
