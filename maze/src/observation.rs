//! Per-tick sensor snapshots.
//!
//! The host delivers one observation per tick as `(row, col, blocked[0..3])`
//! with blocked flags in [`Move::ALL`] order. Malformed input (wrong arity)
//! is rejected here, at the boundary, before the search controller ever sees
//! it. An `Observation` that exists is well-formed by construction.

use crate::cell::Cell;
use crate::movement::Move;

/// A validated snapshot of the agent's local senses for one tick.
///
/// Read-only input to the controller; the controller never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    cell: Cell,
    blocked: [bool; Move::COUNT],
}

/// Typed failure for observation validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservationError {
    /// The raw sensor vector did not have `2 + Move::COUNT` entries.
    WrongArity { expected: usize, found: usize },
}

impl std::fmt::Display for ObservationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongArity { expected, found } => {
                write!(
                    f,
                    "malformed observation: expected {expected} sensor values, found {found}"
                )
            }
        }
    }
}

impl std::error::Error for ObservationError {}

impl Observation {
    /// Construct from an already-structured cell + blocked flags.
    ///
    /// The fixed-size array makes wrong arity unrepresentable on this path.
    #[must_use]
    pub const fn new(cell: Cell, blocked: [bool; Move::COUNT]) -> Self {
        Self { cell, blocked }
    }

    /// Parse the host wire format: `[row, col, blocked_0, .., blocked_3]`.
    ///
    /// A blocked flag is any nonzero value, matching the host's convention.
    ///
    /// # Errors
    ///
    /// Returns [`ObservationError::WrongArity`] if `raw` does not have
    /// exactly `2 + Move::COUNT` entries.
    pub fn parse(raw: &[i32]) -> Result<Self, ObservationError> {
        let expected = 2 + Move::COUNT;
        if raw.len() != expected {
            return Err(ObservationError::WrongArity {
                expected,
                found: raw.len(),
            });
        }
        let cell = Cell::new(raw[0], raw[1]);
        let mut blocked = [false; Move::COUNT];
        for (flag, &value) in blocked.iter_mut().zip(&raw[2..]) {
            *flag = value != 0;
        }
        Ok(Self { cell, blocked })
    }

    /// The agent's current cell.
    #[must_use]
    pub const fn cell(&self) -> Cell {
        self.cell
    }

    /// Whether the given direction is blocked from the current cell.
    #[must_use]
    pub const fn is_blocked(&self, mv: Move) -> bool {
        self.blocked[mv.index()]
    }
}
