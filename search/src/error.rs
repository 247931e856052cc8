//! Typed search errors.
//!
//! Two classes share one enum but are handled differently by hosts:
//!
//! - [`SearchError::Unsolvable`] is an expected terminal outcome — the maze
//!   has no path reachable from the start under the move set. Hosts end the
//!   episode with failure status.
//! - The remaining variants are internal-invariant or lifecycle violations.
//!   They indicate a bug, never a recoverable condition; hosts should abort
//!   loudly rather than retry.

use wayfind_maze::Cell;

/// Typed failure from the search controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A restart was triggered with no excluded candidate recorded: the
    /// search space under the current bound is fully drained and raising
    /// the bound cannot admit anything new. The maze has no solution.
    Unsolvable { bound: u32 },
    /// A backtrack target had no parent entry, or a settled cell had no
    /// recorded path cost. Must never occur under a correct controller.
    MissingParent { cell: Cell },
    /// A proposed step was not a unit move from the current cell. Must
    /// never occur under a correct controller.
    NonAdjacentStep { from: Cell, to: Cell },
    /// `act` was called before `start_episode`.
    EpisodeNotStarted,
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsolvable { bound } => {
                write!(f, "maze is unsolvable: attempt at bound {bound} drained with no excluded candidates")
            }
            Self::MissingParent { cell } => {
                write!(f, "internal invariant violated: no discovery record for cell {cell}")
            }
            Self::NonAdjacentStep { from, to } => {
                write!(f, "internal invariant violated: non-adjacent step {from} -> {to}")
            }
            Self::EpisodeNotStarted => {
                write!(f, "act called before start_episode")
            }
        }
    }
}

impl std::error::Error for SearchError {}

impl SearchError {
    /// Whether this error is the expected unsolvable-maze outcome rather
    /// than an internal-invariant violation.
    #[must_use]
    pub const fn is_unsolvable(&self) -> bool {
        matches!(self, Self::Unsolvable { .. })
    }
}
