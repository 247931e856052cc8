//! Fixture worlds.
//!
//! Each world is a fixed maze with known search behavior, used by unit
//! tests, determinism locks, and benchmarks:
//!
//! - [`open_grid::OpenGridWorld`] — no internal walls; the heuristic equals
//!   the true cost, so the first attempt walks straight to the goal.
//! - [`detour::DetourWorld`] — one barrier forces a cost-6 path against an
//!   initial bound of 4: exactly one restart.
//! - [`sealed::SealedStartWorld`] — the start cell is enclosed: immediate
//!   unsolvable outcome, no restart.
//! - [`serpentine::SerpentineWorld`] — generated boustrophedon corridors of
//!   parameterized size; many restarts, deterministic tick counts.

pub mod detour;
pub mod open_grid;
pub mod sealed;
pub mod serpentine;

pub use detour::DetourWorld;
pub use open_grid::OpenGridWorld;
pub use sealed::SealedStartWorld;
pub use serpentine::SerpentineWorld;
