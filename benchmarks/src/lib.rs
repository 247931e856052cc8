//! Shared helpers for wayfind benchmark suites.

use wayfind_harness::runner::{run_with_manhattan, EpisodeReport, RunPolicy};
use wayfind_harness::worlds::SerpentineWorld;
use wayfind_maze::{Cell, MazeGrid};
use wayfind_search::{NullEnvironment, SearchController};

/// Run one full serpentine episode of the given size.
///
/// # Panics
///
/// Panics if the episode does not reach the goal. Benchmark runs are
/// expected to succeed.
#[must_use]
pub fn run_serpentine_episode(rows: i32, cols: i32) -> EpisodeReport {
    let world = SerpentineWorld::new(rows, cols);
    let report = run_with_manhattan(&world, &RunPolicy::default());
    assert!(
        report.outcome.is_goal_reached(),
        "serpentine {rows}x{cols} episode must reach the goal"
    );
    report
}

/// A controller mid-episode on an open grid, ready for `act` calls.
pub struct TickSetup {
    pub controller: SearchController,
    pub grid: MazeGrid,
    pub position: Cell,
}

/// Start an episode on an open grid and return the controller positioned
/// after its first move, so benchmarks can time steady-state `act` ticks.
///
/// # Panics
///
/// Panics if the first decision fails. Setup failures are fatal.
#[must_use]
pub fn prepare_open_grid_tick(size: i32) -> TickSetup {
    let grid = MazeGrid::open(size, size);
    let goal = Cell::new(size - 1, size - 1);
    let mut controller = SearchController::with_manhattan_goal(goal);
    let mut env = NullEnvironment;
    let start = Cell::new(0, 0);
    let mv = controller
        .start_episode(grid.observe(start), &mut env)
        .expect("first decision succeeds on an open grid");
    TickSetup {
        controller,
        grid,
        position: mv.apply(start),
    }
}
