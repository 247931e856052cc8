//! Episode runner: drives a [`SearchController`] against a [`MazeWorld`].
//!
//! The runner is the host side of the controller's lifecycle. Each tick it
//! observes the simulated agent's cell, asks the controller for a move,
//! applies any restart teleport the controller requested through the
//! environment hooks, and advances the agent. It enforces a tick budget and
//! validates every proposed move against the world's walls, so a controller
//! bug surfaces as a reported outcome rather than a silent wall clip.

use wayfind_maze::{Cell, Move};
use wayfind_search::{
    Environment, EpisodeOutcome, EpisodeTrace, SearchController, SearchError,
};

use crate::contract::MazeWorld;

/// Host-side limits for one episode run.
#[derive(Debug, Clone, Copy)]
pub struct RunPolicy {
    /// Maximum controller decisions before the run is declared over budget.
    pub max_ticks: u64,
}

impl Default for RunPolicy {
    fn default() -> Self {
        Self { max_ticks: 100_000 }
    }
}

/// How a run ended, from the host's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The agent stepped onto the goal; `cost` is the reconstructed path cost.
    GoalReached { cost: u32 },
    /// The controller proved the maze unsolvable at this bound.
    Unsolvable { bound: u32 },
    /// The tick budget ran out before a terminal state.
    TickBudgetExceeded,
    /// The controller proposed a move into a wall. Always a controller bug.
    BlockedMoveProposed { from: Cell, mv: Move },
    /// The controller returned an internal-invariant error.
    ControllerFault { detail: String },
}

impl RunOutcome {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self, Self::GoalReached { .. })
    }
}

/// Everything the host learned from one episode.
#[derive(Debug)]
pub struct EpisodeReport {
    pub world_id: String,
    pub outcome: RunOutcome,
    /// Controller decisions made, including the restarted ticks.
    pub ticks: u64,
    /// Bound restarts the episode burned through.
    pub restarts: u32,
    /// The bound in force when the episode ended.
    pub final_bound: u32,
    /// Start-to-goal cell chain on success, empty otherwise.
    pub path: Vec<Cell>,
    pub trace: EpisodeTrace,
}

/// Environment adapter for the simulated agent.
///
/// Restart teleports are latched and consumed by the runner before the next
/// move applies. Mark hooks are counted so tests can assert the controller
/// reports its progress.
#[derive(Debug, Default)]
pub struct SimEnv {
    teleport: Option<Cell>,
    visited_marks: u64,
    frontier_marks: u64,
}

impl SimEnv {
    fn take_teleport(&mut self) -> Option<Cell> {
        self.teleport.take()
    }

    #[must_use]
    pub fn visited_marks(&self) -> u64 {
        self.visited_marks
    }

    #[must_use]
    pub fn frontier_marks(&self) -> u64 {
        self.frontier_marks
    }
}

impl Environment for SimEnv {
    fn reposition(&mut self, cell: Cell) {
        self.teleport = Some(cell);
    }

    fn mark_visited(&mut self, _cell: Cell) {
        self.visited_marks += 1;
    }

    fn mark_frontier(&mut self, _cell: Cell) {
        self.frontier_marks += 1;
    }
}

/// Run one full episode of `controller` on `world`.
pub fn run_episode(
    world: &dyn MazeWorld,
    controller: &mut SearchController,
    policy: &RunPolicy,
) -> EpisodeReport {
    let mut env = SimEnv::default();
    let mut position = world.start();
    let goal = world.goal();
    let mut ticks: u64 = 0;

    let outcome = loop {
        if ticks >= policy.max_ticks {
            break RunOutcome::TickBudgetExceeded;
        }
        let observation = world.observe(position);
        let decided = if ticks == 0 {
            controller.start_episode(observation, &mut env)
        } else {
            controller.act(observation, &mut env)
        };
        ticks += 1;

        let mv = match decided {
            Ok(mv) => mv,
            Err(SearchError::Unsolvable { bound }) => break RunOutcome::Unsolvable { bound },
            Err(e) => {
                break RunOutcome::ControllerFault {
                    detail: e.to_string(),
                }
            }
        };

        // A restart teleports the agent home before the move applies.
        if let Some(teleport) = env.take_teleport() {
            position = teleport;
        }
        if world.grid().is_blocked(position, mv) {
            break RunOutcome::BlockedMoveProposed { from: position, mv };
        }
        position = mv.apply(position);
        if position == goal {
            let cost = controller
                .reconstructed_path(goal)
                .len()
                .saturating_sub(1);
            break RunOutcome::GoalReached {
                cost: u32::try_from(cost).unwrap_or(u32::MAX),
            };
        }
    };

    let restarts = controller.attempt_index().unwrap_or(0);
    let final_bound = controller.bound().unwrap_or(0);
    let path = match outcome {
        RunOutcome::GoalReached { .. } => controller.reconstructed_path(goal),
        _ => Vec::new(),
    };
    let terminal = match &outcome {
        RunOutcome::GoalReached { .. } => EpisodeOutcome::GoalReached { cell: goal },
        RunOutcome::Unsolvable { bound } => EpisodeOutcome::Unsolvable { bound: *bound },
        RunOutcome::TickBudgetExceeded
        | RunOutcome::BlockedMoveProposed { .. }
        | RunOutcome::ControllerFault { .. } => EpisodeOutcome::Aborted,
    };
    let trace = controller.end_episode(terminal);

    EpisodeReport {
        world_id: world.world_id().to_string(),
        outcome,
        ticks,
        restarts,
        final_bound,
        path,
        trace,
    }
}

/// Run one episode with a fresh Manhattan-heuristic controller.
pub fn run_with_manhattan(world: &dyn MazeWorld, policy: &RunPolicy) -> EpisodeReport {
    let mut controller = SearchController::with_manhattan_goal(world.goal());
    run_episode(world, &mut controller, policy)
}
