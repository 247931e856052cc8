//! The IDA* search controller: per-tick decision logic and episode lifecycle.
//!
//! One controller instance owns one agent's search state. The host calls
//! [`SearchController::start_episode`] with the first observation, then
//! [`SearchController::act`] once per tick, and finally
//! [`SearchController::end_episode`] when it declares the episode over
//! (goal reached, unsolvable, or external timeout).
//!
//! # How a tick is decided
//!
//! 1. If the current cell has no cached adjacency list this attempt, build
//!    it: for each unblocked, unvisited neighbor compute
//!    `f = g(current) + 1 + heuristic(neighbor)`. Neighbors with `f` above
//!    the bound are excluded (tracking the minimum excluded `f`); the rest
//!    are admitted with their parent and path cost recorded. The admitted
//!    list is stable-sorted ascending by heuristic, so equal estimates keep
//!    [`Move::ALL`] generation order — the deterministic tie-break.
//! 2. The first unvisited entry of the cached list is the next cell. If the
//!    list is drained and the current cell is the start, the attempt is
//!    exhausted: the bound is raised to the minimum excluded `f`, all
//!    attempt state is cleared, the host repositions the agent, and the
//!    tick resumes from the start observation. A drain anywhere else
//!    backtracks to the parent.
//! 3. The current cell is settled, the backpointer into the next cell is
//!    recorded (write-once), and the cell delta is translated into a move.
//!
//! Restarts are a loop inside one call, never recursion: a tick always
//! returns a single move or a definitive failure, and stack depth stays
//! constant no matter how many bounds an episode burns through.

use wayfind_maze::{Cell, Move, Observation};

use crate::attempt::AttemptState;
use crate::environment::Environment;
use crate::error::SearchError;
use crate::heuristic::{Heuristic, ManhattanToGoal};
use crate::trace::{EpisodeOutcome, EpisodeTrace, TraceEventV1};

/// Per-episode anchors and attempt state.
struct Episode {
    start_cell: Cell,
    start_observation: Observation,
    bound: u32,
    attempt_index: u32,
    attempt: AttemptState,
    trace: EpisodeTrace,
}

/// The IDA* decision controller for one agent.
pub struct SearchController {
    heuristic: Box<dyn Heuristic>,
    episode: Option<Episode>,
}

impl SearchController {
    /// Construct a controller around a heuristic.
    #[must_use]
    pub fn new(heuristic: Box<dyn Heuristic>) -> Self {
        Self {
            heuristic,
            episode: None,
        }
    }

    /// Convenience constructor: Manhattan distance to a fixed goal.
    #[must_use]
    pub fn with_manhattan_goal(goal: Cell) -> Self {
        Self::new(Box::new(ManhattanToGoal::new(goal)))
    }

    /// Begin an episode and return its first move.
    ///
    /// Records the start cell and observation for later restarts and sets
    /// the initial bound to `heuristic(start)`. Any prior episode state is
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Unsolvable`] if the start cell is already
    /// fully enclosed (nothing was admitted and nothing was excluded).
    pub fn start_episode(
        &mut self,
        observation: Observation,
        env: &mut dyn Environment,
    ) -> Result<Move, SearchError> {
        let start = observation.cell();
        let bound = self.heuristic.estimate(start);
        let mut trace = EpisodeTrace::new();
        trace.push(TraceEventV1::EpisodeStart { start, bound });
        self.episode = Some(Episode {
            start_cell: start,
            start_observation: observation.clone(),
            bound,
            attempt_index: 0,
            attempt: AttemptState::rooted_at(start),
            trace,
        });
        env.mark_visited(start);
        self.step(observation, env)
    }

    /// Decide the move for one tick.
    ///
    /// # Errors
    ///
    /// - [`SearchError::EpisodeNotStarted`] if called before
    ///   [`SearchController::start_episode`].
    /// - [`SearchError::Unsolvable`] once every bound is exhausted with no
    ///   excluded candidate left to admit.
    /// - [`SearchError::MissingParent`] / [`SearchError::NonAdjacentStep`]
    ///   on internal-invariant violations (controller bugs; fatal).
    pub fn act(
        &mut self,
        observation: Observation,
        env: &mut dyn Environment,
    ) -> Result<Move, SearchError> {
        if self.episode.is_none() {
            return Err(SearchError::EpisodeNotStarted);
        }
        self.step(observation, env)
    }

    /// Close the episode, returning its trace with the terminal outcome
    /// appended. All attempt-scoped state is released; the controller can
    /// start a new episode afterwards.
    pub fn end_episode(&mut self, outcome: EpisodeOutcome) -> EpisodeTrace {
        let Some(mut episode) = self.episode.take() else {
            return EpisodeTrace::new();
        };
        let path = match outcome {
            EpisodeOutcome::GoalReached { cell } => {
                episode.attempt.reconstruct_path(episode.start_cell, cell)
            }
            EpisodeOutcome::Unsolvable { .. } | EpisodeOutcome::Aborted => Vec::new(),
        };
        episode.trace.push(TraceEventV1::Outcome { outcome, path });
        episode.trace
    }

    /// The active bound, if an episode is running.
    #[must_use]
    pub fn bound(&self) -> Option<u32> {
        self.episode.as_ref().map(|e| e.bound)
    }

    /// Zero-based index of the active attempt (= restarts so far).
    #[must_use]
    pub fn attempt_index(&self) -> Option<u32> {
        self.episode.as_ref().map(|e| e.attempt_index)
    }

    /// The recorded start cell of the active episode.
    #[must_use]
    pub fn start_cell(&self) -> Option<Cell> {
        self.episode.as_ref().map(|e| e.start_cell)
    }

    /// Reconstruct the start-to-`cell` movement chain from backpointers.
    /// Empty if no episode is active.
    #[must_use]
    pub fn reconstructed_path(&self, cell: Cell) -> Vec<Cell> {
        self.episode
            .as_ref()
            .map(|e| e.attempt.reconstruct_path(e.start_cell, cell))
            .unwrap_or_default()
    }

    fn step(
        &mut self,
        mut observation: Observation,
        env: &mut dyn Environment,
    ) -> Result<Move, SearchError> {
        let episode = self
            .episode
            .as_mut()
            .ok_or(SearchError::EpisodeNotStarted)?;

        loop {
            let current = observation.cell();

            if !episode.attempt.has_adjacency(current) {
                let g_current = episode
                    .attempt
                    .g_cost(current)
                    .ok_or(SearchError::MissingParent { cell: current })?;
                let mut admitted = Vec::with_capacity(Move::COUNT);
                for mv in Move::ALL {
                    if observation.is_blocked(mv) {
                        continue;
                    }
                    let neighbor = mv.apply(current);
                    if episode.attempt.is_visited(neighbor) {
                        continue;
                    }
                    let f = g_current + 1 + self.heuristic.estimate(neighbor);
                    if f > episode.bound {
                        episode.attempt.record_exclusion(f);
                    } else {
                        episode
                            .attempt
                            .record_discovery(neighbor, current, g_current + 1);
                        env.mark_frontier(neighbor);
                        admitted.push(neighbor);
                    }
                }
                // Stable sort: equal estimates keep Move::ALL generation order.
                admitted.sort_by_key(|&n| self.heuristic.estimate(n));
                episode.attempt.cache_adjacency(current, admitted);
            }

            let next = match episode.attempt.first_unvisited_neighbor(current) {
                Some(next) => next,
                None if current == episode.start_cell => {
                    // Attempt drained at the origin: tighten the bound or
                    // report the maze unsolvable.
                    let Some(new_bound) = episode.attempt.min_excluded() else {
                        return Err(SearchError::Unsolvable {
                            bound: episode.bound,
                        });
                    };
                    episode.attempt_index += 1;
                    episode.trace.push(TraceEventV1::Restart {
                        attempt: episode.attempt_index,
                        old_bound: episode.bound,
                        new_bound,
                    });
                    episode.bound = new_bound;
                    episode.attempt.reset(episode.start_cell);
                    env.reposition(episode.start_cell);
                    observation = episode.start_observation.clone();
                    continue;
                }
                None => episode
                    .attempt
                    .parent_of(current)
                    .ok_or(SearchError::MissingParent { cell: current })?,
            };

            episode.attempt.mark_visited(current);
            env.mark_visited(current);
            episode.attempt.record_backpointer(next, current);

            let (dr, dc) = current.delta_to(next);
            let mv = Move::from_delta(dr, dc).ok_or(SearchError::NonAdjacentStep {
                from: current,
                to: next,
            })?;
            episode.trace.push(TraceEventV1::Step {
                attempt: episode.attempt_index,
                bound: episode.bound,
                from: current,
                mv,
                to: next,
            });
            return Ok(mv);
        }
    }
}
