//! Attempt-scoped search state.
//!
//! Everything in `AttemptState` lives exactly one search attempt: the whole
//! struct is cleared as a unit by [`AttemptState::reset`] whenever the bound
//! is raised. Ordered collections (`BTreeMap`/`BTreeSet`) keep iteration
//! deterministic at trace and debugging boundaries.

use std::collections::{BTreeMap, BTreeSet};

use wayfind_maze::Cell;

/// All mutable state of one IDA* attempt.
///
/// Invariants maintained by the recording methods:
/// - a parent and a path cost are recorded together, before the cell can be
///   settled;
/// - parents and backpointers are write-once (first discovery wins);
/// - `min_excluded`, once set, only decreases toward the cheapest excluded
///   f-cost, and is always strictly greater than the bound that excluded it.
#[derive(Debug, Default)]
pub struct AttemptState {
    visited: BTreeSet<Cell>,
    adjacency: BTreeMap<Cell, Vec<Cell>>,
    parents: BTreeMap<Cell, Cell>,
    backpointers: BTreeMap<Cell, Cell>,
    g_costs: BTreeMap<Cell, u32>,
    min_excluded: Option<u32>,
}

impl AttemptState {
    /// Fresh state for an attempt rooted at `start` (path cost zero).
    #[must_use]
    pub fn rooted_at(start: Cell) -> Self {
        let mut state = Self::default();
        state.reset(start);
        state
    }

    /// Clear every attempt-scoped structure and re-root at `start`.
    pub fn reset(&mut self, start: Cell) {
        self.visited.clear();
        self.adjacency.clear();
        self.parents.clear();
        self.backpointers.clear();
        self.g_costs.clear();
        self.g_costs.insert(start, 0);
        self.min_excluded = None;
    }

    /// Whether `cell` already has a cached adjacency list this attempt.
    #[must_use]
    pub fn has_adjacency(&self, cell: Cell) -> bool {
        self.adjacency.contains_key(&cell)
    }

    /// Cache the bound-filtered, heuristic-sorted neighbor list for `cell`.
    pub fn cache_adjacency(&mut self, cell: Cell, neighbors: Vec<Cell>) {
        self.adjacency.insert(cell, neighbors);
    }

    /// First cached neighbor of `cell` that is not yet visited.
    #[must_use]
    pub fn first_unvisited_neighbor(&self, cell: Cell) -> Option<Cell> {
        self.adjacency
            .get(&cell)?
            .iter()
            .copied()
            .find(|n| !self.visited.contains(n))
    }

    /// Whether `cell` was settled this attempt.
    #[must_use]
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    /// Settle `cell`.
    pub fn mark_visited(&mut self, cell: Cell) {
        self.visited.insert(cell);
    }

    /// Number of settled cells this attempt.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Record the first discovery of `neighbor` from `parent` at path cost
    /// `g`. A cell may be generated as a candidate from several cells; only
    /// the first discovery is kept.
    pub fn record_discovery(&mut self, neighbor: Cell, parent: Cell, g: u32) {
        self.parents.entry(neighbor).or_insert(parent);
        self.g_costs.entry(neighbor).or_insert(g);
    }

    /// The cell `cell` was first discovered from.
    #[must_use]
    pub fn parent_of(&self, cell: Cell) -> Option<Cell> {
        self.parents.get(&cell).copied()
    }

    /// Best known path cost from the start to `cell` this attempt.
    #[must_use]
    pub fn g_cost(&self, cell: Cell) -> Option<u32> {
        self.g_costs.get(&cell).copied()
    }

    /// Record an excluded candidate's f-cost, keeping the minimum.
    pub fn record_exclusion(&mut self, f: u32) {
        self.min_excluded = Some(match self.min_excluded {
            Some(current) => current.min(f),
            None => f,
        });
    }

    /// The minimum f-cost excluded so far (`None` = nothing excluded).
    #[must_use]
    pub fn min_excluded(&self) -> Option<u32> {
        self.min_excluded
    }

    /// Record how the controller first transitioned into `to` (write-once).
    pub fn record_backpointer(&mut self, to: Cell, from: Cell) {
        self.backpointers.entry(to).or_insert(from);
    }

    /// Reconstruct the movement chain from `start` to `cell` by walking
    /// backpointers. Returns cells in start-to-`cell` order; returns just
    /// `[cell]` if no chain is recorded.
    #[must_use]
    pub fn reconstruct_path(&self, start: Cell, cell: Cell) -> Vec<Cell> {
        let mut path = vec![cell];
        let mut current = cell;
        while current != start {
            let Some(&previous) = self.backpointers.get(&current) else {
                break;
            };
            path.push(previous);
            current = previous;
        }
        path.reverse();
        path
    }
}
