use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap},
};

use log::debug;
use sweepgrid_core::{DirtMask, DirtSet, Grid, Position};

use crate::{Action, Solution, SolverError};

/// When a route counts as finished.
///
/// The two policies are different problems with different optimal routes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum GoalPolicy {
    /// Every dirty cell has been cleaned; the robot may stop anywhere.
    #[default]
    CleanAll,
    /// Every dirty cell has been cleaned and the robot is back at the start.
    ReturnToStart,
}

/// Counters collected during one search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// States whose successors were generated.
    pub expanded: usize,
    /// Popped nodes discarded because their state was already reached at an
    /// equal or lower cost.
    pub pruned: usize,
    /// Nodes pushed onto the frontier, including the initial one.
    pub pushed: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// The result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    solution: Option<Solution>,
    stats: SearchStats,
}

impl SearchOutcome {
    /// Returns the route found, or `None` if the frontier was exhausted.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Consumes the outcome and returns the route, if any.
    #[must_use]
    pub fn into_solution(self) -> Option<Solution> {
        self.solution
    }

    /// Returns `true` if a route was found.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Returns the route cost, or `None` if there is no route.
    #[must_use]
    pub fn cost(&self) -> Option<usize> {
        self.solution.as_ref().map(Solution::cost)
    }

    /// Returns the route cost as a float, with `f64::INFINITY` for no route.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn cost_f64(&self) -> f64 {
        self.cost().map_or(f64::INFINITY, |cost| cost as f64)
    }

    /// Returns the search counters.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Best-first route solver for the cleaning puzzle.
///
/// Nodes are popped in ascending order of `f = g + h`, where `g` is the
/// number of actions taken and `h` estimates the remaining cost as
///
/// - the number of dirty cells left, plus the Manhattan distance to the
///   nearest one, or
/// - once everything is clean, `0` for [`GoalPolicy::CleanAll`] or the
///   Manhattan distance back to the start for [`GoalPolicy::ReturnToStart`].
///
/// Ties are broken by discovery order, so results are deterministic.
///
/// A popped node whose state was already reached with an equal or lower `g`
/// is discarded (branch and bound). The first popped goal node is returned.
///
/// # Optimality
///
/// The estimate is a wall-blind relaxation. Manhattan distance never exceeds
/// the walking distance around walls, and every dirty cell left still needs
/// its own clean action, so `h` never overestimates and drops by at most one
/// per action. The first goal popped is therefore a minimum-cost route.
/// Walls only make the estimate looser, which costs extra expansions on
/// layouts with long detours.
///
/// # Examples
///
/// ```
/// use sweepgrid_core::{Grid, Position};
/// use sweepgrid_solver::{CleaningSolver, GoalPolicy};
///
/// let grid: Grid = "
///     . . D
///     . # .
///     D . .
/// "
/// .parse()?;
///
/// let solver = CleaningSolver::new(GoalPolicy::ReturnToStart);
/// let outcome = solver.solve(Grid::START, &grid, &grid.dirt_set()?)?;
///
/// let solution = outcome.solution().expect("grid is connected");
/// assert_eq!(solution.final_position(), Grid::START);
/// assert_eq!(solution.cost(), 10);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CleaningSolver {
    goal: GoalPolicy,
}

impl CleaningSolver {
    /// Creates a solver with the given goal policy.
    #[must_use]
    pub fn new(goal: GoalPolicy) -> Self {
        Self { goal }
    }

    /// Returns the goal policy.
    #[must_use]
    pub fn goal(&self) -> GoalPolicy {
        self.goal
    }

    /// Searches for a minimum-cost route from `start` that cleans every cell
    /// of `dirt` on `grid`.
    ///
    /// `grid` and `dirt` are only read. An instance without a route, such as
    /// dirt in a region cut off from `start`, yields an outcome without a
    /// solution.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if `start` is outside the grid or a wall, or
    /// if a cell of `dirt` is outside the grid, a wall, or not dirty in
    /// `grid`.
    pub fn solve(
        &self,
        start: Position,
        grid: &Grid,
        dirt: &DirtSet,
    ) -> Result<SearchOutcome, SolverError> {
        check_input(start, grid, dirt)?;
        let outcome = Search::new(self.goal, start, grid, dirt).run();
        debug!(
            "search {} ({:?}): expanded={} pruned={} pushed={} max_frontier={}",
            outcome
                .cost()
                .map_or_else(|| "found no route".to_owned(), |cost| format!("found cost {cost}")),
            self.goal,
            outcome.stats.expanded,
            outcome.stats.pruned,
            outcome.stats.pushed,
            outcome.stats.max_frontier,
        );
        Ok(outcome)
    }

    /// Solves `grid` from [`Grid::START`] using the grid's own dirt.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Dirt`] if the grid holds more dirt than a
    /// [`DirtSet`] can index, and otherwise the errors of
    /// [`solve`](Self::solve).
    pub fn solve_grid(&self, grid: &Grid) -> Result<SearchOutcome, SolverError> {
        let dirt = grid.dirt_set()?;
        self.solve(Grid::START, grid, &dirt)
    }
}

fn check_input(start: Position, grid: &Grid, dirt: &DirtSet) -> Result<(), SolverError> {
    if !grid.contains(start) {
        return Err(SolverError::StartOutOfBounds {
            start,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    if grid.is_wall(start) {
        return Err(SolverError::StartOnWall { start });
    }
    for pos in dirt {
        if !grid.contains(pos) {
            return Err(SolverError::DirtOutOfBounds { pos });
        }
        if grid.is_wall(pos) {
            return Err(SolverError::DirtOnWall { pos });
        }
        if !grid.is_dirty(pos) {
            return Err(SolverError::DirtNotInGrid { pos });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SearchState {
    pos: Position,
    cleaned: DirtMask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SearchNode {
    f: usize,
    g: usize,
    seq: usize,
    state: SearchState,
    trail: Option<usize>,
}

impl Ord for SearchNode {
    // Reversed so that `BinaryHeap` pops the lowest f, earliest discovered first.
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One step of a route, linked to the step before it.
///
/// Entries are only ever appended, so every node's route stays intact no
/// matter how many successors share its prefix.
#[derive(Debug, Clone, Copy)]
struct TrailEntry {
    parent: Option<usize>,
    action: Action,
}

struct Search<'a> {
    goal: GoalPolicy,
    start: Position,
    grid: &'a Grid,
    dirt: &'a DirtSet,
    all_clean: DirtMask,
    frontier: BinaryHeap<SearchNode>,
    best_g: HashMap<SearchState, usize>,
    trail: Vec<TrailEntry>,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(goal: GoalPolicy, start: Position, grid: &'a Grid, dirt: &'a DirtSet) -> Self {
        Self {
            goal,
            start,
            grid,
            dirt,
            all_clean: dirt.full_mask(),
            frontier: BinaryHeap::new(),
            best_g: HashMap::new(),
            trail: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    fn run(mut self) -> SearchOutcome {
        let initial = SearchState {
            pos: self.start,
            cleaned: DirtMask::EMPTY,
        };
        self.push(initial, 0, None);

        while let Some(node) = self.frontier.pop() {
            if self.is_goal(node.state) {
                return SearchOutcome {
                    solution: Some(self.solution(node.trail)),
                    stats: self.stats,
                };
            }

            if self
                .best_g
                .get(&node.state)
                .is_some_and(|&best| best <= node.g)
            {
                self.stats.pruned += 1;
                continue;
            }
            self.best_g.insert(node.state, node.g);
            self.stats.expanded += 1;
            self.expand(node);
        }

        SearchOutcome {
            solution: None,
            stats: self.stats,
        }
    }

    fn expand(&mut self, node: SearchNode) {
        let SearchState { pos, cleaned } = node.state;
        let g = node.g + 1;

        if let Some(index) = self.dirt.index_of(pos) {
            if !cleaned.contains(index) {
                let next = SearchState {
                    pos,
                    cleaned: cleaned.with(index),
                };
                self.push(next, g, Some((node.trail, Action::Clean { at: pos })));
            }
        }

        for to in self.grid.open_neighbors(pos) {
            let next = SearchState { pos: to, cleaned };
            self.push(next, g, Some((node.trail, Action::Move { to })));
        }
    }

    fn push(&mut self, state: SearchState, g: usize, step: Option<(Option<usize>, Action)>) {
        let trail = step.map(|(parent, action)| {
            self.trail.push(TrailEntry { parent, action });
            self.trail.len() - 1
        });
        let node = SearchNode {
            f: g + self.heuristic(state),
            g,
            seq: self.stats.pushed,
            state,
            trail,
        };
        self.frontier.push(node);
        self.stats.pushed += 1;
        self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());
    }

    fn is_goal(&self, state: SearchState) -> bool {
        state.cleaned == self.all_clean
            && match self.goal {
                GoalPolicy::CleanAll => true,
                GoalPolicy::ReturnToStart => state.pos == self.start,
            }
    }

    fn heuristic(&self, state: SearchState) -> usize {
        heuristic(self.goal, self.start, self.dirt, state.pos, state.cleaned)
    }

    fn solution(&self, mut trail: Option<usize>) -> Solution {
        let mut actions = Vec::new();
        while let Some(index) = trail {
            let entry = self.trail[index];
            actions.push(entry.action);
            trail = entry.parent;
        }
        actions.reverse();
        Solution::new(self.start, actions)
    }
}

fn heuristic(
    goal: GoalPolicy,
    start: Position,
    dirt: &DirtSet,
    pos: Position,
    cleaned: DirtMask,
) -> usize {
    let mut remaining = 0;
    let mut nearest = usize::MAX;
    for target in dirt.remaining(cleaned) {
        remaining += 1;
        nearest = nearest.min(pos.manhattan(target));
    }
    if remaining > 0 {
        return remaining + nearest;
    }
    match goal {
        GoalPolicy::CleanAll => 0,
        GoalPolicy::ReturnToStart => pos.manhattan(start),
    }
}
