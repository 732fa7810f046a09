//! Test utilities for solver scenarios.
//!
//! [`RouteTester`] solves a grid written as text and checks the resulting
//! route with fluent assertions. [`reference_cost`] is an exhaustive
//! breadth-first search used to cross-check route costs.

use std::collections::{HashSet, VecDeque};

use sweepgrid_core::{DirtMask, Grid, Position};

use crate::{Action, CleaningSolver, GoalPolicy, Playback, SearchOutcome, Solution};

/// A test harness for solver scenarios.
///
/// All methods return `self`, so checks can be chained.
///
/// # Panics
///
/// Assertion methods panic with a descriptive message on failure and report
/// the caller's location.
#[derive(Debug)]
pub struct RouteTester {
    grid: Grid,
    start: Position,
    goal: GoalPolicy,
    outcome: Option<SearchOutcome>,
}

impl RouteTester {
    /// Creates a tester from grid text (see [`Grid`]'s `FromStr`).
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        Self::new(s.parse().unwrap())
    }

    /// Creates a tester for an existing grid.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            start: Grid::START,
            goal: GoalPolicy::CleanAll,
            outcome: None,
        }
    }

    /// Uses a start position other than [`Grid::START`].
    #[must_use]
    pub fn with_start(mut self, start: Position) -> Self {
        self.start = start;
        self
    }

    /// Runs the solver with the grid's own dirt.
    #[track_caller]
    #[must_use]
    pub fn solve(mut self, goal: GoalPolicy) -> Self {
        let dirt = self.grid.dirt_set().unwrap();
        self.goal = goal;
        self.outcome = Some(
            CleaningSolver::new(goal)
                .solve(self.start, &self.grid, &dirt)
                .unwrap(),
        );
        self
    }

    #[track_caller]
    fn outcome(&self) -> &SearchOutcome {
        self.outcome
            .as_ref()
            .expect("call `solve` before asserting on the outcome")
    }

    /// Returns the route found.
    #[track_caller]
    pub fn solution(&self) -> &Solution {
        self.outcome()
            .solution()
            .unwrap_or_else(|| panic!("expected a route for\n{:?}", self.grid))
    }

    /// Asserts the route cost.
    #[track_caller]
    #[must_use]
    pub fn assert_cost(self, expected: usize) -> Self {
        let cost = self.solution().cost();
        assert_eq!(cost, expected, "unexpected route cost for {:?}", self.goal);
        self
    }

    /// Asserts the exact action list.
    #[track_caller]
    #[must_use]
    pub fn assert_actions(self, expected: &[Action]) -> Self {
        assert_eq!(self.solution().actions(), expected);
        self
    }

    /// Asserts that no route was found.
    #[track_caller]
    #[must_use]
    pub fn assert_unsolvable(self) -> Self {
        let outcome = self.outcome();
        assert!(
            outcome.solution().is_none(),
            "expected no route, got {:?}",
            outcome.solution()
        );
        assert!(outcome.cost_f64().is_infinite());
        self
    }

    /// Asserts that the route replays cleanly from the start, leaves no dirt,
    /// costs one per action, and ends at the start when required.
    #[track_caller]
    #[must_use]
    pub fn assert_valid_route(self) -> Self {
        let solution = self.solution();
        assert_eq!(solution.start(), self.start);
        assert_eq!(solution.cost(), solution.actions().len());

        let playback = Playback::replay(&self.grid, solution)
            .unwrap_or_else(|err| panic!("invalid route {solution:?}: {err}"));
        assert!(playback.is_clean(), "route leaves dirt behind");
        assert_eq!(playback.position(), solution.final_position());
        if self.goal.is_return_to_start() {
            assert_eq!(playback.position(), self.start, "route does not return");
        }
        self
    }

    /// Asserts that the route cost matches an exhaustive search.
    #[track_caller]
    #[must_use]
    pub fn assert_optimal(self) -> Self {
        let expected = reference_cost(&self.grid, self.start, self.goal);
        assert_eq!(self.outcome().cost(), expected);
        self
    }

    /// Asserts that the route passes through `pos`.
    #[track_caller]
    #[must_use]
    pub fn assert_visits(self, pos: Position) -> Self {
        let solution = self.solution();
        let visited = solution.start() == pos
            || solution
                .actions()
                .iter()
                .any(|action| matches!(action, Action::Move { to } if *to == pos));
        assert!(visited, "route {solution:?} never visits {pos}");
        self
    }
}

/// Returns the minimum route cost by breadth-first search over every
/// `(position, cleaned)` state, or `None` if no route exists.
pub fn reference_cost(grid: &Grid, start: Position, goal: GoalPolicy) -> Option<usize> {
    let dirt = grid.dirt_set().unwrap();
    let all_clean = dirt.full_mask();
    let is_goal = |pos: Position, cleaned: DirtMask| {
        cleaned == all_clean && (goal.is_clean_all() || pos == start)
    };

    let mut seen = HashSet::from([(start, DirtMask::EMPTY)]);
    let mut queue = VecDeque::from([(start, DirtMask::EMPTY, 0)]);
    while let Some((pos, cleaned, cost)) = queue.pop_front() {
        if is_goal(pos, cleaned) {
            return Some(cost);
        }
        let mut next = grid
            .open_neighbors(pos)
            .into_iter()
            .map(|to| (to, cleaned))
            .collect::<Vec<_>>();
        if let Some(index) = dirt.index_of(pos) {
            next.push((pos, cleaned.with(index)));
        }
        for state in next {
            if seen.insert(state) {
                queue.push_back((state.0, state.1, cost + 1));
            }
        }
    }
    None
}
