//! Route solving for the sweepgrid cleaning puzzle.
//!
//! The solver searches the state space of *(robot position, set of cleaned
//! dirt cells)* with a best-first search ordered by `f = g + h`, pruning any
//! state already reached at an equal or lower cost.
//!
//! # Overview
//!
//! - [`CleaningSolver`] runs the search under a [`GoalPolicy`]
//! - [`SearchOutcome`] carries the optional [`Solution`] and [`SearchStats`]
//! - [`Action`] is a single unit-cost step of a route
//! - [`Playback`] replays a route on a private copy of the grid, rejecting
//!   any invalid step
//!
//! # Examples
//!
//! ```
//! use sweepgrid_core::Grid;
//! use sweepgrid_solver::{Action, CleaningSolver, GoalPolicy};
//!
//! let grid: Grid = ". .\n. D".parse()?;
//! let outcome = CleaningSolver::new(GoalPolicy::CleanAll).solve_grid(&grid)?;
//!
//! let solution = outcome.solution().expect("a connected grid is solvable");
//! assert_eq!(solution.cost(), 3);
//! assert!(matches!(solution.actions().last(), Some(Action::Clean { .. })));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{action::*, error::*, playback::*, search::*};

mod action;
mod error;
mod playback;
mod search;

#[cfg(test)]
mod testing;
