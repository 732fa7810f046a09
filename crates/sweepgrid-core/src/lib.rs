//! Core data structures for the sweepgrid cleaning puzzle.
//!
//! This crate provides the types shared by grid generation, route solving,
//! and the command-line front end.
//!
//! # Overview
//!
//! - [`position`]: `(row, col)` coordinates and Manhattan distance
//! - [`grid`]: the rectangular [`Grid`] of open, wall, and dirty [`Cell`]s
//! - [`dirt`]: the fixed [`DirtSet`] of a puzzle and the [`DirtMask`] used to
//!   track which of its cells have been cleaned
//!
//! # Examples
//!
//! ```
//! use sweepgrid_core::{Grid, Position};
//!
//! let grid: Grid = "
//!     . . #
//!     D . D
//! "
//! .parse()?;
//!
//! assert_eq!(grid.rows(), 2);
//! assert!(grid.is_wall(Position::new(0, 2)));
//!
//! let dirt = grid.dirt_set()?;
//! assert_eq!(dirt.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod dirt;
pub mod grid;
pub mod position;

pub use self::{
    dirt::{DirtMask, DirtSet, DirtSetError},
    grid::{Cell, CellKind, Grid, GridError, GridParseError, Neighbors},
    position::Position,
};
