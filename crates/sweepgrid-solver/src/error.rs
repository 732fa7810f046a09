use sweepgrid_core::{DirtSetError, Position};

/// Errors reported by [`CleaningSolver`](crate::CleaningSolver) before the
/// search starts.
///
/// An instance without a route is not an error; it yields a
/// [`SearchOutcome`](crate::SearchOutcome) without a solution.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum SolverError {
    /// The start position lies outside the grid.
    #[display("start {start} is outside the {rows}x{cols} grid")]
    StartOutOfBounds {
        /// Requested start.
        start: Position,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },
    /// The start position is a wall.
    #[display("start {start} is a wall")]
    StartOnWall {
        /// Requested start.
        start: Position,
    },
    /// A dirt cell lies outside the grid.
    #[display("dirt cell {pos} is outside the grid")]
    DirtOutOfBounds {
        /// Offending dirt cell.
        pos: Position,
    },
    /// A dirt cell is a wall.
    #[display("dirt cell {pos} is a wall")]
    DirtOnWall {
        /// Offending dirt cell.
        pos: Position,
    },
    /// A dirt cell is clean in the grid.
    #[display("dirt cell {pos} is not dirty in the grid")]
    DirtNotInGrid {
        /// Offending dirt cell.
        pos: Position,
    },
    /// The grid's dirt could not be collected.
    #[display("invalid dirt set: {_0}")]
    #[from]
    Dirt(DirtSetError),
}
