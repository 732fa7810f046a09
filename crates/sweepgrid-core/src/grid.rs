//! The cleaning grid.
//!
//! A [`Grid`] is a rectangular array of [`Cell`]s stored in row-major order.
//! Each cell is either open or a wall, and open cells may carry dirt.
//!
//! Grids can be parsed from text, which keeps test fixtures readable:
//!
//! - `.` is an open cell
//! - `D` is a dirty open cell
//! - `#` is a wall
//! - `A` is an open cell occupied by the agent (the marker itself is dropped)
//!
//! Whitespace inside a line is ignored and blank lines are skipped.
//!
//! # Examples
//!
//! ```
//! use sweepgrid_core::{Grid, Position};
//!
//! let grid: Grid = "
//!     A . D
//!     . # .
//! "
//! .parse()?;
//!
//! assert_eq!((grid.rows(), grid.cols()), (2, 3));
//! assert!(grid.is_dirty(Position::new(0, 2)));
//! assert_eq!(grid.open_neighbors(Position::new(0, 2)).len(), 2);
//! # Ok::<(), sweepgrid_core::GridParseError>(())
//! ```

use std::str::FromStr;

use tinyvec::ArrayVec;

use crate::{DirtSet, DirtSetError, Position};

/// Open neighbours of a cell, in up, down, left, right order.
pub type Neighbors = ArrayVec<[Position; 4]>;

/// Whether a cell can be entered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Traversable floor.
    #[default]
    Open,
    /// Impassable wall.
    Wall,
}

/// A single grid cell.
///
/// The dirt flag is only ever set on open cells.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    kind: CellKind,
    dirty: bool,
}

impl Cell {
    /// A clean open cell.
    pub const OPEN: Self = Self {
        kind: CellKind::Open,
        dirty: false,
    };

    /// A dirty open cell.
    pub const DIRTY: Self = Self {
        kind: CellKind::Open,
        dirty: true,
    };

    /// A wall.
    pub const WALL: Self = Self {
        kind: CellKind::Wall,
        dirty: false,
    };

    /// Returns the cell kind.
    #[must_use]
    #[inline]
    pub const fn kind(self) -> CellKind {
        self.kind
    }

    /// Returns `true` if the cell is a wall.
    #[must_use]
    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self.kind, CellKind::Wall)
    }

    /// Returns `true` if the cell holds dirt.
    #[must_use]
    #[inline]
    pub const fn is_dirty(self) -> bool {
        self.dirty
    }

    /// Returns the text symbol of the cell: `#`, `D` or `.`.
    ///
    /// This is the symbol accepted by [`Grid`]'s `FromStr`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match (self.kind, self.dirty) {
            (CellKind::Wall, _) => '#',
            (CellKind::Open, true) => 'D',
            (CellKind::Open, false) => '.',
        }
    }
}

/// Errors produced when building or editing a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// Requested a grid with zero rows or zero columns.
    #[display("grid dimensions must be at least 1x1, got {rows}x{cols}")]
    EmptyDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// A position lies outside the grid.
    #[display("position {pos} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// Offending position.
        pos: Position,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },
    /// Tried to put dirt on a wall.
    #[display("cannot place dirt on wall at {pos}")]
    DirtOnWall {
        /// Offending position.
        pos: Position,
    },
}

/// Errors produced when parsing a [`Grid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The text contained no rows.
    #[display("grid text contains no rows")]
    Empty,
    /// A row has a different width than the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },
    /// An unknown cell symbol.
    #[display("invalid cell symbol {symbol:?} at ({row}, {col})")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },
}

/// A rectangular cleaning grid.
///
/// `Grid` is plain owned data: cloning it produces an independent deep copy,
/// which is how simulations obtain a scratch instance without touching the
/// canonical puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// The robot's starting cell.
    pub const START: Position = Position::new(0, 0);

    /// Creates an all-open, dirt-free grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyDimensions`] if `rows` or `cols` is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::OPEN; rows * cols],
        })
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the total number of cells.
    #[must_use]
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.rows && pos.col() < self.cols
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row() * self.cols + pos.col())
    }

    fn checked_index(&self, pos: Position) -> Result<usize, GridError> {
        self.index(pos).ok_or(GridError::OutOfBounds {
            pos,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Returns the cell at `pos`, or `None` if it is out of bounds.
    #[must_use]
    #[inline]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Returns `true` if `pos` is an in-bounds wall.
    #[must_use]
    #[inline]
    pub fn is_wall(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(Cell::is_wall)
    }

    /// Returns `true` if `pos` is an in-bounds cell the robot may enter.
    #[must_use]
    #[inline]
    pub fn is_open(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(|cell| !cell.is_wall())
    }

    /// Returns `true` if `pos` is an in-bounds dirty cell.
    #[must_use]
    #[inline]
    pub fn is_dirty(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(Cell::is_dirty)
    }

    /// Turns the cell at `pos` into a wall, or back into clean floor.
    ///
    /// Walls never hold dirt, so any dirt at `pos` is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid.
    pub fn set_wall(&mut self, pos: Position, wall: bool) -> Result<(), GridError> {
        let i = self.checked_index(pos)?;
        self.cells[i] = if wall { Cell::WALL } else { Cell::OPEN };
        Ok(())
    }

    /// Sets or clears dirt on the open cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid and
    /// [`GridError::DirtOnWall`] when adding dirt to a wall.
    pub fn set_dirty(&mut self, pos: Position, dirty: bool) -> Result<(), GridError> {
        let i = self.checked_index(pos)?;
        let cell = &mut self.cells[i];
        if cell.is_wall() {
            if dirty {
                return Err(GridError::DirtOnWall { pos });
            }
            return Ok(());
        }
        cell.dirty = dirty;
        Ok(())
    }

    /// Returns all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Returns all positions together with their cells, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    /// Returns the positions of all dirty cells in row-major order.
    pub fn dirt_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells().filter_map(|(pos, cell)| cell.is_dirty().then_some(pos))
    }

    /// Returns the number of walls.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_wall()).count()
    }

    /// Returns the number of dirty cells.
    #[must_use]
    pub fn dirt_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_dirty()).count()
    }

    /// Collects the dirty cells into a [`DirtSet`].
    ///
    /// # Errors
    ///
    /// Returns [`DirtSetError::TooMany`] if the grid holds more than
    /// [`DirtSet::MAX_LEN`] dirty cells.
    pub fn dirt_set(&self) -> Result<DirtSet, DirtSetError> {
        DirtSet::from_positions(self.dirt_positions())
    }

    /// Returns the open 4-directional neighbours of `pos`.
    ///
    /// Neighbours are listed in up, down, left, right order. Out-of-bounds
    /// and wall cells are skipped.
    #[must_use]
    pub fn open_neighbors(&self, pos: Position) -> Neighbors {
        let mut neighbors = Neighbors::new();
        let (row, col) = (pos.row(), pos.col());
        let candidates = [
            row.checked_sub(1).map(|r| Position::new(r, col)),
            Some(Position::new(row + 1, col)),
            col.checked_sub(1).map(|c| Position::new(row, c)),
            Some(Position::new(row, col + 1)),
        ];
        for candidate in candidates.into_iter().flatten() {
            if self.is_open(candidate) {
                neighbors.push(candidate);
            }
        }
        neighbors
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty())
            .collect::<Vec<_>>();

        let Some(first) = rows.first() else {
            return Err(GridParseError::Empty);
        };
        let cols = first.len();

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, symbols) in rows.iter().enumerate() {
            if symbols.len() != cols {
                return Err(GridParseError::RaggedRow {
                    row,
                    expected: cols,
                    found: symbols.len(),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                let cell = match symbol {
                    '.' | 'A' => Cell::OPEN,
                    'D' => Cell::DIRTY,
                    '#' => Cell::WALL,
                    _ => return Err(GridParseError::InvalidSymbol { symbol, row, col }),
                };
                cells.push(cell);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }
}
