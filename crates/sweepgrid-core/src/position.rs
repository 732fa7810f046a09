//! Grid coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on a [`Grid`](crate::Grid).
///
/// Positions order row-major: first by row, then by column. [`DirtSet`](crate::DirtSet)
/// relies on this ordering to enumerate its cells.
///
/// # Examples
///
/// ```
/// use sweepgrid_core::Position;
///
/// let a = Position::new(0, 0);
/// let b = Position::new(2, 3);
/// assert_eq!(a.manhattan(b), 5);
/// assert!(a < b);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column index.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the Manhattan distance `|Δrow| + |Δcol|` to `other`.
    ///
    /// This ignores walls entirely.
    #[must_use]
    #[inline]
    pub const fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Returns `true` if `other` is one of the four orthogonal neighbours.
    #[must_use]
    #[inline]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_manhattan() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.manhattan(origin), 0);
        assert_eq!(origin.manhattan(Position::new(3, 0)), 3);
        assert_eq!(Position::new(4, 1).manhattan(Position::new(1, 5)), 7);
    }

    #[test]
    fn test_adjacency() {
        let pos = Position::new(1, 1);
        assert!(pos.is_adjacent(Position::new(0, 1)));
        assert!(pos.is_adjacent(Position::new(1, 2)));
        assert!(!pos.is_adjacent(pos));
        assert!(!pos.is_adjacent(Position::new(2, 2)));
    }

    #[test]
    fn test_row_major_order() {
        let mut positions = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 1),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0)
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 7).to_string(), "(3, 7)");
    }

    proptest! {
        #[test]
        fn manhattan_is_symmetric(
            r1 in 0usize..100, c1 in 0usize..100, r2 in 0usize..100, c2 in 0usize..100,
        ) {
            let a = Position::new(r1, c1);
            let b = Position::new(r2, c2);
            prop_assert_eq!(a.manhattan(b), b.manhattan(a));
        }
    }
}
