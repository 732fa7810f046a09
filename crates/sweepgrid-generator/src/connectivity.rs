use std::collections::VecDeque;

use sweepgrid_core::{Grid, Position};

/// The set of cells reached by a flood fill over open cells.
///
/// Produced by [`reachable_cells`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachMap {
    cols: usize,
    reached: Vec<bool>,
    count: usize,
}

impl ReachMap {
    /// Returns `true` if `pos` was reached.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.col() < self.cols
            && self
                .reached
                .get(pos.row() * self.cols + pos.col())
                .copied()
                .unwrap_or(false)
    }

    /// Returns the number of reached cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if nothing was reached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Flood-fills the open cells reachable from `from` with 4-directional moves.
///
/// If `from` is out of bounds or a wall, nothing is reached.
#[must_use]
pub fn reachable_cells(grid: &Grid, from: Position) -> ReachMap {
    let cols = grid.cols();
    let mut map = ReachMap {
        cols,
        reached: vec![false; grid.area()],
        count: 0,
    };
    if !grid.is_open(from) {
        return map;
    }

    let mut queue = VecDeque::from([from]);
    map.reached[from.row() * cols + from.col()] = true;
    map.count = 1;
    while let Some(pos) = queue.pop_front() {
        for next in grid.open_neighbors(pos) {
            let seen = &mut map.reached[next.row() * cols + next.col()];
            if !*seen {
                *seen = true;
                map.count += 1;
                queue.push_back(next);
            }
        }
    }
    map
}

/// Returns `true` if `grid` forms a single region reachable from the start.
///
/// The start cell must be open, and every open cell must be reachable from it
/// through open cells using 4-directional moves. This is the guarantee the
/// solver depends on: every dirty cell can be visited.
///
/// # Examples
///
/// ```
/// use sweepgrid_core::Grid;
/// use sweepgrid_generator::validate;
///
/// let connected: Grid = ". # .\n. . .".parse()?;
/// assert!(validate(&connected));
///
/// let split: Grid = ". # .\n. # .".parse()?;
/// assert!(!validate(&split));
/// # Ok::<(), sweepgrid_core::GridParseError>(())
/// ```
#[must_use]
pub fn validate(grid: &Grid) -> bool {
    if !grid.is_open(Grid::START) {
        return false;
    }
    let open = grid.area() - grid.wall_count();
    reachable_cells(grid, Grid::START).len() == open
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn test_single_cell_is_valid() {
        assert!(validate(&grid(".")));
    }

    #[test]
    fn test_wall_at_start_is_invalid() {
        assert!(!validate(&grid("#.")));
    }

    #[test]
    fn test_walls_that_wrap_around_are_valid() {
        let grid = grid(
            "
            . . . .
            # # # .
            D . . .
            ",
        );
        assert!(validate(&grid));
        assert_eq!(reachable_cells(&grid, Grid::START).len(), 9);
    }

    #[test]
    fn test_isolated_pocket_is_invalid() {
        let grid = grid(
            "
            . . #
            . # D
            ",
        );
        assert!(!validate(&grid));
        let reach = reachable_cells(&grid, Grid::START);
        assert_eq!(reach.len(), 3);
        assert!(!reach.contains(Position::new(1, 2)));
    }

    #[test]
    fn test_diagonal_contact_does_not_connect() {
        let grid = grid(
            "
            . #
            # .
            ",
        );
        assert!(!validate(&grid));
    }

    #[test]
    fn test_reach_from_wall_is_empty() {
        let grid = grid(". #");
        let reach = reachable_cells(&grid, Position::new(0, 1));
        assert!(reach.is_empty());
        assert!(!reach.contains(Position::new(0, 0)));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let split = grid(". # .\n. # .");
        assert_eq!(validate(&split), validate(&split));
        let joined = grid(". . .\n. # .");
        assert!(validate(&joined) && validate(&joined));
    }
}
