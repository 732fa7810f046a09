//! Text rendering of grids.

use sweepgrid_core::{Grid, Position};

/// Renders `grid` one row per line, with cells separated by spaces.
///
/// Walls are `#`, dirty cells `D`, clean open cells `.`, and the robot (if
/// given) `A`. The robot symbol hides whatever is under it.
pub(crate) fn render(grid: &Grid, agent: Option<Position>) -> String {
    let mut out = String::with_capacity(grid.area() * 2);
    for (pos, cell) in grid.cells() {
        if pos.col() > 0 {
            out.push(' ');
        }
        out.push(if agent == Some(pos) { 'A' } else { cell.symbol() });
        if pos.col() + 1 == grid.cols() {
            out.push('\n');
        }
    }
    out
}
