use sweepgrid_core::{Grid, Position};

use crate::{Action, Solution};

/// Errors produced when a route step is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaybackError {
    /// The starting cell is outside the grid or a wall.
    #[display("start {start} is not an open cell")]
    StartNotOpen {
        /// Requested start.
        start: Position,
    },
    /// A move skipped over cells or stayed in place.
    #[display("cannot move from {from} to non-adjacent {to}")]
    NotAdjacent {
        /// Robot position before the move.
        from: Position,
        /// Requested destination.
        to: Position,
    },
    /// A move targeted a wall or left the grid.
    #[display("cannot move into blocked cell {to}")]
    Blocked {
        /// Requested destination.
        to: Position,
    },
    /// A clean targeted a cell other than the robot's.
    #[display("cannot clean {at} while standing at {position}")]
    CleanElsewhere {
        /// Requested cell.
        at: Position,
        /// Robot position.
        position: Position,
    },
    /// A clean targeted a cell without dirt.
    #[display("nothing to clean at {at}")]
    NothingToClean {
        /// Requested cell.
        at: Position,
    },
}

/// Replays a route on a private copy of a grid.
///
/// `Playback` takes its own deep copy of the grid on construction. Cleaning
/// removes dirt from that copy only; the grid passed in is never touched,
/// so it stays available as the canonical puzzle.
///
/// Every action is checked before it is applied, which makes `Playback` a
/// validator for routes as well as the state behind step-by-step display.
///
/// # Examples
///
/// ```
/// use sweepgrid_core::{Grid, Position};
/// use sweepgrid_solver::{Action, Playback};
///
/// let grid: Grid = ". D".parse()?;
/// let mut playback = Playback::new(&grid, Grid::START)?;
///
/// playback.apply(Action::Move { to: Position::new(0, 1) })?;
/// playback.apply(Action::Clean { at: Position::new(0, 1) })?;
///
/// assert!(playback.is_clean());
/// assert!(grid.is_dirty(Position::new(0, 1))); // original untouched
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Playback {
    grid: Grid,
    position: Position,
    steps: usize,
}

impl Playback {
    /// Starts a playback with the robot at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::StartNotOpen`] if `start` is outside the
    /// grid or a wall.
    pub fn new(grid: &Grid, start: Position) -> Result<Self, PlaybackError> {
        if !grid.is_open(start) {
            return Err(PlaybackError::StartNotOpen { start });
        }
        Ok(Self {
            grid: grid.clone(),
            position: start,
            steps: 0,
        })
    }

    /// Replays every action of `solution` on a copy of `grid`.
    ///
    /// # Errors
    ///
    /// Returns the first [`PlaybackError`] encountered.
    pub fn replay(grid: &Grid, solution: &Solution) -> Result<Self, PlaybackError> {
        let mut playback = Self::new(grid, solution.start())?;
        for &action in solution.actions() {
            playback.apply(action)?;
        }
        Ok(playback)
    }

    /// Returns the simulated grid, with cleaned cells no longer dirty.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the robot's current position.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the number of actions applied so far.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the number of dirty cells left.
    #[must_use]
    pub fn remaining_dirt(&self) -> usize {
        self.grid.dirt_count()
    }

    /// Returns `true` once no dirt is left.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.remaining_dirt() == 0
    }

    /// Checks and applies one action.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackError`] and leaves the state unchanged if the
    /// action is not a valid step from the current state.
    pub fn apply(&mut self, action: Action) -> Result<(), PlaybackError> {
        match action {
            Action::Move { to } => {
                if !self.position.is_adjacent(to) {
                    return Err(PlaybackError::NotAdjacent {
                        from: self.position,
                        to,
                    });
                }
                if !self.grid.is_open(to) {
                    return Err(PlaybackError::Blocked { to });
                }
                self.position = to;
            }
            Action::Clean { at } => {
                if at != self.position {
                    return Err(PlaybackError::CleanElsewhere {
                        at,
                        position: self.position,
                    });
                }
                if !self.grid.is_dirty(at) {
                    return Err(PlaybackError::NothingToClean { at });
                }
                self.grid
                    .set_dirty(at, false)
                    .map_err(|_| PlaybackError::NothingToClean { at })?;
            }
        }
        self.steps += 1;
        Ok(())
    }
}
