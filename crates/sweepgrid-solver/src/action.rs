use std::fmt::{self, Display};

use sweepgrid_core::Position;

/// The kind of an [`Action`], without its coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum ActionKind {
    /// Step to an adjacent open cell.
    Move,
    /// Clean the current cell.
    Clean,
}

/// A single unit-cost step of a cleaning route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Step to the adjacent open cell `to`.
    Move {
        /// Destination cell.
        to: Position,
    },
    /// Clean the dirt at `at`, which is the robot's current cell.
    Clean {
        /// Cleaned cell.
        at: Position,
    },
}

impl Action {
    /// Returns the action kind.
    #[must_use]
    pub const fn kind(self) -> ActionKind {
        match self {
            Self::Move { .. } => ActionKind::Move,
            Self::Clean { .. } => ActionKind::Clean,
        }
    }

    /// Returns the coordinate the action refers to.
    #[must_use]
    pub const fn position(self) -> Position {
        match self {
            Self::Move { to } => to,
            Self::Clean { at } => at,
        }
    }

    /// Returns the cost of the action. Every action costs 1.
    #[must_use]
    pub const fn cost(self) -> usize {
        1
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move { to } => write!(f, "move {to}"),
            Self::Clean { at } => write!(f, "clean {at}"),
        }
    }
}

/// A complete cleaning route.
///
/// The route begins with the robot standing at [`start`](Self::start); that
/// implicit marker is not an action and costs nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    start: Position,
    actions: Vec<Action>,
}

impl Solution {
    /// Creates a solution from its start and action list.
    #[must_use]
    pub fn new(start: Position, actions: Vec<Action>) -> Self {
        Self { start, actions }
    }

    /// Returns where the robot stands before the first action.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the actions in execution order.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Returns the total route cost, i.e. the number of actions.
    #[must_use]
    pub fn cost(&self) -> usize {
        self.actions.iter().map(|action| action.cost()).sum()
    }

    /// Returns where the robot stands after the last action.
    #[must_use]
    pub fn final_position(&self) -> Position {
        self.actions
            .iter()
            .rev()
            .find_map(|action| match action {
                Action::Move { to } => Some(*to),
                Action::Clean { .. } => None,
            })
            .unwrap_or(self.start)
    }

    /// Returns the number of move actions.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|action| action.kind().is_move())
            .count()
    }

    /// Returns the number of clean actions.
    #[must_use]
    pub fn clean_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|action| action.kind().is_clean())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_solution() {
        let solution = Solution::new(Position::new(0, 0), vec![]);
        assert_eq!(solution.cost(), 0);
        assert_eq!(solution.final_position(), Position::new(0, 0));
    }

    #[test]
    fn test_counts_and_final_position() {
        let solution = Solution::new(
            Position::new(0, 0),
            vec![
                Action::Move {
                    to: Position::new(0, 1),
                },
                Action::Clean {
                    at: Position::new(0, 1),
                },
            ],
        );
        assert_eq!(solution.cost(), 2);
        assert_eq!(solution.move_count(), 1);
        assert_eq!(solution.clean_count(), 1);
        assert_eq!(solution.final_position(), Position::new(0, 1));
    }

    #[test]
    fn test_display() {
        let action = Action::Clean {
            at: Position::new(2, 3),
        };
        assert_eq!(action.to_string(), "clean (2, 3)");
        assert_eq!(action.kind(), ActionKind::Clean);
        assert_eq!(action.position(), Position::new(2, 3));
    }
}
