use crate::Discrete;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    North,
    South,
    East,
    West,
    Exit,
}

impl Action {
    /// Movement actions in the order they are evaluated by the Bellman backup.
    pub const MOVES: [Action; 4] = [Action::North, Action::South, Action::East, Action::West];

    /// Offset `(dx, dy)` of the cell this action leads to. `Exit` does not move.
    pub fn delta(&self) -> (Discrete, Discrete) {
        match self {
            Action::North => (-1, 0),
            Action::South => (1, 0),
            Action::East => (0, 1),
            Action::West => (0, -1),
            Action::Exit => (0, 0),
        }
    }

    /// The perpendicular direction taken instead of `self` when the agent slips.
    /// Cycles North -> East -> South -> West -> North.
    pub fn slip(&self) -> Option<Action> {
        match self {
            Action::North => Some(Action::East),
            Action::East => Some(Action::South),
            Action::South => Some(Action::West),
            Action::West => Some(Action::North),
            Action::Exit => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Action::North => 'N',
            Action::South => 'S',
            Action::East => 'E',
            Action::West => 'W',
            Action::Exit => 'X',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
