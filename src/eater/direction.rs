use crate::eater::Coordinate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// A move of the eater. Iteration order (see [`strum::IntoEnumIterator`]) is
/// the order in which successors are generated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Deserialize, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The `(dx, dy)` offset of the move, `y` grows upwards.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn apply(self, from: Coordinate) -> Coordinate {
        from.offset(self.delta())
    }
}
