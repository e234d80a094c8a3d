//! The eater grid world: an eater, food items and blocked cells on a bounded
//! grid. Worlds are read from JSON files of the form
//!
//! ```json
//! {
//!   "size": [4, 4],
//!   "blocks": [[1, 1]],
//!   "objects": [
//!     { "type": "eater", "location": [0, 0] },
//!     { "type": "food", "location": [3, 3] }
//!   ]
//! }
//! ```

use crate::eater::Coordinate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to read world: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse world: {0}")]
    Json(#[from] serde_json::Error),

    #[error("world must contain exactly one eater, found {0}")]
    EaterCount(usize),

    #[error("{kind} at {location} is outside the {size} grid")]
    OutOfBounds {
        kind: &'static str,
        location: Coordinate,
        size: Coordinate,
    },

    #[error("{kind} at {location} is on a blocked cell")]
    Blocked {
        kind: &'static str,
        location: Coordinate,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorldObject {
    Eater { location: Coordinate },
    Food { location: Coordinate },
}

impl WorldObject {
    pub fn location(&self) -> Coordinate {
        match self {
            WorldObject::Eater { location } | WorldObject::Food { location } => *location,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            WorldObject::Eater { .. } => "eater",
            WorldObject::Food { .. } => "food",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EaterWorld {
    /// Grid dimensions, valid cells are `0 <= x < size.x`, `0 <= y < size.y`
    pub size: Coordinate,
    #[serde(default)]
    pub blocks: HashSet<Coordinate>,
    pub objects: Vec<WorldObject>,
}

impl EaterWorld {
    pub fn new(
        size: Coordinate,
        blocks: impl IntoIterator<Item = Coordinate>,
        eater: Coordinate,
        foods: impl IntoIterator<Item = Coordinate>,
    ) -> Self {
        let objects = std::iter::once(WorldObject::Eater { location: eater })
            .chain(foods.into_iter().map(|location| WorldObject::Food { location }))
            .collect();
        Self {
            size,
            blocks: blocks.into_iter().collect(),
            objects,
        }
    }

    pub fn from_json(text: &str) -> Result<Self, WorldError> {
        let world: Self = serde_json::from_str(text)?;
        world.validate()?;
        Ok(world)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WorldError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Check that there is exactly one eater and that every object sits on an
    /// unblocked cell inside the grid.
    pub fn validate(&self) -> Result<(), WorldError> {
        let eaters = self
            .objects
            .iter()
            .filter(|object| matches!(object, WorldObject::Eater { .. }))
            .count();
        if eaters != 1 {
            return Err(WorldError::EaterCount(eaters));
        }
        for object in &self.objects {
            let location = object.location();
            if !self.in_bounds(location) {
                return Err(WorldError::OutOfBounds {
                    kind: object.kind(),
                    location,
                    size: self.size,
                });
            }
            if self.blocks.contains(&location) {
                return Err(WorldError::Blocked {
                    kind: object.kind(),
                    location,
                });
            }
        }
        Ok(())
    }

    /// The eater's location. Panics on a world without an eater, which
    /// [`EaterWorld::validate`] rules out.
    pub fn eater(&self) -> Coordinate {
        self.objects
            .iter()
            .find_map(|object| match object {
                WorldObject::Eater { location } => Some(*location),
                _ => None,
            })
            .expect("World has no eater")
    }

    /// Food locations in the order they appear in the world.
    pub fn foods(&self) -> Vec<Coordinate> {
        self.objects
            .iter()
            .filter_map(|object| match object {
                WorldObject::Food { location } => Some(*location),
                _ => None,
            })
            .collect()
    }

    pub fn in_bounds(&self, position: Coordinate) -> bool {
        (0..self.size.x).contains(&position.x) && (0..self.size.y).contains(&position.y)
    }

    pub fn is_valid_position(&self, position: Coordinate) -> bool {
        self.in_bounds(position) && !self.blocks.contains(&position)
    }

    /// Render the grid with `E` for the eater, `F` for food and `#` for
    /// blocks, top row first.
    pub fn render(&self) -> String {
        let eater = self.eater();
        let foods: HashSet<Coordinate> = self.foods().into_iter().collect();
        (0..self.size.y)
            .rev()
            .map(|y| {
                (0..self.size.x)
                    .map(|x| {
                        let cell = Coordinate::new(x, y);
                        if cell == eater {
                            'E'
                        } else if foods.contains(&cell) {
                            'F'
                        } else if self.blocks.contains(&cell) {
                            '#'
                        } else {
                            '.'
                        }
                    })
                    .collect::<String>()
            })
            .join("\n")
    }
}
