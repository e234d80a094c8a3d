use crate::eater::Coordinate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WumpusError {
    #[error("failed to write problem: {0}")]
    Io(#[from] std::io::Error),

    #[error("{kind} at {location} is outside the {size} grid")]
    OutOfBounds {
        kind: &'static str,
        location: Coordinate,
        size: Coordinate,
    },

    #[error("grid size {0} is too small, need at least 2x2")]
    TooSmall(Coordinate),
}

/// A Wumpus World instance: one agent, one gold, one wumpus and one pit on a
/// grid. The exit is always the cell `(0, 0)`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WumpusWorld {
    pub size: Coordinate,
    pub agent: Coordinate,
    pub gold: Coordinate,
    pub wumpus: Coordinate,
    pub pit: Coordinate,
}

impl WumpusWorld {
    /// A random instance with the agent at the exit, the gold anywhere, the
    /// wumpus outside the first column and the pit outside the first column
    /// and row.
    pub fn random<R: Rng>(size: Coordinate, rng: &mut R) -> Result<Self, WumpusError> {
        if size.x < 2 || size.y < 2 {
            return Err(WumpusError::TooSmall(size));
        }
        let mut cell = |min_x: i32, min_y: i32| {
            Coordinate::new(rng.random_range(min_x..size.x), rng.random_range(min_y..size.y))
        };
        let gold = cell(0, 0);
        let wumpus = cell(1, 0);
        let pit = cell(1, 1);
        Ok(Self {
            size,
            agent: Coordinate::new(0, 0),
            gold,
            wumpus,
            pit,
        })
    }

    pub fn in_bounds(&self, position: Coordinate) -> bool {
        (0..self.size.x).contains(&position.x) && (0..self.size.y).contains(&position.y)
    }

    pub fn validate(&self) -> Result<(), WumpusError> {
        let objects = [
            ("agent", self.agent),
            ("gold", self.gold),
            ("wumpus", self.wumpus),
            ("pit", self.pit),
        ];
        for (kind, location) in objects {
            if !self.in_bounds(location) {
                return Err(WumpusError::OutOfBounds {
                    kind,
                    location,
                    size: self.size,
                });
            }
        }
        Ok(())
    }

    /// In-bounds neighbours of `cell`, in the order above, below, right,
    /// left.
    pub fn neighbours(&self, cell: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        [(0, 1), (0, -1), (1, 0), (-1, 0)]
            .into_iter()
            .map(move |delta| cell.offset(delta))
            .filter(move |neighbour| self.in_bounds(*neighbour))
    }
}
