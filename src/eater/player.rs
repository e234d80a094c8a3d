//! Players turn a world into the sequence of moves the eater should make.

use crate::eater::{manhattan_distance, Coordinate, Direction, EaterProblem, EaterState, EaterWorld};
use crate::search::{
    search_engines::{AStar, IterativeDeepening, SearchEngine, SearchEngineName, SearchResult},
    SearchConfig,
};
use std::fmt::Debug;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayError {
    #[error("food at {food} cannot be reached from {from}")]
    Unreachable { from: Coordinate, food: Coordinate },

    #[error("no solution within depth {0}")]
    DepthBound(usize),

    #[error("no solution eats every food")]
    NoSolution,

    #[error("move {step} ({direction}) from {from} leaves the grid or hits a block")]
    InvalidMove {
        step: usize,
        direction: Direction,
        from: Coordinate,
    },

    #[error("{0} foods left uneaten")]
    FoodsRemaining(usize),
}

pub trait Player: Debug {
    /// The order in which this player eats the foods of `world`.
    fn food_order(&self, world: &EaterWorld) -> Vec<Coordinate> {
        world.foods()
    }

    /// Plan the moves for one episode in `world`.
    fn start_episode(&self, world: &EaterWorld) -> Result<Vec<Direction>, PlayError>;
}

/// Create the player that uses the configured search engine.
pub fn create_player(config: &SearchConfig) -> Box<dyn Player> {
    match config.engine {
        SearchEngineName::Ids => Box::new(IdsPlayer::new(config.max_depth)),
        SearchEngineName::Astar => Box::new(AStarPlayer::new()),
    }
}

/// Eats the foods in the order the world lists them, solving one
/// single-food problem with iterative deepening per food, each starting where
/// the previous one ended.
#[derive(Debug, Clone, Copy)]
pub struct IdsPlayer {
    max_depth: usize,
}

impl IdsPlayer {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Player for IdsPlayer {
    fn start_episode(&self, world: &EaterWorld) -> Result<Vec<Direction>, PlayError> {
        info!("episode starting");
        let mut moves = vec![];
        let mut eater = world.eater();
        for food in self.food_order(world) {
            let problem = EaterProblem::new(EaterState::new(eater, vec![food]), world);
            let (result, _) = IterativeDeepening::new(self.max_depth).search(&problem);
            match result {
                SearchResult::Success(node) => moves.extend(node.solution()),
                SearchResult::Cutoff => return Err(PlayError::DepthBound(self.max_depth)),
                SearchResult::Exhausted => {
                    return Err(PlayError::Unreachable { from: eater, food })
                }
            }
            eater = food;
        }
        info!(moves = moves.len(), "episode planned");
        Ok(moves)
    }
}

/// Eats the foods nearest-first, by Manhattan distance from the eater's
/// starting location (ties keep the world's order), solving the whole tour
/// with A*.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPlayer {}

impl AStarPlayer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Player for AStarPlayer {
    fn food_order(&self, world: &EaterWorld) -> Vec<Coordinate> {
        let eater = world.eater();
        let mut foods = world.foods();
        foods.sort_by_key(|&food| manhattan_distance(eater, food));
        foods
    }

    fn start_episode(&self, world: &EaterWorld) -> Result<Vec<Direction>, PlayError> {
        info!("episode starting");
        let initial = EaterState::new(world.eater(), self.food_order(world));
        let problem = EaterProblem::new(initial, world);
        let (result, _) = AStar::new().search(&problem);
        let moves = result.solution().ok_or(PlayError::NoSolution)?;
        info!(moves = moves.len(), "episode planned");
        Ok(moves)
    }
}
