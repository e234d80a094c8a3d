//! The eater grid world, a small pathfinding domain for the search engines.

mod coordinate;
mod direction;
mod player;
mod problem;
mod replay;
mod world;

pub use coordinate::{manhattan_distance, Coordinate};
pub use direction::Direction;
pub use player::{create_player, AStarPlayer, IdsPlayer, PlayError, Player};
pub use problem::{EaterProblem, EaterState};
pub use replay::replay;
pub use world::{EaterWorld, WorldError, WorldObject};
