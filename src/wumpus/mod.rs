//! Wumpus World instances and their serialisation as PDDL problem files for
//! an external planner.

mod world;
mod writer;

pub use world::{WumpusError, WumpusWorld};
pub use writer::{save_problem, write_problem};
