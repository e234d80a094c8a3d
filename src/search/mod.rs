pub mod frontier;
mod heuristic;
mod node;
mod problem;
mod search_config;
pub mod search_engines;
mod verbosity;

pub use heuristic::{Cost, Heuristic};
pub use node::Node;
pub use problem::{Goal, Problem};
pub use search_config::{ConfigError, SearchConfig};
pub use verbosity::{init_logging, Verbosity};
