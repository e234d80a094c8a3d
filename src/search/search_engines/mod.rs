mod astar;
mod depth_limited;
mod graph_search;
mod iterative_deepening;
mod search_engine;
mod search_statistics;

pub use astar::{astar_search, AStar};
pub use depth_limited::{depth_limited_search, DepthLimited};
pub use graph_search::graph_search;
pub use iterative_deepening::{iterative_deepening_search, IterativeDeepening, DEFAULT_MAX_DEPTH};
pub use search_engine::{ProblemNode, ProblemResult, SearchEngine, SearchEngineName, SearchResult};
pub use search_statistics::SearchStatistics;
