//! Iterative deepening search: depth-limited search with a growing bound.

use crate::search::{
    search_engines::{
        depth_limited::search_to_depth, ProblemResult, SearchEngine, SearchResult,
        SearchStatistics,
    },
    Problem,
};
use tracing::{debug, info};

/// The bound used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Runs depth-limited search with limits `0, 1, ..., max_depth` and returns
/// the first solution found. With unit step costs that solution has the
/// fewest actions among all solutions within the bound.
///
/// Each run only prunes states on the current path or already in the
/// frontier, so the number of paths explored grows exponentially with the
/// size of the state space. On an open grid with the goal in the far corner a
/// 10x10 grid takes seconds and a 12x12 grid about a minute; use A* for
/// anything larger.
#[derive(Debug, Clone, Copy)]
pub struct IterativeDeepening {
    max_depth: usize,
}

impl IterativeDeepening {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for IterativeDeepening {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl<P: Problem> SearchEngine<P> for IterativeDeepening {
    fn search(&mut self, problem: &P) -> (ProblemResult<P>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let result = self.deepen(problem, &mut statistics);
        statistics.finalise_search();
        (result, statistics)
    }
}

impl IterativeDeepening {
    fn deepen<P: Problem>(
        &self,
        problem: &P,
        statistics: &mut SearchStatistics,
    ) -> ProblemResult<P> {
        for limit in 0..=self.max_depth {
            statistics.increment_iterations(limit);
            match search_to_depth(problem, limit, statistics) {
                SearchResult::Success(node) => {
                    info!(limit, solution_length = node.depth(), "solution found");
                    return SearchResult::Success(node);
                }
                SearchResult::Exhausted => {
                    // Nothing was cut off, so deeper limits cannot find more.
                    info!(limit, "state space exhausted");
                    return SearchResult::Exhausted;
                }
                SearchResult::Cutoff => debug!(limit, "depth limit reached"),
            }
        }
        info!(max_depth = self.max_depth, "maximum depth reached");
        SearchResult::Cutoff
    }
}

/// Run iterative deepening up to `max_depth` and return only its result.
pub fn iterative_deepening_search<P: Problem>(
    problem: &P,
    max_depth: usize,
) -> ProblemResult<P> {
    IterativeDeepening::new(max_depth).search(problem).0
}
