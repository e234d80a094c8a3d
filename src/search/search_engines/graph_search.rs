//! Best-first graph search with an explored set.

use crate::search::{
    frontier::Frontier,
    search_engines::{ProblemResult, SearchResult, SearchStatistics},
    Problem,
};
use std::collections::HashSet;
use tracing::trace;

/// Generic graph search. The frontier must already hold the root node; the
/// order in which it hands nodes back decides which search this is.
///
/// A node's state is marked explored when it is expanded. Children whose state
/// was explored are dropped; children whose state is already in the frontier
/// are offered to [`Frontier::improve`] instead of being added twice.
pub fn graph_search<P, F>(problem: &P, frontier: F) -> ProblemResult<P>
where
    P: Problem,
    F: Frontier<P::State, P::Action>,
{
    let mut statistics = SearchStatistics::new();
    let result = search_graph(problem, frontier, &mut statistics);
    statistics.finalise_search();
    result
}

pub(super) fn search_graph<P, F>(
    problem: &P,
    mut frontier: F,
    statistics: &mut SearchStatistics,
) -> ProblemResult<P>
where
    P: Problem,
    F: Frontier<P::State, P::Action>,
{
    let mut explored: HashSet<P::State> = HashSet::new();

    while !frontier.is_empty() {
        let node = frontier.select_and_remove();
        trace!(state = ?node.state(), path_cost = node.path_cost().into_inner());
        if problem.goal_test(node.state()) {
            return SearchResult::Success(node);
        }

        explored.insert(node.state().clone());
        statistics.increment_expanded_nodes();
        let children = node.expand(problem);
        statistics.increment_generated_nodes(children.len());
        for child in children {
            if explored.contains(child.state()) {
                statistics.increment_pruned_nodes();
            } else if !frontier.contains(&child) {
                frontier.add(child);
            } else if frontier.improve(child) {
                statistics.increment_improved_nodes();
            } else {
                statistics.increment_pruned_nodes();
            }
        }
    }

    SearchResult::Exhausted
}
