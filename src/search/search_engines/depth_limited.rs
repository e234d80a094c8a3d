//! Depth-limited depth-first tree search.

use crate::search::{
    frontier::{Frontier, StackFrontier},
    search_engines::{ProblemNode, ProblemResult, SearchEngine, SearchResult, SearchStatistics},
    Node, Problem,
};
use std::rc::Rc;
use tracing::trace;

/// Depth-first search that never generates nodes deeper than `limit`.
#[derive(Debug, Clone, Copy)]
pub struct DepthLimited {
    limit: usize,
}

impl DepthLimited {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl<P: Problem> SearchEngine<P> for DepthLimited {
    fn search(&mut self, problem: &P) -> (ProblemResult<P>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let result = search_to_depth(problem, self.limit, &mut statistics);
        statistics.finalise_search();
        (result, statistics)
    }
}

/// Run a depth-limited search and return only its result. See
/// [`DepthLimited`].
pub fn depth_limited_search<P: Problem>(problem: &P, limit: usize) -> ProblemResult<P> {
    DepthLimited::new(limit).search(problem).0
}

/// Whether the node's state already occurs on the path leading to it.
fn is_cycle<S: PartialEq, A>(node: &Node<S, A>) -> bool {
    node.ancestors()
        .skip(1)
        .any(|ancestor| ancestor.state() == node.state())
}

/// The depth-limited search loop, shared with iterative deepening so that
/// statistics accumulate over iterations.
///
/// Nodes at depth `limit` are goal tested but not expanded; if any such node
/// is met the result is [`SearchResult::Cutoff`]. Children whose state is on
/// their own path, or already in the frontier, are not pushed. A frontier copy
/// is never deeper than the child, so this keeps the search complete up to the
/// limit.
pub(super) fn search_to_depth<P: Problem>(
    problem: &P,
    limit: usize,
    statistics: &mut SearchStatistics,
) -> ProblemResult<P> {
    let root: Rc<ProblemNode<P>> = Node::root(problem.initial().clone());
    let mut frontier = StackFrontier::new(vec![root]);
    let mut cutoff = false;

    while !frontier.is_empty() {
        let node = frontier.select_and_remove();
        if problem.goal_test(node.state()) {
            trace!(depth = node.depth(), "goal found");
            return SearchResult::Success(node);
        }
        if node.depth() >= limit {
            cutoff = true;
            continue;
        }

        statistics.increment_expanded_nodes();
        let children = node.expand(problem);
        statistics.increment_generated_nodes(children.len());
        for child in children {
            if is_cycle(&child) || frontier.contains(&child) {
                statistics.increment_pruned_nodes();
            } else {
                frontier.add(child);
            }
        }
    }

    if cutoff {
        SearchResult::Cutoff
    } else {
        SearchResult::Exhausted
    }
}
