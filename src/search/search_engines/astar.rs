//! A* search, best-first graph search ordered by `g + h`.

use crate::search::{
    frontier::PriorityQueueFrontier,
    search_engines::{
        graph_search::search_graph, ProblemNode, ProblemResult, SearchEngine, SearchResult,
        SearchStatistics,
    },
    Heuristic, Node,
};
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: Heuristic> SearchEngine<P> for AStar {
    fn search(&mut self, problem: &P) -> (ProblemResult<P>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let root = Node::root(problem.initial().clone());
        let frontier = PriorityQueueFrontier::new(vec![root], |node: &ProblemNode<P>| {
            node.path_cost() + problem.heuristic(node)
        });
        let result = search_graph(problem, frontier, &mut statistics);
        if let SearchResult::Success(node) = &result {
            info!(
                solution_length = node.depth(),
                solution_cost = node.path_cost().into_inner(),
                "solution found"
            );
        }
        statistics.finalise_search();
        (result, statistics)
    }
}

/// Run A* and return only its result. The solution is optimal when the
/// problem's heuristic is admissible.
pub fn astar_search<P: Heuristic>(problem: &P) -> ProblemResult<P> {
    AStar::new().search(problem).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{search_engines::iterative_deepening_search, Cost};
    use crate::test_utils::{GridProblem, WeightedGraph};
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn open_grid_corner_to_corner() {
        let problem = GridProblem::open(4, (0, 0), (3, 3));
        let result = astar_search(&problem);
        let goal = result.goal_node().expect("goal is reachable");
        assert_eq!(goal.solution().len(), 6);
        assert_approx_eq!(goal.path_cost().into_inner(), 6.);
    }

    #[test]
    fn enclosed_goal_has_no_solution() {
        let problem = GridProblem::new(4, (0, 0), (2, 2), &[(1, 2), (3, 2), (2, 1), (2, 3)]);
        assert_eq!(astar_search(&problem), SearchResult::Exhausted);
    }

    #[test]
    fn cheaper_longer_path_wins() {
        // a -> d directly costs 10, a -> b -> c -> d costs 3.
        let problem = WeightedGraph::new(
            'a',
            'd',
            &[('a', 'd', 10.), ('a', 'b', 1.), ('b', 'c', 1.), ('c', 'd', 1.)],
        );
        let goal = astar_search(&problem).goal_node().cloned().expect("path exists");
        assert_eq!(goal.solution(), vec!['b', 'c', 'd']);
        assert_eq!(goal.path_cost(), Cost::from(3.));

        // Iterative deepening minimises the number of actions instead.
        let shallow = iterative_deepening_search(&problem, 10).solution();
        assert_eq!(shallow, Some(vec!['d']));
    }

    #[test]
    fn frontier_entry_is_improved_by_later_cheaper_path() {
        // 'c' is first generated from 'a' at cost 5, then reached via 'b' at
        // cost 2 before it is selected.
        let problem = WeightedGraph::new(
            'a',
            'e',
            &[('a', 'b', 1.), ('a', 'c', 5.), ('b', 'c', 1.), ('c', 'e', 1.)],
        );
        let (result, statistics) = AStar::new().search(&problem);
        let goal = result.goal_node().expect("path exists");
        assert_eq!(goal.path_cost(), Cost::from(3.));
        assert_eq!(goal.solution(), vec!['b', 'c', 'e']);
        assert_eq!(statistics.improved_nodes(), 1);
    }

    #[test]
    fn repeated_runs_agree() {
        let problem = GridProblem::new(5, (0, 4), (4, 0), &[(2, 1), (2, 2), (2, 3)]);
        let first = astar_search(&problem).solution();
        let second = astar_search(&problem).solution();
        assert_eq!(first, second);
        assert_eq!(first.map(|moves| moves.len()), Some(8));
    }
}
