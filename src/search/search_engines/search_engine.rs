use crate::search::{
    search_engines::{AStar, IterativeDeepening, SearchStatistics},
    Heuristic, Node, Problem,
};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<S, A> {
    /// A goal node was found. The node keeps its ancestors alive, so the
    /// solution can be read from it.
    Success(Rc<Node<S, A>>),
    /// The search ran out of nodes, but only because a depth bound stopped it
    /// from expanding some of them
    Cutoff,
    /// The search ran out of nodes without hitting any bound, the problem is
    /// unsolvable
    Exhausted,
}

impl<S, A> SearchResult<S, A> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    pub fn goal_node(&self) -> Option<&Rc<Node<S, A>>> {
        match self {
            SearchResult::Success(node) => Some(node),
            _ => None,
        }
    }
}

impl<S, A: Clone> SearchResult<S, A> {
    /// The actions leading to the goal, if one was found.
    pub fn solution(&self) -> Option<Vec<A>> {
        self.goal_node().map(|node| node.solution())
    }
}

pub type ProblemNode<P> = Node<<P as Problem>::State, <P as Problem>::Action>;
pub type ProblemResult<P> = SearchResult<<P as Problem>::State, <P as Problem>::Action>;

pub trait SearchEngine<P: Problem> {
    fn search(&mut self, problem: &P) -> (ProblemResult<P>, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Iterative deepening depth-first search.")]
    Ids,
    #[clap(help = "A* graph search, requires an admissible heuristic.")]
    #[default]
    Astar,
}

impl SearchEngineName {
    /// Run the named search engine. `max_depth` bounds iterative deepening
    /// and is ignored by A*.
    pub fn search<P: Heuristic>(
        &self,
        problem: &P,
        max_depth: usize,
    ) -> (ProblemResult<P>, SearchStatistics) {
        match self {
            SearchEngineName::Ids => IterativeDeepening::new(max_depth).search(problem),
            SearchEngineName::Astar => AStar::new().search(problem),
        }
    }
}
