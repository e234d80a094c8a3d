use crate::search::{Node, Problem};
use ordered_float::OrderedFloat;

/// Path costs and heuristic estimates share one totally ordered float type so
/// that they can be used directly as priorities.
pub type Cost = OrderedFloat<f64>;

/// The informed-search capability of a [`Problem`]. An implementation must be
/// admissible, i.e. never overestimate the true remaining cost from the node's
/// state to a goal, for A* to return optimal solutions.
pub trait Heuristic: Problem {
    fn heuristic(&self, node: &Node<Self::State, Self::Action>) -> Cost;
}
