use crate::search::Node;
use std::rc::Rc;

/// The open list of a search algorithm: nodes that have been generated but not
/// yet expanded. Implementations differ only in the order in which
/// [`Frontier::select_and_remove`] hands nodes back.
///
/// Membership is always decided by state, see [`Node`]'s equality.
pub trait Frontier<S, A> {
    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    fn add(&mut self, node: Rc<Node<S, A>>);

    fn add_all(&mut self, nodes: Vec<Rc<Node<S, A>>>) {
        for node in nodes {
            self.add(node);
        }
    }

    /// Whether a node with the same state as `node` is in the frontier.
    fn contains(&self, node: &Node<S, A>) -> bool;

    /// Remove and return the next node. Panics if the frontier is empty,
    /// callers must check [`Frontier::is_empty`] first.
    fn select_and_remove(&mut self) -> Rc<Node<S, A>>;

    /// Offer a node whose state is already in the frontier. Returns whether
    /// the frontier replaced its entry with `node`. Frontiers without a notion
    /// of a better node keep the existing entry.
    fn improve(&mut self, _node: Rc<Node<S, A>>) -> bool {
        false
    }
}
