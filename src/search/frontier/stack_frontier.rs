use crate::search::{frontier::Frontier, Node};
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

/// A last-in first-out frontier, used by depth-first style searches.
///
/// Besides the stack itself we keep a count of the stacked nodes per state so
/// that [`Frontier::contains`] is a hash lookup on the state rather than a
/// scan of the stack.
#[derive(Debug)]
pub struct StackFrontier<S, A> {
    stack: Vec<Rc<Node<S, A>>>,
    state_counts: HashMap<Rc<Node<S, A>>, usize>,
}

impl<S: Eq + Hash, A> StackFrontier<S, A> {
    pub fn new(nodes: Vec<Rc<Node<S, A>>>) -> Self {
        let mut frontier = Self {
            stack: Vec::with_capacity(nodes.len()),
            state_counts: HashMap::new(),
        };
        frontier.add_all(nodes);
        frontier
    }
}

impl<S: Eq + Hash, A> Frontier<S, A> for StackFrontier<S, A> {
    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn add(&mut self, node: Rc<Node<S, A>>) {
        *self.state_counts.entry(Rc::clone(&node)).or_insert(0) += 1;
        self.stack.push(node);
    }

    fn contains(&self, node: &Node<S, A>) -> bool {
        self.state_counts.contains_key(node)
    }

    fn select_and_remove(&mut self) -> Rc<Node<S, A>> {
        let node = self
            .stack
            .pop()
            .expect("Cannot select from an empty frontier");
        let count = self
            .state_counts
            .get_mut(&*node)
            .expect("Stacked node missing from the state counts");
        *count -= 1;
        if *count == 0 {
            self.state_counts.remove(&*node);
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::LineProblem;

    fn line_nodes() -> Vec<Rc<Node<i32, i32>>> {
        let problem = LineProblem::new(0, 3, 5);
        let root = Node::root(0);
        let one = root.child_node(&problem, 1);
        let two = one.child_node(&problem, 1);
        vec![root, one, two]
    }

    #[test]
    fn select_and_remove_is_lifo() {
        let mut frontier = StackFrontier::new(vec![]);
        assert!(frontier.is_empty());
        frontier.add_all(line_nodes());
        assert_eq!(frontier.len(), 3);

        let order: Vec<i32> = std::iter::from_fn(|| {
            (!frontier.is_empty()).then(|| *frontier.select_and_remove().state())
        })
        .collect();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn most_recent_node_comes_out_first_after_interleaving() {
        let nodes = line_nodes();
        let mut frontier = StackFrontier::new(vec![Rc::clone(&nodes[0])]);
        frontier.add(Rc::clone(&nodes[1]));
        assert_eq!(*frontier.select_and_remove().state(), 1);
        frontier.add(Rc::clone(&nodes[2]));
        assert_eq!(*frontier.select_and_remove().state(), 2);
        assert_eq!(*frontier.select_and_remove().state(), 0);
    }

    #[test]
    fn contains_compares_states_not_identity() {
        let problem = LineProblem::new(0, 3, 5);
        let root = Node::root(0);
        let one = root.child_node(&problem, 1);
        let one_again = one.child_node(&problem, 1).child_node(&problem, -1);

        let mut frontier = StackFrontier::new(vec![Rc::clone(&one)]);
        assert!(frontier.contains(&one_again));
        assert!(!frontier.contains(&root));

        frontier.add(one_again);
        frontier.select_and_remove();
        assert!(frontier.contains(&one));
        frontier.select_and_remove();
        assert!(!frontier.contains(&one));
    }

    #[test]
    #[should_panic(expected = "empty frontier")]
    fn select_from_empty_frontier_panics() {
        let mut frontier: StackFrontier<i32, i32> = StackFrontier::new(vec![]);
        frontier.select_and_remove();
    }
}
