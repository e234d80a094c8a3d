//! This module provides the [`Node`] type, an element of the search tree.

use crate::search::{Cost, Problem};
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// A [`Node`] in the search tree. Nodes are shared through [`Rc`]: a child
/// holds a strong reference to its parent, a parent never refers to its
/// children. A goal node returned by a search therefore keeps its whole
/// ancestor chain alive, and the rest of the tree is dropped with the
/// frontier.
///
/// Two nodes compare equal (and hash equally) exactly when their states do,
/// whatever paths led to them.
#[derive(Clone)]
pub struct Node<S, A> {
    state: S,
    parent: Option<Rc<Node<S, A>>>,
    /// Action applied to the parent to reach this node
    action: Option<A>,
    path_cost: Cost,
    depth: usize,
}

impl<S, A> Node<S, A> {
    pub fn root(state: S) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: None,
            action: None,
            path_cost: Cost::from(0.),
            depth: 0,
        })
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<&Rc<Node<S, A>>> {
        self.parent.as_ref()
    }

    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn path_cost(&self) -> Cost {
        self.path_cost
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Iterate over this node and its ancestors, ending at the root.
    pub fn ancestors(&self) -> impl Iterator<Item = &Node<S, A>> {
        std::iter::successors(Some(self), |&node| node.parent.as_deref())
    }

    /// The nodes from the root to this node, both included.
    pub fn path(&self) -> Vec<&Node<S, A>> {
        let mut path: Vec<&Node<S, A>> = self.ancestors().collect();
        path.reverse();
        path
    }
}

impl<S, A: Clone> Node<S, A> {
    /// The actions leading from the root to this node.
    pub fn solution(&self) -> Vec<A> {
        let mut actions: Vec<A> = self
            .ancestors()
            .filter_map(|node| node.action.clone())
            .collect();
        actions.reverse();
        actions
    }
}

impl<S, A> Node<S, A>
where
    S: Clone + Eq + Hash + Debug,
    A: Clone + Debug,
{
    /// Generate the children of this node, one per action applicable in its
    /// state, in the order the problem returns them.
    pub fn expand<P>(self: &Rc<Self>, problem: &P) -> Vec<Rc<Self>>
    where
        P: Problem<State = S, Action = A>,
    {
        problem
            .actions(&self.state)
            .into_iter()
            .map(|action| self.child_node(problem, action))
            .collect()
    }

    pub fn child_node<P>(self: &Rc<Self>, problem: &P, action: A) -> Rc<Self>
    where
        P: Problem<State = S, Action = A>,
    {
        let next_state = problem.result(&self.state, &action);
        let next_cost = problem.path_cost(self.path_cost, &self.state, &action, &next_state);
        debug_assert!(
            next_cost >= self.path_cost,
            "Path cost must not decrease along a path"
        );
        Rc::new(Self {
            state: next_state,
            parent: Some(Rc::clone(self)),
            action: Some(action),
            path_cost: next_cost,
            depth: self.depth + 1,
        })
    }
}

impl<S: PartialEq, A> PartialEq for Node<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq, A> Eq for Node<S, A> {}

impl<S: Hash, A> Hash for Node<S, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

impl<S: Debug, A: Debug> Debug for Node<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("state", &self.state)
            .field("action", &self.action)
            .field("path_cost", &self.path_cost.into_inner())
            .field("depth", &self.depth)
            .finish()
    }
}

impl<S: Debug, A> Display for Node<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for node in self.path() {
            write!(f, "<Node {:?}>", node.state)?;
        }
        write!(f, "], cost = {}", self.path_cost)
    }
}
