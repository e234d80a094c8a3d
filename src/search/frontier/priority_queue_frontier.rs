use crate::search::{frontier::Frontier, Cost, Node};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::rc::Rc;

/// Priority of a queued node: its key under the cost function, then its
/// insertion number so that equal keys come out first-in first-out. Wrapped
/// in [`Reverse`] as [`PriorityQueue`] pops the largest priority.
type QueuePriority = Reverse<(Cost, usize)>;

/// A frontier that always hands back the node with the lowest key under an
/// injected cost function (for A*, `g + h`).
///
/// The queue holds at most one node per state. Adding a node whose state is
/// already queued keeps whichever of the two has the lower key.
pub struct PriorityQueueFrontier<S, A, F>
where
    S: Eq + Hash,
    F: Fn(&Node<S, A>) -> Cost,
{
    queue: PriorityQueue<Rc<Node<S, A>>, QueuePriority>,
    cost_function: F,
    insertions: usize,
}

impl<S, A, F> PriorityQueueFrontier<S, A, F>
where
    S: Eq + Hash,
    F: Fn(&Node<S, A>) -> Cost,
{
    pub fn new(nodes: Vec<Rc<Node<S, A>>>, cost_function: F) -> Self {
        let mut frontier = Self {
            queue: PriorityQueue::new(),
            cost_function,
            insertions: 0,
        };
        frontier.add_all(nodes);
        frontier
    }

    fn next_priority(&mut self, node: &Node<S, A>) -> QueuePriority {
        let priority = Reverse(((self.cost_function)(node), self.insertions));
        self.insertions += 1;
        priority
    }

    /// Replace the queued node with the same state as `node` if `node` has a
    /// strictly lower key.
    fn replace_if_cheaper(&mut self, node: Rc<Node<S, A>>) -> bool {
        let cost = (self.cost_function)(&*node);
        let cheaper = matches!(
            self.queue.get_priority(&*node),
            Some(Reverse((queued_cost, _))) if cost < *queued_cost
        );
        if !cheaper {
            return false;
        }
        self.queue.remove(&*node);
        let priority = self.next_priority(&node);
        self.queue.push(node, priority);
        true
    }
}

impl<S, A, F> Frontier<S, A> for PriorityQueueFrontier<S, A, F>
where
    S: Eq + Hash,
    F: Fn(&Node<S, A>) -> Cost,
{
    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn add(&mut self, node: Rc<Node<S, A>>) {
        if self.contains(&node) {
            self.replace_if_cheaper(node);
        } else {
            let priority = self.next_priority(&node);
            self.queue.push(node, priority);
        }
    }

    fn contains(&self, node: &Node<S, A>) -> bool {
        self.queue.get_priority(node).is_some()
    }

    fn select_and_remove(&mut self) -> Rc<Node<S, A>> {
        self.queue
            .pop()
            .map(|(node, _)| node)
            .expect("Cannot select from an empty frontier")
    }

    fn improve(&mut self, node: Rc<Node<S, A>>) -> bool {
        self.replace_if_cheaper(node)
    }
}

impl<S, A, F> Debug for PriorityQueueFrontier<S, A, F>
where
    S: Eq + Hash + Debug,
    A: Debug,
    F: Fn(&Node<S, A>) -> Cost,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueueFrontier")
            .field("len", &self.queue.len())
            .field("next", &self.queue.peek().map(|(node, _)| node))
            .field("insertions", &self.insertions)
            .finish()
    }
}
