use crate::search::Cost;
use std::fmt::Debug;
use std::hash::Hash;

/// The goal of a [`Problem`], either a single state or a set of acceptable
/// goal states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Goal<S> {
    State(S),
    AnyOf(Vec<S>),
}

impl<S: PartialEq> Goal<S> {
    pub fn is_satisfied(&self, state: &S) -> bool {
        match self {
            Goal::State(goal) => goal == state,
            Goal::AnyOf(goals) => goals.contains(state),
        }
    }
}

/// A formal search problem. The state space is defined implicitly by the
/// initial state, the actions applicable in each state and the transition
/// function. Search algorithms only ever talk to this trait, never to a
/// concrete domain.
///
/// Problems are read-only once constructed; all methods take `&self`.
pub trait Problem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    fn initial(&self) -> &Self::State;

    /// The explicit goal, if the problem has one. Problems that override
    /// [`Problem::goal_test`] can leave this as `None`.
    fn goal(&self) -> Option<&Goal<Self::State>> {
        None
    }

    /// The actions applicable in `state`, in the order children should be
    /// generated.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` in `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Whether `state` is a goal state. The default implementation compares
    /// against [`Problem::goal`] and panics if the problem has no goal.
    fn goal_test(&self, state: &Self::State) -> bool {
        self.goal()
            .expect("Problem has no goal, either provide one or override goal_test")
            .is_satisfied(state)
    }

    /// The cost of a path that arrives at `next` from `state` via `action`,
    /// given the cost `cost` of the path up to `state`. Defaults to unit step
    /// costs.
    fn path_cost(
        &self,
        cost: Cost,
        _state: &Self::State,
        _action: &Self::Action,
        _next: &Self::State,
    ) -> Cost {
        cost + 1.
    }
}
