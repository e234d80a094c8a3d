use crate::eater::{manhattan_distance, Coordinate, Direction, EaterWorld};
use crate::search::{Cost, Heuristic, Node, Problem};
use strum::IntoEnumIterator;

/// The eater's location and the foods still to be eaten. Foods are eaten in
/// list order: only the first one is consumed when the eater steps on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EaterState {
    pub eater: Coordinate,
    pub foods: Vec<Coordinate>,
}

impl EaterState {
    /// Create a state, eating the leading foods that are under the eater. This
    /// is also how a move eats: stepping onto the first food removes it (and
    /// any copies of the same location directly behind it).
    pub fn new(eater: Coordinate, foods: Vec<Coordinate>) -> Self {
        let mut state = Self { eater, foods };
        state.eat();
        state
    }

    /// The food currently being pursued.
    pub fn target(&self) -> Option<Coordinate> {
        self.foods.first().copied()
    }

    fn eat(&mut self) {
        let eaten = self
            .foods
            .iter()
            .take_while(|&&food| food == self.eater)
            .count();
        self.foods.drain(..eaten);
    }
}

/// Eat all foods of a world, in the order of the initial state's food list.
#[derive(Debug)]
pub struct EaterProblem<'w> {
    initial: EaterState,
    world: &'w EaterWorld,
}

impl<'w> EaterProblem<'w> {
    pub fn new(initial: EaterState, world: &'w EaterWorld) -> Self {
        Self { initial, world }
    }

    /// The problem of eating every food of `world` in the order they are
    /// listed, starting from the world's eater.
    pub fn from_world(world: &'w EaterWorld) -> Self {
        Self::new(EaterState::new(world.eater(), world.foods()), world)
    }
}

impl Problem for EaterProblem<'_> {
    type State = EaterState;
    type Action = Direction;

    fn initial(&self) -> &EaterState {
        &self.initial
    }

    fn actions(&self, state: &EaterState) -> Vec<Direction> {
        Direction::iter()
            .filter(|direction| self.world.is_valid_position(direction.apply(state.eater)))
            .collect()
    }

    fn result(&self, state: &EaterState, action: &Direction) -> EaterState {
        EaterState::new(action.apply(state.eater), state.foods.clone())
    }

    fn goal_test(&self, state: &EaterState) -> bool {
        state.foods.is_empty()
    }
}

impl Heuristic for EaterProblem<'_> {
    /// Manhattan distance to the current target. Every move changes the
    /// distance by at most one, so this never overestimates.
    fn heuristic(&self, node: &Node<EaterState, Direction>) -> Cost {
        let state = node.state();
        let distance = state
            .target()
            .map_or(0, |food| manhattan_distance(state.eater, food));
        Cost::from(f64::from(distance))
    }
}
