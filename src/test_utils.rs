use crate::eater::Coordinate;
use crate::search::{Cost, Goal, Heuristic, Node, Problem};
use std::collections::HashSet;

pub const NO_BLOCKS: [Coordinate; 0] = [];

pub const EATER_WORLD_OPEN_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/eater-world/open.json"
));

pub const EATER_WORLD_ENCLOSED_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/eater-world/enclosed.json"
));

pub const EATER_WORLD_WALLED_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/eater-world/walled.json"
));

pub const EATER_WORLD_TWO_FOODS_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/eater-world/two_foods.json"
));

pub const WUMPUS_2X2_PROBLEM_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/wumpus/2x2-problem.pddl"
));

/// Walk along the integers `0..len` by steps of `+1` or `-1`.
#[derive(Debug)]
pub struct LineProblem {
    initial: i32,
    goal: Goal<i32>,
    len: i32,
}

impl LineProblem {
    pub fn new(initial: i32, goal: i32, len: i32) -> Self {
        Self {
            initial,
            goal: Goal::State(goal),
            len,
        }
    }
}

impl Problem for LineProblem {
    type State = i32;
    type Action = i32;

    fn initial(&self) -> &i32 {
        &self.initial
    }

    fn goal(&self) -> Option<&Goal<i32>> {
        Some(&self.goal)
    }

    fn actions(&self, state: &i32) -> Vec<i32> {
        [1, -1]
            .into_iter()
            .filter(|step| (0..self.len).contains(&(state + step)))
            .collect()
    }

    fn result(&self, state: &i32, action: &i32) -> i32 {
        state + action
    }
}

impl Heuristic for LineProblem {
    fn heuristic(&self, node: &Node<i32, i32>) -> Cost {
        match self.goal {
            Goal::State(goal) => Cost::from(f64::from((goal - node.state()).abs())),
            Goal::AnyOf(_) => Cost::from(0.),
        }
    }
}

/// Four-connected moves on a `size` x `size` grid with blocked cells.
#[derive(Debug)]
pub struct GridProblem {
    initial: (i32, i32),
    goal: Goal<(i32, i32)>,
    size: i32,
    blocks: HashSet<(i32, i32)>,
}

impl GridProblem {
    pub fn new(size: i32, initial: (i32, i32), goal: (i32, i32), blocks: &[(i32, i32)]) -> Self {
        Self {
            initial,
            goal: Goal::State(goal),
            size,
            blocks: blocks.iter().copied().collect(),
        }
    }

    pub fn open(size: i32, initial: (i32, i32), goal: (i32, i32)) -> Self {
        Self::new(size, initial, goal, &[])
    }
}

impl Problem for GridProblem {
    type State = (i32, i32);
    type Action = (i32, i32);

    fn initial(&self) -> &(i32, i32) {
        &self.initial
    }

    fn goal(&self) -> Option<&Goal<(i32, i32)>> {
        Some(&self.goal)
    }

    fn actions(&self, &(x, y): &(i32, i32)) -> Vec<(i32, i32)> {
        [(0, 1), (0, -1), (-1, 0), (1, 0)]
            .into_iter()
            .filter(|&(dx, dy)| {
                let next = (x + dx, y + dy);
                (0..self.size).contains(&next.0)
                    && (0..self.size).contains(&next.1)
                    && !self.blocks.contains(&next)
            })
            .collect()
    }

    fn result(&self, &(x, y): &(i32, i32), &(dx, dy): &(i32, i32)) -> (i32, i32) {
        (x + dx, y + dy)
    }
}

impl Heuristic for GridProblem {
    fn heuristic(&self, node: &Node<(i32, i32), (i32, i32)>) -> Cost {
        let (x, y) = *node.state();
        match self.goal {
            Goal::State((gx, gy)) => Cost::from(f64::from((gx - x).abs() + (gy - y).abs())),
            Goal::AnyOf(_) => Cost::from(0.),
        }
    }
}

/// A directed graph over named vertices. Actions name the vertex moved to and
/// cost the weight of the edge taken.
#[derive(Debug)]
pub struct WeightedGraph {
    initial: char,
    goal: Goal<char>,
    edges: Vec<(char, char, f64)>,
}

impl WeightedGraph {
    pub fn new(initial: char, goal: char, edges: &[(char, char, f64)]) -> Self {
        Self {
            initial,
            goal: Goal::State(goal),
            edges: edges.to_vec(),
        }
    }
}

impl Problem for WeightedGraph {
    type State = char;
    type Action = char;

    fn initial(&self) -> &char {
        &self.initial
    }

    fn goal(&self) -> Option<&Goal<char>> {
        Some(&self.goal)
    }

    fn actions(&self, state: &char) -> Vec<char> {
        self.edges
            .iter()
            .filter(|(from, _, _)| from == state)
            .map(|&(_, to, _)| to)
            .collect()
    }

    fn result(&self, _state: &char, action: &char) -> char {
        *action
    }

    fn path_cost(&self, cost: Cost, state: &char, action: &char, _next: &char) -> Cost {
        let weight = self
            .edges
            .iter()
            .find(|(from, to, _)| from == state && to == action)
            .map(|&(_, _, weight)| weight)
            .expect("Action is not an edge of the graph");
        cost + weight
    }
}

impl Heuristic for WeightedGraph {
    fn heuristic(&self, _node: &Node<char, char>) -> Cost {
        Cost::from(0.)
    }
}

/// Counts upwards forever, never reaching a goal.
#[derive(Debug)]
pub struct UnitProblem;

impl Problem for UnitProblem {
    type State = i32;
    type Action = ();

    fn initial(&self) -> &i32 {
        &0
    }

    fn actions(&self, _state: &i32) -> Vec<()> {
        vec![()]
    }

    fn result(&self, state: &i32, _action: &()) -> i32 {
        state + 1
    }

    fn goal_test(&self, _state: &i32) -> bool {
        false
    }
}
