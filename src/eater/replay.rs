use crate::eater::{Coordinate, Direction, EaterProblem, EaterState, EaterWorld, PlayError};
use crate::search::Problem;

/// Play `moves` in `world`, eating `foods` in the given order, and check that
/// every move is legal and every food gets eaten. Returns the final state.
pub fn replay(
    world: &EaterWorld,
    foods: Vec<Coordinate>,
    moves: &[Direction],
) -> Result<EaterState, PlayError> {
    let problem = EaterProblem::new(EaterState::new(world.eater(), foods), world);
    let mut state = problem.initial().clone();
    for (step, direction) in moves.iter().enumerate() {
        if !problem.actions(&state).contains(direction) {
            return Err(PlayError::InvalidMove {
                step,
                direction: *direction,
                from: state.eater,
            });
        }
        state = problem.result(&state, direction);
    }

    if !problem.goal_test(&state) {
        return Err(PlayError::FoodsRemaining(state.foods.len()));
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use Direction::*;

    #[test]
    fn good_moves_eat_everything() {
        let world = EaterWorld::from_json(EATER_WORLD_OPEN_TEXT).unwrap();
        let moves = [Up, Up, Up, Right, Right, Right];
        let end = replay(&world, world.foods(), &moves).unwrap();
        assert_eq!(end.eater, Coordinate::new(3, 3));
    }

    #[test]
    fn move_into_wall_is_rejected() {
        let world = EaterWorld::from_json(EATER_WORLD_OPEN_TEXT).unwrap();
        assert_eq!(
            replay(&world, world.foods(), &[Up, Left]),
            Err(PlayError::InvalidMove {
                step: 1,
                direction: Left,
                from: Coordinate::new(0, 1)
            })
        );
    }

    #[test]
    fn incomplete_moves_leave_food() {
        let world = EaterWorld::from_json(EATER_WORLD_TWO_FOODS_TEXT).unwrap();
        assert_eq!(
            replay(&world, world.foods(), &[Right]),
            Err(PlayError::FoodsRemaining(1))
        );
    }

    #[test]
    fn foods_must_be_eaten_in_order() {
        let world = EaterWorld::from_json(EATER_WORLD_TWO_FOODS_TEXT).unwrap();
        // Visiting (0, 1) first does not eat it, as (1, 0) comes first.
        assert_eq!(
            replay(&world, world.foods(), &[Up, Down, Right]),
            Err(PlayError::FoodsRemaining(1))
        );
        assert!(replay(&world, world.foods(), &[Right, Left, Up]).is_ok());
    }
}
