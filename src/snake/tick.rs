//! Fixed-interval snake tick
//!
//! One call advances the simulation by exactly one cell. The scheduler is
//! responsible for calling this at the fixed interval; render rate never
//! reaches this module.

use super::state::{Cell, SnakePhase, SnakeState};
use crate::consts::FOOD_SCORE;

/// Advance the simulation by one tick. A no-op in any phase but `Running`.
pub fn tick(state: &mut SnakeState) {
    if state.phase != SnakePhase::Running {
        return;
    }
    let Some(head) = state.head() else {
        return;
    };

    // The queued direction becomes current exactly once per tick
    state.dir = state.pending;

    let (dx, dy) = state.dir.delta();
    let next = Cell::new(head.x + dx, head.y + dy);

    // Wall exit or self-collision ends the game before any mutation
    if !state.in_bounds(next) || state.contains(next) {
        state.phase = SnakePhase::GameOver;
        log::info!("game over at {:?}, score {}", next, state.score);
        return;
    }

    state.body.push_front(next);

    if state.food == Some(next) {
        // Growth is keeping the tail this tick
        state.score += FOOD_SCORE;
        if !state.place_food() {
            // Nowhere left to go
            state.phase = SnakePhase::GameOver;
        }
    } else {
        state.body.pop_back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SNAKE_START_LEN;
    use crate::snake::state::Direction;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    /// 20x20 board (400px viewport at the 20px cell size)
    fn board() -> SnakeState {
        SnakeState::new(400.0, 400.0, 5)
    }

    fn running(body: &[(i32, i32)], dir: Direction, food: Option<(i32, i32)>) -> SnakeState {
        let mut state = board();
        state.body = body.iter().map(|&(x, y)| Cell::new(x, y)).collect::<VecDeque<_>>();
        state.dir = dir;
        state.pending = dir;
        state.food = food.map(|(x, y)| Cell::new(x, y));
        state.phase = SnakePhase::Running;
        state
    }

    #[test]
    fn eating_grows_by_one_and_scores_ten() {
        let mut state = running(&[(5, 5), (4, 5), (3, 5)], Direction::Right, Some((6, 5)));
        tick(&mut state);

        let body: Vec<Cell> = state.body.iter().copied().collect();
        assert_eq!(
            body,
            vec![Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)]
        );
        assert_eq!(state.score, 10);
        let food = state.food.expect("a fresh food cell");
        assert!(!state.contains(food));
    }

    #[test]
    fn moving_without_food_keeps_the_length() {
        let mut state = running(&[(5, 5), (4, 5), (3, 5)], Direction::Right, Some((10, 10)));
        tick(&mut state);

        let body: Vec<Cell> = state.body.iter().copied().collect();
        assert_eq!(body, vec![Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn wall_exit_ends_the_game_without_mutation() {
        let mut state = running(&[(0, 5), (1, 5), (2, 5)], Direction::Left, Some((10, 10)));
        tick(&mut state);

        assert_eq!(state.phase, SnakePhase::GameOver);
        let body: Vec<Cell> = state.body.iter().copied().collect();
        assert_eq!(body, vec![Cell::new(0, 5), Cell::new(1, 5), Cell::new(2, 5)]);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn self_collision_ends_the_game() {
        // U-shaped body; the head turns down into its own trunk
        let mut state = running(
            &[(3, 3), (2, 3), (2, 4), (3, 4), (4, 4)],
            Direction::Right,
            Some((10, 10)),
        );
        state.queue_direction(Direction::Down);
        tick(&mut state);
        assert_eq!(state.phase, SnakePhase::GameOver);
    }

    #[test]
    fn pending_direction_is_adopted_at_tick() {
        let mut state = running(&[(5, 5), (4, 5), (3, 5)], Direction::Right, Some((10, 10)));
        state.queue_direction(Direction::Up);
        tick(&mut state);
        assert_eq!(state.dir, Direction::Up);
        assert_eq!(state.head(), Some(Cell::new(5, 4)));
    }

    #[test]
    fn game_over_latches_until_start() {
        let mut state = running(&[(0, 5), (1, 5), (2, 5)], Direction::Left, Some((10, 10)));
        tick(&mut state);
        assert_eq!(state.phase, SnakePhase::GameOver);

        // Further ticks and inputs change nothing
        state.queue_direction(Direction::Down);
        tick(&mut state);
        tick(&mut state);
        assert_eq!(state.phase, SnakePhase::GameOver);

        state.start();
        assert_eq!(state.phase, SnakePhase::Running);
        assert_eq!(state.body.len(), SNAKE_START_LEN);
    }

    #[test]
    fn filling_the_board_is_terminal() {
        // 20x20 board fully covered except (0,0); food sits there and the
        // head at (1,0) is about to take it
        let mut state = board();
        let mut body = VecDeque::from([Cell::new(1, 0)]);
        body.extend(
            (0..20)
                .flat_map(|y| (0..20).map(move |x| Cell::new(x, y)))
                .filter(|&c| c != Cell::new(0, 0) && c != Cell::new(1, 0)),
        );
        state.body = body;
        state.dir = Direction::Left;
        state.pending = Direction::Left;
        state.food = Some(Cell::new(0, 0));
        state.phase = SnakePhase::Running;

        tick(&mut state);
        assert_eq!(state.score, 10, "the last food still scores");
        assert_eq!(state.phase, SnakePhase::GameOver);
        assert_eq!(state.food, None);
    }

    proptest! {
        #[test]
        fn queued_direction_never_reverses_into_the_neck(
            seed in any::<u64>(),
            moves in proptest::collection::vec(0u8..4, 1..200),
        ) {
            let mut state = SnakeState::new(800.0, 800.0, seed);
            state.start();
            for m in moves {
                let requested = match m {
                    0 => Direction::Up,
                    1 => Direction::Down,
                    2 => Direction::Left,
                    _ => Direction::Right,
                };
                state.queue_direction(requested);
                prop_assert!(state.pending != state.dir.opposite());

                let before = state.head();
                let neck = state.body.get(1).copied();
                tick(&mut state);
                if state.phase == SnakePhase::Running {
                    // The head never steps back onto the previous neck cell
                    prop_assert!(state.head() != neck);
                    prop_assert!(state.head() != before);
                }
            }
        }

        #[test]
        fn tick_length_and_score_accounting(seed in any::<u64>(), ticks in 1usize..400) {
            let mut state = SnakeState::new(800.0, 800.0, seed);
            state.start();
            for _ in 0..ticks {
                let len = state.body.len();
                let score = state.score;
                let food = state.food;
                tick(&mut state);
                if state.phase != SnakePhase::Running {
                    break;
                }
                if state.score > score {
                    prop_assert_eq!(state.score, score + FOOD_SCORE);
                    prop_assert_eq!(state.body.len(), len + 1);
                    prop_assert_eq!(food, Some(*state.body.front().unwrap()));
                } else {
                    prop_assert_eq!(state.body.len(), len);
                }
                // Body cells stay pairwise distinct
                for (i, a) in state.body.iter().enumerate() {
                    for b in state.body.iter().skip(i + 1) {
                        prop_assert!(a != b);
                    }
                }
            }
        }
    }
}
