//! Per-frame paddle-ball update
//!
//! Continuous-time transition function: paddle travel, ball integration,
//! wall reflection, paddle deflection, scoring. Total over all inputs -
//! every numeric edge is clamped, nothing here can fail.

use super::state::{Ball, Paddle, PongState};
use crate::consts::*;

/// Held directional input, recorded by the host between frames and read
/// once per scheduled update
#[derive(Debug, Clone, Copy, Default)]
pub struct PongInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl PongInput {
    /// Release everything (used when the view deactivates, so a key
    /// released while hidden cannot stick)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Advance the simulation by `dt` seconds
pub fn update(state: &mut PongState, input: &PongInput, dt: f32) {
    let dt = dt.max(0.0);

    // Paddle travel, clamped to the board
    let travel = PADDLE_SPEED * dt;
    if input.left_up {
        state.left.travel(-travel, state.height);
    }
    if input.left_down {
        state.left.travel(travel, state.height);
    }
    if input.right_up {
        state.right.travel(-travel, state.height);
    }
    if input.right_down {
        state.right.travel(travel, state.height);
    }

    // Integrate the ball
    state.ball.pos += state.ball.vel * dt;

    // Top/bottom walls: perfect reflection. Only a ball still heading out
    // is flipped, so an already-recovering ball is left alone (direction is
    // snapped, position is not).
    let r = state.ball.radius;
    if state.ball.pos.y - r <= 0.0 && state.ball.vel.y < 0.0 {
        state.ball.vel.y = -state.ball.vel.y;
    }
    if state.ball.pos.y + r >= state.height && state.ball.vel.y > 0.0 {
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Paddle hits, restricted to each paddle's side: a ball moving away
    // from a paddle cannot collide with it from behind
    if state.ball.vel.x < 0.0 && overlaps(&state.ball, &state.left) {
        deflect(&mut state.ball, &state.left, 1.0);
    } else if state.ball.vel.x > 0.0 && overlaps(&state.ball, &state.right) {
        deflect(&mut state.ball, &state.right, -1.0);
    }

    // Scoring: the ball's center crossing a side boundary concedes the
    // point and re-serves toward the conceding side's opponent... which is
    // also the direction away from the scored-against side.
    if state.ball.pos.x < 0.0 {
        state.score.right += 1;
        log::info!(
            "point: right scores ({} - {})",
            state.score.left,
            state.score.right
        );
        state.serve(1.0);
    } else if state.ball.pos.x > state.width {
        state.score.left += 1;
        log::info!(
            "point: left scores ({} - {})",
            state.score.left,
            state.score.right
        );
        state.serve(-1.0);
    }
}

/// Combined horizontal and vertical overlap between ball and paddle rectangle
fn overlaps(ball: &Ball, paddle: &Paddle) -> bool {
    let r = ball.radius;
    ball.pos.x + r >= paddle.x
        && ball.pos.x - r <= paddle.x + PADDLE_WIDTH
        && ball.pos.y + r >= paddle.y
        && ball.pos.y - r <= paddle.y + PADDLE_HEIGHT
}

/// Bounce off a paddle: horizontal speed is preserved with its sign forced
/// to `away` (+1 = rightward off the left paddle), vertical speed becomes a
/// deflection proportional to where on the paddle the ball struck
fn deflect(ball: &mut Ball, paddle: &Paddle, away: f32) {
    ball.vel.x = ball.vel.x.abs() * away;
    let hit_offset = ((ball.pos.y - paddle.center_y()) / PADDLE_HEIGHT).clamp(-0.5, 0.5);
    ball.vel.y = hit_offset * BALL_SPEED * SPIN_FACTOR;
}
