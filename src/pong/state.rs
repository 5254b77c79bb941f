//! Paddle-ball game state
//!
//! Two paddles on fixed horizontal lanes, one ball, one score pair. All
//! randomness (serve direction and spread) comes from the state's own seeded
//! RNG so tests can force outcomes.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// A player's paddle: fixed horizontal lane, vertical travel only
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    /// Left edge (fixed per side, re-derived on resize)
    pub x: f32,
    /// Top edge, always within `[0, board_height - PADDLE_HEIGHT]`
    pub y: f32,
}

impl Paddle {
    /// Vertical center of the paddle face
    pub fn center_y(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }

    /// Move vertically by `amount` (signed), clamped to the board
    pub fn travel(&mut self, amount: f32, board_height: f32) {
        self.y = (self.y + amount).clamp(0.0, board_height - PADDLE_HEIGHT);
    }
}

/// The ball. Collision resolution snaps direction, never position, so the
/// position carries no invariant of its own.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Per-side point tally, monotone within a session, zeroed only by `reset`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScorePair {
    pub left: u32,
    pub right: u32,
}

/// Complete paddle-ball state
#[derive(Debug, Clone)]
pub struct PongState {
    pub width: f32,
    pub height: f32,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: ScorePair,
    pub(crate) rng: Pcg32,
}

impl PongState {
    /// Create a state for the given board, serving immediately
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let (width, height) = clamp_board(width, height);
        let mut state = Self {
            width,
            height,
            left: Paddle {
                x: PADDLE_MARGIN,
                y: 0.0,
            },
            right: Paddle {
                x: width - PADDLE_MARGIN - PADDLE_WIDTH,
                y: 0.0,
            },
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                radius: BALL_RADIUS,
            },
            score: ScorePair::default(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset();
        state
    }

    /// Zero both scores, re-center the paddles, serve toward a random side
    pub fn reset(&mut self) {
        self.score = ScorePair::default();
        let center = (self.height - PADDLE_HEIGHT) / 2.0;
        self.left.y = center;
        self.right.y = center;
        let dir = if self.rng.random::<bool>() { 1.0 } else { -1.0 };
        self.serve(dir);
    }

    /// Place the ball at board center travelling toward `dir` (+1 = right,
    /// -1 = left) with a randomized vertical component
    pub fn serve(&mut self, dir: f32) {
        self.ball.pos = Vec2::new(self.width / 2.0, self.height / 2.0);
        let vy = self.rng.random_range(-SERVE_SPREAD..=SERVE_SPREAD) * BALL_SPEED;
        self.ball.vel = Vec2::new(BALL_SPEED * dir.signum(), vy);
        log::debug!(
            "serve: dir={:+.0} vy={:.1}",
            dir.signum(),
            vy
        );
    }

    /// Adopt a new viewport: paddle lanes stay at fixed offsets from their
    /// edges, paddle and ball positions are clamped into the new bounds
    /// (no proportional rescale, no forced re-serve)
    pub fn resize(&mut self, width: f32, height: f32) {
        let (width, height) = clamp_board(width, height);
        self.width = width;
        self.height = height;
        self.left.x = PADDLE_MARGIN;
        self.right.x = width - PADDLE_MARGIN - PADDLE_WIDTH;
        self.left.travel(0.0, height);
        self.right.travel(0.0, height);
        let r = self.ball.radius;
        self.ball.pos.x = self.ball.pos.x.clamp(r, width - r);
        self.ball.pos.y = self.ball.pos.y.clamp(r, height - r);
    }
}

/// Viewport sizes are clamped to sane minimums rather than rejected
fn clamp_board(width: f32, height: f32) -> (f32, f32) {
    (width.max(MIN_BOARD_WIDTH), height.max(MIN_BOARD_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_serves_from_center() {
        let state = PongState::new(800.0, 600.0, 7);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel.x.abs(), BALL_SPEED);
        assert!(state.ball.vel.y.abs() <= SERVE_SPREAD * BALL_SPEED);
    }

    #[test]
    fn serve_direction_follows_sign_contract() {
        let mut state = PongState::new(800.0, 600.0, 7);
        state.serve(-1.0);
        assert_eq!(state.ball.vel.x, -BALL_SPEED);
        state.serve(1.0);
        assert_eq!(state.ball.vel.x, BALL_SPEED);
    }

    #[test]
    fn reset_zeroes_scores_and_centers_paddles() {
        let mut state = PongState::new(800.0, 600.0, 7);
        state.score = ScorePair { left: 3, right: 5 };
        state.left.y = 0.0;
        state.reset();
        assert_eq!(state.score, ScorePair::default());
        assert_eq!(state.left.y, (600.0 - PADDLE_HEIGHT) / 2.0);
        assert_eq!(state.right.y, (600.0 - PADDLE_HEIGHT) / 2.0);
    }

    #[test]
    fn resize_clamps_without_rescaling() {
        let mut state = PongState::new(800.0, 600.0, 7);
        state.left.y = 500.0;
        state.ball.pos = Vec2::new(790.0, 590.0);
        state.resize(400.0, 300.0);

        assert_eq!(state.right.x, 400.0 - PADDLE_MARGIN - PADDLE_WIDTH);
        assert!(state.left.y <= 300.0 - PADDLE_HEIGHT);
        assert!(state.ball.pos.x <= 400.0 - state.ball.radius);
        assert!(state.ball.pos.y <= 300.0 - state.ball.radius);
    }

    #[test]
    fn resize_enforces_minimum_board() {
        let mut state = PongState::new(800.0, 600.0, 7);
        state.resize(0.0, -50.0);
        assert_eq!(state.width, MIN_BOARD_WIDTH);
        assert_eq!(state.height, MIN_BOARD_HEIGHT);
    }
}
