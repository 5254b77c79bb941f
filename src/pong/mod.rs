//! Paddle-ball engine
//!
//! Continuous-time physics: two paddles, one ball, two scores. State and
//! the per-frame transition function are pure simulation; [`PongGame`] is
//! the facade the navigation shell talks to (activation, key events,
//! render pass).

pub mod state;
pub mod update;

pub use state::{Ball, Paddle, PongState, ScorePair};
pub use update::{PongInput, update};

use glam::Vec2;

use crate::consts::*;
use crate::render::{Color, GradientStop, Paint, RenderSink, TextAnchor};
use crate::scheduler::Engine;

/// Key vocabulary for the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PongControl {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

/// The paddle-ball engine as seen by the shell and the scheduler
pub struct PongGame {
    pub state: PongState,
    input: PongInput,
    active: bool,
}

impl PongGame {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            state: PongState::new(width, height, seed),
            input: PongInput::default(),
            active: false,
        }
    }

    /// Toggle by the navigation shell. Deactivation releases held keys;
    /// simulation state is untouched either way.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.input.clear();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Becoming visible again: the hidden view may have had collapsed
    /// dimensions, so force a layout recompute
    pub fn on_show(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }

    /// Control surface exposed to the shell
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Record a key transition. Ignored while inactive.
    pub fn control(&mut self, control: PongControl, pressed: bool) {
        if !self.active {
            return;
        }
        match control {
            PongControl::LeftUp => self.input.left_up = pressed,
            PongControl::LeftDown => self.input.left_down = pressed,
            PongControl::RightUp => self.input.right_up = pressed,
            PongControl::RightDown => self.input.right_down = pressed,
        }
    }
}

impl Engine for PongGame {
    fn step(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        update(&mut self.state, &self.input, dt);
    }

    fn render(&self, sink: &mut dyn RenderSink) {
        draw(&self.state, sink);
    }
}

const COURT: Color = Color::rgb(0.07, 0.09, 0.14);
const CHALK: Color = Color::rgba(1.0, 1.0, 1.0, 0.35);
const PADDLE_PAINT: Paint = Paint::Solid(Color::rgb(0.92, 0.94, 0.97));
const SCORE_PAINT: Paint = Paint::Solid(Color::rgba(1.0, 1.0, 1.0, 0.8));

/// One full render pass of the observable state
fn draw(state: &PongState, sink: &mut dyn RenderSink) {
    sink.clear(COURT);

    // Dashed center line
    sink.line(
        Vec2::new(state.width / 2.0, 0.0),
        Vec2::new(state.width / 2.0, state.height),
        2.0,
        Some([10.0, 14.0]),
        &Paint::Solid(CHALK),
    );

    let paddle_size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
    sink.fill_rect(Vec2::new(state.left.x, state.left.y), paddle_size, 3.0, &PADDLE_PAINT);
    sink.fill_rect(Vec2::new(state.right.x, state.right.y), paddle_size, 3.0, &PADDLE_PAINT);

    // Ball with a soft radial highlight
    let ball_paint = Paint::RadialGradient {
        center: state.ball.pos,
        radius: state.ball.radius,
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: Color::WHITE,
            },
            GradientStop {
                offset: 1.0,
                color: Color::rgb(0.75, 0.8, 0.9),
            },
        ],
    };
    sink.fill_circle(state.ball.pos, state.ball.radius, &ball_paint);

    sink.text(
        &state.score.left.to_string(),
        Vec2::new(state.width * 0.25, 48.0),
        36.0,
        TextAnchor::Center,
        &SCORE_PAINT,
    );
    sink.text(
        &state.score.right.to_string(),
        Vec2::new(state.width * 0.75, 48.0),
        36.0,
        TextAnchor::Center,
        &SCORE_PAINT,
    );
}
