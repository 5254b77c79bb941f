//! Grid-snake engine
//!
//! Discrete-time simulation on a cell grid: one growing body, one food
//! cell, one score. State and the tick transition function are pure
//! simulation; [`SnakeGame`] is the facade the navigation shell talks to
//! (activation, direction input, render pass).

pub mod state;
pub mod tick;

pub use state::{Cell, Direction, SnakePhase, SnakeState};
pub use tick::tick;

use glam::Vec2;

use crate::consts::CELL_SIZE;
use crate::render::{Color, Paint, RenderSink, TextAnchor};
use crate::scheduler::Engine;

/// The grid-snake engine as seen by the shell and the scheduler
pub struct SnakeGame {
    pub state: SnakeState,
    active: bool,
}

impl SnakeGame {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            state: SnakeState::new(width, height, seed),
            active: false,
        }
    }

    /// Toggle by the navigation shell; simulation state is untouched
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
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
    pub fn start(&mut self) {
        self.state.start();
    }

    pub fn reset(&mut self, keep_running: bool) {
        self.state.reset(keep_running);
    }

    /// Record a direction key press. Ignored while inactive.
    pub fn queue_direction(&mut self, requested: Direction) {
        if !self.active {
            return;
        }
        self.state.queue_direction(requested);
    }
}

impl Engine for SnakeGame {
    /// `dt` is always the fixed tick interval here; the scheduler owns the
    /// accumulation, this engine only ever advances whole ticks
    fn step(&mut self, _dt: f32) {
        if !self.active {
            return;
        }
        tick(&mut self.state);
    }

    fn render(&self, sink: &mut dyn RenderSink) {
        draw(&self.state, sink);
    }
}

const PIT: Color = Color::rgb(0.05, 0.1, 0.07);
const BODY_PAINT: Paint = Paint::Solid(Color::rgb(0.35, 0.8, 0.45));
const HEAD_PAINT: Paint = Paint::Solid(Color::rgb(0.55, 0.95, 0.6));
const FOOD_PAINT: Paint = Paint::Solid(Color::rgb(0.95, 0.45, 0.35));
const OVERLAY_PAINT: Paint = Paint::Solid(Color::rgba(0.0, 0.0, 0.0, 0.55));
const TEXT_PAINT: Paint = Paint::Solid(Color::rgba(1.0, 1.0, 1.0, 0.9));

fn cell_origin(cell: Cell) -> Vec2 {
    Vec2::new(cell.x as f32 * CELL_SIZE, cell.y as f32 * CELL_SIZE)
}

/// One full render pass of the observable state
fn draw(state: &SnakeState, sink: &mut dyn RenderSink) {
    sink.clear(PIT);

    let board = Vec2::new(state.cols as f32 * CELL_SIZE, state.rows as f32 * CELL_SIZE);
    // Cells get a 1px inset so the grid reads as segments
    let cell = Vec2::splat(CELL_SIZE - 2.0);

    for (i, &c) in state.body.iter().enumerate() {
        let paint = if i == 0 { &HEAD_PAINT } else { &BODY_PAINT };
        sink.fill_rect(cell_origin(c) + Vec2::splat(1.0), cell, 4.0, paint);
    }

    if let Some(food) = state.food {
        sink.fill_circle(
            cell_origin(food) + Vec2::splat(CELL_SIZE / 2.0),
            CELL_SIZE / 2.0 - 2.0,
            &FOOD_PAINT,
        );
    }

    sink.text(
        &format!("Score: {}", state.score),
        Vec2::new(10.0, 24.0),
        18.0,
        TextAnchor::Start,
        &TEXT_PAINT,
    );

    // Idle and game-over frames keep rendering; the overlay is the cue
    let caption = match state.phase {
        SnakePhase::Running => return,
        SnakePhase::Idle => "Press start",
        SnakePhase::GameOver => "Game over",
    };
    sink.fill_rect(Vec2::ZERO, board, 0.0, &OVERLAY_PAINT);
    sink.text(
        caption,
        board / 2.0,
        28.0,
        TextAnchor::Center,
        &TEXT_PAINT,
    );
}
