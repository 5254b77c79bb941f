//! Pocket Arcade - paddle-ball and grid-snake simulations
//!
//! Core modules:
//! - `pong`: Continuous-time paddle/ball physics and scoring
//! - `snake`: Fixed-tick grid simulation (movement, growth, collisions)
//! - `scheduler`: Per-engine frame scheduling and time models
//! - `render`: Render sink contract (primitive draw commands)
//! - `tasks`: Task list collaborator behind a flat key-value storage contract
//!
//! The simulation modules are pure and deterministic: seeded RNG only, no
//! rendering or platform dependencies. The host drives everything through
//! one `FrameScheduler` per engine.

pub mod pong;
pub mod render;
pub mod scheduler;
pub mod snake;
pub mod tasks;

pub use pong::PongGame;
pub use scheduler::{Engine, FrameScheduler};
pub use snake::SnakeGame;

/// Game configuration constants
pub mod consts {
    /// Smallest board the engines will accept on resize
    pub const MIN_BOARD_WIDTH: f32 = 160.0;
    pub const MIN_BOARD_HEIGHT: f32 = 120.0;

    /// Longest frame delta fed to a simulation step (stall protection)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Paddle defaults - fixed size, vertical travel only
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Horizontal inset of each paddle from its board edge
    pub const PADDLE_MARGIN: f32 = 24.0;
    /// Paddle travel speed (pixels/s)
    pub const PADDLE_SPEED: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Horizontal serve speed (pixels/s); the sign encodes direction
    pub const BALL_SPEED: f32 = 280.0;
    /// Vertical serve velocity is drawn from ±this fraction of `BALL_SPEED`
    pub const SERVE_SPREAD: f32 = 0.6;
    /// Vertical deflection per unit of paddle hit offset
    pub const SPIN_FACTOR: f32 = 1.2;

    /// Snake grid cell size in pixels (grid dims derive from the viewport)
    pub const CELL_SIZE: f32 = 20.0;
    /// Smallest grid the snake engine will accept
    pub const MIN_GRID_COLS: i32 = 8;
    pub const MIN_GRID_ROWS: i32 = 6;
    /// Fixed snake tick interval in seconds
    pub const SNAKE_TICK_INTERVAL: f32 = 0.12;
    /// Starting body length
    pub const SNAKE_START_LEN: usize = 3;
    /// Score awarded per food cell
    pub const FOOD_SCORE: u32 = 10;
    /// Random draws before food placement falls back to a free-cell scan
    pub const FOOD_SAMPLE_ATTEMPTS: u32 = 32;
}
