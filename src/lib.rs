//! Breakout - a single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle, ball, brick grid, lives, levels)
//! - `input`: Key/pointer state consumed once per tick
//! - `renderer`: Draw-surface abstraction and scene drawing
//! - `platform`: Loop driver plus browser and headless hosts
//! - `config`: Data-driven game tuning

pub mod config;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{Config, ConfigError, LevelConfig};
pub use input::{InputState, Key};
pub use platform::{Game, Notice};

/// Game configuration constants
pub mod consts {
    /// Fixed tick period in milliseconds
    pub const TICK_INTERVAL_MS: u32 = 10;

    /// Play surface dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Gap between the paddle's bottom edge and the bottom of the surface
    pub const PADDLE_BOTTOM_GAP: f32 = 10.0;
    /// Keyboard movement per tick
    pub const PADDLE_STEP: f32 = 7.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Distance of the ball's spawn point above the bottom edge
    pub const BALL_START_OFFSET: f32 = 30.0;
    /// Per-axis speed on a fresh level
    pub const BALL_START_SPEED: f32 = 3.0;
    /// Per-axis speed after a life is lost
    pub const BALL_RESPAWN_SPEED: f32 = 4.0;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    pub const INITIAL_LIVES: u8 = 3;
}
