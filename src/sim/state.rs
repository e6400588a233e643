//! Game state and core simulation types
//!
//! One owned `GameState` holds everything the tick mutates and the renderer
//! reads. Nothing lives in globals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::level::{BrickGrid, init_bricks};
use crate::config::Config;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Next level is loaded; waiting for the announcement to be acknowledged
    LevelCleared,
    /// All lives lost
    GameOver,
    /// Last level cleared
    Won,
}

impl GamePhase {
    /// GameOver and Won end the session; only a restart leaves them
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}

/// Things that happened during a tick, drained by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BrickBroken { column: usize, row: usize },
    PaddleHit,
    LifeLost { lives_left: u8 },
    /// `level` is the level just loaded
    LevelCleared { level: u32 },
    GameOver { level: u32, score: u32 },
    Won { score: u32 },
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the spawn point, heading up and to the right
    pub fn new(config: &Config) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: config.ball_radius,
        };
        ball.reset(config, config.ball_start_speed);
        ball
    }

    /// Put the ball back on its spawn point with the given per-axis speed
    pub fn reset(&mut self, config: &Config, speed: f32) {
        self.pos = config.ball_start();
        self.vel = Vec2::new(speed, -speed);
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed for the session)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(config: &Config) -> Self {
        Self {
            x: config.paddle_start_x(),
            y: config.paddle_y(),
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    pub fn recenter(&mut self, config: &Config) {
        self.x = config.paddle_start_x();
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current level (1-based)
    pub level: u32,
    pub lives: u8,
    /// Bricks broken on the current level
    pub score: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Current level's grid
    pub bricks: BrickGrid,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session: level 1, full lives, zero score
    pub fn new(config: &Config) -> Self {
        Self {
            level: 1,
            lives: config.initial_lives,
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            paddle: Paddle::new(config),
            ball: Ball::new(config),
            bricks: init_bricks(config, 1),
            events: Vec::new(),
        }
    }

    /// Return ball and paddle to their start positions
    pub fn reset_positions(&mut self, config: &Config, ball_speed: f32) {
        self.ball.reset(config, ball_speed);
        self.paddle.recenter(config);
    }

    /// Leave the level announcement and continue playing
    pub fn resume(&mut self) {
        if self.phase == GamePhase::LevelCleared {
            self.phase = GamePhase::Playing;
        }
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
