//! Platform layer
//!
//! - `Game`: the loop driver every host calls once per timer tick
//! - `headless`: native runner with an autopilot
//! - `web`: browser host (canvas 2D, DOM events, `setInterval`)
//!
//! Tick order is simulate, then render: the frame drawn for tick N shows the
//! state after step N.

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::fmt;

use crate::config::Config;
use crate::input::InputState;
use crate::renderer::{Surface, render};
use crate::sim::{GameEvent, GameState, tick};

/// A message the host must show and acknowledge before play continues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The given level has been loaded
    LevelStart(u32),
    GameOver,
    Won,
}

impl Notice {
    /// Terminal notices end the session; acknowledging one restarts
    pub fn is_terminal(&self) -> bool {
        matches!(self, Notice::GameOver | Notice::Won)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LevelStart(level) => write!(f, "Level {}", level),
            Notice::GameOver => write!(f, "GAME OVER"),
            Notice::Won => write!(f, "YOU WIN, CONGRATS!"),
        }
    }
}

/// Game instance holding config, state and input
pub struct Game {
    config: Config,
    state: GameState,
    input: InputState,
    /// Raised notice waiting for acknowledgement; blocks the simulation
    pending: Option<Notice>,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let state = GameState::new(&config);
        log::info!(
            "New game: {} levels, {} lives",
            config.level_count(),
            config.initial_lives
        );
        Self {
            config,
            state,
            input: InputState::new(),
            pending: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn pending_notice(&self) -> Option<Notice> {
        self.pending
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    /// Pointer moved to `relative_x` (surface coordinates)
    pub fn pointer_move(&mut self, relative_x: f32) {
        self.input.pointer_move(relative_x, self.config.canvas_width);
    }

    /// Run one tick: a simulation step (unless a notice is pending), then a
    /// render. Returns a notice raised by this step.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<Notice> {
        let mut raised = None;

        if self.pending.is_none() {
            let input = self.input.next_tick();
            tick(&mut self.state, &input, &self.config);

            for event in self.state.drain_events() {
                if let Some(notice) = self.handle_event(event) {
                    raised = Some(notice);
                }
            }
            self.pending = raised;
        }

        render(&self.state, &self.config, surface);
        raised
    }

    fn handle_event(&self, event: GameEvent) -> Option<Notice> {
        match event {
            GameEvent::LevelCleared { level } => Some(Notice::LevelStart(level)),
            GameEvent::GameOver { level, score } => {
                log::info!("Session over at level {} with {} bricks", level, score);
                Some(Notice::GameOver)
            }
            GameEvent::Won { .. } => Some(Notice::Won),
            GameEvent::LifeLost { lives_left } => {
                log::debug!("Ball lost ({} lives left)", lives_left);
                None
            }
            GameEvent::BrickBroken { .. } | GameEvent::PaddleHit => None,
        }
    }

    /// The host has shown the pending notice
    ///
    /// A level announcement resumes play; a terminal notice restarts.
    pub fn acknowledge(&mut self) {
        match self.pending.take() {
            Some(Notice::LevelStart(level)) => {
                log::info!("Starting level {}", level);
                self.state.resume();
            }
            Some(Notice::GameOver | Notice::Won) => self.restart(),
            None => {}
        }
    }

    /// Discard all state and start over from level 1
    pub fn restart(&mut self) {
        log::info!("Restarting");
        self.state = GameState::new(&self.config);
        self.input.clear();
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use crate::sim::GamePhase;
    use glam::Vec2;

    #[test]
    fn test_notice_messages() {
        assert_eq!(Notice::LevelStart(2).to_string(), "Level 2");
        assert_eq!(Notice::GameOver.to_string(), "GAME OVER");
        assert_eq!(Notice::Won.to_string(), "YOU WIN, CONGRATS!");
        assert!(Notice::Won.is_terminal());
        assert!(!Notice::LevelStart(2).is_terminal());
    }

    #[test]
    fn test_frame_simulates_then_renders() {
        let mut game = Game::new(Config::default());
        let mut surface = RecordingSurface::new();
        assert_eq!(game.config().level_count(), 2);

        assert_eq!(game.frame(&mut surface), None);
        let circle = surface
            .commands()
            .iter()
            .find_map(|c| match c {
                crate::renderer::DrawCommand::Circle { cx, cy, .. } => Some((*cx, *cy)),
                _ => None,
            })
            .expect("ball drawn");
        // The frame shows the ball after this tick's step
        assert_eq!(circle, (403.0, 567.0));
    }

    #[test]
    fn test_pointer_routed_through_input() {
        let mut game = Game::new(Config::default());
        let mut surface = RecordingSurface::new();

        game.pointer_move(-5.0);
        game.frame(&mut surface);
        assert_eq!(game.state().paddle.x, 350.0);

        game.pointer_move(100.0);
        game.frame(&mut surface);
        assert_eq!(game.state().paddle.x, 50.0);

        game.key_down("ArrowRight");
        game.frame(&mut surface);
        assert_eq!(game.state().paddle.x, 57.0);
        game.key_up("ArrowRight");
        game.frame(&mut surface);
        assert_eq!(game.state().paddle.x, 57.0);
    }

    #[test]
    fn test_game_over_blocks_until_acknowledged() {
        let mut game = Game::new(Config::default());
        let mut surface = RecordingSurface::new();

        game.state.lives = 1;
        game.state.paddle.x = 0.0;
        game.state.ball.pos = Vec2::new(600.0, 588.0);
        game.state.ball.vel = Vec2::new(3.0, 3.0);

        assert_eq!(game.frame(&mut surface), Some(Notice::GameOver));
        assert_eq!(game.pending_notice(), Some(Notice::GameOver));
        assert_eq!(surface.texts(), vec!["Score: 0", "Lives: 0"]);

        // Blocked: no step, no new notice, still rendering
        let ticks = game.state().time_ticks;
        assert_eq!(game.frame(&mut surface), None);
        assert_eq!(game.state().time_ticks, ticks);
        assert_eq!(surface.frames(), 2);

        game.acknowledge();
        assert_eq!(game.pending_notice(), None);
        assert_eq!(game.state().lives, 3);
        assert_eq!(game.state().level, 1);
        assert_eq!(game.state().phase, GamePhase::Playing);
        assert_eq!(game.state().time_ticks, 0);
    }

    #[test]
    fn test_level_notice_resumes() {
        let mut game = Game::new(Config::default());
        let mut surface = RecordingSurface::new();

        game.state.score = 44;
        for (column, row, brick) in game.state.bricks.iter_mut() {
            brick.alive = (column, row) == (2, 3);
        }
        game.state.ball.pos = Vec2::new(230.0, 133.0);

        assert_eq!(game.frame(&mut surface), Some(Notice::LevelStart(2)));
        assert_eq!(game.state().phase, GamePhase::LevelCleared);

        game.acknowledge();
        assert_eq!(game.state().phase, GamePhase::Playing);
        assert_eq!(game.state().level, 2);
        game.frame(&mut surface);
        assert_eq!(game.state().time_ticks, 2);
    }
}
