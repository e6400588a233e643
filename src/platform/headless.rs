//! Headless runner
//!
//! Plays sessions without a display: an autopilot steers the paddle with the
//! pointer, notices are acknowledged immediately, and each session ends in a
//! report. Runs are reproducible from the seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{Game, Notice};
use crate::renderer::RecordingSurface;

/// Chases the ball, aiming off-center by a random amount each descent
pub struct Autopilot {
    rng: Pcg32,
    /// Largest aim offset from the ball, in pixels
    spread: f32,
    offset: f32,
    descending: bool,
}

impl Autopilot {
    pub fn new(seed: u64, spread: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            spread: spread.abs(),
            offset: 0.0,
            descending: false,
        }
    }

    /// Move the pointer toward the ball for the coming tick
    pub fn steer(&mut self, game: &mut Game) {
        let ball = &game.state().ball;
        let descending = ball.vel.y > 0.0;
        if descending && !self.descending {
            self.offset = self.rng.random_range(-self.spread..=self.spread);
        }
        self.descending = descending;

        let target = ball.pos.x + self.offset;
        game.pointer_move(target);
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    GameOver,
    /// Tick budget ran out first
    TimedOut,
}

/// Summary of one session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub outcome: Outcome,
    pub ticks: u64,
    pub level: u32,
    pub lives: u8,
    /// Bricks broken on the final level
    pub score: u32,
    pub levels_cleared: u32,
}

/// Play until a terminal notice or `max_ticks` frames
///
/// A terminal notice is acknowledged before returning, so `game` is ready
/// for the next session.
pub fn run_session(
    game: &mut Game,
    autopilot: &mut Autopilot,
    surface: &mut RecordingSurface,
    max_ticks: u64,
) -> SessionReport {
    let mut levels_cleared = 0;

    for _ in 0..max_ticks {
        autopilot.steer(game);
        let Some(notice) = game.frame(surface) else {
            continue;
        };

        log::info!("{}", notice);
        let outcome = match notice {
            Notice::LevelStart(_) => {
                levels_cleared += 1;
                game.acknowledge();
                continue;
            }
            Notice::GameOver => Outcome::GameOver,
            Notice::Won => {
                levels_cleared += 1;
                Outcome::Won
            }
        };

        let report = build_report(game, outcome, levels_cleared);
        game.acknowledge();
        return report;
    }

    build_report(game, Outcome::TimedOut, levels_cleared)
}

fn build_report(game: &Game, outcome: Outcome, levels_cleared: u32) -> SessionReport {
    let state = game.state();
    match serde_json::to_string(state) {
        Ok(json) => log::debug!("Final state: {}", json),
        Err(e) => log::warn!("Could not serialize final state: {}", e),
    }
    SessionReport {
        outcome,
        ticks: state.time_ticks,
        level: state.level,
        lives: state.lives,
        score: state.score,
        levels_cleared,
    }
}
