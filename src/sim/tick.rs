//! Fixed tick simulation step
//!
//! Advances the game by one tick in a fixed order: paddle, ball motion,
//! walls, bottom edge, bricks, level-clear check.

use super::collision::{Rect, bounce, paddle_catches, side_wall_normal};
use super::level::init_bricks;
use super::state::{GameEvent, GamePhase, GameState};
use crate::config::Config;
use glam::Vec2;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Pointer position reported since the previous tick
    pub pointer_x: Option<f32>,
}

/// Advance the game state by one tick
///
/// Does nothing outside `GamePhase::Playing`: a level announcement blocks
/// until acknowledged and terminal phases wait for a restart.
pub fn tick(state: &mut GameState, input: &TickInput, config: &Config) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    move_paddle(state, input, config);

    state.ball.pos += state.ball.vel;

    // Side and top walls
    let ball = &mut state.ball;
    if let Some(normal) = side_wall_normal(ball.pos, ball.radius, config.canvas_width) {
        ball.vel = bounce(ball.vel, normal);
    }

    if ball.top() < 0.0 {
        ball.vel = bounce(ball.vel, Vec2::Y);
    } else if ball.bottom() > config.canvas_height {
        if paddle_catches(ball.pos, ball.radius, &state.paddle.as_rect()) {
            ball.vel = bounce(ball.vel, Vec2::NEG_Y);
            state.events.push(GameEvent::PaddleHit);
        } else {
            lose_life(state, config);
            if state.phase.is_terminal() {
                return;
            }
        }
    }

    break_bricks(state);
    check_level_clear(state, config);
}

fn move_paddle(state: &mut GameState, input: &TickInput, config: &Config) {
    let paddle = &mut state.paddle;
    let max_x = config.paddle_max_x();

    // Pointer moves arrived before this tick, so they land first
    if let Some(pointer_x) = input.pointer_x {
        paddle.x = pointer_x - paddle.width / 2.0;
    }

    if input.right && paddle.x < max_x {
        paddle.x += config.paddle_step;
    } else if input.left && paddle.x > 0.0 {
        paddle.x -= config.paddle_step;
    }

    paddle.x = paddle.x.clamp(0.0, max_x);
}

fn lose_life(state: &mut GameState, config: &Config) {
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::LifeLost {
        lives_left: state.lives,
    });

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver {
            level: state.level,
            score: state.score,
        });
        log::info!("Game over on level {} (score {})", state.level, state.score);
        return;
    }

    log::debug!(
        "Life lost, {} left; respawning at speed {}",
        state.lives,
        config.ball_respawn_speed
    );
    state.reset_positions(config, config.ball_respawn_speed);
}

/// Point-in-rect test of the ball center against every live brick
///
/// No early exit: a center inside several bricks breaks all of them, and
/// each one flips the vertical velocity.
fn break_bricks(state: &mut GameState) {
    let GameState {
        ball,
        bricks,
        score,
        events,
        ..
    } = state;

    let (width, height) = (bricks.brick_width, bricks.brick_height);
    for (column, row, brick) in bricks.iter_mut() {
        if !brick.alive {
            continue;
        }
        if Rect::new(brick.x, brick.y, width, height).contains_point(ball.pos) {
            ball.vel.y = -ball.vel.y;
            brick.alive = false;
            *score += 1;
            events.push(GameEvent::BrickBroken { column, row });
            log::trace!("Brick ({}, {}) broken, score {}", column, row, score);
        }
    }
}

fn check_level_clear(state: &mut GameState, config: &Config) {
    if (state.score as usize) < state.bricks.len() {
        return;
    }

    if state.level as usize >= config.level_count() {
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::Won { score: state.score });
        log::info!("All {} levels cleared", config.level_count());
        return;
    }

    state.level += 1;
    state.bricks = init_bricks(config, state.level);
    state.reset_positions(config, config.ball_start_speed);
    state.score = 0;
    state.phase = GamePhase::LevelCleared;
    state.events.push(GameEvent::LevelCleared { level: state.level });
    log::info!("Level cleared, advancing to level {}", state.level);
}
