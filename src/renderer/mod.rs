//! Rendering module
//!
//! The game draws through the four primitives of [`Surface`]; hosts provide
//! the implementation (canvas 2D in the browser, a command recorder for
//! headless runs and tests). Drawing reads the state and never mutates it.

pub mod recording;

pub use recording::{DrawCommand, RecordingSurface};

use crate::config::Config;
use crate::sim::GameState;

/// Score text anchor (left, baseline)
pub const SCORE_POS: (f32, f32) = (8.0, 20.0);
/// Lives text sits this far left of the right edge
pub const LIVES_INSET: f32 = 85.0;
/// Baseline of the lives text
pub const LIVES_Y: f32 = 20.0;

/// A 2D draw target with solid fills only
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str);
}

/// Draw one frame of the current state
pub fn render<S: Surface + ?Sized>(state: &GameState, config: &Config, surface: &mut S) {
    let palette = &config.palette;

    surface.clear(config.canvas_width, config.canvas_height);
    if let Some(background) = &palette.background {
        surface.fill_rect(0.0, 0.0, config.canvas_width, config.canvas_height, background);
    }

    for (_, _, brick) in state.bricks.iter().filter(|(_, _, b)| b.alive) {
        let rect = state.bricks.rect_of(brick);
        surface.fill_rect(rect.x, rect.y, rect.width, rect.height, &palette.brick);
    }

    let ball = &state.ball;
    surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius, &palette.ball);

    let paddle = state.paddle.as_rect();
    surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, &palette.paddle);

    surface.fill_text(
        &format!("Score: {}", state.score),
        SCORE_POS.0,
        SCORE_POS.1,
        &palette.text,
    );
    surface.fill_text(
        &format!("Lives: {}", state.lives),
        config.canvas_width - LIVES_INSET,
        LIVES_Y,
        &palette.text,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_frame() {
        let config = Config::default();
        let state = GameState::new(&config);
        let mut surface = RecordingSurface::new();

        render(&state, &config, &mut surface);
        let commands = surface.commands();

        assert_eq!(
            commands[0],
            DrawCommand::Clear {
                width: 800.0,
                height: 600.0
            }
        );
        assert_eq!(surface.rect_count(), 45 + 1);
        assert_eq!(
            commands.iter().filter(|c| matches!(c, DrawCommand::Circle { .. })).count(),
            1
        );
        assert_eq!(surface.texts(), vec!["Score: 0", "Lives: 3"]);
    }

    #[test]
    fn test_dead_bricks_not_drawn() {
        let config = Config::default();
        let mut state = GameState::new(&config);
        state.bricks.get_mut(0, 0).expect("brick").alive = false;
        state.bricks.get_mut(4, 2).expect("brick").alive = false;
        state.score = 2;

        let mut surface = RecordingSurface::new();
        render(&state, &config, &mut surface);
        assert_eq!(surface.rect_count(), 43 + 1);
        assert!(!surface.commands().iter().any(|c| matches!(
            c,
            DrawCommand::Rect { x, y, .. } if *x == 30.0 && *y == 30.0
        )));
        assert_eq!(surface.texts()[0], "Score: 2");
    }

    #[test]
    fn test_hud_positions() {
        let config = Config::default();
        let state = GameState::new(&config);
        let mut surface = RecordingSurface::new();
        render(&state, &config, &mut surface);

        let lives = surface
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Text { text, x, y, .. } if text.starts_with("Lives") => Some((*x, *y)),
                _ => None,
            })
            .expect("lives text");
        assert_eq!(lives, (715.0, 20.0));
    }

    #[test]
    fn test_background_fill() {
        let mut config = Config::default();
        config.palette.background = Some("#000".to_string());
        let state = GameState::new(&config);
        let mut surface = RecordingSurface::new();
        render(&state, &config, &mut surface);

        assert_eq!(
            surface.commands()[1],
            DrawCommand::Rect {
                x: 0.0,
                y: 0.0,
                width: 800.0,
                height: 600.0,
                color: "#000".to_string()
            }
        );
    }
}
