//! Collision detection and response for axis-aligned geometry
//!
//! Everything in the arena is a rectangle except the ball, and the ball is
//! treated as a point for brick hits and as a circle for walls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in surface coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict interior test; points on an edge are outside
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.bottom()
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Reflect only when moving into the surface
///
/// A ball that is still past a wall on the tick after bouncing is already
/// heading away from it and must not be flipped back.
#[inline]
pub fn bounce(velocity: Vec2, normal: Vec2) -> Vec2 {
    if velocity.dot(normal) < 0.0 {
        reflect_velocity(velocity, normal)
    } else {
        velocity
    }
}

/// Inward normal of the side wall the ball overlaps, if any
pub fn side_wall_normal(pos: Vec2, radius: f32, surface_width: f32) -> Option<Vec2> {
    if pos.x + radius > surface_width {
        Some(Vec2::NEG_X)
    } else if pos.x - radius < 0.0 {
        Some(Vec2::X)
    } else {
        None
    }
}

/// Check if the paddle is under the ball as it reaches the bottom
///
/// The ball center must be strictly inside the paddle's horizontal span and
/// its bottom edge inside the paddle's band or below it.
pub fn paddle_catches(pos: Vec2, radius: f32, paddle: &Rect) -> bool {
    pos.x > paddle.x && pos.x < paddle.right() && pos.y + radius > paddle.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_contains_point_is_strict() {
        let rect = Rect::new(30.0, 30.0, 75.0, 20.0);
        assert!(rect.contains_point(Vec2::new(60.0, 40.0)));
        assert!(!rect.contains_point(Vec2::new(30.0, 40.0)));
        assert!(!rect.contains_point(Vec2::new(105.0, 40.0)));
        assert!(!rect.contains_point(Vec2::new(60.0, 50.0)));
    }

    #[test]
    fn test_reflect_velocity() {
        // Ball moving right, hits vertical wall (normal pointing left)
        let reflected = reflect_velocity(Vec2::new(3.0, -3.0), Vec2::NEG_X);
        assert_eq!(reflected, Vec2::new(-3.0, -3.0));
    }

    #[test]
    fn test_bounce_ignores_receding_ball() {
        assert_eq!(bounce(Vec2::new(-3.0, 2.0), Vec2::NEG_X), Vec2::new(-3.0, 2.0));
        assert_eq!(bounce(Vec2::new(3.0, 2.0), Vec2::NEG_X), Vec2::new(-3.0, 2.0));
    }

    #[test]
    fn test_side_walls() {
        assert_eq!(side_wall_normal(Vec2::new(400.0, 100.0), 10.0, 800.0), None);
        assert_eq!(side_wall_normal(Vec2::new(795.0, 100.0), 10.0, 800.0), Some(Vec2::NEG_X));
        assert_eq!(side_wall_normal(Vec2::new(5.0, 100.0), 10.0, 800.0), Some(Vec2::X));
    }

    #[test]
    fn test_paddle_catches() {
        let paddle = Rect::new(350.0, 580.0, 100.0, 10.0);
        assert!(paddle_catches(Vec2::new(400.0, 593.0), 10.0, &paddle));
        assert!(!paddle_catches(Vec2::new(350.0, 593.0), 10.0, &paddle));
        assert!(!paddle_catches(Vec2::new(460.0, 593.0), 10.0, &paddle));
    }

    proptest! {
        #[test]
        fn bounce_flips_once(vx in -8.0f32..8.0, vy in -8.0f32..8.0) {
            prop_assume!(vx != 0.0);
            let once = bounce(Vec2::new(vx, vy), Vec2::NEG_X);
            let twice = bounce(once, Vec2::NEG_X);
            prop_assert!(once.x <= 0.0);
            prop_assert_eq!(once, twice);
            prop_assert_eq!(once.y, vy);
        }
    }
}
