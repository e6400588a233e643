//! Input state shared between host event handlers and the tick
//!
//! Handlers mutate it between ticks; the simulation reads it once per tick.

use crate::sim::TickInput;

/// Movement keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a host key name (`KeyboardEvent.key`) to a movement key
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Current key and pointer state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    /// Pointer x relative to the surface, set by the last in-bounds move
    /// since the previous tick
    pub pointer_x: Option<f32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, name: &str) {
        self.set_key(name, true);
    }

    pub fn key_up(&mut self, name: &str) {
        self.set_key(name, false);
    }

    fn set_key(&mut self, name: &str, pressed: bool) {
        match Key::from_name(name) {
            Some(Key::Left) => self.left = pressed,
            Some(Key::Right) => self.right = pressed,
            None => {}
        }
    }

    /// Record a pointer move; positions outside `[0, surface_width)` are ignored
    pub fn pointer_move(&mut self, relative_x: f32, surface_width: f32) {
        if (0.0..surface_width).contains(&relative_x) {
            self.pointer_x = Some(relative_x);
        }
    }

    /// Consume the pending pointer position
    pub fn take_pointer(&mut self) -> Option<f32> {
        self.pointer_x.take()
    }

    /// Snapshot for the next tick; held keys persist, the pointer is consumed
    pub fn next_tick(&mut self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            pointer_x: self.take_pointer(),
        }
    }

    /// Drop all held keys and pending pointer moves
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("Left"), Some(Key::Left));
        assert_eq!(Key::from_name("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_name("Right"), Some(Key::Right));
        assert_eq!(Key::from_name("a"), None);
        assert_eq!(Key::from_name("ArrowUp"), None);
    }

    #[test]
    fn test_keys_toggle_independently() {
        let mut input = InputState::new();
        input.key_down("ArrowLeft");
        input.key_down("Right");
        assert!(input.left && input.right);

        input.key_up("Left");
        assert!(!input.left);
        assert!(input.right);

        // Unknown keys leave state alone
        input.key_down(" ");
        input.key_up("ArrowRight");
        assert_eq!(input, InputState::new());
    }

    #[test]
    fn test_pointer_out_of_bounds_ignored() {
        let mut input = InputState::new();
        input.pointer_move(-5.0, 800.0);
        assert_eq!(input.pointer_x, None);
        input.pointer_move(800.0, 800.0);
        assert_eq!(input.pointer_x, None);

        input.pointer_move(0.0, 800.0);
        assert_eq!(input.pointer_x, Some(0.0));
        input.pointer_move(420.0, 800.0);
        input.pointer_move(900.0, 800.0);
        assert_eq!(input.take_pointer(), Some(420.0));
        assert_eq!(input.take_pointer(), None);
    }

    #[test]
    fn test_next_tick_consumes_pointer_only() {
        let mut input = InputState::new();
        input.key_down("ArrowRight");
        input.pointer_move(300.0, 800.0);

        let first = input.next_tick();
        assert!(first.right && !first.left);
        assert_eq!(first.pointer_x, Some(300.0));

        let second = input.next_tick();
        assert!(second.right);
        assert_eq!(second.pointer_x, None);
    }
}
