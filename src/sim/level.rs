//! Level manager: builds the brick grid for a level
//!
//! Levels are a fixed sequence of row/column counts taken from the config.
//! Only the current level has a grid; a new one is built on every level
//! change and the old one is dropped.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::Config;

/// A single breakable brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub alive: bool,
}

/// The current level's bricks, stored column-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    pub columns: usize,
    pub rows: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    #[inline]
    fn index(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.columns && row < self.rows).then(|| column * self.rows + row)
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Brick> {
        let i = self.index(column, row)?;
        Some(&self.bricks[i])
    }

    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut Brick> {
        let i = self.index(column, row)?;
        Some(&mut self.bricks[i])
    }

    /// Total bricks in the grid (alive or not)
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    /// Bricks with their (column, row), scanning columns then rows
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Brick)> {
        let rows = self.rows;
        self.bricks
            .iter()
            .enumerate()
            .map(move |(i, b)| (i / rows, i % rows, b))
    }

    /// Mutable scan in the same order as [`BrickGrid::iter`]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut Brick)> {
        let rows = self.rows;
        self.bricks
            .iter_mut()
            .enumerate()
            .map(move |(i, b)| (i / rows, i % rows, b))
    }

    /// Screen rectangle of a brick
    pub fn rect_of(&self, brick: &Brick) -> Rect {
        Rect::new(brick.x, brick.y, self.brick_width, self.brick_height)
    }
}

/// Build a fresh, fully intact grid for a 1-based level index
///
/// # Panics
///
/// Panics if `level` is outside `1..=config.level_count()`. The state
/// machine never produces such an index, so reaching it is a bug.
pub fn init_bricks(config: &Config, level: u32) -> BrickGrid {
    let Some(layout) = config.level(level) else {
        panic!(
            "level index {} out of range 1..={}",
            level,
            config.level_count()
        );
    };

    let brick_width = config.brick_width_for(layout);
    let brick_height = config.brick_height;
    let mut bricks = Vec::with_capacity(layout.brick_count());

    for column in 0..layout.columns {
        for row in 0..layout.rows {
            bricks.push(Brick {
                x: column as f32 * (brick_width + config.brick_padding) + config.brick_offset_left,
                y: row as f32 * (brick_height + config.brick_padding) + config.brick_offset_top,
                alive: true,
            });
        }
    }

    log::debug!(
        "Level {}: {}x{} grid, brick width {:.1}",
        level,
        layout.rows,
        layout.columns,
        brick_width
    );

    BrickGrid {
        columns: layout.columns,
        rows: layout.rows,
        brick_width,
        brick_height,
        bricks,
    }
}
