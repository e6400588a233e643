//! Game configuration
//!
//! Every tunable lives here. Defaults reproduce the classic layout; a JSON
//! document may override any subset of fields (LocalStorage on web, a file
//! named by `BREAKOUT_CONFIG` on native).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Grid dimensions for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub rows: usize,
    pub columns: usize,
}

impl LevelConfig {
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Number of bricks that must break to clear the level
    pub fn brick_count(&self) -> usize {
        self.rows * self.columns
    }
}

/// Fill colors (CSS color strings) and HUD font
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Option<String>,
    pub brick: String,
    pub ball: String,
    pub paddle: String,
    pub text: String,
    pub font: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: None,
            brick: "#0095DD".to_string(),
            ball: "#0095DD".to_string(),
            paddle: "#0095DD".to_string(),
            text: "#fff".to_string(),
            font: "16px Arial".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("At least one level must be configured")]
    NoLevels,

    #[error("Level {level} has an empty {rows}x{columns} grid")]
    EmptyLevel {
        level: usize,
        rows: usize,
        columns: usize,
    },

    #[error("Level {level}: {columns} columns do not fit the surface width")]
    GridTooWide { level: usize, columns: usize },

    #[error("Level {level}: bricks reach y={bottom}, below the ball spawn line at y={limit}")]
    GridTooTall { level: usize, bottom: f32, limit: f32 },

    #[error("{0} must be positive")]
    NonPositive(&'static str),

    #[error("Initial lives must be at least 1")]
    NoLives,

    #[error("Paddle width {paddle} exceeds surface width {surface}")]
    PaddleTooWide { paddle: f32, surface: f32 },
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Surface ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Tick period of the loop driver
    pub tick_interval_ms: u32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_bottom_gap: f32,
    pub paddle_step: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_start_offset: f32,
    pub ball_start_speed: f32,
    pub ball_respawn_speed: f32,

    // === Bricks ===
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,

    // === Session ===
    pub initial_lives: u8,
    /// Level sequence, played in order
    pub levels: Vec<LevelConfig>,

    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            tick_interval_ms: TICK_INTERVAL_MS,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_gap: PADDLE_BOTTOM_GAP,
            paddle_step: PADDLE_STEP,

            ball_radius: BALL_RADIUS,
            ball_start_offset: BALL_START_OFFSET,
            ball_start_speed: BALL_START_SPEED,
            ball_respawn_speed: BALL_RESPAWN_SPEED,

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,

            initial_lives: INITIAL_LIVES,
            levels: vec![LevelConfig::new(5, 9), LevelConfig::new(7, 11)],

            palette: Palette::default(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of levels in the sequence
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Level configuration for a 1-based level index
    pub fn level(&self, level: u32) -> Option<&LevelConfig> {
        let index = (level as usize).checked_sub(1)?;
        self.levels.get(index)
    }

    /// Top edge of the paddle (constant for the session)
    pub fn paddle_y(&self) -> f32 {
        self.canvas_height - self.paddle_height - self.paddle_bottom_gap
    }

    /// Rightmost legal paddle x
    pub fn paddle_max_x(&self) -> f32 {
        self.canvas_width - self.paddle_width
    }

    /// Paddle x when centered on the surface
    pub fn paddle_start_x(&self) -> f32 {
        (self.canvas_width - self.paddle_width) / 2.0
    }

    /// Ball spawn point (horizontal center, just above the paddle)
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(
            self.canvas_width / 2.0,
            self.canvas_height - self.ball_start_offset,
        )
    }

    /// Brick width for a level
    ///
    /// Wide grids are narrowed so the last column ends at the right edge of
    /// the surface instead of running off it.
    pub fn brick_width_for(&self, level: &LevelConfig) -> f32 {
        let columns = level.columns.max(1) as f32;
        let gaps = (columns - 1.0) * self.brick_padding;
        let fit = (self.canvas_width - self.brick_offset_left - gaps) / columns;
        self.brick_width.min(fit)
    }

    /// Check the configuration for values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_step", self.paddle_step),
            ("ball_radius", self.ball_radius),
            ("ball_start_speed", self.ball_start_speed),
            ("ball_respawn_speed", self.ball_respawn_speed),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive(name));
            }
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::NonPositive("tick_interval_ms"));
        }
        if self.initial_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.paddle_width > self.canvas_width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle_width,
                surface: self.canvas_width,
            });
        }
        if self.levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }

        let limit = self.ball_start().y - self.ball_radius;
        for (i, level) in self.levels.iter().enumerate() {
            let number = i + 1;
            if level.rows == 0 || level.columns == 0 {
                return Err(ConfigError::EmptyLevel {
                    level: number,
                    rows: level.rows,
                    columns: level.columns,
                });
            }
            if self.brick_width_for(level) <= 0.0 {
                return Err(ConfigError::GridTooWide {
                    level: number,
                    columns: level.columns,
                });
            }
            let bottom = self.brick_offset_top
                + level.rows as f32 * (self.brick_height + self.brick_padding)
                - self.brick_padding;
            if bottom >= limit {
                return Err(ConfigError::GridTooTall {
                    level: number,
                    bottom,
                    limit,
                });
            }
        }

        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "breakout_config";

    /// Environment variable naming a JSON config file (native only)
    pub const ENV_VAR: &'static str = "BREAKOUT_CONFIG";

    /// Load configuration from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Load configuration from the file named by `BREAKOUT_CONFIG` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default config");
            return Self::default();
        };

        match Self::from_path(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                log::warn!("Ignoring config: {}", e);
                Self::default()
            }
        }
    }

    /// Read, parse and validate a JSON config file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &str) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.level_count(), 2);
        assert_eq!(config.level(1), Some(&LevelConfig::new(5, 9)));
        assert_eq!(config.level(2), Some(&LevelConfig::new(7, 11)));
        assert_eq!(config.level(0), None);
        assert_eq!(config.level(3), None);
    }

    #[test]
    fn test_derived_positions() {
        let config = Config::default();
        assert_eq!(config.paddle_y(), 580.0);
        assert_eq!(config.paddle_start_x(), 350.0);
        assert_eq!(config.paddle_max_x(), 700.0);
        assert_eq!(config.ball_start(), Vec2::new(400.0, 570.0));
    }

    #[test]
    fn test_brick_width_narrows_wide_grids() {
        let config = Config::default();

        // 9 columns fit at the configured width
        assert_eq!(config.brick_width_for(&config.levels[0]), 75.0);

        // 11 columns are narrowed so the last brick ends at the right edge
        let level = config.levels[1];
        let width = config.brick_width_for(&level);
        assert!(width < 75.0);
        let right = config.brick_offset_left
            + level.columns as f32 * width
            + (level.columns - 1) as f32 * config.brick_padding;
        assert!((right - config.canvas_width).abs() < 0.01);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "initial_lives": 5, "levels": [{ "rows": 2, "columns": 3 }] }"#)
            .expect("valid config");
        assert_eq!(config.initial_lives, 5);
        assert_eq!(config.levels, vec![LevelConfig::new(2, 3)]);
        assert_eq!(config.canvas_width, CANVAS_WIDTH);
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn test_rejects_bad_configs() {
        let err = Config::from_json(r#"{ "levels": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoLevels));

        let err = Config::from_json(r#"{ "levels": [{ "rows": 0, "columns": 4 }] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyLevel { level: 1, .. }));

        let err = Config::from_json(r#"{ "initial_lives": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoLives));

        let err = Config::from_json(r#"{ "paddle_width": 900.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::PaddleTooWide { .. }));

        let err = Config::from_json(r#"{ "ball_start_speed": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositive("ball_start_speed")));

        let err = Config::from_json(r#"{ "levels": [{ "rows": 30, "columns": 4 }] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::GridTooTall { level: 1, .. }));

        let err = Config::from_json(r#"{ "levels": [{ "rows": 1, "columns": 200 }] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::GridTooWide { level: 1, .. }));

        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
