//! Game settings
//!
//! A single read-only set of numbers fixed before the first tick. Loaded from
//! JSON when the host provides a file, otherwise taken from [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::{Point, Size};

/// Settings errors
#[derive(Debug, Error)]
pub enum SettingsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A size, speed or rate that must be strictly positive
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// NaN or infinite value
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// Zero rows or zero columns
    #[error("brick wall needs at least one row and one column")]
    EmptyGrid,

    /// Margins and gap leave no room for bricks
    #[error("computed block width {width} is not positive; reduce margin or gap")]
    BlockWidth { width: f32 },
}

/// Structured game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Horizontal space on each side of the wall; half of it sits above the wall
    pub margin: f32,
    /// Inset applied to the leading edges of every drawn block
    pub block_gap: f32,

    // === Brick wall ===
    pub columns: u32,
    pub rows: u32,
    pub block_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Pixels travelled per tick
    pub ball_speed: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,

    // === Timing ===
    pub tick_rate_hz: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            margin: MARGIN,
            block_gap: BLOCK_GAP,

            columns: BLOCK_COLUMNS,
            rows: BLOCK_ROWS,
            block_height: BLOCK_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,

            tick_rate_hz: TICK_RATE_HZ,
        }
    }
}

impl Settings {
    /// Width of a single brick, shared by every column
    pub fn block_width(&self) -> f32 {
        (self.arena_width - self.margin * 2.0 - self.block_gap) / self.columns as f32
    }

    /// Size of a single brick
    pub fn block_size(&self) -> Size {
        Size::new(self.block_width(), self.block_height)
    }

    /// Size of the paddle
    pub fn paddle_size(&self) -> Size {
        Size::new(self.paddle_width, self.paddle_height)
    }

    /// Arena extent as a size
    pub fn arena_size(&self) -> Size {
        Size::new(self.arena_width, self.arena_height)
    }

    /// Where a fresh ball appears (450, 350 in the default arena)
    pub fn ball_spawn(&self) -> Point {
        Point::new(self.arena_width / 2.0, self.arena_height * 7.0 / 12.0)
    }

    /// Recurring timer interval
    pub fn tick_interval_ms(&self) -> f64 {
        1000.0 / self.tick_rate_hz as f64
    }

    /// Simulated seconds per tick
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate_hz as f32
    }

    /// Ticks between the deciding tick and the end screen
    pub fn end_delay_ticks(&self) -> u32 {
        (END_DELAY_SECS * self.tick_rate_hz as f32).round() as u32
    }

    /// Check the preconditions the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("block_height", self.block_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(SettingsError::NonFinite { field });
            }
            if value <= 0.0 {
                return Err(SettingsError::NonPositive {
                    field,
                    value: value as f64,
                });
            }
        }

        for (field, value) in [("margin", self.margin), ("block_gap", self.block_gap)] {
            if !value.is_finite() {
                return Err(SettingsError::NonFinite { field });
            }
        }

        if self.tick_rate_hz == 0 {
            return Err(SettingsError::NonPositive {
                field: "tick_rate_hz",
                value: 0.0,
            });
        }

        if self.columns == 0 || self.rows == 0 {
            return Err(SettingsError::EmptyGrid);
        }

        let width = self.block_width();
        if width <= 0.0 {
            return Err(SettingsError::BlockWidth { width });
        }

        Ok(())
    }

    /// Parse and validate settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_block_width() {
        let settings = Settings::default();
        assert!((settings.block_width() - 69.8).abs() < 1e-4);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_default_spawn_and_timing() {
        let settings = Settings::default();
        assert_eq!(settings.ball_spawn(), Point::new(450.0, 350.0));
        assert_eq!(settings.end_delay_ticks(), 60);
        assert!((settings.tick_interval_ms() - 1000.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_zero_speed() {
        let settings = Settings {
            ball_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NonPositive {
                field: "ball_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_empty_grid() {
        let settings = Settings {
            columns: 0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::EmptyGrid)));
    }

    #[test]
    fn test_rejects_oversized_margin() {
        let settings = Settings {
            margin: 500.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::BlockWidth { .. })
        ));
    }

    #[test]
    fn test_rejects_nan() {
        let settings = Settings {
            ball_radius: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NonFinite {
                field: "ball_radius"
            })
        ));
    }

    #[test]
    fn test_from_json_partial() {
        let settings = Settings::from_json(r#"{ "rows": 2, "ball_speed": 4.5 }"#).unwrap();
        assert_eq!(settings.rows, 2);
        assert_eq!(settings.ball_speed, 4.5);
        assert_eq!(settings.columns, BLOCK_COLUMNS);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "tick_rate_hz": 0 }"#),
            Err(SettingsError::NonPositive { .. })
        ));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("breakout-settings-{}.json", std::process::id()));
        let settings = Settings {
            paddle_width: 120.0,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }
}
