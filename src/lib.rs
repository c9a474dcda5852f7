//! Breakout - a ball, a paddle and a staggered wall of bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game phases)
//! - `renderer`: Drawing surface contract and its implementations
//! - `platform`: Input queue and fixed-rate tick scheduling
//! - `settings`: Structured, validated game configuration
//! - `game`: Controller tying the simulation to a host surface

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Settings, SettingsError};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A position in arena space (pixels, y grows downward)
pub type Point = Vec2;

/// A width/height pair (`x` = width, `y` = height)
pub type Size = Vec2;

/// An sRGB fill colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    /// Brick pink (#f24dee)
    pub const BRICK: Color = Color::rgb(0xf2, 0x4d, 0xee);
    /// Paddle blue (#4ec2f0)
    pub const PADDLE: Color = Color::rgb(0x4e, 0xc2, 0xf0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#f24dee`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Default game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 900.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Space left and right of the brick wall (half of it above)
    pub const MARGIN: f32 = 100.0;
    /// Visible separation between neighbouring blocks
    pub const BLOCK_GAP: f32 = 2.0;

    /// Brick wall dimensions
    pub const BLOCK_COLUMNS: u32 = 10;
    pub const BLOCK_ROWS: u32 = 4;
    pub const BLOCK_HEIGHT: f32 = 25.0;

    /// Ball defaults (speed in pixels per tick)
    pub const BALL_RADIUS: f32 = 6.0;
    pub const BALL_SPEED: f32 = 6.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 13.0;

    /// Simulation rate
    pub const TICK_RATE_HZ: u32 = 60;

    /// Delay between the deciding tick and the end screen
    pub const END_DELAY_SECS: f32 = 1.0;
}

/// Unit vector for a heading angle
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::BRICK.to_hex(), "#f24dee");
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn test_heading_axes() {
        let right = heading(0.0);
        assert_eq!(right, Vec2::new(1.0, 0.0));
        let down = heading(std::f32::consts::FRAC_PI_2);
        assert!((down.y - 1.0).abs() < 1e-6);
        assert!(down.x.abs() < 1e-6);
    }
}
