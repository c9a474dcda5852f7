//! Drawing surface contract
//!
//! The game only needs four primitives from its host: clear a region, fill a
//! circle, fill a rectangle and draw a line of text. Entities draw themselves
//! through [`Drawable`]; the scene and end screen are composed here.

pub mod ascii;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

pub use ascii::AsciiSurface;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::{Ball, Block, GameState, Outcome};
use crate::{Color, Point, Size};

/// Font family used for every line of text
pub const FONT_FAMILY: &str = "system-ui";

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Font size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub px: f32,
}

impl Font {
    pub const fn px(px: f32) -> Self {
        Self { px }
    }

    /// CSS shorthand, e.g. `60px system-ui`
    pub fn css(&self) -> String {
        format!("{}px {}", self.px, FONT_FAMILY)
    }
}

/// A host surface the game draws onto
pub trait Surface {
    fn clear_region(&mut self, pos: Point, size: Size);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
    fn fill_rect(&mut self, pos: Point, size: Size, color: Color);
    fn draw_text(&mut self, text: &str, pos: Point, font: Font, align: TextAlign, color: Color);
}

/// Something that knows how to draw itself
pub trait Drawable {
    fn render(&self, surface: &mut dyn Surface);
}

impl Drawable for Ball {
    fn render(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.pos, self.radius, self.color);
    }
}

impl Drawable for Block {
    /// Inset on the leading edges so neighbours show a seam
    fn render(&self, surface: &mut dyn Surface) {
        surface.fill_rect(
            self.pos + Point::splat(self.gap),
            self.size - Size::splat(self.gap),
            self.color,
        );
    }
}

/// Clear the arena and draw bricks, ball and paddle, in that order
pub fn draw_scene(state: &GameState, surface: &mut dyn Surface) {
    surface.clear_region(Point::ZERO, state.settings.arena_size());
    for block in state.bricks() {
        block.render(surface);
    }
    state.ball.render(surface);
    state.paddle.render(surface);
}

/// Replace the scene with the outcome message and the replay prompt
pub fn draw_end_screen(outcome: Outcome, settings: &Settings, surface: &mut dyn Surface) {
    let center = settings.arena_size() / 2.0;
    surface.clear_region(Point::ZERO, settings.arena_size());
    surface.draw_text(
        outcome.message(),
        center,
        Font::px(60.0),
        TextAlign::Center,
        Color::WHITE,
    );
    surface.draw_text(
        "Click to play again",
        center + Point::new(0.0, 40.0),
        Font::px(20.0),
        TextAlign::Center,
        Color::WHITE,
    );
}
