//! Surface that records draw calls instead of rasterizing them
//!
//! Used by tests and by the native binary's JSON frame dumps.

use serde::{Deserialize, Serialize};

use super::{Font, Surface, TextAlign};
use crate::{Color, Point, Size};

/// One primitive drawing operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear {
        pos: Point,
        size: Size,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    FillRect {
        pos: Point,
        size: Size,
        color: Color,
    },
    Text {
        text: String,
        pos: Point,
        font: Font,
        align: TextAlign,
        color: Color,
    },
}

/// Draw calls since the last clear
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Text lines in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of rectangles drawn
    pub fn rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count()
    }

    /// Frame as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.commands)
    }
}

impl Surface for RecordingSurface {
    /// A clear starts a new frame
    fn clear_region(&mut self, pos: Point, size: Size) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { pos, size });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, pos: Point, size: Size, color: Color) {
        self.commands.push(DrawCommand::FillRect { pos, size, color });
    }

    fn draw_text(&mut self, text: &str, pos: Point, font: Font, align: TextAlign, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            font,
            align,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_starts_new_frame() {
        let mut surface = RecordingSurface::default();
        surface.fill_rect(Point::ZERO, Size::ONE, Color::BRICK);
        surface.clear_region(Point::ZERO, Size::new(10.0, 10.0));
        surface.fill_circle(Point::ONE, 2.0, Color::WHITE);
        assert_eq!(surface.commands.len(), 2);
        assert_eq!(surface.rect_count(), 0);
    }

    #[test]
    fn test_frame_json() {
        let mut surface = RecordingSurface::default();
        surface.draw_text("hi", Point::ZERO, Font::px(20.0), TextAlign::Left, Color::WHITE);
        let json = surface.to_json().unwrap();
        assert!(json.contains("\"hi\""));
        let back: Vec<DrawCommand> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, surface.commands);
    }
}
