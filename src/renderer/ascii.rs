//! Character-grid surface for terminals and logs

use std::fmt;

use super::{Font, Surface, TextAlign};
use crate::{Color, Point, Size};

/// Rasterizes arena-space primitives onto a fixed grid of characters
#[derive(Debug, Clone)]
pub struct AsciiSurface {
    cols: usize,
    rows: usize,
    /// Arena pixels per cell
    scale: Size,
    cells: Vec<char>,
}

impl AsciiSurface {
    pub fn new(cols: usize, rows: usize, arena: Size) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            scale: Size::new(arena.x / cols as f32, arena.y / rows as f32),
            cells: vec![' '; cols * rows],
        }
    }

    /// Character at a cell, if inside the grid
    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }

    fn glyph(color: Color) -> char {
        match color {
            Color::BRICK => '#',
            Color::PADDLE => '=',
            _ => '*',
        }
    }

    fn to_cell(&self, p: Point) -> (isize, isize) {
        (
            (p.x / self.scale.x).floor() as isize,
            (p.y / self.scale.y).floor() as isize,
        )
    }

    fn put(&mut self, col: isize, row: isize, ch: char) {
        if col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows {
            self.cells[row as usize * self.cols + col as usize] = ch;
        }
    }

    /// Fill every cell whose centre falls in the arena-space rectangle
    fn fill_cells(&mut self, pos: Point, size: Size, ch: char) {
        let (c0, r0) = self.to_cell(pos);
        let (c1, r1) = self.to_cell(pos + size);
        for row in r0..=r1 {
            for col in c0..=c1 {
                let center = Point::new(
                    (col as f32 + 0.5) * self.scale.x,
                    (row as f32 + 0.5) * self.scale.y,
                );
                let inside = center.cmpge(pos).all() && center.cmple(pos + size).all();
                if inside {
                    self.put(col, row, ch);
                }
            }
        }
    }
}

impl Surface for AsciiSurface {
    fn clear_region(&mut self, pos: Point, size: Size) {
        self.fill_cells(pos, size, ' ');
    }

    /// Always marks the cell under the centre so small balls stay visible
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        let ch = Self::glyph(color);
        let (c0, r0) = self.to_cell(center - Point::splat(radius));
        let (c1, r1) = self.to_cell(center + Point::splat(radius));
        for row in r0..=r1 {
            for col in c0..=c1 {
                let cell = Point::new(
                    (col as f32 + 0.5) * self.scale.x,
                    (row as f32 + 0.5) * self.scale.y,
                );
                if cell.distance(center) <= radius {
                    self.put(col, row, ch);
                }
            }
        }
        let (col, row) = self.to_cell(center);
        self.put(col, row, ch);
    }

    fn fill_rect(&mut self, pos: Point, size: Size, color: Color) {
        self.fill_cells(pos, size, Self::glyph(color));
    }

    fn draw_text(&mut self, text: &str, pos: Point, _font: Font, align: TextAlign, _color: Color) {
        let (col, row) = self.to_cell(pos);
        let len = text.chars().count() as isize;
        let start = match align {
            TextAlign::Left => col,
            TextAlign::Center => col - len / 2,
            TextAlign::Right => col - len,
        };
        for (i, ch) in text.chars().enumerate() {
            self.put(start + i as isize, row, ch);
        }
    }
}

impl fmt::Display for AsciiSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border: String = "-".repeat(self.cols);
        writeln!(f, "+{border}+")?;
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().collect();
            writeln!(f, "|{line}|")?;
        }
        write!(f, "+{border}+")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> AsciiSurface {
        // 10 px per cell
        AsciiSurface::new(90, 60, Size::new(900.0, 600.0))
    }

    #[test]
    fn test_rect_and_circle_glyphs() {
        let mut s = surface();
        s.fill_rect(Point::new(100.0, 50.0), Size::new(70.0, 25.0), Color::BRICK);
        s.fill_circle(Point::new(455.0, 355.0), 6.0, Color::WHITE);
        assert_eq!(s.get(10, 5), Some('#'));
        assert_eq!(s.get(16, 6), Some('#'));
        assert_eq!(s.get(45, 35), Some('*'));
        assert_eq!(s.get(0, 0), Some(' '));
    }

    #[test]
    fn test_clear_wipes_cells() {
        let mut s = surface();
        s.fill_rect(Point::new(0.0, 0.0), Size::new(900.0, 600.0), Color::PADDLE);
        s.clear_region(Point::ZERO, Size::new(900.0, 600.0));
        assert!(s.to_string().lines().skip(1).all(|l| !l.contains('=')));
    }

    #[test]
    fn test_centered_text() {
        let mut s = surface();
        s.draw_text("You win!", Point::new(450.0, 300.0), Font::px(60.0), TextAlign::Center, Color::WHITE);
        let line = s.to_string().lines().nth(31).unwrap().to_string();
        assert!(line.contains("You win!"));
        assert_eq!(s.get(41, 30), Some('Y'));
    }
}
