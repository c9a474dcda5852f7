//! HTML canvas 2D surface (wasm32 only)

use web_sys::CanvasRenderingContext2d;

use super::{Font, Surface, TextAlign};
use crate::{Color, Point, Size};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear_region(&mut self, pos: Point, size: Size) {
        self.ctx
            .clear_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn fill_rect(&mut self, pos: Point, size: Size, color: Color) {
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn draw_text(&mut self, text: &str, pos: Point, font: Font, align: TextAlign, color: Color) {
        self.ctx.set_font(&font.css());
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx.set_text_align(align.as_str());
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
