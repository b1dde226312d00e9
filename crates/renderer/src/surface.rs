//! The drawing surface capability views render through.
//!
//! Coordinates are logical play-field pixels (y down). Outline widths are measured
//! inward from the shape's edge.

use crate::font::{GLYPH_PX_H, GLYPH_PX_W};
use engine_core::{Color, Rect, Vec2};

/// Text size classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// Titles, prompts, and HUD lines.
    Main,
    /// Labels.
    Small,
}

impl TextSize {
    /// Glyph scale relative to the 6×8 font cell.
    pub fn scale(&self) -> f32 {
        match self {
            TextSize::Main => 2.5,
            TextSize::Small => 1.75,
        }
    }

    pub fn glyph_size(&self) -> Vec2 {
        Vec2::new(GLYPH_PX_W, GLYPH_PX_H) * self.scale()
    }

    /// Width of `text` rendered at this size.
    pub fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.glyph_size().x
    }
}

/// Something views can draw onto.
pub trait DrawSurface {
    /// Cover the whole surface.
    fn fill(&mut self, color: Color);

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn draw_circle_outline(&mut self, center: Vec2, radius: f32, width: f32, color: Color);

    /// Filled polygon. Points must be convex or star-shaped around the first point.
    fn draw_polygon(&mut self, points: &[Vec2], color: Color);

    fn draw_polygon_outline(&mut self, points: &[Vec2], width: f32, color: Color);

    fn draw_rect(&mut self, rect: Rect, color: Color);

    fn draw_rect_outline(&mut self, rect: Rect, width: f32, color: Color);

    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);

    /// Draw `text` with its top-left corner at `pos`.
    fn render_text(&mut self, text: &str, size: TextSize, color: Color, pos: Vec2);
}
