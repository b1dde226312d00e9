//! CPU tessellation of draw calls into one indexed triangle list per frame.

use crate::font::glyph_uv;
use crate::surface::{DrawSurface, TextSize};
use crate::vertex::ShapeVertex;
use engine_core::{Color, Rect, Vec2};
use std::f32::consts::TAU;

const MIN_CIRCLE_SEGMENTS: usize = 12;
const MAX_CIRCLE_SEGMENTS: usize = 96;

/// Collects the shapes of one frame in logical coordinates and converts them to NDC.
#[derive(Debug, Clone)]
pub struct ShapeBatch {
    pub vertices: Vec<ShapeVertex>,
    pub indices: Vec<u32>,
    /// Color the frame is cleared to before the batch is drawn.
    pub clear_color: Color,
    logical_w: f32,
    logical_h: f32,
}

impl ShapeBatch {
    pub fn new(logical_w: f32, logical_h: f32) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            clear_color: Color::BLACK,
            logical_w,
            logical_h,
        }
    }

    /// Drop all geometry for the next frame.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.clear_color = Color::BLACK;
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of triangles queued.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Convert logical pixel coords to NDC.
    fn to_ndc(&self, p: Vec2) -> [f32; 2] {
        [
            (p.x / self.logical_w) * 2.0 - 1.0,
            1.0 - (p.y / self.logical_h) * 2.0,
        ]
    }

    fn push_solid(&mut self, p: Vec2, color: [f32; 4]) -> u32 {
        let idx = self.vertices.len() as u32;
        self.vertices.push(ShapeVertex::solid(self.to_ndc(p), color));
        idx
    }

    /// Solid quad from four corners in winding order.
    fn push_quad(&mut self, corners: [Vec2; 4], color: Color) {
        let c = color.to_f32_array();
        let base = self.vertices.len() as u32;
        for p in corners {
            self.push_solid(p, c);
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    fn circle_segments(radius: f32) -> usize {
        ((radius * 0.75) as usize).clamp(MIN_CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS)
    }

    fn circle_point(center: Vec2, radius: f32, i: usize, segments: usize) -> Vec2 {
        let a = i as f32 / segments as f32 * TAU;
        center + Vec2::new(a.cos(), a.sin()) * radius
    }
}

impl DrawSurface for ShapeBatch {
    fn fill(&mut self, color: Color) {
        if color.a == 255 {
            // Everything queued so far would be covered anyway.
            self.vertices.clear();
            self.indices.clear();
            self.clear_color = color;
        } else {
            self.draw_rect(Rect::new(0.0, 0.0, self.logical_w, self.logical_h), color);
        }
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let c = color.to_f32_array();
        let segments = Self::circle_segments(radius);
        let hub = self.push_solid(center, c);
        for i in 0..segments {
            self.push_solid(Self::circle_point(center, radius, i, segments), c);
        }
        for i in 0..segments as u32 {
            let next = (i + 1) % segments as u32;
            self.indices.extend_from_slice(&[hub, hub + 1 + i, hub + 1 + next]);
        }
    }

    fn draw_circle_outline(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        if radius <= 0.0 || width <= 0.0 {
            return;
        }
        let inner = (radius - width).max(0.0);
        let segments = Self::circle_segments(radius);
        for i in 0..segments {
            let a = Self::circle_point(center, radius, i, segments);
            let b = Self::circle_point(center, radius, i + 1, segments);
            let c = Self::circle_point(center, inner, i + 1, segments);
            let d = Self::circle_point(center, inner, i, segments);
            self.push_quad([a, b, c, d], color);
        }
    }

    fn draw_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let c = color.to_f32_array();
        let base = self.vertices.len() as u32;
        for p in points {
            self.push_solid(*p, c);
        }
        for i in 1..points.len() as u32 - 1 {
            self.indices.extend_from_slice(&[base, base + i, base + i + 1]);
        }
    }

    fn draw_polygon_outline(&mut self, points: &[Vec2], width: f32, color: Color) {
        if points.len() < 2 {
            return;
        }
        for (i, from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            self.draw_line(*from, to, width, color);
        }
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.push_quad(
            [
                Vec2::new(rect.left(), rect.top()),
                Vec2::new(rect.right(), rect.top()),
                Vec2::new(rect.right(), rect.bottom()),
                Vec2::new(rect.left(), rect.bottom()),
            ],
            color,
        );
    }

    fn draw_rect_outline(&mut self, rect: Rect, width: f32, color: Color) {
        let w = width.min(rect.w / 2.0).min(rect.h / 2.0);
        self.draw_rect(Rect::new(rect.x, rect.y, rect.w, w), color);
        self.draw_rect(Rect::new(rect.x, rect.bottom() - w, rect.w, w), color);
        self.draw_rect(Rect::new(rect.x, rect.y + w, w, rect.h - 2.0 * w), color);
        self.draw_rect(Rect::new(rect.right() - w, rect.y + w, w, rect.h - 2.0 * w), color);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let dir = (to - from).normalize_or_zero();
        if dir == Vec2::ZERO {
            return;
        }
        let half = dir.perp() * (width.max(1.0) / 2.0);
        self.push_quad([from + half, to + half, to - half, from - half], color);
    }

    fn render_text(&mut self, text: &str, size: TextSize, color: Color, pos: Vec2) {
        let glyph = size.glyph_size();
        let c = color.to_f32_array();
        let mut x = pos.x;
        for ch in text.chars() {
            if let Some([u0, v0, u1, v1]) = glyph_uv(ch) {
                let tl = self.to_ndc(Vec2::new(x, pos.y));
                let br = self.to_ndc(Vec2::new(x + glyph.x, pos.y + glyph.y));
                let base = self.vertices.len() as u32;
                self.vertices.extend_from_slice(&[
                    ShapeVertex { position: [tl[0], tl[1]], tex_coords: [u0, v0], color: c },
                    ShapeVertex { position: [br[0], tl[1]], tex_coords: [u1, v0], color: c },
                    ShapeVertex { position: [br[0], br[1]], tex_coords: [u1, v1], color: c },
                    ShapeVertex { position: [tl[0], br[1]], tex_coords: [u0, v1], color: c },
                ]);
                self.indices
                    .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
            }
            x += glyph.x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::SOLID_UV;

    fn batch() -> ShapeBatch {
        ShapeBatch::new(1000.0, 750.0)
    }

    #[test]
    fn corners_map_to_ndc() {
        let mut b = batch();
        b.draw_rect(Rect::new(0.0, 0.0, 1000.0, 750.0), Color::WHITE);
        assert_eq!(b.vertices[0].position, [-1.0, 1.0]);
        assert_eq!(b.vertices[2].position, [1.0, -1.0]);
        assert_eq!(b.triangle_count(), 2);
    }

    #[test]
    fn opaque_fill_replaces_queued_geometry() {
        let mut b = batch();
        b.draw_circle(Vec2::new(10.0, 10.0), 5.0, Color::RED);
        b.fill(Color::DARK_GRAY);
        assert!(b.is_empty());
        assert_eq!(b.clear_color, Color::DARK_GRAY);

        b.fill(Color::BLACK.with_alpha(100));
        assert_eq!(b.triangle_count(), 2);
    }

    #[test]
    fn polygon_fans_from_first_point() {
        let mut b = batch();
        let pts = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0), Vec2::new(0.0, 10.0)];
        b.draw_polygon(&pts, Color::GREEN);
        assert_eq!(b.indices, vec![0, 1, 2, 0, 2, 3]);
        b.draw_polygon(&pts[..2], Color::GREEN);
        assert_eq!(b.triangle_count(), 2);
    }

    #[test]
    fn text_skips_unprintable_but_advances() {
        let mut b = batch();
        b.render_text("A\tB", TextSize::Small, Color::WHITE, Vec2::ZERO);
        assert_eq!(b.vertices.len(), 8);
        assert!(b.vertices.iter().all(|v| v.tex_coords != SOLID_UV));
        let glyph_w = TextSize::Small.glyph_size().x;
        let second_left = (2.0 * glyph_w / 1000.0) * 2.0 - 1.0;
        assert!((b.vertices[4].position[0] - second_left).abs() < 1e-5);
    }

    #[test]
    fn degenerate_shapes_are_skipped() {
        let mut b = batch();
        b.draw_circle(Vec2::ZERO, 0.0, Color::WHITE);
        b.draw_line(Vec2::ONE, Vec2::ONE, 2.0, Color::WHITE);
        b.draw_circle_outline(Vec2::ZERO, 10.0, 0.0, Color::WHITE);
        assert!(b.is_empty());
    }

    #[test]
    fn clear_resets_frame() {
        let mut b = batch();
        b.fill(Color::LIGHT_BLUE);
        b.draw_line(Vec2::ZERO, Vec2::new(5.0, 5.0), 1.0, Color::WHITE);
        b.clear();
        assert!(b.is_empty());
        assert_eq!(b.clear_color, Color::BLACK);
    }
}
