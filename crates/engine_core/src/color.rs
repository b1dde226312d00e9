//! RGBA colors and the shared game palette.

use bytemuck::{Pod, Zeroable};

/// An 8-bit RGBA color. Alpha defaults to opaque.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    /// Night sky.
    pub const DARK_GRAY: Color = Color::rgb(50, 50, 50);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const BROWN: Color = Color::rgb(139, 69, 19);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    /// Side thruster exhaust.
    pub const PARTICLE: Color = Color::rgb(200, 200, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors. `t` is clamped to 0..1.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f32 + (b as f32 - a as f32) * t;
            v.clamp(0.0, 255.0) as u8
        };
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Multiply RGB channels by `factor`, clamping to 0..255. Alpha is kept.
    pub fn scaled(self, factor: f32) -> Color {
        let s = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
        Color {
            r: s(self.r),
            g: s(self.g),
            b: s(self.b),
            a: self.a,
        }
    }

    /// Normalized `[r, g, b, a]` for GPU upload.
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_clamp() {
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 0.0), Color::BLACK);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 1.0), Color::WHITE);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 7.0), Color::WHITE);
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(mid.r, 127);
    }

    #[test]
    fn scaled_keeps_alpha() {
        let c = Color::rgba(200, 100, 50, 80).scaled(0.5);
        assert_eq!(c, Color::rgba(100, 50, 25, 80));
        assert_eq!(Color::WHITE.scaled(2.0), Color::WHITE);
    }
}
