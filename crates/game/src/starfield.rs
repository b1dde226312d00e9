//! Twinkling background stars shared by the space views.

use engine_core::{Color, Vec2, SCREEN_HEIGHT, SCREEN_WIDTH};
use rand::prelude::*;
use renderer::DrawSurface;
use std::f32::consts::TAU;

pub const STAR_COUNT: usize = 180;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwinkleStar {
    pub pos: Vec2,
    pub size: f32,
    /// Radians per frame.
    pub speed: f32,
    pub phase: f32,
    pub low: u8,
    pub high: u8,
}

impl TwinkleStar {
    /// Grey level at `frame`, oscillating between `low` and `high`.
    pub fn brightness(&self, frame: u64) -> u8 {
        let t = ((frame as f32 * self.speed + self.phase).sin() + 1.0) * 0.5;
        (self.low as f32 + (self.high as f32 - self.low as f32) * t) as u8
    }
}

/// Created once by the view controller and handed to views each frame.
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<TwinkleStar>,
}

impl Starfield {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| TwinkleStar {
                pos: Vec2::new(
                    rng.gen_range(0..SCREEN_WIDTH as i32) as f32,
                    rng.gen_range(0..SCREEN_HEIGHT as i32) as f32,
                ),
                size: if rng.gen_ratio(1, 4) { 2.0 } else { 1.0 },
                speed: rng.gen_range(0.02..=0.12),
                phase: rng.gen_range(0.0..TAU),
                low: rng.gen_range(40..=90),
                high: rng.gen_range(170..=255),
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[TwinkleStar] {
        &self.stars
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface, frame: u64) {
        for star in &self.stars {
            let c = star.brightness(frame);
            surface.draw_circle(star.pos, star.size, Color::rgb(c, c, c));
        }
    }
}
