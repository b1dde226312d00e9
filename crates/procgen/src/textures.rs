//! Procedural planet surface textures.
//!
//! A texture is a stack of flat-colored polygons in local space (centered on the planet,
//! unrotated). Each region becomes a fan of annular sectors whose color fades from the
//! biome color at the center to a darkened rim, with a little Perlin mottling so large
//! regions do not look flat. Consumers rotate and translate the polygons when drawing.

use crate::planet::Planet;
use engine_core::{point_on_circle, Color, Vec2};
use noise::{NoiseFn, Perlin};

/// Rim brightness relative to the region color.
const EDGE_DARKEN: f32 = 0.25;
/// Upper bound on gradient bands per region.
const MAX_BANDS: usize = 24;
/// Strength of the noise tint.
const MOTTLE_STRENGTH: f64 = 0.12;

/// One flat-colored polygon of a texture.
#[derive(Debug, Clone, PartialEq)]
pub struct TexturePolygon {
    pub color: Color,
    /// Vertices relative to the planet center.
    pub points: Vec<Vec2>,
}

/// Generated surface of one planet at one scale.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetTexture {
    /// Drawn radius (planet radius × scale).
    pub radius: f32,
    /// Back-to-front draw list.
    pub polygons: Vec<TexturePolygon>,
}

impl PlanetTexture {
    /// Build the texture for `planet` drawn at `scale`. Deterministic for a given planet and scale.
    pub fn generate(planet: &Planet, scale: f32) -> Self {
        let radius = planet.radius as f32 * scale;
        if radius < 1.0 {
            return Self {
                radius,
                polygons: Vec::new(),
            };
        }

        let perlin = Perlin::new(texture_seed(planet));
        let bands = (radius as usize).clamp(1, MAX_BANDS);
        let single = planet.regions.len() == 1;
        let mut polygons = Vec::with_capacity(planet.regions.len() * bands);

        for (region_idx, region) in planet.regions.iter().enumerate() {
            let base = region.color();
            let edge = base.scaled(EDGE_DARKEN);

            let mut span = (region.end_angle - region.start_angle + 360.0).rem_euclid(360.0);
            if span == 0.0 && single {
                span = 360.0;
            }
            let steps = ((span / 4.0) as usize).max(5);

            // Outer band first so inner, brighter bands paint over it.
            for band in (1..=bands).rev() {
                let t = band as f32 / bands as f32;
                let band_radius = radius * t;
                let mottle = perlin.get([region_idx as f64 * 3.7, t as f64 * 4.0]) * MOTTLE_STRENGTH;
                let color = base.lerp(edge, 1.0 - t).scaled(1.0 + mottle as f32);

                let mut points = Vec::with_capacity(steps + 2);
                points.push(Vec2::ZERO);
                for step in 0..=steps {
                    let angle = region.start_angle + span * step as f32 / steps as f32;
                    points.push(point_on_circle(Vec2::ZERO, angle, band_radius));
                }
                polygons.push(TexturePolygon { color, points });
            }
        }

        Self { radius, polygons }
    }

    /// Polygons rotated by `rotation_deg` and moved to `center`.
    pub fn placed(&self, center: Vec2, rotation_deg: f32) -> impl Iterator<Item = (Color, Vec<Vec2>)> + '_ {
        let rot = Vec2::from_angle(rotation_deg.to_radians());
        self.polygons.iter().map(move |poly| {
            let points = poly.points.iter().map(|p| center + rot.rotate(*p)).collect();
            (poly.color, points)
        })
    }
}

fn texture_seed(planet: &Planet) -> u32 {
    planet
        .orbit_radius
        .wrapping_mul(7919)
        .wrapping_add(planet.radius.wrapping_mul(104_729))
        .wrapping_add(planet.regions.len() as u32)
}
