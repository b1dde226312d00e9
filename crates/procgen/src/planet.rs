//! Planets and the orbit placement engine.
//!
//! Orbits are packed into fixed-width slots between the star and the edge of the
//! play-field. Slots are visited in shuffled order and jittered, and a jittered radius is
//! only accepted when it keeps clear of every radius already in use (the star included).

use crate::biome::{generate_regions, Region};
use engine_core::{Color, SCREEN_HEIGHT, SCREEN_WIDTH};
use rand::prelude::*;
use std::collections::VecDeque;

/// Distance between neighbouring orbit slots.
pub const PLANET_SEPARATION: u32 = 60;
/// Clearance between the star's surface and the innermost orbit.
pub const MIN_ORBIT_CLEARANCE: u32 = 90;
/// Margin kept between the outermost orbit and the play-field edge.
pub const ORBIT_EDGE_MARGIN: u32 = 40;

/// Body colors a planet can be drawn with in the star system view.
pub const PLANET_COLORS: [Color; 7] = [
    Color::BLUE,
    Color::GREEN,
    Color::RED,
    Color::ORANGE,
    Color::BROWN,
    Color::GRAY,
    Color::PURPLE,
];

/// A planet orbiting the star of a system.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub name: String,
    /// Body radius in the star system view.
    pub radius: u32,
    /// Distance from the star.
    pub orbit_radius: u32,
    /// Position along the orbit in degrees.
    pub angle: f32,
    /// Degrees per frame, signed.
    pub orbit_speed: f32,
    pub color: Color,
    /// Surface regions, tiling the full circle.
    pub regions: Vec<Region>,
    /// Axial rotation in degrees.
    pub rotation_angle: f32,
    /// Degrees per frame, signed.
    pub rotation_speed: f32,
}

impl Planet {
    /// Roll a planet's body, motion, and surface for an already chosen orbit.
    pub fn generate(orbit_radius: u32, rng: &mut impl Rng) -> Self {
        let radius = rng.gen_range(10..=25);
        let angle = rng.gen_range(0.0..360.0);
        let orbit_speed = rng.gen_range(0.008..=0.04) * random_sign(rng);
        let color = PLANET_COLORS[rng.gen_range(0..PLANET_COLORS.len())];
        let region_count = rng.gen_range(2..=5);
        let regions = generate_regions(region_count, rng);
        let rotation_angle = rng.gen_range(0.0..360.0);
        let rotation_speed = rng.gen_range(0.05..=0.4) * random_sign(rng);

        Self {
            name: String::new(),
            radius,
            orbit_radius,
            angle,
            orbit_speed,
            color,
            regions,
            rotation_angle,
            rotation_speed,
        }
    }

    pub fn region(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }
}

fn random_sign(rng: &mut impl Rng) -> f32 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}

/// Radial bounds for planet orbits around a star of a given radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitLayout {
    pub min_orbit: u32,
    pub max_orbit: u32,
    pub separation: u32,
}

impl OrbitLayout {
    pub fn for_star(star_radius: u32) -> Self {
        let half_field = (SCREEN_WIDTH as u32 / 2).min(SCREEN_HEIGHT as u32 / 2);
        Self {
            min_orbit: star_radius + MIN_ORBIT_CLEARANCE,
            max_orbit: half_field.saturating_sub(ORBIT_EDGE_MARGIN),
            separation: PLANET_SEPARATION,
        }
    }

    /// Number of orbit slots that fit between the bounds.
    pub fn capacity(&self) -> usize {
        if self.max_orbit <= self.min_orbit || self.separation == 0 {
            return 0;
        }
        ((self.max_orbit - self.min_orbit) / self.separation) as usize
    }

    /// Smallest allowed distance between two accepted orbit radii.
    pub fn min_spacing(&self) -> f32 {
        self.separation as f32 * 0.75
    }

    /// Maximum jitter applied to a slot, in either direction.
    pub fn jitter(&self) -> i64 {
        (self.separation as f32 * 0.3) as i64
    }

    fn clamp(&self, radius: i64) -> u32 {
        radius.clamp(self.min_orbit as i64, self.max_orbit as i64) as u32
    }
}

/// Outcome of placing planets (and the jump gate) for one system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementReport {
    /// Planets asked for by the caller.
    pub requested: usize,
    /// Orbit slots available around the star.
    pub capacity: usize,
    /// Planets actually attempted after clamping to capacity.
    pub attempted: usize,
    /// Planets placed.
    pub placed: usize,
    /// The jump gate could not be moved out of the exclusion zone.
    pub gate_exhausted: bool,
}

impl PlacementReport {
    /// Whether generation fell short of what was asked for.
    pub fn is_degraded(&self) -> bool {
        self.placed < self.requested || self.gate_exhausted
    }
}

/// Place up to `requested` planets around a star. Planets come back sorted inner to outer
/// and named `"<system> I"`, `"<system> II"`, and so on.
pub fn place_planets(
    system_name: &str,
    star_radius: u32,
    requested: usize,
    rng: &mut impl Rng,
) -> (Vec<Planet>, PlacementReport) {
    let layout = OrbitLayout::for_star(star_radius);
    let capacity = layout.capacity();

    let mut to_create = requested.min(capacity);
    if to_create == 0 && capacity > 0 && requested > 0 {
        to_create = 1;
    } else if capacity == 0 {
        if requested > 0 {
            log::warn!(
                "No orbit room around {} (min_orbit {}, max_orbit {}), skipping planets",
                system_name,
                layout.min_orbit,
                layout.max_orbit
            );
        }
        to_create = 0;
    }

    let mut slots: Vec<u32> = if to_create > 0 {
        (0..capacity as u32)
            .map(|i| layout.min_orbit + i * layout.separation)
            .collect()
    } else {
        Vec::new()
    };
    slots.shuffle(rng);
    let mut slots = VecDeque::from(slots);

    let mut used_radii = vec![star_radius];
    let mut planets = Vec::with_capacity(to_create);

    for attempt in 0..to_create {
        let Some(base) = slots.pop_front() else {
            log::warn!(
                "Ran out of orbit slots for {}, placed {}/{}",
                system_name,
                planets.len(),
                to_create
            );
            break;
        };

        let jitter = layout.jitter();
        let offset = rng.gen_range(0..=2 * jitter) - jitter;
        let orbit_radius = layout.clamp(base as i64 + offset);

        let clear = used_radii
            .iter()
            .all(|&used| (orbit_radius as f32 - used as f32).abs() >= layout.min_spacing());

        if clear {
            used_radii.push(orbit_radius);
            planets.push(Planet::generate(orbit_radius, rng));
        } else {
            if !slots.is_empty() {
                slots.push_back(base + layout.separation);
            }
            log::debug!(
                "Skipped planet {} for {}: orbit {} too close to an existing orbit",
                attempt + 1,
                system_name,
                orbit_radius
            );
        }
    }

    if planets.len() < to_create {
        log::warn!(
            "Only placed {}/{} planets for {}",
            planets.len(),
            to_create,
            system_name
        );
    }

    planets.sort_by_key(|p| p.orbit_radius);
    for (i, planet) in planets.iter_mut().enumerate() {
        planet.name = format!("{} {}", system_name, roman_numeral(i + 1));
    }

    let report = PlacementReport {
        requested,
        capacity,
        attempted: to_create,
        placed: planets.len(),
        gate_exhausted: false,
    };
    (planets, report)
}

/// Roman numeral for small positive ordinals (planet designations).
pub fn roman_numeral(mut n: usize) -> String {
    const TABLE: [(usize, &str); 9] = [
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut out = String::new();
    for &(value, glyph) in &TABLE {
        while n >= value {
            out.push_str(glyph);
            n -= value;
        }
    }
    out
}
