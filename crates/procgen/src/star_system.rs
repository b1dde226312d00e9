//! Star system generation: star, jump gate, and orbiting planets.
//!
//! Systems are laid out in the star system view's play-field coordinates with the star
//! at the center of the field. The jump gate is kept clear of the star and the inner
//! orbits on a best-effort basis.

use crate::orbit;
use crate::planet::{place_planets, Planet, PlacementReport};
use engine_core::{point_on_circle, screen_center, Color, Vec2, SCREEN_HEIGHT, SCREEN_WIDTH};
use rand::prelude::*;

/// Gate sampling margin from the play-field edges.
pub const GATE_EDGE_MARGIN: u32 = 100;
/// Extra clearance between the star's surface and the jump gate.
pub const GATE_STAR_CLEARANCE: f32 = 280.0;
/// Resampling budget for the jump gate.
pub const GATE_PLACEMENT_ATTEMPTS: u32 = 100;

/// A complete star system.
#[derive(Debug, Clone)]
pub struct StarSystem {
    pub name: String,
    /// Icon position on the galaxy map.
    pub galaxy_position: Vec2,
    pub star_color: Color,
    pub star_radius: u32,
    /// Gate position in the star system view.
    pub jump_gate: Vec2,
    /// Planets sorted inner to outer.
    pub planets: Vec<Planet>,
    /// How generation went; kept for diagnostics.
    pub report: PlacementReport,
}

impl StarSystem {
    /// Generate a system. Never fails; shortfalls are logged and recorded in `report`.
    pub fn generate(
        name: &str,
        galaxy_position: Vec2,
        star_color: Color,
        planet_count: usize,
        rng: &mut impl Rng,
    ) -> Self {
        let star_radius = rng.gen_range(30..=45);
        let (jump_gate, gate_exhausted) = place_jump_gate(star_radius, rng);
        if gate_exhausted {
            log::warn!(
                "Could not place jump gate clear of the star for {}, using last position",
                name
            );
        }

        let (planets, mut report) = place_planets(name, star_radius, planet_count, rng);
        report.gate_exhausted = gate_exhausted;

        log::debug!(
            "Generated {}: star radius {}, {} planets, gate at ({}, {})",
            name,
            star_radius,
            planets.len(),
            jump_gate.x,
            jump_gate.y
        );

        Self {
            name: name.to_string(),
            galaxy_position,
            star_color,
            star_radius,
            jump_gate,
            planets,
            report,
        }
    }

    /// Current position of a planet in the star system view.
    pub fn planet_position(&self, index: usize) -> Option<Vec2> {
        self.planets
            .get(index)
            .map(|p| point_on_circle(screen_center(), p.angle, p.orbit_radius as f32).round())
    }

    /// Advance every planet one frame along its orbit and around its axis.
    pub fn update_orbits(&mut self) {
        orbit::update_orbits(&mut self.planets);
    }

    pub fn planet(&self, index: usize) -> Option<&Planet> {
        self.planets.get(index)
    }

    pub fn planet_mut(&mut self, index: usize) -> Option<&mut Planet> {
        self.planets.get_mut(index)
    }
}

/// Sample a gate position outside the star's exclusion zone. Returns the position and
/// whether the attempt budget ran out (the last sample is used in that case).
fn place_jump_gate(star_radius: u32, rng: &mut impl Rng) -> (Vec2, bool) {
    let center = screen_center();
    let min_distance = star_radius as f32 + GATE_STAR_CLEARANCE;
    let margin = GATE_EDGE_MARGIN as i32;
    let (w, h) = (SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32);

    let mut sample = || {
        Vec2::new(
            rng.gen_range(margin..=w - margin) as f32,
            rng.gen_range(margin..=h - margin) as f32,
        )
    };

    let mut gate = sample();
    let mut attempts = 0;
    while gate.distance(center) < min_distance && attempts < GATE_PLACEMENT_ATTEMPTS {
        gate = sample();
        attempts += 1;
    }
    (gate, attempts >= GATE_PLACEMENT_ATTEMPTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::OrbitLayout;

    #[test]
    fn generate_fills_fields() {
        let mut rng = StdRng::seed_from_u64(1);
        let system = StarSystem::generate("Solara Prime", Vec2::new(150.0, 200.0), Color::YELLOW, 4, &mut rng);
        assert_eq!(system.name, "Solara Prime");
        assert!((30..=45).contains(&system.star_radius));
        assert_eq!(system.report.requested, 4);
        assert_eq!(system.report.placed, system.planets.len());
        assert!(!system.planets.is_empty());
    }

    #[test]
    fn gate_clears_star_unless_exhausted() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let system = StarSystem::generate("Gate", Vec2::ZERO, Color::WHITE, 3, &mut rng);
            let g = system.jump_gate;
            assert!((100.0..=900.0).contains(&g.x) && (100.0..=650.0).contains(&g.y));
            if !system.report.gate_exhausted {
                assert!(g.distance(screen_center()) >= system.star_radius as f32 + GATE_STAR_CLEARANCE);
            }
        }
    }

    #[test]
    fn planets_respect_orbit_layout() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let system = StarSystem::generate("Orbits", Vec2::ZERO, Color::RED, 5, &mut rng);
            let layout = OrbitLayout::for_star(system.star_radius);
            for p in &system.planets {
                assert!(p.orbit_radius >= layout.min_orbit && p.orbit_radius <= layout.max_orbit);
            }
        }
    }

    #[test]
    fn same_seed_same_system() {
        let a = StarSystem::generate("A", Vec2::ZERO, Color::BLUE, 3, &mut StdRng::seed_from_u64(77));
        let b = StarSystem::generate("A", Vec2::ZERO, Color::BLUE, 3, &mut StdRng::seed_from_u64(77));
        assert_eq!(a.jump_gate, b.jump_gate);
        assert_eq!(a.planets, b.planets);
    }

    #[test]
    fn planet_position_follows_angle() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut system = StarSystem::generate("Pos", Vec2::ZERO, Color::BLUE, 2, &mut rng);
        system.planets[0].angle = 0.0;
        let r = system.planets[0].orbit_radius as f32;
        assert_eq!(system.planet_position(0), Some(screen_center() + Vec2::new(r, 0.0)));
        assert_eq!(system.planet_position(99), None);
    }
}
