//! Per-frame orbital and axial motion.
//!
//! Speeds are degrees per frame, not per second; the simulation runs at a fixed 60 Hz.

use crate::planet::Planet;
use engine_core::wrap_degrees;

/// Advance an angle by `speed` degrees, wrapped into `[0, 360)`.
#[inline]
pub fn advance_angle(angle: f32, speed: f32) -> f32 {
    wrap_degrees(angle + speed)
}

/// Move a planet one frame along its orbit.
pub fn advance_orbit(planet: &mut Planet) {
    planet.angle = advance_angle(planet.angle, planet.orbit_speed);
}

/// Spin a planet one frame around its axis.
pub fn advance_rotation(planet: &mut Planet) {
    planet.rotation_angle = advance_angle(planet.rotation_angle, planet.rotation_speed);
}

/// One frame of orbit and rotation for every planet.
pub fn update_orbits(planets: &mut [Planet]) {
    for planet in planets {
        advance_orbit(planet);
        advance_rotation(planet);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn planet(speed: f32, rotation_speed: f32) -> Planet {
        let mut rng = StdRng::seed_from_u64(5);
        let mut p = Planet::generate(200, &mut rng);
        p.orbit_speed = speed;
        p.rotation_speed = rotation_speed;
        p
    }

    #[test]
    fn zero_speed_is_stationary() {
        let mut planets = vec![planet(0.0, 0.0), planet(0.0, 0.0)];
        let before: Vec<(f32, f32)> = planets.iter().map(|p| (p.angle, p.rotation_angle)).collect();
        for _ in 0..1000 {
            update_orbits(&mut planets);
        }
        let after: Vec<(f32, f32)> = planets.iter().map(|p| (p.angle, p.rotation_angle)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn angles_wrap_both_directions() {
        assert!((advance_angle(359.5, 1.0) - 0.5).abs() < 1e-4);
        assert!((advance_angle(0.2, -0.4) - 359.8).abs() < 1e-3);
    }

    #[test]
    fn orbit_and_rotation_advance_independently() {
        let mut p = planet(1.0, -2.0);
        p.angle = 10.0;
        p.rotation_angle = 10.0;
        advance_orbit(&mut p);
        assert_eq!(p.angle, 11.0);
        assert_eq!(p.rotation_angle, 10.0);
        advance_rotation(&mut p);
        assert_eq!(p.rotation_angle, 8.0);
    }
}
