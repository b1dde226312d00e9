//! The player's ship: flight model, exhaust particles, and spawn placement.
//!
//! Angles are degrees measured from +X toward +Y in screen space (y down), so -90 faces up.
//! Velocities are pixels per frame; particles integrate with elapsed seconds.

use engine_core::{angle_of, rotate_deg, wrap_degrees, Color, Rect, Vec2, SCREEN_HEIGHT, SCREEN_WIDTH};
use input::InputState;
use procgen::StarSystem;
use rand::prelude::*;
use renderer::DrawSurface;

pub const HULL_WIDTH: f32 = 30.0;
pub const HULL_HEIGHT: f32 = 20.0;
pub const MAX_SPEED: f32 = 5.0;
pub const THRUST: f32 = 0.2;
pub const STRAFE_THRUST: f32 = 0.15;
/// Reverse thrust as a fraction of forward thrust.
pub const REVERSE_FACTOR: f32 = 0.7;
/// Degrees per frame.
pub const TURN_RATE: f32 = 4.0;
pub const DRAG: f32 = 0.98;
pub const FACING_UP: f32 = -90.0;

/// Spawn distance below the star, beyond its radius.
const SPAWN_CLEARANCE: f32 = 100.0;
const GATE_KEEP_OUT_W: f32 = 60.0;
const GATE_KEEP_OUT_H: f32 = 80.0;
const SPAWN_NUDGE: f32 = 20.0;
const SPAWN_NUDGE_ATTEMPTS: u32 = 20;

/// One exhaust particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Pixels per second.
    pub vel: Vec2,
    /// Seconds left.
    pub life: f32,
    pub color: Color,
}

impl Particle {
    /// Drawn radius, shrinking as the particle dies.
    pub fn size(&self) -> f32 {
        ((self.life * 4.0 + 1.0).trunc()).max(1.0)
    }
}

#[derive(Debug, Clone)]
pub struct PlayerShip {
    pub pos: Vec2,
    pub velocity: Vec2,
    pub angle: f32,
    /// Shift held: heading stays put instead of turning toward the mouse.
    pub orientation_locked: bool,
    /// Size multiplier of the hull sprite. The planet overhead view enlarges it while active.
    pub sprite_scale: f32,
    pub particles: Vec<Particle>,
}

impl Default for PlayerShip {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerShip {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new((SCREEN_WIDTH / 2.0).floor(), (SCREEN_HEIGHT / 2.0).floor()),
            velocity: Vec2::ZERO,
            angle: 0.0,
            orientation_locked: false,
            sprite_scale: 1.0,
            particles: Vec::new(),
        }
    }

    pub fn forward(&self) -> Vec2 {
        rotate_deg(Vec2::X, self.angle)
    }

    /// Unit vector out of the ship's left flank.
    pub fn left(&self) -> Vec2 {
        rotate_deg(Vec2::NEG_Y, self.angle)
    }

    /// Unit vector out of the ship's right flank.
    pub fn right(&self) -> Vec2 {
        -self.left()
    }

    /// Axis-aligned bounds of the rotated, scaled hull sprite, centered on the ship.
    pub fn bounds(&self) -> Rect {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        let w = (HULL_WIDTH * cos).abs() + (HULL_HEIGHT * sin).abs();
        let h = (HULL_WIDTH * sin).abs() + (HULL_HEIGHT * cos).abs();
        Rect::from_center(self.pos, w * self.sprite_scale, h * self.sprite_scale)
    }

    /// Stop and face up at `pos`.
    pub fn place(&mut self, pos: Vec2) {
        self.pos = pos;
        self.velocity = Vec2::ZERO;
        self.angle = FACING_UP;
    }

    /// Park below the star of `system`, clear of its jump gate.
    pub fn reset_position(&mut self, system: Option<&StarSystem>) {
        let pos = match system {
            Some(system) => {
                let safe = system.star_radius as f32 + SPAWN_CLEARANCE;
                let mut start = Vec2::new((SCREEN_WIDTH / 2.0).floor(), (SCREEN_HEIGHT / 2.0).floor() + safe);
                let gate = Rect::from_center(system.jump_gate, GATE_KEEP_OUT_W, GATE_KEEP_OUT_H);
                let mut attempts = 0;
                while gate.contains_point(start) && attempts < SPAWN_NUDGE_ATTEMPTS {
                    start.y += SPAWN_NUDGE;
                    attempts += 1;
                }
                start
            }
            None => Vec2::new((SCREEN_WIDTH / 2.0).floor(), SCREEN_HEIGHT - 150.0),
        };
        self.place(pos);
        self.orientation_locked = false;
    }

    /// One frame of flight. `dt` only drives the particles.
    pub fn update(&mut self, input: &InputState, dt: f32, rng: &mut impl Rng) {
        self.orientation_locked = input.is_orientation_lock_held();
        if !self.orientation_locked {
            self.turn_toward(input.mouse_position());
        }

        let forward = self.forward();
        let left = self.left();
        let right = self.right();
        let thrusting = input.is_thrust_held();
        let reversing = input.is_reverse_held();
        let strafe_left = input.is_left_held();
        let strafe_right = input.is_right_held();

        let mut accel = Vec2::ZERO;
        if thrusting {
            accel += forward * THRUST;
        }
        if reversing {
            accel -= forward * THRUST * REVERSE_FACTOR;
        }
        if strafe_left {
            accel += left * STRAFE_THRUST;
        }
        if strafe_right {
            accel += right * STRAFE_THRUST;
        }

        self.velocity = (self.velocity + accel).clamp_length_max(MAX_SPEED);
        if !(thrusting || reversing || strafe_left || strafe_right) {
            self.velocity *= DRAG;
        }
        self.pos += self.velocity;
        self.wrap_to_screen();

        if thrusting {
            let nozzle = self.pos + rotate_deg(Vec2::new(-15.0, 0.0), self.angle);
            for _ in 0..2 {
                let jitter = Vec2::new(rng.gen_range(-2.0..=2.0), rng.gen_range(-2.0..=2.0));
                let vel = rotate_deg(-forward, rng.gen_range(-15.0..=15.0)) * rng.gen_range(1.5..=3.0) * 60.0;
                let color = *[Color::ORANGE, Color::YELLOW, Color::WHITE]
                    .choose(rng)
                    .unwrap_or(&Color::WHITE);
                self.particles.push(Particle {
                    pos: nozzle + jitter,
                    vel,
                    life: rng.gen_range(0.3..=0.8),
                    color,
                });
            }
        }
        // Side exhaust blows out of the flank opposite to the strafe direction.
        if strafe_right {
            self.emit_side_exhaust(Vec2::new(5.0, -10.0), left, rng);
        }
        if strafe_left {
            self.emit_side_exhaust(Vec2::new(5.0, 10.0), right, rng);
        }

        for p in &mut self.particles {
            p.pos += p.vel * dt;
            p.life -= dt;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    fn turn_toward(&mut self, target: Vec2) {
        let target_angle = angle_of(target - self.pos);
        let diff = (target_angle - self.angle + 180.0).rem_euclid(360.0) - 180.0;
        if diff.abs() <= TURN_RATE {
            self.angle = target_angle;
        } else {
            self.angle += TURN_RATE.copysign(diff);
        }
        self.angle = wrap_degrees(self.angle);
    }

    fn emit_side_exhaust(&mut self, local_nozzle: Vec2, direction: Vec2, rng: &mut impl Rng) {
        let nozzle = self.pos + rotate_deg(local_nozzle, self.angle);
        let jitter = Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
        let vel = rotate_deg(direction, rng.gen_range(-20.0..=20.0)) * rng.gen_range(1.0..=2.0) * 60.0;
        self.particles.push(Particle {
            pos: nozzle + jitter,
            vel,
            life: rng.gen_range(0.2..=0.5),
            color: Color::PARTICLE,
        });
    }

    /// Leaving one edge lands exactly on the opposite one.
    fn wrap_to_screen(&mut self) {
        if self.pos.x < 0.0 {
            self.pos.x = SCREEN_WIDTH;
        }
        if self.pos.x > SCREEN_WIDTH {
            self.pos.x = 0.0;
        }
        if self.pos.y < 0.0 {
            self.pos.y = SCREEN_HEIGHT;
        }
        if self.pos.y > SCREEN_HEIGHT {
            self.pos.y = 0.0;
        }
    }

    /// Whether the ship sits on a play-field edge (where wrapping puts it).
    pub fn on_screen_edge(&self) -> bool {
        self.pos.x == 0.0 || self.pos.x == SCREEN_WIDTH || self.pos.y == 0.0 || self.pos.y == SCREEN_HEIGHT
    }

    pub fn draw_particles(&self, surface: &mut dyn DrawSurface) {
        for p in &self.particles {
            surface.draw_circle(p.pos, p.size(), p.color);
        }
    }

    /// White arrowhead hull with a red nose light.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        let to_screen = |local: Vec2| {
            let centered = local - Vec2::new(HULL_WIDTH / 2.0, HULL_HEIGHT / 2.0);
            self.pos + rotate_deg(centered * self.sprite_scale, self.angle)
        };
        let hull = [Vec2::new(0.0, 0.0), Vec2::new(30.0, 10.0), Vec2::new(0.0, 20.0)].map(to_screen);
        surface.draw_polygon(&hull, Color::WHITE);
        let nose = [
            Vec2::new(25.0, 8.0),
            Vec2::new(30.0, 8.0),
            Vec2::new(30.0, 12.0),
            Vec2::new(25.0, 12.0),
        ]
        .map(to_screen);
        surface.draw_polygon(&nose, Color::RED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::screen_center;
    use input::{ElementState, KeyCode};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(3)
    }

    fn input_with(keys: &[KeyCode], mouse: Vec2) -> InputState {
        let mut input = InputState::new();
        for key in keys {
            input.process_keyboard(*key, ElementState::Pressed);
        }
        input.process_cursor_position(mouse);
        input
    }

    #[test]
    fn facing_up_points_up() {
        let mut ship = PlayerShip::new();
        ship.place(Vec2::new(100.0, 100.0));
        assert!((ship.forward() - Vec2::NEG_Y).length() < 1e-5);
        assert!((ship.left() - Vec2::NEG_X).length() < 1e-5);
        assert!((ship.right() - Vec2::X).length() < 1e-5);
    }

    #[test]
    fn turns_at_most_four_degrees_per_frame() {
        let mut ship = PlayerShip::new();
        ship.place(Vec2::new(500.0, 400.0));
        // Mouse straight right of the ship: target 0°, currently -90°.
        let input = input_with(&[], Vec2::new(900.0, 400.0));
        ship.update(&input, 1.0 / 60.0, &mut rng());
        assert!((ship.angle - 274.0).abs() < 1e-3);

        for _ in 0..30 {
            ship.update(&input, 1.0 / 60.0, &mut rng());
        }
        assert!(ship.angle.abs() < 1e-3 || (ship.angle - 360.0).abs() < 1e-3);
    }

    #[test]
    fn shift_locks_heading() {
        let mut ship = PlayerShip::new();
        ship.place(Vec2::new(500.0, 400.0));
        let input = input_with(&[KeyCode::ShiftLeft], Vec2::new(900.0, 400.0));
        ship.update(&input, 1.0 / 60.0, &mut rng());
        assert!(ship.orientation_locked);
        assert_eq!(ship.angle, FACING_UP);
    }

    #[test]
    fn thrust_is_capped_and_emits_particles() {
        let mut ship = PlayerShip::new();
        ship.place(Vec2::new(500.0, 400.0));
        let input = input_with(&[KeyCode::KeyW, KeyCode::ShiftLeft], Vec2::ZERO);
        let mut rng = rng();
        for _ in 0..100 {
            ship.update(&input, 0.0, &mut rng);
        }
        assert!(ship.velocity.length() <= MAX_SPEED + 1e-4);
        assert!(ship.velocity.y < 0.0);
        // No time passed, so nothing expired.
        assert_eq!(ship.particles.len(), 200);
    }

    #[test]
    fn strafe_moves_toward_own_flank() {
        let mut ship = PlayerShip::new();
        ship.place(Vec2::new(500.0, 400.0));
        let input = input_with(&[KeyCode::KeyA, KeyCode::ShiftLeft], Vec2::ZERO);
        ship.update(&input, 1.0 / 60.0, &mut rng());
        assert!(ship.velocity.x < 0.0);
        assert_eq!(ship.particles.len(), 1);
        // Exhaust goes the other way.
        assert!(ship.particles[0].vel.x > 0.0);
    }

    #[test]
    fn drag_only_without_thrust() {
        let mut ship = PlayerShip::new();
        ship.place(Vec2::new(500.0, 400.0));
        ship.velocity = Vec2::new(2.0, 0.0);
        let idle = input_with(&[KeyCode::ShiftLeft], Vec2::ZERO);
        ship.update(&idle, 1.0 / 60.0, &mut rng());
        assert!((ship.velocity.x - 1.96).abs() < 1e-5);
    }

    #[test]
    fn wraps_onto_exact_edge() {
        let mut ship = PlayerShip::new();
        ship.place(Vec2::new(1.0, 300.0));
        ship.velocity = Vec2::new(-3.0, 0.0);
        let idle = input_with(&[KeyCode::ShiftLeft], Vec2::ZERO);
        ship.update(&idle, 1.0 / 60.0, &mut rng());
        assert_eq!(ship.pos.x, SCREEN_WIDTH);
        assert!(ship.on_screen_edge());
    }

    #[test]
    fn particles_expire() {
        let mut ship = PlayerShip::new();
        ship.place(Vec2::new(500.0, 400.0));
        let mut rng = rng();
        let thrust = input_with(&[KeyCode::KeyW, KeyCode::ShiftLeft], Vec2::ZERO);
        ship.update(&thrust, 0.0, &mut rng);
        assert_eq!(ship.particles.len(), 2);
        let idle = input_with(&[KeyCode::ShiftLeft], Vec2::ZERO);
        ship.update(&idle, 1.0, &mut rng);
        assert!(ship.particles.is_empty());
    }

    #[test]
    fn reset_spawns_below_star_and_off_gate() {
        let mut rng = rng();
        let mut system = StarSystem::generate("Test", Vec2::ZERO, Color::YELLOW, 0, &mut rng);
        let mut ship = PlayerShip::new();
        ship.orientation_locked = true;

        ship.reset_position(Some(&system));
        let expected_y = screen_center().y + system.star_radius as f32 + 100.0;
        assert_eq!(ship.pos, Vec2::new(screen_center().x, expected_y));
        assert_eq!(ship.angle, FACING_UP);
        assert!(!ship.orientation_locked);

        system.jump_gate = Vec2::new(screen_center().x, expected_y + 10.0);
        ship.reset_position(Some(&system));
        let keep_out = Rect::from_center(system.jump_gate, 60.0, 80.0);
        assert!(!keep_out.contains_point(ship.pos));
        assert!(ship.pos.y > expected_y);
    }

    #[test]
    fn bounds_follow_heading_and_scale() {
        let mut ship = PlayerShip::new();
        ship.angle = 0.0;
        assert!((ship.bounds().w - 30.0).abs() < 1e-4);
        ship.place(Vec2::ZERO);
        let b = ship.bounds();
        assert!((b.w - 20.0).abs() < 1e-4 && (b.h - 30.0).abs() < 1e-4);
        ship.sprite_scale = 1.5;
        assert!((ship.bounds().h - 45.0).abs() < 1e-4);
    }
}
