//! Drawing helpers shared by several views.

use engine_core::{Color, Rect, Vec2, SCREEN_HEIGHT, SCREEN_WIDTH};
use renderer::{DrawSurface, TextSize};

/// Radial gradient disc: `color` at the center fading to `color × darken` at the rim.
pub fn shaded_disc(surface: &mut dyn DrawSurface, center: Vec2, radius: f32, color: Color, darken: f32) {
    if radius < 1.0 {
        return;
    }
    let edge = color.scaled(darken);
    let mut r = radius.floor();
    while r >= 1.0 {
        let t = r / radius;
        surface.draw_circle(center, r, color.lerp(edge, 1.0 - t));
        r -= 1.0;
    }
}

/// Planet or star body with the standard rim darkening.
pub fn shaded_body(surface: &mut dyn DrawSurface, center: Vec2, radius: f32, color: Color) {
    shaded_disc(surface, center, radius, color, 0.3);
}

/// Soft halo around a star, strongest near the surface.
pub fn star_glow(surface: &mut dyn DrawSurface, center: Vec2, star_radius: f32, color: Color) {
    let glow_radius = (star_radius * 1.5).floor();
    if glow_radius <= 0.0 {
        return;
    }
    let hot = color.lerp(Color::WHITE, 0.3);
    let mut r = glow_radius;
    while r > 0.0 {
        let t = r / glow_radius;
        let alpha = (120.0 * (1.0 - t.sqrt())).clamp(0.0, 255.0) as u8;
        let ring = color.lerp(hot, 1.0 - t).with_alpha(alpha);
        surface.draw_circle_outline(center, r, 2.0, ring);
        r -= 2.0;
    }
}

const SUNLIGHT: Color = Color::rgb(255, 250, 230);
const SUNLIGHT_PEAK_ALPHA: f32 = 180.0;
const SUNLIGHT_FALLOFF: f32 = 1.6;
const SUNLIGHT_RING_STEP: f32 = 25.0;

/// Scattered sunlight around an overhead planet, with the planet's shadow cast away from
/// the star. `orbit_angle` is the planet's angle around its star.
pub fn light_and_shadow(surface: &mut dyn DrawSurface, center: Vec2, planet_radius: f32, orbit_angle: f32) {
    let max_radius = SCREEN_WIDTH.hypot(SCREEN_HEIGHT).floor();
    let mut r = max_radius;
    while r > 0.0 {
        let alpha = (SUNLIGHT_PEAK_ALPHA * (r / max_radius).powf(SUNLIGHT_FALLOFF)) as u8;
        if alpha > 0 {
            surface.draw_circle_outline(center, r, SUNLIGHT_RING_STEP, SUNLIGHT.with_alpha(alpha));
        }
        r -= SUNLIGHT_RING_STEP;
    }

    let away = Vec2::from_angle(orbit_angle.to_radians());
    let side = away.perp() * planet_radius;
    let far = away * max_radius;
    let wedge = [center, center - side, center - side + far, center + side + far, center + side];
    surface.draw_polygon(&wedge, Color::BLACK);
    surface.draw_circle(center, planet_radius, Color::BLACK);
}

/// Red cross at the cursor, shown while the ship's heading is locked.
pub fn locked_cursor(surface: &mut dyn DrawSurface, at: Vec2) {
    let s = 10.0;
    surface.draw_line(at + Vec2::new(-s, -s), at + Vec2::new(s, s), 3.0, Color::RED);
    surface.draw_line(at + Vec2::new(-s, s), at + Vec2::new(s, -s), 3.0, Color::RED);
}

/// Fallback text for a view entered without the data it needs.
pub fn missing_data(surface: &mut dyn DrawSurface, message: &str) {
    surface.render_text(message, TextSize::Main, Color::RED, Vec2::new(100.0, 100.0));
}

/// Jump gate sprite, highlighted while the ship can use it.
pub fn jump_gate(surface: &mut dyn DrawSurface, gate: Rect, hovered: bool) {
    let (fill, outline) = if hovered {
        surface.draw_rect_outline(gate.inflate(6.0, 6.0), 3.0, Color::YELLOW);
        (Color::LIGHT_BLUE, Color::YELLOW)
    } else {
        (Color::PURPLE, Color::WHITE)
    };
    surface.draw_rect(gate, fill);
    surface.draw_rect_outline(gate, 2.0, outline);
    let c = gate.center();
    surface.render_text("EXIT", TextSize::Small, Color::WHITE, Vec2::new(c.x - 15.0, c.y - 8.0));
}
