//! Close orbit over one planet: pick a region to land on, or fly off to leave.

use super::draw;
use super::{Frame, TransitionParams, TransitionRequest, ViewId, ViewResult, ViewState};
use crate::context::GameContext;
use crate::error::FrameError;
use crate::ship::FACING_UP;
use engine_core::{angle_of, point_on_circle, rotate_deg, screen_center, Color, Vec2, SCREEN_HEIGHT, SCREEN_WIDTH};
use procgen::{region_at_angle, PlanetTexture};
use renderer::{DrawSurface, TextSize};

/// Magnification of the planet relative to the star system view.
pub const PLANET_OVERHEAD_SCALE: f32 = 5.0;
/// Ship sprite growth while in orbit.
const SHIP_ORBIT_SCALE: f32 = 1.5;
/// Gap between the planet rim and the ship on arrival.
const ARRIVAL_GAP: f32 = 30.0;
const EXIT_HINT: &str = "Fly over a region and press [E] to land. Fly off-screen to exit.";

pub struct PlanetView {
    planet_idx: Option<usize>,
    texture: Option<PlanetTexture>,
    cached_sprite_scale: Option<f32>,
    hovered_region: Option<usize>,
}

impl Default for PlanetView {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanetView {
    pub fn new() -> Self {
        Self {
            planet_idx: None,
            texture: None,
            cached_sprite_scale: None,
            hovered_region: None,
        }
    }

    pub fn hovered_region(&self) -> Option<usize> {
        self.hovered_region
    }

    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }

    fn draw_radius(radius: u32) -> f32 {
        radius as f32 * PLANET_OVERHEAD_SCALE
    }

    fn draw_region_highlight(surface: &mut dyn DrawSurface, radius: f32, start: f32, span: f32, rotation: f32) {
        let center = screen_center();
        let steps = ((span / 4.0) as usize).max(5);
        let mut fan = Vec::with_capacity(steps + 2);
        fan.push(center);
        for i in 0..=steps {
            let angle = start + span * i as f32 / steps as f32 + rotation;
            fan.push(point_on_circle(center, angle, radius));
        }
        surface.draw_polygon(&fan, Color::YELLOW.with_alpha(100));
    }
}

impl ViewState for PlanetView {
    fn id(&self) -> ViewId {
        ViewId::PlanetOverhead
    }

    fn on_enter(&mut self, ctx: &mut GameContext, _params: &TransitionParams) -> Option<TransitionRequest> {
        self.texture = None;
        self.hovered_region = None;

        let Some(planet) = ctx.current_planet() else {
            log::warn!(
                "Invalid planet index {:?} for {:?}, returning to star system",
                ctx.current_planet_idx,
                ctx.current_system().map(|s| s.name.as_str())
            );
            self.planet_idx = None;
            return Some(TransitionRequest::to(ViewId::StarSystem));
        };
        let draw_radius = Self::draw_radius(planet.radius);
        log::debug!("Entering orbit of {}", planet.name);
        self.planet_idx = ctx.current_planet_idx;

        let ship = &mut ctx.ship;
        self.cached_sprite_scale = Some(ship.sprite_scale);
        ship.sprite_scale *= SHIP_ORBIT_SCALE;
        ship.angle = FACING_UP;
        let half_height = ship.bounds().h / 2.0;
        let center = screen_center();
        ship.place(Vec2::new(center.x, center.y - draw_radius - half_height - ARRIVAL_GAP));
        ship.particles.clear();
        None
    }

    fn on_exit(&mut self, ctx: &mut GameContext) {
        if let Some(scale) = self.cached_sprite_scale.take() {
            ctx.ship.sprite_scale = scale;
        }
        self.texture = None;
    }

    fn handle_input(&mut self, _ctx: &mut GameContext, frame: &Frame) -> Option<TransitionRequest> {
        if !frame.input.is_interact_pressed() {
            return None;
        }
        let idx = self.hovered_region?;
        Some(TransitionRequest::new(
            ViewId::Ground,
            TransitionParams {
                region_idx: Some(idx),
                ..Default::default()
            },
        ))
    }

    fn update(&mut self, ctx: &mut GameContext, frame: &Frame) -> ViewResult {
        // Entered with bad data; the fallback request is already pending.
        if self.planet_idx.is_none() || ctx.current_planet().is_none() {
            return Ok(None);
        }

        ctx.current_system_mut()
            .ok_or_else(|| FrameError::update("planet overhead", "no current star system"))?
            .update_orbits();
        let planet = ctx
            .current_planet()
            .ok_or_else(|| FrameError::update("planet overhead", "planet vanished"))?;
        if self.texture.is_none() {
            self.texture = Some(PlanetTexture::generate(planet, PLANET_OVERHEAD_SCALE));
        }
        let draw_radius = Self::draw_radius(planet.radius);
        let rotation = planet.rotation_angle;

        ctx.ship.update(frame.input, frame.dt, &mut ctx.rng);
        if ctx.ship.on_screen_edge() {
            return Ok(Some(TransitionRequest::new(
                ViewId::StarSystem,
                TransitionParams {
                    from_planet_idx: self.planet_idx,
                    ..Default::default()
                },
            )));
        }

        let rel = ctx.ship.pos - screen_center();
        self.hovered_region = None;
        if rel.length() < draw_radius {
            if let Some(planet) = ctx.current_planet() {
                let surface_angle = angle_of(rotate_deg(rel, -rotation));
                self.hovered_region = region_at_angle(&planet.regions, surface_angle);
            }
        }
        Ok(None)
    }

    fn render(&self, ctx: &GameContext, frame: &Frame, surface: &mut dyn DrawSurface) -> Result<(), FrameError> {
        surface.fill(Color::BLACK);
        let Some(planet) = self.planet_idx.and(ctx.current_planet()) else {
            draw::missing_data(surface, "Error: No planet data loaded.");
            return Ok(());
        };
        let center = screen_center();
        let draw_radius = Self::draw_radius(planet.radius);

        draw::light_and_shadow(surface, center, draw_radius, planet.angle);
        frame.starfield.draw(surface, frame.frame_count);

        match &self.texture {
            Some(texture) => {
                for (color, points) in texture.placed(center, planet.rotation_angle) {
                    surface.draw_polygon(&points, color);
                }
            }
            None => {
                draw::shaded_body(surface, center, draw_radius, planet.color);
                surface.render_text(
                    "Generating Texture...",
                    TextSize::Main,
                    Color::WHITE,
                    Vec2::new(center.x - 120.0, center.y - 10.0),
                );
            }
        }

        if let Some(region) = self.hovered_region.and_then(|i| planet.region(i)) {
            Self::draw_region_highlight(surface, draw_radius, region.start_angle, region.span(), planet.rotation_angle);
        }

        ctx.ship.draw_particles(surface);
        ctx.ship.draw(surface);
        if ctx.ship.orientation_locked {
            draw::locked_cursor(surface, frame.input.mouse_position());
        }

        surface.render_text(
            &format!("Planet: {}", planet.name),
            TextSize::Main,
            Color::WHITE,
            Vec2::new(SCREEN_WIDTH / 2.0 - 150.0, 10.0),
        );
        match self.hovered_region.and_then(|i| planet.region(i)) {
            Some(region) => {
                let prompt = format!("Press [E] to land on {}", region.biome.name());
                let x = (SCREEN_WIDTH - TextSize::Main.text_width(&prompt)) / 2.0;
                surface.render_text(&prompt, TextSize::Main, Color::YELLOW, Vec2::new(x, SCREEN_HEIGHT - 70.0));
            }
            None => surface.render_text(
                EXIT_HINT,
                TextSize::Small,
                Color::WHITE,
                Vec2::new(SCREEN_WIDTH / 2.0 - 200.0, SCREEN_HEIGHT - 50.0),
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::starfield::Starfield;
    use input::{ElementState, InputState, KeyCode};
    use rand::prelude::*;
    use renderer::ShapeBatch;

    fn starfield() -> Starfield {
        Starfield::generate(&mut StdRng::seed_from_u64(4))
    }

    fn frame<'a>(input: &'a InputState, starfield: &'a Starfield) -> Frame<'a> {
        Frame { input, dt: 1.0 / 60.0, frame_count: 1, starfield }
    }

    fn orbiting(planet_idx: usize) -> (GameContext, PlanetView) {
        let mut ctx = GameContext::from_seed(Some(11));
        ctx.current_planet_idx = Some(planet_idx);
        let mut view = PlanetView::new();
        assert!(view.on_enter(&mut ctx, &TransitionParams::default()).is_none());
        (ctx, view)
    }

    #[test]
    fn bad_planet_index_falls_back_to_star_system() {
        let mut ctx = GameContext::from_seed(Some(11));
        ctx.current_planet_idx = Some(42);
        let mut view = PlanetView::new();
        let request = view.on_enter(&mut ctx, &TransitionParams::default());
        assert_eq!(request, Some(TransitionRequest::to(ViewId::StarSystem)));

        // The view must survive the frame before the fallback is applied.
        let stars = starfield();
        let input = InputState::new();
        assert_eq!(view.update(&mut ctx, &frame(&input, &stars)).unwrap(), None);
        let mut batch = ShapeBatch::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        view.render(&ctx, &frame(&input, &stars), &mut batch).unwrap();
        view.on_exit(&mut ctx);
        assert_eq!(ctx.ship.sprite_scale, 1.0);
    }

    #[test]
    fn arrival_places_ship_above_the_planet() {
        let (ctx, _view) = orbiting(0);
        let draw_radius = ctx.current_planet().unwrap().radius as f32 * PLANET_OVERHEAD_SCALE;
        let center = screen_center();
        assert_eq!(ctx.ship.pos.x, center.x);
        assert!(ctx.ship.pos.y < center.y - draw_radius - ARRIVAL_GAP);
        assert_eq!(ctx.ship.angle, FACING_UP);
        assert_eq!(ctx.ship.velocity, Vec2::ZERO);
        assert_eq!(ctx.ship.sprite_scale, SHIP_ORBIT_SCALE);
    }

    #[test]
    fn sprite_scale_is_restored_exactly() {
        let mut ctx = GameContext::from_seed(Some(11));
        ctx.ship.sprite_scale = 0.7;
        ctx.current_planet_idx = Some(0);
        let mut view = PlanetView::new();
        view.on_enter(&mut ctx, &TransitionParams::default());
        assert!((ctx.ship.sprite_scale - 1.05).abs() < 1e-6);
        view.on_exit(&mut ctx);
        assert_eq!(ctx.ship.sprite_scale, 0.7);
    }

    #[test]
    fn texture_is_built_on_first_update() {
        let (mut ctx, mut view) = orbiting(0);
        let stars = starfield();
        let input = InputState::new();
        assert!(!view.has_texture());
        view.update(&mut ctx, &frame(&input, &stars)).unwrap();
        assert!(view.has_texture());

        let mut batch = ShapeBatch::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        view.render(&ctx, &frame(&input, &stars), &mut batch).unwrap();
        assert!(!batch.is_empty());
    }

    #[test]
    fn flying_off_screen_returns_to_system() {
        let (mut ctx, mut view) = orbiting(1);
        let stars = starfield();
        let input = InputState::new();
        ctx.ship.pos = Vec2::new(500.0, -3.0);
        let request = view.update(&mut ctx, &frame(&input, &stars)).unwrap();
        assert_eq!(
            request,
            Some(TransitionRequest::new(
                ViewId::StarSystem,
                TransitionParams {
                    from_planet_idx: Some(1),
                    ..Default::default()
                }
            ))
        );
    }

    #[test]
    fn hovering_a_region_offers_landing() {
        let (mut ctx, mut view) = orbiting(0);
        let stars = starfield();
        let input = InputState::new();
        // Fly straight over the center of the disc.
        ctx.ship.pos = screen_center() + Vec2::new(0.0, -10.0);
        view.update(&mut ctx, &frame(&input, &stars)).unwrap();
        let region = view.hovered_region().expect("ship is over the planet");

        let mut e = InputState::new();
        e.process_keyboard(KeyCode::KeyE, ElementState::Pressed);
        assert_eq!(
            view.handle_input(&mut ctx, &frame(&e, &stars)),
            Some(TransitionRequest::new(
                ViewId::Ground,
                TransitionParams {
                    region_idx: Some(region),
                    ..Default::default()
                }
            ))
        );
    }
}
