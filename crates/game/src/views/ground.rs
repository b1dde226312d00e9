//! On foot in one region of a planet.

use super::draw;
use super::{Frame, TransitionParams, TransitionRequest, ViewId, ViewResult, ViewState};
use crate::context::GameContext;
use crate::error::FrameError;
use engine_core::{Color, Rect, Vec2, SCREEN_HEIGHT, SCREEN_WIDTH};
use procgen::{advance_rotation, ground_line, Biome, GroundLayout, GROUND_HEIGHT};
use rand::prelude::*;
use renderer::{DrawSurface, TextSize};

const MAX_NIGHT_STARS: f32 = 150.0;
const STAR_SEED: u64 = 123;
const HULL_SHADE: Color = Color::rgb(100, 100, 100);

/// 0 at midnight, 1 at noon.
pub fn daylight(rotation_angle: f32) -> f32 {
    ((rotation_angle + 180.0).to_radians().cos() + 1.0) / 2.0
}

/// Visible stars for a given daylight.
pub fn night_star_count(daylight: f32) -> usize {
    (MAX_NIGHT_STARS * (1.0 - daylight * 1.5).max(0.0)) as usize
}

#[derive(Debug, Default)]
pub struct GroundView {
    layout: Option<GroundLayout>,
    biome: Option<Biome>,
}

impl GroundView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(&self) -> Option<&GroundLayout> {
        self.layout.as_ref()
    }

    fn draw_sky(surface: &mut dyn DrawSurface, daylight: f32, rotation: f32) {
        surface.fill(Color::DARK_GRAY.lerp(Color::LIGHT_BLUE, daylight));

        let count = night_star_count(daylight);
        if count == 0 {
            return;
        }
        let mut rng = StdRng::seed_from_u64(STAR_SEED + rotation as u64);
        let alpha = ((1.0 - daylight) * 255.0) as u8;
        for _ in 0..count {
            let pos = Vec2::new(
                rng.gen_range(0.0..SCREEN_WIDTH),
                rng.gen_range(0.0..ground_line() * 0.8),
            );
            let size = rng.gen_range(1.0f32..=2.0).round();
            surface.draw_circle(pos, size, Color::WHITE.with_alpha(alpha));
        }
    }

    /// Ship hull standing on its fins, filling `r`.
    fn draw_landed_ship(surface: &mut dyn DrawSurface, r: Rect, daylight: f32) {
        let c = r.center().x;
        let hull = [
            Vec2::new(c, r.top()),
            Vec2::new(r.right() - r.w * 0.2, r.top() + r.h * 0.35),
            Vec2::new(r.right(), r.bottom()),
            Vec2::new(c + r.w * 0.15, r.bottom() - r.h * 0.15),
            Vec2::new(c - r.w * 0.15, r.bottom() - r.h * 0.15),
            Vec2::new(r.left(), r.bottom()),
            Vec2::new(r.left() + r.w * 0.2, r.top() + r.h * 0.35),
        ];
        surface.draw_polygon(&hull, HULL_SHADE.lerp(Color::WHITE, daylight));
        surface.draw_polygon_outline(&hull, 2.0, Color::DARK_GRAY.lerp(Color::GRAY, daylight));
    }
}

impl ViewState for GroundView {
    fn id(&self) -> ViewId {
        ViewId::Ground
    }

    fn on_enter(&mut self, ctx: &mut GameContext, _params: &TransitionParams) -> Option<TransitionRequest> {
        ctx.character.reset_position();
        self.layout = None;
        self.biome = None;

        let Some(region) = ctx.current_region() else {
            log::warn!(
                "Invalid ground parameters (planet {:?}, region {:?}), returning to orbit",
                ctx.current_planet_idx,
                ctx.current_region_idx
            );
            return Some(TransitionRequest::to(ViewId::PlanetOverhead));
        };
        self.biome = Some(region.biome);
        log::info!("Landed in a {} region", region.biome.name());

        self.layout = Some(GroundLayout::generate(ctx.character.pos.x, &mut ctx.rng));
        None
    }

    fn handle_input(&mut self, ctx: &mut GameContext, frame: &Frame) -> Option<TransitionRequest> {
        let layout = self.layout.as_ref()?;
        if frame.input.is_interact_pressed() && ctx.character.overlaps_ship(&layout.landed_ship) {
            return Some(TransitionRequest::to(ViewId::PlanetOverhead));
        }
        None
    }

    fn update(&mut self, ctx: &mut GameContext, frame: &Frame) -> ViewResult {
        let Some(layout) = &self.layout else {
            return Ok(None);
        };
        let planet = ctx
            .current_planet_mut()
            .ok_or_else(|| FrameError::update("ground", "no current planet"))?;
        advance_rotation(planet);
        if let Some(system) = ctx.current_system_mut() {
            system.update_orbits();
        }
        ctx.character.update(frame.input, &layout.platforms);
        Ok(None)
    }

    fn render(&self, ctx: &GameContext, _frame: &Frame, surface: &mut dyn DrawSurface) -> Result<(), FrameError> {
        let (Some(layout), Some(biome), Some(planet)) = (&self.layout, self.biome, ctx.current_planet()) else {
            surface.fill(Color::BLACK);
            draw::missing_data(surface, "Error: No ground data loaded.");
            return Ok(());
        };
        let rotation = planet.rotation_angle;
        let day = daylight(rotation);
        let scroll = ctx.character.world_scroll;
        let land = biome.color();

        Self::draw_sky(surface, day, rotation);

        let light = 0.3 + 0.7 * day;
        for mountain in &layout.mountains {
            let r = mountain.scrolled(scroll);
            if r.right() < 0.0 || r.left() > SCREEN_WIDTH {
                continue;
            }
            let shade = land.scaled((0.4 + 0.6 * (1.0 - mountain.depth)) * light);
            let peak = [
                Vec2::new(r.left(), r.bottom()),
                Vec2::new(r.center().x, r.top()),
                Vec2::new(r.right(), r.bottom()),
            ];
            surface.draw_polygon(&peak, shade);
        }

        surface.draw_rect(
            Rect::new(0.0, SCREEN_HEIGHT - GROUND_HEIGHT, SCREEN_WIDTH, GROUND_HEIGHT),
            land.scaled(0.5 + 0.5 * day),
        );

        let platform_color = Color::DARK_GRAY.lerp(Color::GRAY, day);
        for platform in &layout.platforms {
            let r = platform.translate(scroll, 0.0);
            if r.right() >= 0.0 && r.left() <= SCREEN_WIDTH {
                surface.draw_rect(r, platform_color);
            }
        }

        let ship = layout.landed_ship.translate(scroll, 0.0);
        Self::draw_landed_ship(surface, ship, day);
        ctx.character.draw(surface);

        surface.render_text(
            &format!("Region: {}", biome.name()),
            TextSize::Main,
            Color::WHITE,
            Vec2::new(10.0, 10.0),
        );
        if ctx.character.overlaps_ship(&layout.landed_ship) {
            surface.render_text(
                "Press [E] to board ship",
                TextSize::Main,
                Color::YELLOW,
                Vec2::new(ship.center().x - 100.0, ship.top() - 30.0),
            );
        }
        Ok(())
    }
}
