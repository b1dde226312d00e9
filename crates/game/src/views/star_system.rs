//! Flying around inside one star system.

use super::draw;
use super::{Frame, TransitionParams, TransitionRequest, ViewId, ViewResult, ViewState};
use crate::context::GameContext;
use crate::error::FrameError;
use engine_core::{screen_center, Color, Rect, Vec2, SCREEN_HEIGHT, SCREEN_WIDTH};
use procgen::StarSystem;
use renderer::{DrawSurface, TextSize};

const GATE_WIDTH: f32 = 40.0;
const GATE_HEIGHT: f32 = 60.0;
/// Gap between a planet's rim and the ship when returning from orbit.
const PLANET_EXIT_GAP: f32 = 20.0;
const INTERACT_PROMPT: &str = "Press [E] to interact";

pub fn gate_rect(system: &StarSystem) -> Rect {
    Rect::from_center(system.jump_gate, GATE_WIDTH, GATE_HEIGHT)
}

#[derive(Debug, Default)]
pub struct StarSystemView {
    hovered_planet: Option<usize>,
    hovered_gate: bool,
}

impl StarSystemView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered_planet(&self) -> Option<usize> {
        self.hovered_planet
    }

    pub fn hovered_gate(&self) -> bool {
        self.hovered_gate
    }

    fn refresh_hover(&mut self, ctx: &GameContext) {
        self.hovered_planet = None;
        self.hovered_gate = false;
        let Some(system) = ctx.current_system() else {
            return;
        };

        let bounds = ctx.ship.bounds();
        let reach = bounds.w.max(bounds.h) / 1.5 + 10.0;
        self.hovered_planet = (0..system.planets.len()).find(|&i| {
            match (system.planet_position(i), system.planet(i)) {
                (Some(pos), Some(planet)) => ctx.ship.pos.distance(pos) < planet.radius as f32 + reach,
                _ => false,
            }
        });
        if self.hovered_planet.is_none() {
            self.hovered_gate = bounds.intersects(&gate_rect(system));
        }
    }
}

impl ViewState for StarSystemView {
    fn id(&self) -> ViewId {
        ViewId::StarSystem
    }

    fn on_enter(&mut self, ctx: &mut GameContext, params: &TransitionParams) -> Option<TransitionRequest> {
        self.hovered_planet = None;
        self.hovered_gate = false;
        ctx.ship.particles.clear();

        let Some(system) = ctx.systems.get(ctx.current_star_system_idx) else {
            log::warn!("Entered star system view without a valid system, returning to map");
            return Some(TransitionRequest::to(ViewId::Galaxy));
        };
        let ship = &mut ctx.ship;

        let mut positioned = false;
        if params.from_hyperspace || params.from_galaxy_map_entry {
            ship.place(system.jump_gate);
            positioned = true;
        } else if let Some(idx) = params.from_planet_idx {
            match (system.planet_position(idx), system.planet(idx)) {
                (Some(pos), Some(planet)) => {
                    let half_height = ship.bounds().h / 2.0;
                    let offset = planet.radius as f32 + half_height + PLANET_EXIT_GAP;
                    ship.place(pos - Vec2::new(0.0, offset));
                    positioned = true;
                }
                _ => {
                    log::warn!("Returned from unknown planet {} of {}, resetting ship", idx, system.name);
                    ship.reset_position(Some(system));
                    positioned = true;
                }
            }
        }

        if !positioned {
            let revisit = ctx.last_visited_system.as_deref() == Some(system.name.as_str());
            if params.reset_ship || !revisit {
                ship.reset_position(Some(system));
            }
        }

        log::debug!("Ship entered {} at ({:.0}, {:.0})", system.name, ship.pos.x, ship.pos.y);
        ctx.last_visited_system = Some(system.name.clone());
        None
    }

    fn handle_input(&mut self, _ctx: &mut GameContext, frame: &Frame) -> Option<TransitionRequest> {
        if !frame.input.is_interact_pressed() {
            return None;
        }
        if let Some(idx) = self.hovered_planet {
            Some(TransitionRequest::new(
                ViewId::PlanetOverhead,
                TransitionParams {
                    planet_idx: Some(idx),
                    ..Default::default()
                },
            ))
        } else if self.hovered_gate {
            Some(TransitionRequest::to(ViewId::Galaxy))
        } else {
            None
        }
    }

    fn update(&mut self, ctx: &mut GameContext, frame: &Frame) -> ViewResult {
        ctx.ship.update(frame.input, frame.dt, &mut ctx.rng);
        ctx.current_system_mut()
            .ok_or_else(|| FrameError::update("star system", "no current star system"))?
            .update_orbits();
        self.refresh_hover(ctx);
        Ok(None)
    }

    fn render(&self, ctx: &GameContext, frame: &Frame, surface: &mut dyn DrawSurface) -> Result<(), FrameError> {
        let system = ctx
            .current_system()
            .ok_or_else(|| FrameError::render("star system", "no current star system"))?;
        let center = screen_center();

        surface.fill(Color::BLACK);
        frame.starfield.draw(surface, frame.frame_count);

        draw::shaded_body(surface, center, system.star_radius as f32, system.star_color);
        draw::star_glow(surface, center, system.star_radius as f32, system.star_color);

        for (i, planet) in system.planets.iter().enumerate() {
            surface.draw_circle_outline(center, planet.orbit_radius as f32, 1.0, Color::DARK_GRAY);
            let Some(pos) = system.planet_position(i) else {
                continue;
            };
            if self.hovered_planet == Some(i) {
                surface.draw_circle_outline(pos, planet.radius as f32 + 7.0, 3.0, Color::YELLOW);
            }
            draw::shaded_body(surface, pos, planet.radius as f32, planet.color);
        }

        draw::jump_gate(surface, gate_rect(system), self.hovered_gate);

        ctx.ship.draw_particles(surface);
        ctx.ship.draw(surface);
        if ctx.ship.orientation_locked {
            draw::locked_cursor(surface, frame.input.mouse_position());
        }

        surface.render_text(
            &format!("System: {}", system.name),
            TextSize::Main,
            Color::WHITE,
            Vec2::new(10.0, 10.0),
        );
        if self.hovered_planet.is_some() || self.hovered_gate {
            surface.render_text(
                INTERACT_PROMPT,
                TextSize::Small,
                Color::YELLOW,
                Vec2::new(SCREEN_WIDTH / 2.0 - 70.0, SCREEN_HEIGHT - 30.0),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::FACING_UP;
    use crate::starfield::Starfield;
    use input::{ElementState, InputState, KeyCode};
    use rand::prelude::*;
    use renderer::ShapeBatch;

    fn starfield() -> Starfield {
        Starfield::generate(&mut StdRng::seed_from_u64(3))
    }

    fn frame<'a>(input: &'a InputState, starfield: &'a Starfield) -> Frame<'a> {
        Frame { input, dt: 1.0 / 60.0, frame_count: 1, starfield }
    }

    fn pressing_e() -> InputState {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::KeyE, ElementState::Pressed);
        input
    }

    #[test]
    fn arriving_through_the_gate_parks_at_the_gate() {
        let mut ctx = GameContext::from_seed(Some(7));
        ctx.ship.velocity = Vec2::new(3.0, 1.0);
        ctx.ship.angle = 45.0;
        let mut view = StarSystemView::new();
        let params = TransitionParams {
            from_hyperspace: true,
            ..Default::default()
        };
        assert!(view.on_enter(&mut ctx, &params).is_none());

        assert_eq!(ctx.ship.pos, ctx.systems[0].jump_gate);
        assert_eq!(ctx.ship.velocity, Vec2::ZERO);
        assert_eq!(ctx.ship.angle, FACING_UP);
        assert_eq!(ctx.last_visited_system.as_deref(), Some("Solara Prime"));
    }

    #[test]
    fn leaving_a_planet_parks_above_it() {
        let mut ctx = GameContext::from_seed(Some(7));
        let planet_pos = ctx.systems[0].planet_position(0).unwrap();
        let radius = ctx.systems[0].planets[0].radius as f32;
        let mut view = StarSystemView::new();
        let params = TransitionParams {
            from_planet_idx: Some(0),
            ..Default::default()
        };
        view.on_enter(&mut ctx, &params);

        assert_eq!(ctx.ship.pos.x, planet_pos.x);
        assert!(ctx.ship.pos.y < planet_pos.y - radius);
        assert_eq!(ctx.ship.angle, FACING_UP);
    }

    #[test]
    fn revisit_without_flags_keeps_pose() {
        let mut ctx = GameContext::from_seed(Some(7));
        let mut view = StarSystemView::new();
        view.on_enter(&mut ctx, &TransitionParams::default());
        let spawn = ctx.ship.pos;

        ctx.ship.pos = Vec2::new(123.0, 456.0);
        let mut again = StarSystemView::new();
        again.on_enter(&mut ctx, &TransitionParams::default());
        assert_ne!(spawn, ctx.ship.pos);
        assert_eq!(ctx.ship.pos, Vec2::new(123.0, 456.0));

        let reset = TransitionParams {
            reset_ship: true,
            ..Default::default()
        };
        again.on_enter(&mut ctx, &reset);
        assert_eq!(ctx.ship.pos, spawn);
    }

    #[test]
    fn unknown_return_planet_resets_ship() {
        let mut ctx = GameContext::from_seed(Some(7));
        let mut view = StarSystemView::new();
        view.on_enter(&mut ctx, &TransitionParams::default());
        let spawn = ctx.ship.pos;

        ctx.ship.pos = Vec2::new(123.0, 456.0);
        let back = TransitionParams {
            from_planet_idx: Some(99),
            ..Default::default()
        };
        assert!(view.on_enter(&mut ctx, &back).is_none());
        assert_eq!(ctx.ship.pos, spawn);
    }

    #[test]
    fn interact_on_hovered_planet_requests_overhead() {
        let mut ctx = GameContext::from_seed(Some(7));
        let stars = starfield();
        let mut view = StarSystemView::new();
        view.on_enter(&mut ctx, &TransitionParams::default());

        ctx.ship.pos = ctx.systems[0].planet_position(0).unwrap();
        view.refresh_hover(&ctx);
        assert_eq!(view.hovered_planet(), Some(0));
        assert!(!view.hovered_gate());

        let e = pressing_e();
        assert_eq!(
            view.handle_input(&mut ctx, &frame(&e, &stars)),
            Some(TransitionRequest::new(
                ViewId::PlanetOverhead,
                TransitionParams {
                    planet_idx: Some(0),
                    ..Default::default()
                }
            ))
        );
    }

    #[test]
    fn interact_on_gate_returns_to_map() {
        let mut ctx = GameContext::from_seed(Some(7));
        let stars = starfield();
        let mut view = StarSystemView::new();
        view.on_enter(
            &mut ctx,
            &TransitionParams {
                from_galaxy_map_entry: true,
                ..Default::default()
            },
        );
        ctx.systems[0].planets.clear();
        view.refresh_hover(&ctx);
        assert!(view.hovered_gate());

        let e = pressing_e();
        assert_eq!(
            view.handle_input(&mut ctx, &frame(&e, &stars)),
            Some(TransitionRequest::to(ViewId::Galaxy))
        );
        assert!(view.handle_input(&mut ctx, &frame(&InputState::new(), &stars)).is_none());
    }

    #[test]
    fn update_advances_orbits_and_renders() {
        let mut ctx = GameContext::from_seed(Some(7));
        let stars = starfield();
        let mut view = StarSystemView::new();
        view.on_enter(&mut ctx, &TransitionParams::default());
        let before: Vec<f32> = ctx.systems[0].planets.iter().map(|p| p.angle).collect();

        let input = InputState::new();
        view.update(&mut ctx, &frame(&input, &stars)).unwrap();
        let after: Vec<f32> = ctx.systems[0].planets.iter().map(|p| p.angle).collect();
        assert_ne!(before, after);

        let mut batch = ShapeBatch::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        view.render(&ctx, &frame(&input, &stars), &mut batch).unwrap();
        assert!(!batch.is_empty());
    }
}
