//! Galaxy map: pick a star system to fly to.

use super::{Frame, TransitionParams, TransitionRequest, ViewId, ViewResult, ViewState};
use crate::context::GameContext;
use crate::error::FrameError;
use engine_core::{Color, Vec2, SCREEN_HEIGHT};
use procgen::system_at;
use renderer::{DrawSurface, TextSize};

const ICON_RADIUS: f32 = 8.0;
const HOVERED_ICON_RADIUS: f32 = 14.0;

#[derive(Debug, Default)]
pub struct GalaxyView {
    hovered: Option<usize>,
    /// Set once a jump has been requested; the map stops reacting afterwards.
    zoom_target: Option<usize>,
}

impl GalaxyView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }
}

impl ViewState for GalaxyView {
    fn id(&self) -> ViewId {
        ViewId::Galaxy
    }

    fn handle_input(&mut self, ctx: &mut GameContext, frame: &Frame) -> Option<TransitionRequest> {
        if !frame.input.is_click() || self.zoom_target.is_some() {
            return None;
        }
        let idx = system_at(&ctx.systems, frame.input.mouse_position())?;
        if idx == ctx.current_star_system_idx {
            Some(TransitionRequest::new(
                ViewId::StarSystem,
                TransitionParams {
                    system_idx: Some(idx),
                    from_galaxy_map_entry: true,
                    ..Default::default()
                },
            ))
        } else {
            self.zoom_target = Some(idx);
            Some(TransitionRequest::new(
                ViewId::Hyperspace,
                TransitionParams {
                    target_system_idx: Some(idx),
                    ..Default::default()
                },
            ))
        }
    }

    fn update(&mut self, ctx: &mut GameContext, frame: &Frame) -> ViewResult {
        self.hovered = match self.zoom_target {
            None => system_at(&ctx.systems, frame.input.mouse_position()),
            Some(_) => None,
        };
        Ok(None)
    }

    fn render(&self, ctx: &GameContext, frame: &Frame, surface: &mut dyn DrawSurface) -> Result<(), FrameError> {
        let current = ctx
            .current_system()
            .ok_or_else(|| FrameError::render("galaxy map", "no current star system"))?;

        surface.fill(Color::BLACK);
        surface.render_text("GALAXY MAP", TextSize::Main, Color::WHITE, Vec2::new(10.0, 10.0));

        for (i, system) in ctx.systems.iter().enumerate() {
            let hovered = self.hovered == Some(i);
            let radius = if hovered { HOVERED_ICON_RADIUS } else { ICON_RADIUS };
            if i == ctx.current_star_system_idx {
                surface.draw_circle_outline(system.galaxy_position, radius + 6.0, 3.0, Color::GREEN);
            }
            surface.draw_circle(system.galaxy_position, radius, system.star_color);
            if hovered {
                surface.draw_circle(system.galaxy_position, (radius / 2.0).floor(), Color::WHITE);
            }
        }

        if let Some(system) = self.hovered.and_then(|i| ctx.systems.get(i)) {
            let mouse = frame.input.mouse_position();
            surface.render_text(&system.name, TextSize::Small, Color::WHITE, mouse + Vec2::new(15.0, 0.0));
        }

        surface.render_text(
            &format!("Current: {}", current.name),
            TextSize::Main,
            Color::GREEN,
            Vec2::new(10.0, SCREEN_HEIGHT - 40.0),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::starfield::Starfield;
    use input::{ElementState, InputState, MouseButton};
    use rand::prelude::*;
    use renderer::ShapeBatch;

    fn click_at(pos: Vec2) -> InputState {
        let mut input = InputState::new();
        input.process_cursor_position(pos);
        input.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        input
    }

    fn starfield() -> Starfield {
        Starfield::generate(&mut StdRng::seed_from_u64(1))
    }

    fn frame<'a>(input: &'a InputState, starfield: &'a Starfield) -> Frame<'a> {
        Frame { input, dt: 1.0 / 60.0, frame_count: 1, starfield }
    }

    #[test]
    fn clicking_current_system_enters_it() {
        let mut ctx = GameContext::from_seed(Some(1));
        let stars = starfield();
        let input = click_at(ctx.systems[0].galaxy_position + Vec2::new(3.0, 3.0));
        let mut view = GalaxyView::new();

        let request = view.handle_input(&mut ctx, &frame(&input, &stars));
        assert_eq!(
            request,
            Some(TransitionRequest::new(
                ViewId::StarSystem,
                TransitionParams {
                    system_idx: Some(0),
                    from_galaxy_map_entry: true,
                    ..Default::default()
                }
            ))
        );
    }

    #[test]
    fn clicking_other_system_jumps_once() {
        let mut ctx = GameContext::from_seed(Some(1));
        let stars = starfield();
        let input = click_at(ctx.systems[2].galaxy_position);
        let mut view = GalaxyView::new();

        let request = view.handle_input(&mut ctx, &frame(&input, &stars));
        assert_eq!(request.as_ref().map(|r| &r.target), Some(&ViewId::Hyperspace));
        assert_eq!(request.and_then(|r| r.params.target_system_idx), Some(2));

        // Further clicks are ignored once a jump is underway.
        let again = click_at(ctx.systems[0].galaxy_position);
        assert!(view.handle_input(&mut ctx, &frame(&again, &stars)).is_none());
        view.update(&mut ctx, &frame(&again, &stars)).unwrap();
        assert_eq!(view.hovered(), None);
    }

    #[test]
    fn clicks_on_empty_space_do_nothing() {
        let mut ctx = GameContext::from_seed(Some(1));
        let stars = starfield();
        let input = click_at(Vec2::new(980.0, 20.0));
        let mut view = GalaxyView::new();
        assert!(view.handle_input(&mut ctx, &frame(&input, &stars)).is_none());
    }

    #[test]
    fn hover_tracks_mouse_and_renders() {
        let mut ctx = GameContext::from_seed(Some(1));
        let stars = starfield();
        let mut input = InputState::new();
        input.process_cursor_position(ctx.systems[4].galaxy_position);
        let mut view = GalaxyView::new();
        view.update(&mut ctx, &frame(&input, &stars)).unwrap();
        assert_eq!(view.hovered(), Some(4));

        let mut batch = ShapeBatch::new(1000.0, 750.0);
        view.render(&ctx, &frame(&input, &stars), &mut batch).unwrap();
        assert!(!batch.is_empty());
    }
}
