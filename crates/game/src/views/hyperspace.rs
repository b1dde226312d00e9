//! Timed streak animation between two star systems.

use super::{Frame, TransitionParams, TransitionRequest, ViewId, ViewResult, ViewState};
use crate::context::GameContext;
use crate::error::FrameError;
use engine_core::{screen_center, Color, Vec2, SCREEN_HEIGHT, SCREEN_WIDTH};
use rand::prelude::*;
use renderer::{DrawSurface, TextSize};
use std::f32::consts::PI;

/// Length of the jump in frames.
pub const HYPERSPACE_DURATION: u32 = 90;
const STREAK_COUNT: usize = 150;
const STREAK_COLORS: [Color; 3] = [Color::WHITE, Color::LIGHT_BLUE, Color::rgb(200, 200, 255)];

#[derive(Debug, Default)]
pub struct HyperspaceView {
    timer: u32,
    target_system_idx: Option<usize>,
}

impl HyperspaceView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// Fraction of the jump done, 0..=1.
    pub fn progress(&self) -> f32 {
        (self.timer as f32 / HYPERSPACE_DURATION as f32).min(1.0)
    }
}

impl ViewState for HyperspaceView {
    fn id(&self) -> ViewId {
        ViewId::Hyperspace
    }

    fn on_enter(&mut self, _ctx: &mut GameContext, params: &TransitionParams) -> Option<TransitionRequest> {
        self.timer = 0;
        if params.target_system_idx.is_some() {
            self.target_system_idx = params.target_system_idx;
        }
        None
    }

    fn update(&mut self, ctx: &mut GameContext, _frame: &Frame) -> ViewResult {
        self.timer += 1;
        if self.timer < HYPERSPACE_DURATION {
            return Ok(None);
        }
        let request = match self.target_system_idx.filter(|&idx| idx < ctx.systems.len()) {
            Some(idx) => TransitionRequest::new(
                ViewId::StarSystem,
                TransitionParams {
                    system_idx: Some(idx),
                    reset_ship: true,
                    from_hyperspace: true,
                    ..Default::default()
                },
            ),
            None => {
                log::warn!("Hyperspace target {:?} is not a known system, returning to map", self.target_system_idx);
                TransitionRequest::to(ViewId::Galaxy)
            }
        };
        Ok(Some(request))
    }

    fn render(&self, _ctx: &GameContext, frame: &Frame, surface: &mut dyn DrawSurface) -> Result<(), FrameError> {
        surface.fill(Color::BLACK);

        let progress = self.progress();
        let eased = (1.0 - (progress * PI).cos()) / 2.0;
        let center = screen_center();
        // Streaks are random each frame but reproducible for a given frame.
        let mut rng = StdRng::seed_from_u64(frame.frame_count);

        for _ in 0..STREAK_COUNT {
            let direction = Vec2::from_angle(rng.gen_range(0.0f32..360.0).to_radians());
            let start_dist = ((1.0 - eased) * rng.gen_range(0.0..=SCREEN_WIDTH * 0.1)).max(0.0);
            let start = center + direction * start_dist;
            let length = eased * SCREEN_WIDTH * 1.5 * rng.gen_range(0.1..=1.0);
            let color = STREAK_COLORS[rng.gen_range(0..STREAK_COLORS.len())];
            if length > 2.0 {
                let width = (eased * 3.0 + 1.0).trunc().max(1.0);
                surface.draw_line(start, start + direction * length, width, color);
            }
        }

        let overlay_alpha = ((progress * PI).sin() * 150.0) as u8;
        if overlay_alpha > 0 {
            surface.fill(Color::BLACK.with_alpha(overlay_alpha));
        }

        surface.render_text(
            "HYPERSPACE TRAVEL",
            TextSize::Main,
            Color::WHITE,
            Vec2::new(SCREEN_WIDTH / 2.0 - 100.0, SCREEN_HEIGHT / 2.0 - 20.0),
        );
        Ok(())
    }
}
