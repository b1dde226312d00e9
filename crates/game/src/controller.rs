//! Owns the active view and runs the frame protocol: input, update, render, then at most
//! one view switch.

use crate::context::GameContext;
use crate::error::FrameError;
use crate::starfield::Starfield;
use crate::views::{Frame, TransitionParams, TransitionRequest, View, ViewId};
use input::InputState;
use renderer::DrawSurface;

pub struct ViewController {
    context: GameContext,
    view: View,
    /// Latest request of the frame; applied after rendering.
    pending: Option<TransitionRequest>,
    starfield: Starfield,
    frame_count: u64,
    running: bool,
}

impl ViewController {
    /// Start on the galaxy map.
    pub fn new(mut context: GameContext, starfield: Starfield) -> Self {
        let mut view = View::Galaxy(Default::default());
        let pending = view.state_mut().on_enter(&mut context, &TransitionParams::default());
        Self {
            context,
            view,
            pending,
            starfield,
            frame_count: 0,
            running: true,
        }
    }

    pub fn current(&self) -> ViewId {
        self.view.id()
    }

    pub fn context(&self) -> &GameContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut GameContext {
        &mut self.context
    }

    pub fn pending(&self) -> Option<&TransitionRequest> {
        self.pending.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// One frame. Any error also stops the controller.
    pub fn run_frame(&mut self, input: &InputState, dt: f32, surface: &mut dyn DrawSurface) -> Result<(), FrameError> {
        let result = self.step(input, dt, surface);
        if result.is_err() {
            self.running = false;
        }
        result
    }

    fn step(&mut self, input: &InputState, dt: f32, surface: &mut dyn DrawSurface) -> Result<(), FrameError> {
        self.frame_count += 1;
        {
            let frame = Frame {
                input,
                dt,
                frame_count: self.frame_count,
                starfield: &self.starfield,
            };
            if let Some(request) = self.view.state_mut().handle_input(&mut self.context, &frame) {
                self.pending = Some(request);
            }
            if let Some(request) = self.view.state_mut().update(&mut self.context, &frame)? {
                self.pending = Some(request);
            }
            self.view.state().render(&self.context, &frame, surface)?;
        }

        if let Some(request) = self.pending.take() {
            self.transition_to(request);
        }
        if input.quit_requested() {
            log::info!("Quit requested");
            self.running = false;
        }
        Ok(())
    }

    /// Leave the current view and enter the requested one. Unknown targets land on the galaxy map.
    pub fn transition_to(&mut self, request: TransitionRequest) {
        let TransitionRequest { target, params } = request;
        log::info!("Transitioning from {} to {} with params {}", self.view.id(), target, params);

        self.view.state_mut().on_exit(&mut self.context);

        let (target, params, next) = match View::for_id(&target) {
            Some(next) => (target, params, next),
            None => {
                log::error!("Unknown view {}, falling back to {}", target, ViewId::Galaxy);
                (ViewId::Galaxy, TransitionParams::default(), View::Galaxy(Default::default()))
            }
        };

        self.context.apply_transition(&target, &params);
        self.view = next;
        self.pending = self.view.state_mut().on_enter(&mut self.context, &params);
    }
}
