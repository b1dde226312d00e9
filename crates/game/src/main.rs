//! Galaxy Explorer: fly between star systems, orbit planets, and land on their surfaces.

mod character;
mod config;
mod context;
mod controller;
mod error;
mod events;
mod ship;
mod starfield;
mod views;

use anyhow::Result;
use context::GameContext;
use controller::ViewController;
use engine_core::{Color, Time, Vec2, SCREEN_HEIGHT, SCREEN_WIDTH};
use error::FrameError;
use input::InputState;
use rand::prelude::*;
use renderer::{DrawSurface, RenderError, Renderer, ShapeBatch, TextSize};
use starfield::Starfield;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Everything that lives for the lifetime of the window.
pub struct GameState {
    renderer: Renderer,
    input: InputState,
    time: Time,
    batch: ShapeBatch,
    controller: ViewController,
    config: config::GameConfig,
    running: bool,
}

impl GameState {
    async fn new(window: Arc<Window>, config: config::GameConfig) -> Result<Self> {
        let context = GameContext::from_seed(config.world_seed);
        let starfield = match config.world_seed {
            Some(seed) => Starfield::generate(&mut StdRng::seed_from_u64(seed)),
            None => Starfield::generate(&mut StdRng::from_entropy()),
        };
        let renderer = Renderer::new(window, config.vsync).await?;

        Ok(Self {
            renderer,
            input: InputState::new(),
            time: Time::new(config.target_fps),
            batch: ShapeBatch::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            controller: ViewController::new(context, starfield),
            config,
            running: true,
        })
    }

    /// One full frame: views, overlay, present, pacing.
    pub(crate) fn run_frame(&mut self) -> std::result::Result<(), FrameError> {
        self.time.update();
        self.batch.clear();

        self.controller
            .run_frame(&self.input, self.time.delta_seconds(), &mut self.batch)?;

        if self.config.show_fps {
            let text = format!("FPS: {:.0}", self.time.fps());
            let x = SCREEN_WIDTH - TextSize::Small.text_width(&text) - 10.0;
            self.batch.render_text(&text, TextSize::Small, Color::GRAY, Vec2::new(x, 10.0));
        }

        match self.renderer.render(&self.batch) {
            Ok(()) => {}
            Err(RenderError::Reconfigure(e)) => {
                log::warn!("Surface lost ({}), reconfiguring", e);
                self.renderer.reconfigure();
            }
            Err(RenderError::Timeout) => log::debug!("Frame timed out, skipping"),
            Err(e @ RenderError::Fatal(_)) => return Err(FrameError::Present(e.to_string())),
        }

        self.input.clear_frame_events();

        if !self.config.vsync {
            let budget = self.time.remaining_budget();
            if !budget.is_zero() {
                std::thread::sleep(budget);
            }
        }

        if !self.controller.is_running() {
            self.running = false;
        }
        Ok(())
    }
}

/// Application handler for winit.
struct App {
    state: Option<GameState>,
}

impl App {
    fn new() -> Self {
        Self { state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_none() {
            let config = config::GameConfig::load();
            let window_attrs = Window::default_attributes()
                .with_title("Galaxy Explorer")
                .with_inner_size(winit::dpi::LogicalSize::new(config.window_width, config.window_height));

            let window = match event_loop.create_window(window_attrs) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            match pollster::block_on(GameState::new(window.clone(), config)) {
                Ok(s) => {
                    self.state = Some(s);
                    window.request_redraw();
                }
                Err(e) => {
                    log::error!("Failed to initialize game: {}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(state) = &mut self.state {
            if state.handle_window_event(event) || !state.running {
                log::info!(
                    "Shutting down after {} frames ({:.1}s)",
                    state.time.frame_count(),
                    state.time.elapsed_seconds()
                );
                event_loop.exit();
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║                     GALAXY EXPLORER                      ║");
    println!("╠══════════════════════════════════════════════════════════╣");
    println!("║  CONTROLS:                                               ║");
    println!("║    Mouse      - Steer ship    │  Left Click - Pick system ║");
    println!("║    W / S      - Thrust/brake  │  A / D      - Strafe/walk ║");
    println!("║    Shift      - Lock heading  │  Space      - Jump        ║");
    println!("║    E          - Interact      │  Escape     - Quit        ║");
    println!("╚══════════════════════════════════════════════════════════╝");

    log::info!("Starting Galaxy Explorer");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    Ok(())
}
