//! Window event handling for GameState.

use engine_core::{Vec2, SCREEN_HEIGHT, SCREEN_WIDTH};
use winit::event::WindowEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

impl crate::GameState {
    /// Handle a window event. Returns true if the app should exit.
    pub(crate) fn handle_window_event(&mut self, event: WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                self.input.request_quit();
                self.running = false;
                true
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(size);
                false
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.input.process_keyboard(key, event.state);
                    if key == KeyCode::Escape && event.state.is_pressed() {
                        self.input.request_quit();
                    }
                }
                false
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.process_mouse_button(button, state);
                false
            }
            WindowEvent::CursorMoved { position, .. } => {
                // The play-field is stretched over the window; map back to play-field pixels.
                let (w, h) = self.renderer.dimensions();
                let x = position.x as f32 * SCREEN_WIDTH / w.max(1) as f32;
                let y = position.y as f32 * SCREEN_HEIGHT / h.max(1) as f32;
                self.input.process_cursor_position(Vec2::new(x, y));
                false
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.run_frame() {
                    log::error!("Frame failed: {}", e);
                    self.running = false;
                    return true;
                }
                self.renderer.window.request_redraw();
                false
            }
            _ => false,
        }
    }
}
