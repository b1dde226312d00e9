//! Per-frame failures. Any of these stops the run loop.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("update failed in {view}: {reason}")]
    Update { view: &'static str, reason: String },

    #[error("render failed in {view}: {reason}")]
    Render { view: &'static str, reason: String },

    #[error("could not present frame: {0}")]
    Present(String),
}

impl FrameError {
    pub fn update(view: &'static str, reason: impl Into<String>) -> Self {
        FrameError::Update { view, reason: reason.into() }
    }

    pub fn render(view: &'static str, reason: impl Into<String>) -> Self {
        FrameError::Render { view, reason: reason.into() }
    }
}
