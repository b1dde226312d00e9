//! Core engine types and utilities for Galaxy Explorer.
//!
//! This crate provides the foundational types used across all engine systems:
//! - Screen-space geometry (rects, angles, points on circles)
//! - RGBA colors and the shared palette
//! - Frame time management

pub mod color;
pub mod geometry;
pub mod time;

pub use color::*;
pub use geometry::*;
pub use time::*;

// Re-export commonly used types
pub use glam::Vec2;

/// Logical play-field width. Procedural placement and all views work in this space.
pub const SCREEN_WIDTH: f32 = 1000.0;
/// Logical play-field height.
pub const SCREEN_HEIGHT: f32 = 750.0;
/// Frames per second the simulation is tuned for (orbit speeds are per frame).
pub const TARGET_FPS: u32 = 60;

/// Center of the play-field; the star of the active system sits here.
pub fn screen_center() -> Vec2 {
    Vec2::new((SCREEN_WIDTH / 2.0).floor(), (SCREEN_HEIGHT / 2.0).floor())
}
