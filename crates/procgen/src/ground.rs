//! Side-on ground level layout: landed ship, platforms, and parallax mountains.
//!
//! Everything here is in world coordinates; the ground view applies the character's
//! scroll offset when drawing and testing collisions.

use engine_core::{Rect, SCREEN_HEIGHT, SCREEN_WIDTH};
use rand::prelude::*;

/// Height of the ground strip at the bottom of the screen.
pub const GROUND_HEIGHT: f32 = 50.0;
pub const LANDED_SHIP_WIDTH: f32 = 45.0;
pub const LANDED_SHIP_HEIGHT: f32 = 60.0;
/// The landed ship sits this far left of the character's landing spot.
pub const LANDED_SHIP_OFFSET: f32 = 100.0;
pub const PLATFORM_HEIGHT: f32 = 20.0;
/// Width of the band, in screens, that platforms and mountains are scattered over.
pub const LEVEL_SPAN_SCREENS: f32 = 5.0;

/// Y coordinate of the ground surface.
pub fn ground_line() -> f32 {
    SCREEN_HEIGHT - GROUND_HEIGHT
}

/// A background mountain. Smaller depth is nearer and scrolls faster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mountain {
    pub rect: Rect,
    pub depth: f32,
}

impl Mountain {
    /// Screen-space rect for the given world scroll.
    pub fn scrolled(&self, scroll: f32) -> Rect {
        self.rect.translate((scroll * (1.0 - self.depth)).trunc(), 0.0)
    }
}

/// A generated ground level.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundLayout {
    pub landed_ship: Rect,
    pub platforms: Vec<Rect>,
    /// Sorted far to near.
    pub mountains: Vec<Mountain>,
}

impl GroundLayout {
    /// Lay out a level around a character landing at world x `landing_x`.
    pub fn generate(landing_x: f32, rng: &mut impl Rng) -> Self {
        let ship_x = landing_x - LANDED_SHIP_OFFSET;
        let landed_ship = Rect::new(
            ship_x,
            ground_line() - LANDED_SHIP_HEIGHT,
            LANDED_SHIP_WIDTH,
            LANDED_SHIP_HEIGHT,
        );
        let keep_clear = landed_ship.inflate(40.0, 40.0);

        let half_span = SCREEN_WIDTH * LEVEL_SPAN_SCREENS / 2.0;
        let x_min = (ship_x - half_span) as i32;
        let x_max = (ship_x + half_span) as i32;

        let platform_count = rng.gen_range(15..=40);
        let mut platforms = Vec::with_capacity(platform_count);
        for _ in 0..platform_count {
            let x = rng.gen_range(x_min..=x_max) as f32;
            let y = rng.gen_range((SCREEN_HEIGHT * 0.4) as i32..=(SCREEN_HEIGHT - 100.0) as i32) as f32;
            let w = rng.gen_range(80..=250) as f32;
            let platform = Rect::new(x, y, w, PLATFORM_HEIGHT);
            if !platform.intersects(&keep_clear) {
                platforms.push(platform);
            }
        }

        let mountain_count = rng.gen_range(15..=40);
        let mut mountains = Vec::with_capacity(mountain_count);
        for _ in 0..mountain_count {
            let x = rng.gen_range(x_min..=x_max) as f32;
            let h = rng.gen_range(50..=(SCREEN_HEIGHT / 2.0) as i32) as f32;
            let w = (h * rng.gen_range(1.5..=3.5)).trunc();
            mountains.push(Mountain {
                rect: Rect::new(x, ground_line() - h, w, h),
                depth: rng.gen_range(0.1..=0.7),
            });
        }
        mountains.sort_by(|a, b| b.depth.partial_cmp(&a.depth).unwrap_or(std::cmp::Ordering::Equal));

        log::debug!(
            "Ground layout: {} platforms, {} mountains",
            platforms.len(),
            mountains.len()
        );

        Self {
            landed_ship,
            platforms,
            mountains,
        }
    }
}
