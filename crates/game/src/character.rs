//! The on-foot explorer of the ground view.
//!
//! `pos.x` is a world coordinate; `rect` is the on-screen body, offset by `world_scroll`.
//! Movement is per frame.

use engine_core::{Color, Rect, Vec2, SCREEN_HEIGHT, SCREEN_WIDTH};
use input::InputState;
use procgen::ground_line;
use renderer::DrawSurface;

pub const BODY_WIDTH: f32 = 20.0;
pub const BODY_HEIGHT: f32 = 40.0;
pub const WALK_SPEED: f32 = 4.0;
pub const JUMP_VELOCITY: f32 = -12.0;
pub const GRAVITY: f32 = 0.6;
pub const TERMINAL_VELOCITY: f32 = 10.0;
/// Screen distance from either edge at which the world starts scrolling instead.
pub const SCROLL_THRESHOLD: f32 = 250.0;

#[derive(Debug, Clone)]
pub struct PlayerCharacter {
    pub pos: Vec2,
    pub velocity: Vec2,
    pub on_ground: bool,
    /// How far the world has shifted right on screen (negative once the player walked right).
    pub world_scroll: f32,
    pub rect: Rect,
}

impl Default for PlayerCharacter {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerCharacter {
    pub fn new() -> Self {
        let pos = Vec2::new((SCREEN_WIDTH / 2.0).floor(), SCREEN_HEIGHT - 100.0);
        Self {
            pos,
            velocity: Vec2::ZERO,
            on_ground: false,
            world_scroll: 0.0,
            rect: Rect::from_center(pos, BODY_WIDTH, BODY_HEIGHT),
        }
    }

    /// Landing spot: just right of the left scroll threshold, scroll cleared.
    pub fn reset_position(&mut self) {
        self.world_scroll = 0.0;
        self.pos = Vec2::new(SCROLL_THRESHOLD + 10.0, SCREEN_HEIGHT - 100.0);
        self.velocity = Vec2::ZERO;
        self.rect.set_center(Vec2::new(self.pos.x + self.world_scroll, self.pos.y));
        self.on_ground = false;
    }

    pub fn update(&mut self, input: &InputState, platforms: &[Rect]) {
        let mut dx = 0.0;
        if input.is_left_held() {
            dx = -WALK_SPEED;
        }
        if input.is_right_held() {
            dx = WALK_SPEED;
        }

        self.velocity.y = (self.velocity.y + GRAVITY).min(TERMINAL_VELOCITY);
        if input.is_jump_held() && self.on_ground {
            self.velocity.y = JUMP_VELOCITY;
        }

        self.pos.y += self.velocity.y;
        self.rect.set_center_y(self.pos.y);
        self.on_ground = false;

        let ground = ground_line();
        if self.rect.bottom() > ground {
            self.rect.set_bottom(ground);
            self.pos.y = self.rect.center().y;
            self.velocity.y = 0.0;
            self.on_ground = true;
        }

        self.collide_vertical(platforms);
        self.move_horizontal(dx);
        self.collide_horizontal(dx, platforms);
    }

    /// One-way landing on platform tops, plus head bumps on their undersides.
    fn collide_vertical(&mut self, platforms: &[Rect]) {
        let h = self.rect.h;
        let world_rect = Rect::new(self.pos.x - self.rect.w / 2.0, self.rect.top(), self.rect.w, h);
        for platform in platforms.iter().filter(|p| world_rect.intersects(p)) {
            if self.velocity.y >= 0.0 {
                let prev_bottom = self.pos.y + h / 2.0 - self.velocity.y;
                if prev_bottom <= platform.top() + 1.0 && self.rect.bottom() >= platform.top() {
                    self.rect.set_bottom(platform.top());
                    self.pos.y = self.rect.center().y;
                    self.velocity.y = 0.0;
                    self.on_ground = true;
                    break;
                }
            } else {
                let prev_top = self.pos.y - h / 2.0 - self.velocity.y;
                if prev_top >= platform.bottom() - 1.0 && self.rect.top() <= platform.bottom() {
                    self.rect.set_top(platform.bottom());
                    self.pos.y = self.rect.center().y;
                    self.velocity.y = 0.0;
                    break;
                }
            }
        }
    }

    fn move_horizontal(&mut self, dx: f32) {
        let next_x = self.pos.x + dx;
        let screen_x = next_x + self.world_scroll;
        let mut scroll_change = 0.0;
        if dx > 0.0 && screen_x > SCREEN_WIDTH - SCROLL_THRESHOLD {
            scroll_change = (SCREEN_WIDTH - SCROLL_THRESHOLD) - screen_x;
        } else if dx < 0.0 && screen_x < SCROLL_THRESHOLD {
            scroll_change = SCROLL_THRESHOLD - screen_x;
        }
        self.pos.x = next_x;
        self.world_scroll += scroll_change;
        self.rect.set_center_x(self.pos.x + self.world_scroll);
    }

    fn collide_horizontal(&mut self, dx: f32, platforms: &[Rect]) {
        let probe = self.rect.inflate(2.0, -4.0);
        for platform in platforms {
            let on_screen = platform.translate(self.world_scroll, 0.0);
            if !probe.intersects(&on_screen) {
                continue;
            }
            let overlap = self.rect.bottom().min(on_screen.bottom()) - self.rect.top().max(on_screen.top());
            if overlap <= 5.0 {
                continue;
            }
            if dx > 0.0 && self.rect.right() > on_screen.left() {
                self.rect.set_right(on_screen.left());
                self.pos.x = self.rect.center().x - self.world_scroll;
                break;
            } else if dx < 0.0 && self.rect.left() < on_screen.right() {
                self.rect.set_left(on_screen.right());
                self.pos.x = self.rect.center().x - self.world_scroll;
                break;
            }
        }
    }

    /// Whether the body touches the landed ship (given in world coordinates).
    pub fn overlaps_ship(&self, landed_ship: &Rect) -> bool {
        self.rect.intersects(&landed_ship.translate(self.world_scroll, 0.0))
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.draw_rect(self.rect, Color::GREEN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input::{ElementState, KeyCode};

    fn holding(keys: &[KeyCode]) -> InputState {
        let mut input = InputState::new();
        for key in keys {
            input.process_keyboard(*key, ElementState::Pressed);
        }
        input
    }

    fn landed() -> PlayerCharacter {
        let mut c = PlayerCharacter::new();
        c.reset_position();
        let idle = InputState::new();
        for _ in 0..60 {
            c.update(&idle, &[]);
        }
        c
    }

    #[test]
    fn reset_places_near_left_threshold() {
        let mut c = PlayerCharacter::new();
        c.world_scroll = -300.0;
        c.velocity = Vec2::new(0.0, 5.0);
        c.reset_position();
        assert_eq!(c.pos, Vec2::new(260.0, SCREEN_HEIGHT - 100.0));
        assert_eq!(c.world_scroll, 0.0);
        assert_eq!(c.rect.center().x, 260.0);
        assert!(!c.on_ground);
    }

    #[test]
    fn falls_onto_ground_line() {
        let c = landed();
        assert!(c.on_ground);
        assert_eq!(c.rect.bottom(), ground_line());
        assert_eq!(c.velocity.y, 0.0);
    }

    #[test]
    fn jumps_only_from_ground() {
        let mut c = landed();
        let jump = holding(&[KeyCode::Space]);
        c.update(&jump, &[]);
        assert!(c.velocity.y < 0.0);
        let rising = c.velocity.y;
        c.update(&jump, &[]);
        // Still airborne: gravity only.
        assert!((c.velocity.y - (rising + GRAVITY)).abs() < 1e-5);
    }

    #[test]
    fn lands_on_platform_from_above() {
        let mut c = PlayerCharacter::new();
        c.reset_position();
        let platform = Rect::new(200.0, 680.0, 200.0, 20.0);
        let idle = InputState::new();
        let mut landed_on_platform = false;
        for _ in 0..60 {
            c.update(&idle, &[platform]);
            assert!(c.rect.bottom() <= platform.top() + 2.0);
            landed_on_platform |= c.on_ground;
        }
        assert!(landed_on_platform);
    }

    #[test]
    fn bumps_head_on_underside() {
        let mut c = landed();
        let ceiling = Rect::new(200.0, 600.0, 200.0, 20.0);
        let jump = holding(&[KeyCode::Space]);
        let mut lowest_top = f32::MAX;
        for _ in 0..20 {
            c.update(&jump, &[ceiling]);
            lowest_top = lowest_top.min(c.rect.top());
        }
        assert!(lowest_top >= ceiling.bottom());
    }

    #[test]
    fn walking_right_scrolls_world() {
        let mut c = landed();
        let walk = holding(&[KeyCode::KeyD]);
        for _ in 0..200 {
            c.update(&walk, &[]);
        }
        assert!(c.world_scroll < 0.0);
        assert_eq!(c.rect.center().x, SCREEN_WIDTH - SCROLL_THRESHOLD);
        assert_eq!(c.pos.x, 260.0 + 200.0 * WALK_SPEED);
    }

    #[test]
    fn platform_side_blocks_walking() {
        let mut c = landed();
        let wall = Rect::new(300.0, 600.0, 100.0, 100.0);
        let walk = holding(&[KeyCode::KeyD]);
        for _ in 0..30 {
            c.update(&walk, &[wall]);
        }
        assert_eq!(c.rect.right(), wall.left());
    }

    #[test]
    fn ship_overlap_uses_scroll() {
        let mut c = landed();
        let ship = Rect::new(160.0, ground_line() - 60.0, 45.0, 60.0);
        assert!(!c.overlaps_ship(&ship));
        c.world_scroll = 80.0;
        assert!(c.overlaps_ship(&ship));
    }
}
