//! Screen-space geometry: axis-aligned rects and angle helpers.
//!
//! Screen space is y-down. Angles are in degrees and measured from +X toward +Y,
//! so -90° points up the screen and +90° points down.

use glam::Vec2;

/// Axis-aligned rectangle, stored as top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect of the given size centered on `center`.
    pub fn from_center(center: Vec2, w: f32, h: f32) -> Self {
        Self {
            x: center.x - w / 2.0,
            y: center.y - h / 2.0,
            w,
            h,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.x = center.x - self.w / 2.0;
        self.y = center.y - self.h / 2.0;
    }

    pub fn set_center_x(&mut self, cx: f32) {
        self.x = cx - self.w / 2.0;
    }

    pub fn set_center_y(&mut self, cy: f32) {
        self.y = cy - self.h / 2.0;
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    /// Grow (or shrink, for negative values) by `dw`/`dh` in total, keeping the center fixed.
    pub fn inflate(&self, dw: f32, dh: f32) -> Rect {
        Rect {
            x: self.x - dw / 2.0,
            y: self.y - dh / 2.0,
            w: self.w + dw,
            h: self.h + dh,
        }
    }

    /// Copy moved by `(dx, dy)`.
    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Strict overlap test; rects that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Half-open containment: left/top edges are inside, right/bottom are not.
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}

/// Wrap an angle into `[0, 360)`.
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Point at `angle_deg` on a circle of `radius` around `center`.
pub fn point_on_circle(center: Vec2, angle_deg: f32, radius: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    center + Vec2::new(rad.cos(), rad.sin()) * radius
}

/// Rotate a vector by `angle_deg` (from +X toward +Y).
pub fn rotate_deg(v: Vec2, angle_deg: f32) -> Vec2 {
    Vec2::from_angle(angle_deg.to_radians()).rotate(v)
}

/// Direction angle of `v` in `[0, 360)`.
pub fn angle_of(v: Vec2) -> f32 {
    wrap_degrees(v.y.atan2(v.x).to_degrees())
}

/// Whether `angle` lies in the half-open arc `[start, end)`, wrapping through 0 when `start > end`.
pub fn angle_in_arc(angle: f32, start: f32, end: f32) -> bool {
    if start <= end {
        start <= angle && angle < end
    } else {
        angle >= start || angle < end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_and_center() {
        let mut r = Rect::new(10.0, 20.0, 40.0, 60.0);
        assert_eq!(r.right(), 50.0);
        assert_eq!(r.bottom(), 80.0);
        assert_eq!(r.center(), Vec2::new(30.0, 50.0));
        r.set_center(Vec2::new(0.0, 0.0));
        assert_eq!(r.left(), -20.0);
        assert_eq!(r.top(), -30.0);
        r.set_bottom(100.0);
        assert_eq!(r.top(), 40.0);
    }

    #[test]
    fn rect_intersection_excludes_touching_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&b.translate(-1.0, 0.0)));
        assert!(a.inflate(2.0, 2.0).intersects(&b));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(Vec2::new(0.0, 0.0)));
        assert!(!r.contains_point(Vec2::new(10.0, 5.0)));
    }

    #[test]
    fn wrap_degrees_range() {
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        let tiny = wrap_degrees(-1e-7);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn point_on_circle_is_y_down() {
        let c = Vec2::new(100.0, 100.0);
        let below = point_on_circle(c, 90.0, 10.0);
        assert!((below.x - 100.0).abs() < 1e-4);
        assert!((below.y - 110.0).abs() < 1e-4);
    }

    #[test]
    fn rotate_then_measure_angle() {
        let v = rotate_deg(Vec2::X, 45.0);
        assert!((angle_of(v) - 45.0).abs() < 1e-3);
        let back = rotate_deg(v, -45.0);
        assert!((back - Vec2::X).length() < 1e-5);
    }

    #[test]
    fn arc_wraps_through_zero() {
        assert!(angle_in_arc(10.0, 0.0, 90.0));
        assert!(!angle_in_arc(90.0, 0.0, 90.0));
        assert!(angle_in_arc(350.0, 300.0, 20.0));
        assert!(angle_in_arc(5.0, 300.0, 20.0));
        assert!(!angle_in_arc(150.0, 300.0, 20.0));
    }
}
