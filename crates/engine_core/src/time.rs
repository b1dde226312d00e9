//! Time management for the game loop.

use std::time::{Duration, Instant};

/// Manages frame timing, delta time, and the frame-rate cap.
#[derive(Debug)]
pub struct Time {
    /// Time when the loop started.
    start_time: Instant,
    /// Time of the last frame.
    last_frame: Instant,
    /// Duration of the last frame.
    delta: Duration,
    /// Frame count since start.
    frame_count: u64,
    /// Minimum duration of one frame (1 / target fps).
    frame_budget: Duration,
}

impl Default for Time {
    fn default() -> Self {
        Self::new(crate::TARGET_FPS)
    }
}

impl Time {
    /// Create a new time manager capped at `target_fps` (0 disables the cap).
    pub fn new(target_fps: u32) -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_frame: now,
            delta: Duration::ZERO,
            frame_count: 0,
            frame_budget: frame_budget(target_fps),
        }
    }

    /// Update timing at the start of a new frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_frame;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Get the delta time in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get total elapsed time in seconds.
    pub fn elapsed_seconds(&self) -> f32 {
        self.start_time.elapsed().as_secs_f32()
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Time left in this frame's budget; zero once the budget is spent.
    pub fn remaining_budget(&self) -> Duration {
        self.frame_budget.saturating_sub(self.last_frame.elapsed())
    }

    /// Get the current FPS (averaged over last frame).
    pub fn fps(&self) -> f32 {
        if self.delta.as_secs_f32() > 0.0 {
            1.0 / self.delta.as_secs_f32()
        } else {
            0.0
        }
    }
}

fn frame_budget(fps: u32) -> Duration {
    if fps == 0 {
        Duration::ZERO
    } else {
        Duration::from_secs_f64(1.0 / fps as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_counts_frames() {
        let mut time = Time::new(60);
        time.update();
        time.update();
        assert_eq!(time.frame_count(), 2);
        assert!(time.delta_seconds() >= 0.0);
    }

    #[test]
    fn uncapped_has_no_budget() {
        let time = Time::new(0);
        assert_eq!(time.remaining_budget(), Duration::ZERO);
    }

    #[test]
    fn elapsed_runs_from_creation() {
        let time = Time::new(60);
        let first = time.elapsed_seconds();
        std::thread::sleep(Duration::from_millis(5));
        assert!(first >= 0.0);
        assert!(time.elapsed_seconds() >= first + 0.004);
    }
}
