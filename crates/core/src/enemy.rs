//! Enemy module - sprites that chase a target point
//!
//! Like [`crate::Player`], positions are pixels at the sprite's top-left
//! corner, clamped to `[0, WINDOW_WIDTH - ENEMY_SIZE] x [0, WINDOW_HEIGHT - ENEMY_SIZE]`.
//! Steering aims the sprite's centre at the target.

use crate::types::{ENEMY_SIZE, ENEMY_SPEED, WINDOW_HEIGHT, WINDOW_WIDTH};

const MAX_X: f32 = (WINDOW_WIDTH - ENEMY_SIZE) as f32;
const MAX_Y: f32 = (WINDOW_HEIGHT - ENEMY_SIZE) as f32;
const HALF: f32 = ENEMY_SIZE as f32 / 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    x: f32,
    y: f32,
    speed: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32) -> Self {
        let mut enemy = Self {
            x: 0.0,
            y: 0.0,
            speed: ENEMY_SPEED,
        };
        enemy.set_position(x, y);
        enemy
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Centre of the sprite in pixels
    pub fn center(&self) -> (f32, f32) {
        (self.x + HALF, self.y + HALF)
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn size(&self) -> i32 {
        ENEMY_SIZE
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = clamp_axis(x, MAX_X);
        self.y = clamp_axis(y, MAX_Y);
    }

    /// Move the centre towards `target` at `speed` for `elapsed_secs`.
    ///
    /// Stops on the target instead of overshooting it.
    pub fn update(&mut self, elapsed_secs: f32, target: (f32, f32)) {
        let (cx, cy) = self.center();
        let (dx, dy) = (target.0 - cx, target.1 - cy);
        let dist = (dx * dx + dy * dy).sqrt();
        if !dist.is_finite() || dist == 0.0 {
            return;
        }
        let step = (self.speed * elapsed_secs.max(0.0)).min(dist);
        self.set_position(self.x + dx / dist * step, self.y + dy / dist * step);
    }
}

fn clamp_axis(v: f32, max: f32) -> f32 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, max)
}
