//! Player module - the movable sprite and its clamped motion
//!
//! Positions are in pixels, top-left origin, measured at the sprite's
//! top-left corner. The reachable area is
//! `[0, WINDOW_WIDTH - PLAYER_SIZE] x [0, WINDOW_HEIGHT - PLAYER_SIZE]`.

use crate::types::{PLAYER_SIZE, PLAYER_SPEED, WINDOW_HEIGHT, WINDOW_WIDTH};

const MAX_X: f32 = (WINDOW_WIDTH - PLAYER_SIZE) as f32;
const MAX_Y: f32 = (WINDOW_HEIGHT - PLAYER_SIZE) as f32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    x: f32,
    y: f32,
    speed: f32,
}

impl Player {
    /// Create a player at the given pixel position (clamped into the play area)
    pub fn new(x: f32, y: f32) -> Self {
        let mut player = Self {
            x: 0.0,
            y: 0.0,
            speed: PLAYER_SPEED,
        };
        player.set_position(x, y);
        player
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Centre of the sprite in pixels
    pub fn center(&self) -> (f32, f32) {
        let half = PLAYER_SIZE as f32 / 2.0;
        (self.x + half, self.y + half)
    }

    /// Pixels per second
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn size(&self) -> i32 {
        PLAYER_SIZE
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = clamp_axis(x, MAX_X);
        self.y = clamp_axis(y, MAX_Y);
    }

    /// Advance by `elapsed_secs` along `direction`.
    ///
    /// `direction` is the sum of held unit directions; diagonals are
    /// normalized so every heading moves at `speed`.
    pub fn update(&mut self, elapsed_secs: f32, direction: (i8, i8)) {
        let (dx, dy) = (direction.0 as f32, direction.1 as f32);
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        let len = (dx * dx + dy * dy).sqrt();
        let step = self.speed * elapsed_secs.max(0.0);
        self.set_position(self.x + dx / len * step, self.y + dy / len * step);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

fn clamp_axis(v: f32, max: f32) -> f32 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_input_keeps_position() {
        let mut p = Player::new(100.0, 100.0);
        p.update(0.016, (0, 0));
        assert_eq!(p.position(), (100.0, 100.0));
    }

    #[test]
    fn moves_at_configured_speed() {
        let mut p = Player::new(100.0, 100.0);
        p.update(0.5, (1, 0));
        assert_eq!(p.position(), (200.0, 100.0));
    }

    #[test]
    fn diagonal_is_normalized() {
        let mut p = Player::new(100.0, 100.0);
        p.update(1.0, (1, 1));
        let (x, y) = p.position();
        let travelled = ((x - 100.0).powi(2) + (y - 100.0).powi(2)).sqrt();
        assert!((travelled - PLAYER_SPEED).abs() < 0.01);
    }

    #[test]
    fn clamps_at_upper_bounds() {
        let mut p = Player::new(MAX_X, MAX_Y);
        p.update(1.0, (1, 1));
        assert_eq!(p.position(), (MAX_X, MAX_Y));
    }

    #[test]
    fn clamps_at_lower_bounds() {
        let mut p = Player::new(0.0, 0.0);
        p.update(1.0, (-1, -1));
        assert_eq!(p.position(), (0.0, 0.0));
    }

    #[test]
    fn constructor_clamps_out_of_area_start() {
        let p = Player::new(-20.0, 10_000.0);
        assert_eq!(p.position(), (0.0, MAX_Y));
    }
}
