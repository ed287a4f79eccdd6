//! Held-direction tracker for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a direction counts as held until no press (or repeat) for it has arrived
//! for `key_release_timeout_ms`. Once a real release event is observed the
//! timeout is no longer applied.

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::map::movement_direction;
use crate::types::Direction;

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

// Long enough to bridge the gaps between terminal auto-repeat events,
// short enough that a single tap does not glide across the screen.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone)]
pub struct MovementInput {
    /// Milliseconds since the last press, per direction; None when not held
    held: [Option<u32>; 4],
    key_release_timeout_ms: u32,
    release_events_seen: bool,
}

fn slot(dir: Direction) -> usize {
    match dir {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}

impl MovementInput {
    pub fn new() -> Self {
        Self {
            held: [None; 4],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            release_events_seen: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Register a press or auto-repeat. Returns the direction if the key moves.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Direction> {
        let dir = movement_direction(code)?;
        self.held[slot(dir)] = Some(0);
        Some(dir)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        self.release_events_seen = true;
        if let Some(dir) = movement_direction(code) {
            self.held[slot(dir)] = None;
        }
    }

    /// Age held keys by `elapsed_ms`, auto-releasing stale ones.
    pub fn update(&mut self, elapsed_ms: u32) {
        let timeout = self.key_release_timeout_ms;
        let auto_release = !self.release_events_seen;
        for entry in &mut self.held {
            if let Some(age) = *entry {
                let next = age.saturating_add(elapsed_ms);
                *entry = if auto_release && next > timeout {
                    None
                } else {
                    Some(next)
                };
            }
        }
    }

    /// Directions currently held, in Up/Down/Left/Right order
    pub fn held(&self) -> ArrayVec<Direction, 4> {
        DIRECTIONS
            .iter()
            .copied()
            .filter(|d| self.held[slot(*d)].is_some())
            .collect()
    }

    /// Sum of held directions as `(dx, dy)`; opposite keys cancel out.
    pub fn direction(&self) -> (i8, i8) {
        self.held().iter().fold((0, 0), |(x, y), d| {
            let (dx, dy) = d.delta();
            (x + dx, y + dy)
        })
    }

    pub fn reset(&mut self) {
        self.held = [None; 4];
    }
}

impl Default for MovementInput {
    fn default() -> Self {
        Self::new()
    }
}
