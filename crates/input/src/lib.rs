//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm`
//! key and mouse events into [`crate::types::GameAction`] and tracks held movement
//! keys in terminals with or without key-release events.

pub mod handler;
pub mod map;

pub use factory_game_types as types;

pub use handler::MovementInput;
pub use map::{handle_key_event, handle_mouse_event, movement_direction, should_quit};
