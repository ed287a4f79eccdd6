//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and renders into a simple framebuffer
//! that is flushed to a terminal backend.
//!
//! Goals:
//! - Keep the placement model free of any rendering concern
//! - Map the pixel-space play area onto terminal cells (2 chars wide per grid cell)
//! - Map mouse positions back into play-area pixels for hover and placement

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use factory_game_core as core;
pub use factory_game_engine as engine;
pub use factory_game_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
