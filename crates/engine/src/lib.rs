//! Placement workflow and frame orchestration.
//!
//! - [`manager`]: [`BuildingManager`], the only mutation path into the grid
//! - [`session`]: [`GameSession`], which turns [`types::GameAction`]s into
//!   manager calls and advances the player every frame

pub mod manager;
pub mod session;

pub use factory_game_core as core;
pub use factory_game_types as types;

pub use manager::BuildingManager;
pub use session::GameSession;
