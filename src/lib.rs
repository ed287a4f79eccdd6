//! Factory game (workspace facade crate).
//!
//! Re-exports the workspace crates under `factory_game::{core,engine,input,term,types}`
//! and hosts the binary's runtime configuration and logging setup.

pub mod config;
pub mod logging;

pub use factory_game_core as core;
pub use factory_game_engine as engine;
pub use factory_game_input as input;
pub use factory_game_term as term;
pub use factory_game_types as types;

pub use config::AppConfig;
