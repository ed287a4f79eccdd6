//! Core placement model - pure, deterministic, and testable
//!
//! This crate contains the grid, the buildings stored on it, the player and
//! enemy sprites and the grid overlay state. It has **zero dependencies** on UI, input
//! devices, or I/O.
//!
//! # Module Structure
//!
//! - [`building`]: immutable building value (kind + cell coordinates)
//! - [`grid`]: 20x15 occupancy store with uniform bounds checks
//! - [`player`]: pixel-space sprite movement with boundary clamping
//! - [`enemy`]: sprites that steer towards the player
//! - [`overlay`]: grid overlay visibility and pixel-to-cell hover lookup
//! - [`error`]: reasons for rejected cell operations
//!
//! # Example
//!
//! ```
//! use factory_game_core::{Building, Grid};
//! use factory_game_types::BuildingType;
//!
//! let mut grid = Grid::new();
//! assert!(grid.place_building(Building::new(BuildingType::Factory, 2, 3)));
//! assert!(grid.is_cell_occupied(2, 3));
//!
//! // A second building on the same cell is rejected.
//! assert!(!grid.place_building(Building::new(BuildingType::Conveyor, 2, 3)));
//! assert_eq!(grid.get_building(2, 3).map(|b| b.kind()), Some(BuildingType::Factory));
//!
//! assert!(grid.remove_building(2, 3));
//! assert!(!grid.remove_building(2, 3));
//! ```

pub mod building;
pub mod enemy;
pub mod error;
pub mod grid;
pub mod overlay;
pub mod player;

pub use factory_game_types as types;

// Re-export commonly used types for convenience
pub use building::Building;
pub use enemy::Enemy;
pub use error::CellError;
pub use grid::Grid;
pub use overlay::GridOverlay;
pub use player::Player;
