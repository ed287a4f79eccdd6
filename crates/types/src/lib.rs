//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (placement model, input mapping, terminal rendering).
//!
//! # Grid Dimensions
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 15 rows (indexed 0-14)
//! - **Cell size**: 32 pixels (presentation only, the grid itself is index based)
//!
//! # Play Area
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WINDOW_WIDTH` | 800 | Play area width in pixels |
//! | `WINDOW_HEIGHT` | 600 | Play area height in pixels |
//! | `PLAYER_SIZE` | 64 | Player sprite edge in pixels |
//! | `PLAYER_SPEED` | 200.0 | Player speed in pixels per second |
//! | `ENEMY_SIZE` | 32 | Enemy sprite edge in pixels |
//! | `ENEMY_SPEED` | 80.0 | Enemy chase speed in pixels per second |
//! | `TICK_MS` | 16 | Fixed frame interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use factory_game_types::{BuildingType, GameAction, GRID_HEIGHT, GRID_WIDTH};
//!
//! let kind = BuildingType::Conveyor;
//! assert_eq!(kind.as_str(), "conveyor");
//! assert_eq!(BuildingType::from_str("FACTORY"), Some(BuildingType::Factory));
//!
//! let action = GameAction::PlaceAt { x: 1, y: 1 };
//! assert_eq!(action.as_str(), "placeAt");
//!
//! assert_eq!(GRID_WIDTH, 20);
//! assert_eq!(GRID_HEIGHT, 15);
//! ```

/// Grid width in cells (20 columns)
pub const GRID_WIDTH: i32 = 20;

/// Grid height in cells (15 rows)
pub const GRID_HEIGHT: i32 = 15;

/// Edge length of one grid cell in pixels
pub const CELL_SIZE: i32 = 32;

/// Play area width in pixels
pub const WINDOW_WIDTH: i32 = 800;

/// Play area height in pixels
pub const WINDOW_HEIGHT: i32 = 600;

/// Player movement speed in pixels per second
pub const PLAYER_SPEED: f32 = 200.0;

/// Player sprite edge length in pixels
pub const PLAYER_SIZE: i32 = 64;

/// Enemy chase speed in pixels per second
pub const ENEMY_SPEED: f32 = 80.0;

/// Enemy sprite edge length in pixels (one grid cell)
pub const ENEMY_SIZE: i32 = 32;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Alpha of the empty-cell background
pub const GRID_BACKGROUND_ALPHA: f32 = 0.2;

/// Alpha of placed building fills
pub const BUILDING_ALPHA: f32 = 0.7;

/// Alpha of the grid overlay lines
pub const GRID_OVERLAY_ALPHA: f32 = 0.3;

/// Alpha of the hover highlight
pub const HOVER_HIGHLIGHT_ALPHA: f32 = 0.5;


/// The kinds of building that can be placed on the grid
///
/// - **Factory**: produces goods, drawn orange
/// - **Conveyor**: moves goods between cells, drawn steel blue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildingType {
    Factory,
    Conveyor,
}

impl BuildingType {
    /// Parse building type from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "factory" => Some(BuildingType::Factory),
            "conveyor" => Some(BuildingType::Conveyor),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildingType::Factory => "factory",
            BuildingType::Conveyor => "conveyor",
        }
    }
}

/// Screen-space movement direction (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step for this direction as `(dx, dy)`
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Game actions that can be applied to a session
///
/// Produced by the input layer, consumed by `GameSession::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Select factories for subsequent placements
    SelectFactory,
    /// Select conveyors for subsequent placements
    SelectConveyor,
    /// Show or hide the grid overlay
    ToggleGrid,
    /// Place the selected building at a grid cell
    PlaceAt { x: i32, y: i32 },
    /// Remove whatever building occupies a grid cell
    RemoveAt { x: i32, y: i32 },
    /// Place the selected building at the hovered cell
    PlaceHovered,
    /// Remove the building at the hovered cell
    RemoveHovered,
}

impl GameAction {
    /// Convert to camelCase string (used in log fields)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::SelectFactory => "selectFactory",
            GameAction::SelectConveyor => "selectConveyor",
            GameAction::ToggleGrid => "toggleGrid",
            GameAction::PlaceAt { .. } => "placeAt",
            GameAction::RemoveAt { .. } => "removeAt",
            GameAction::PlaceHovered => "placeHovered",
            GameAction::RemoveHovered => "removeHovered",
        }
    }
}
