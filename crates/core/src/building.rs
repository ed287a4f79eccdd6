//! Building module - the value stored in an occupied grid cell

use crate::types::BuildingType;

/// A building placed on the grid.
///
/// Immutable after construction: the kind and the cell coordinates are fixed
/// for the lifetime of the value. The grid stores the building at exactly
/// these coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Building {
    kind: BuildingType,
    grid_x: i32,
    grid_y: i32,
}

impl Building {
    pub fn new(kind: BuildingType, grid_x: i32, grid_y: i32) -> Self {
        Self {
            kind,
            grid_x,
            grid_y,
        }
    }

    pub fn kind(&self) -> BuildingType {
        self.kind
    }

    pub fn grid_x(&self) -> i32 {
        self.grid_x
    }

    pub fn grid_y(&self) -> i32 {
        self.grid_y
    }

    /// Cell coordinates as `(x, y)`
    pub fn position(&self) -> (i32, i32) {
        (self.grid_x, self.grid_y)
    }
}
