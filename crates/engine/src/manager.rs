//! Validated placement and removal on a borrowed grid.

use crate::core::{Building, CellError, Grid};
use crate::types::BuildingType;

/// Stateless coordinator for placement requests.
///
/// Borrows the grid for as long as it lives; the grid itself is owned
/// elsewhere (normally by [`crate::GameSession`]) and outlives the manager.
pub struct BuildingManager<'a> {
    grid: &'a mut Grid,
}

impl<'a> BuildingManager<'a> {
    pub fn new(grid: &'a mut Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// Place a new building of `kind` at (x, y).
    ///
    /// All-or-nothing: an out-of-range or occupied cell leaves the grid
    /// untouched and reports the reason.
    pub fn place(&mut self, kind: BuildingType, x: i32, y: i32) -> Result<(), CellError> {
        self.grid.try_place(Building::new(kind, x, y))
    }

    /// Place a new building of `kind` at (x, y). Returns false on rejection.
    pub fn try_place_building(&mut self, kind: BuildingType, x: i32, y: i32) -> bool {
        self.place(kind, x, y).is_ok()
    }

    /// Remove the building at (x, y), returning its kind.
    pub fn remove(&mut self, x: i32, y: i32) -> Result<BuildingType, CellError> {
        self.grid.try_remove(x, y).map(|b| b.kind())
    }

    /// Remove the building at (x, y). Returns false if there was none.
    pub fn remove_building(&mut self, x: i32, y: i32) -> bool {
        self.grid.remove_building(x, y)
    }
}
