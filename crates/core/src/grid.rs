//! Grid module - authoritative store of cell occupancy
//!
//! The grid is a 20x15 field where each cell is either empty or holds one building.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..19 (left to right), y ranges 0..14 (top to bottom).
//! Every accessor treats out-of-range coordinates as "no building here".

use crate::building::Building;
use crate::error::CellError;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

/// The placement grid - 20 columns x 15 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Option<Building>; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH || y < 0 || y >= GRID_HEIGHT {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    /// Get width of the grid
    pub fn width(&self) -> i32 {
        GRID_WIDTH
    }

    /// Get height of the grid
    pub fn height(&self) -> i32 {
        GRID_HEIGHT
    }

    /// Check if (x, y) names a cell of this grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        Self::index(x, y).is_some()
    }

    /// Check if position holds a building.
    /// Out of bounds is never occupied.
    pub fn is_cell_occupied(&self, x: i32, y: i32) -> bool {
        matches!(Self::index(x, y).map(|idx| &self.cells[idx]), Some(Some(_)))
    }

    /// Get the building at (x, y).
    /// Returns None for empty and out-of-bounds cells alike.
    pub fn get_building(&self, x: i32, y: i32) -> Option<Building> {
        Self::index(x, y).and_then(|idx| self.cells[idx])
    }

    /// Store a building at its own coordinates if that cell exists and is empty.
    ///
    /// The occupancy check and the write happen here and nowhere else, so a
    /// rejected placement never mutates the grid.
    pub fn try_place(&mut self, building: Building) -> Result<(), CellError> {
        let (x, y) = building.position();
        let idx = Self::index(x, y).ok_or(CellError::OutOfBounds)?;
        let slot = &mut self.cells[idx];
        if slot.is_some() {
            return Err(CellError::Occupied);
        }
        *slot = Some(building);
        Ok(())
    }

    /// Place a building at its own coordinates.
    /// Returns false if out of bounds or occupied.
    pub fn place_building(&mut self, building: Building) -> bool {
        self.try_place(building).is_ok()
    }

    /// Clear the cell at (x, y), returning the building that stood there.
    pub fn try_remove(&mut self, x: i32, y: i32) -> Result<Building, CellError> {
        let idx = Self::index(x, y).ok_or(CellError::OutOfBounds)?;
        self.cells[idx].take().ok_or(CellError::Empty)
    }

    /// Remove the building at (x, y).
    /// Returns false if out of bounds or already empty.
    pub fn remove_building(&mut self, x: i32, y: i32) -> bool {
        self.try_remove(x, y).is_ok()
    }

    /// Iterate placed buildings in row-major order
    pub fn buildings(&self) -> impl Iterator<Item = &Building> + '_ {
        self.cells.iter().filter_map(|cell| cell.as_ref())
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
