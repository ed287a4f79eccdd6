//! Grid overlay state: visibility and hover lookup.
//!
//! Drawing is left to the view; this module only answers which lines exist
//! and which cell sits under a pixel position.

use crate::types::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOverlay {
    visible: bool,
}

impl GridOverlay {
    pub fn new() -> Self {
        Self { visible: true }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// Map a pixel position to the grid cell containing it.
    ///
    /// Uses floor division, so pixels left of or above the grid map to
    /// negative cells and are rejected.
    pub fn cell_at(px: f32, py: f32) -> Option<(i32, i32)> {
        if !px.is_finite() || !py.is_finite() {
            return None;
        }
        let cell = CELL_SIZE as f32;
        let x = (px / cell).floor();
        let y = (py / cell).floor();
        if x < 0.0 || y < 0.0 || x >= GRID_WIDTH as f32 || y >= GRID_HEIGHT as f32 {
            return None;
        }
        Some((x as i32, y as i32))
    }

    /// Cell to highlight for the given mouse position, if the overlay is shown
    pub fn hovered_cell(&self, mouse: Option<(f32, f32)>) -> Option<(i32, i32)> {
        if !self.visible {
            return None;
        }
        let (px, py) = mouse?;
        Self::cell_at(px, py)
    }

    /// Pixel x offsets of the vertical grid lines (both outer edges included)
    pub fn vertical_lines() -> impl Iterator<Item = i32> {
        (0..=GRID_WIDTH).map(|x| x * CELL_SIZE)
    }

    /// Pixel y offsets of the horizontal grid lines (both outer edges included)
    pub fn horizontal_lines() -> impl Iterator<Item = i32> {
        (0..=GRID_HEIGHT).map(|y| y * CELL_SIZE)
    }
}

impl Default for GridOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_visible_and_toggles() {
        let mut overlay = GridOverlay::new();
        assert!(overlay.is_visible());
        overlay.toggle_visibility();
        assert!(!overlay.is_visible());
        overlay.toggle_visibility();
        assert!(overlay.is_visible());
    }

    #[test]
    fn cell_at_floors_pixel_coordinates() {
        assert_eq!(GridOverlay::cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(GridOverlay::cell_at(31.9, 31.9), Some((0, 0)));
        assert_eq!(GridOverlay::cell_at(32.0, 64.0), Some((1, 2)));
        assert_eq!(GridOverlay::cell_at(639.0, 479.0), Some((19, 14)));
    }

    #[test]
    fn cell_at_rejects_pixels_outside_grid() {
        assert_eq!(GridOverlay::cell_at(-1.0, 10.0), None);
        assert_eq!(GridOverlay::cell_at(10.0, -0.5), None);
        assert_eq!(GridOverlay::cell_at(640.0, 10.0), None);
        assert_eq!(GridOverlay::cell_at(10.0, 480.0), None);
        assert_eq!(GridOverlay::cell_at(f32::NAN, 10.0), None);
    }

    #[test]
    fn hidden_overlay_has_no_hover() {
        let overlay = GridOverlay::new().with_visible(false);
        assert_eq!(overlay.hovered_cell(Some((40.0, 40.0))), None);

        let overlay = GridOverlay::new();
        assert_eq!(overlay.hovered_cell(Some((40.0, 40.0))), Some((1, 1)));
        assert_eq!(overlay.hovered_cell(None), None);
    }

    #[test]
    fn line_offsets_cover_both_edges() {
        let v: Vec<i32> = GridOverlay::vertical_lines().collect();
        assert_eq!(v.len(), 21);
        assert_eq!(v.first(), Some(&0));
        assert_eq!(v.last(), Some(&640));

        let h: Vec<i32> = GridOverlay::horizontal_lines().collect();
        assert_eq!(h.len(), 16);
        assert_eq!(h.last(), Some(&480));
    }
}
