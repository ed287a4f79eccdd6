//! GameView: maps an `engine::GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The play area is the 800x600 px window of the model. Each 32 px grid cell
//! becomes a block of `cell_w x cell_h` terminal cells; the last row of the
//! play area is a partial cell (600 is not a multiple of 32) and is drawn
//! as a full row.

use crate::core::GridOverlay;
use crate::engine::GameSession;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    BuildingType, BUILDING_ALPHA, CELL_SIZE, ENEMY_SIZE, GRID_BACKGROUND_ALPHA, GRID_HEIGHT,
    GRID_OVERLAY_ALPHA, GRID_WIDTH, HOVER_HIGHLIGHT_ALPHA, PLAYER_SIZE, WINDOW_HEIGHT,
    WINDOW_WIDTH,
};

/// Play area size in (possibly partial) grid cells.
const AREA_COLS: u16 = ((WINDOW_WIDTH + CELL_SIZE - 1) / CELL_SIZE) as u16;
const AREA_ROWS: u16 = ((WINDOW_HEIGHT + CELL_SIZE - 1) / CELL_SIZE) as u16;

const BASE_BG: Rgb = Rgb::new(20, 20, 28);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const YELLOW: Rgb = Rgb::new(255, 220, 0);
const FACTORY: Rgb = Rgb::new(255, 140, 0);
const CONVEYOR: Rgb = Rgb::new(70, 130, 180);
const PLAYER: Rgb = Rgb::new(220, 40, 40);
const ENEMY: Rgb = Rgb::new(170, 70, 230);

/// Largest supported grid cell size in terminal cells, per axis.
const MAX_CELL_SCALE: u16 = 8;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Frame placement for one viewport: top-left of the border and its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl Layout {
    fn inner_x(&self) -> u16 {
        self.start_x + 1
    }

    fn inner_y(&self) -> u16 {
        self.start_y + 1
    }
}

/// A lightweight terminal renderer for the placement game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    /// Scale is clamped to `1..=8` terminal cells per grid cell on each axis.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SCALE),
            cell_h: cell_h.clamp(1, MAX_CELL_SCALE),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = AREA_COLS * self.cell_w + 2;
        let frame_h = AREA_ROWS * self.cell_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        Layout {
            start_x,
            start_y,
            frame_w,
            frame_h,
        }
    }

    /// Map a terminal position to play-area pixels.
    ///
    /// Returns the pixel at the centre of the hovered terminal cell, or None
    /// if the position is outside the play area.
    pub fn screen_to_pixel(&self, viewport: Viewport, column: u16, row: u16) -> Option<(f32, f32)> {
        let layout = self.layout(viewport);
        let dx = column.checked_sub(layout.inner_x())?;
        let dy = row.checked_sub(layout.inner_y())?;
        if dx >= AREA_COLS * self.cell_w || dy >= AREA_ROWS * self.cell_h {
            return None;
        }
        let px = (dx as f32 + 0.5) * CELL_SIZE as f32 / self.cell_w as f32;
        let py = (dy as f32 + 0.5) * CELL_SIZE as f32 / self.cell_h as f32;
        if px >= WINDOW_WIDTH as f32 || py >= WINDOW_HEIGHT as f32 {
            return None;
        }
        Some((px, py))
    }

    /// Render the session into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, session: &GameSession, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let bg = CellStyle {
            fg: BASE_BG,
            bg: BASE_BG,
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Background for the whole play area.
        fb.fill_rect(
            layout.inner_x(),
            layout.inner_y(),
            AREA_COLS * self.cell_w,
            AREA_ROWS * self.cell_h,
            ' ',
            bg,
        );

        self.draw_border(fb, layout.start_x, layout.start_y, layout.frame_w, layout.frame_h, border);

        // Grid cells.
        let grid = session.grid();
        let show_grid = session.overlay().is_visible();
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                match grid.get_building(x, y) {
                    Some(building) => self.draw_building(fb, layout, x as u16, y as u16, building.kind()),
                    None => self.draw_empty_cell(fb, layout, x as u16, y as u16, show_grid),
                }
            }
        }

        if show_grid {
            self.draw_overlay_ticks(fb, layout, border);
        }

        // Hover highlight.
        if let Some((x, y)) = session.hovered_cell() {
            self.highlight_cell(fb, layout, x as u16, y as u16);
        }

        self.draw_enemies(fb, layout, session);
        self.draw_player(fb, layout, session);
        self.draw_side_panel(fb, session, viewport, layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &GameSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Mark every grid line where it meets the frame.
    fn draw_overlay_ticks(&self, fb: &mut FrameBuffer, layout: Layout, style: CellStyle) {
        let bottom = layout.start_y + layout.frame_h - 1;
        let right = layout.start_x + layout.frame_w - 1;
        for px in GridOverlay::vertical_lines() {
            let col = layout.inner_x() + (px / CELL_SIZE) as u16 * self.cell_w;
            fb.put_char(col, layout.start_y, '┬', style);
            fb.put_char(col, bottom, '┴', style);
        }
        for py in GridOverlay::horizontal_lines() {
            let row = layout.inner_y() + (py / CELL_SIZE) as u16 * self.cell_h;
            fb.put_char(layout.start_x, row, '├', style);
            fb.put_char(right, row, '┤', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, layout: Layout, x: u16, y: u16, show_grid: bool) {
        let cell_bg = BASE_BG.blend(WHITE, GRID_BACKGROUND_ALPHA);
        let style = CellStyle {
            fg: cell_bg.blend(WHITE, GRID_OVERLAY_ALPHA),
            bg: cell_bg,
            bold: false,
            dim: false,
        };
        let ch = if show_grid { '·' } else { ' ' };
        self.fill_cell_rect(fb, layout, x, y, ch, style);
    }

    fn draw_building(&self, fb: &mut FrameBuffer, layout: Layout, x: u16, y: u16, kind: BuildingType) {
        let (color, ch) = match kind {
            BuildingType::Factory => (FACTORY, '█'),
            BuildingType::Conveyor => (CONVEYOR, '≡'),
        };
        let bg = BASE_BG.blend(color, BUILDING_ALPHA);
        let style = CellStyle {
            fg: color,
            bg,
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, layout, x, y, ch, style);
    }

    fn highlight_cell(&self, fb: &mut FrameBuffer, layout: Layout, x: u16, y: u16) {
        let px = layout.inner_x() + x * self.cell_w;
        let py = layout.inner_y() + y * self.cell_h;
        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                let (cx, cy) = (px + dx, py + dy);
                if let Some(cell) = fb.get(cx, cy) {
                    fb.set_bg(cx, cy, cell.style.bg.blend(YELLOW, HOVER_HIGHLIGHT_ALPHA));
                }
            }
        }
    }

    fn draw_enemies(&self, fb: &mut FrameBuffer, layout: Layout, session: &GameSession) {
        let style = CellStyle {
            fg: ENEMY,
            bg: BASE_BG.blend(ENEMY, BUILDING_ALPHA),
            bold: true,
            dim: false,
        };
        for enemy in session.enemies() {
            self.draw_sprite(fb, layout, enemy.position(), ENEMY_SIZE, '◆', style);
        }
    }

    fn draw_player(&self, fb: &mut FrameBuffer, layout: Layout, session: &GameSession) {
        let style = CellStyle {
            fg: PLAYER,
            bg: BASE_BG.blend(PLAYER, BUILDING_ALPHA),
            bold: true,
            dim: false,
        };
        self.draw_sprite(fb, layout, session.player().position(), PLAYER_SIZE, '▓', style);
    }

    /// Fill the block covered by a square sprite of `size` px at `pos`.
    fn draw_sprite(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        pos: (f32, f32),
        size: i32,
        ch: char,
        style: CellStyle,
    ) {
        let col = (pos.0 / CELL_SIZE as f32 * self.cell_w as f32).round() as u16;
        let row = (pos.1 / CELL_SIZE as f32 * self.cell_h as f32).round() as u16;
        let cells = (size / CELL_SIZE).max(1) as u16;
        let w = cells * self.cell_w;
        let h = cells * self.cell_h;

        // Keep the sprite inside the frame even where the last row is partial.
        let max_col = AREA_COLS * self.cell_w - w;
        let max_row = AREA_ROWS * self.cell_h - h;
        fb.fill_rect(
            layout.inner_x() + col.min(max_col),
            layout.inner_y() + row.min(max_row),
            w,
            h,
            ch,
            style,
        );
    }

    fn fill_cell_rect(&self, fb: &mut FrameBuffer, layout: Layout, cell_x: u16, cell_y: u16, ch: char, style: CellStyle) {
        let px = layout.inner_x() + cell_x * self.cell_w;
        let py = layout.inner_y() + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, session: &GameSession, viewport: Viewport, layout: Layout) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let help = CellStyle { dim: true, ..value };

        let mut y = layout.start_y;
        fb.put_str(panel_x, y, "BUILD", label);
        y = y.saturating_add(1);
        let selected = match session.selected() {
            BuildingType::Factory => "Factory",
            BuildingType::Conveyor => "Conveyor",
        };
        fb.put_str(panel_x, y, selected, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PLACED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, session.grid().occupied_count() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "GRID", label);
        y = y.saturating_add(1);
        fb.put_str(
            panel_x,
            y,
            if session.overlay().is_visible() { "ON" } else { "OFF" },
            value,
        );
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "CELL", label);
        y = y.saturating_add(1);
        match session.target_cell() {
            Some((cx, cy)) => {
                let n = fb.put_u32(panel_x, y, cx as u32, value);
                fb.put_char(panel_x + n, y, ',', value);
                fb.put_u32(panel_x + n + 1, y, cy as u32, value);
            }
            None => fb.put_str(panel_x, y, "-", value),
        }
        y = y.saturating_add(2);

        for line in [
            "1/2  select",
            "LMB  place",
            "RMB  remove",
            "G    grid",
            "WASD move",
            "Q    quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }
}
