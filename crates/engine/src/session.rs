//! Frame-level game session: owns the grid, player, enemies and overlay.
//!
//! Every mutation of the grid goes through [`BuildingManager`]. Rendering reads
//! the session through the accessor methods only.

use tracing::{debug, info};

use crate::core::{Enemy, Grid, GridOverlay, Player};
use crate::manager::BuildingManager;
use crate::types::{BuildingType, GameAction};

#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    player: Player,
    enemies: Vec<Enemy>,
    overlay: GridOverlay,
    selected: BuildingType,
    /// Mouse position in play-area pixels, if the pointer is over the play area
    hover: Option<(f32, f32)>,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            player: Player::default(),
            enemies: Vec::new(),
            overlay: GridOverlay::new(),
            selected: BuildingType::Factory,
            hover: None,
        }
    }

    pub fn with_player_at(mut self, x: f32, y: f32) -> Self {
        self.player.set_position(x, y);
        self
    }

    pub fn with_enemy_at(mut self, x: f32, y: f32) -> Self {
        self.spawn_enemy(x, y);
        self
    }

    pub fn with_overlay_visible(mut self, visible: bool) -> Self {
        self.overlay.set_visible(visible);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Add an enemy at a pixel position (clamped into the play area).
    pub fn spawn_enemy(&mut self, x: f32, y: f32) {
        let enemy = Enemy::new(x, y);
        let (ex, ey) = enemy.position();
        debug!(x = ex, y = ey, "enemy spawned");
        self.enemies.push(enemy);
    }

    pub fn overlay(&self) -> &GridOverlay {
        &self.overlay
    }

    pub fn selected(&self) -> BuildingType {
        self.selected
    }

    pub fn hover(&self) -> Option<(f32, f32)> {
        self.hover
    }

    pub fn set_hover(&mut self, hover: Option<(f32, f32)>) {
        self.hover = hover;
    }

    /// Cell under the pointer, regardless of overlay visibility.
    ///
    /// Placement targets this cell; the highlight uses [`Self::hovered_cell`].
    pub fn target_cell(&self) -> Option<(i32, i32)> {
        let (px, py) = self.hover?;
        GridOverlay::cell_at(px, py)
    }

    /// Cell the overlay highlights (None while the overlay is hidden).
    pub fn hovered_cell(&self) -> Option<(i32, i32)> {
        self.overlay.hovered_cell(self.hover)
    }

    /// Apply a single action. Returns true if the session changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::SelectFactory => self.select(BuildingType::Factory),
            GameAction::SelectConveyor => self.select(BuildingType::Conveyor),
            GameAction::ToggleGrid => {
                self.overlay.toggle_visibility();
                info!(visible = self.overlay.is_visible(), "grid overlay toggled");
                true
            }
            GameAction::PlaceAt { x, y } => self.place(x, y),
            GameAction::RemoveAt { x, y } => self.remove(x, y),
            GameAction::PlaceHovered => match self.target_cell() {
                Some((x, y)) => self.place(x, y),
                None => false,
            },
            GameAction::RemoveHovered => match self.target_cell() {
                Some((x, y)) => self.remove(x, y),
                None => false,
            },
        }
    }

    /// Advance one frame: the player moves first, then every enemy steers
    /// towards the player's new centre.
    pub fn tick(&mut self, elapsed_ms: u32, direction: (i8, i8)) {
        let elapsed_secs = elapsed_ms as f32 / 1000.0;
        self.player.update(elapsed_secs, direction);
        let target = self.player.center();
        for enemy in &mut self.enemies {
            enemy.update(elapsed_secs, target);
        }
    }

    fn select(&mut self, kind: BuildingType) -> bool {
        if self.selected == kind {
            return false;
        }
        self.selected = kind;
        debug!(kind = kind.as_str(), "building selected");
        true
    }

    fn place(&mut self, x: i32, y: i32) -> bool {
        let kind = self.selected;
        match BuildingManager::new(&mut self.grid).place(kind, x, y) {
            Ok(()) => {
                debug!(kind = kind.as_str(), x, y, "building placed");
                true
            }
            Err(err) => {
                debug!(kind = kind.as_str(), x, y, reason = err.code(), "placement rejected");
                false
            }
        }
    }

    fn remove(&mut self, x: i32, y: i32) -> bool {
        match BuildingManager::new(&mut self.grid).remove(x, y) {
            Ok(kind) => {
                debug!(kind = kind.as_str(), x, y, "building removed");
                true
            }
            Err(err) => {
                debug!(x, y, reason = err.code(), "removal rejected");
                false
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_defaults() {
        let s = GameSession::new();
        assert_eq!(s.selected(), BuildingType::Factory);
        assert!(s.overlay().is_visible());
        assert_eq!(s.grid().occupied_count(), 0);
        assert_eq!(s.player().position(), (0.0, 0.0));
    }

    #[test]
    fn selection_changes_placed_kind() {
        let mut s = GameSession::new();
        assert!(s.apply_action(GameAction::SelectConveyor));
        assert!(!s.apply_action(GameAction::SelectConveyor));
        assert!(s.apply_action(GameAction::PlaceAt { x: 0, y: 0 }));
        assert_eq!(
            s.grid().get_building(0, 0).map(|b| b.kind()),
            Some(BuildingType::Conveyor)
        );
    }

    #[test]
    fn hovered_place_targets_cell_under_pointer() {
        let mut s = GameSession::new();
        s.set_hover(Some((70.0, 40.0)));
        assert_eq!(s.target_cell(), Some((2, 1)));
        assert!(s.apply_action(GameAction::PlaceHovered));
        assert!(s.grid().is_cell_occupied(2, 1));
        assert!(!s.apply_action(GameAction::PlaceHovered));
        assert!(s.apply_action(GameAction::RemoveHovered));
        assert!(!s.grid().is_cell_occupied(2, 1));
    }

    #[test]
    fn hidden_overlay_still_allows_placement() {
        let mut s = GameSession::new().with_overlay_visible(false);
        s.set_hover(Some((5.0, 5.0)));
        assert_eq!(s.hovered_cell(), None);
        assert!(s.apply_action(GameAction::PlaceHovered));
        assert!(s.grid().is_cell_occupied(0, 0));
    }

    #[test]
    fn hover_outside_grid_is_a_no_op() {
        let mut s = GameSession::new();
        s.set_hover(Some((700.0, 500.0)));
        assert!(!s.apply_action(GameAction::PlaceHovered));
        assert!(!s.apply_action(GameAction::RemoveHovered));
        s.set_hover(None);
        assert!(!s.apply_action(GameAction::PlaceHovered));
        assert_eq!(s.grid().occupied_count(), 0);
    }

    #[test]
    fn tick_moves_player() {
        let mut s = GameSession::new().with_player_at(100.0, 100.0);
        s.tick(500, (0, 1));
        assert_eq!(s.player().position(), (100.0, 200.0));
    }

    #[test]
    fn tick_steers_enemies_towards_player() {
        // Player centre (232, 232); enemies level with it on either side.
        let mut s = GameSession::new()
            .with_player_at(200.0, 200.0)
            .with_enemy_at(484.0, 216.0)
            .with_enemy_at(16.0, 216.0);
        s.tick(1000, (0, 0));

        assert_eq!(s.enemies()[0].position(), (404.0, 216.0));
        assert_eq!(s.enemies()[1].position(), (96.0, 216.0));
    }

    #[test]
    fn enemies_follow_a_moving_player() {
        let mut s = GameSession::new()
            .with_player_at(400.0, 300.0)
            .with_enemy_at(0.0, 0.0);
        let start = s.enemies()[0].center();
        for _ in 0..10 {
            s.tick(100, (1, 0));
        }
        let end = s.enemies()[0].center();
        assert!(end.0 > start.0 && end.1 > start.1);
        // One second at enemy speed, bent slightly by the player's motion.
        let moved = ((end.0 - start.0).powi(2) + (end.1 - start.1).powi(2)).sqrt();
        assert!(moved <= 80.01 && moved > 75.0, "moved {}", moved);
    }

    #[test]
    fn new_session_has_no_enemies() {
        assert!(GameSession::new().enemies().is_empty());
    }
}
