//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};

/// Map keyboard input to game actions.
///
/// Movement keys are not mapped here; they feed [`crate::MovementInput`].
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Building selection
        KeyCode::Char('1') | KeyCode::Char('f') | KeyCode::Char('F') => {
            Some(GameAction::SelectFactory)
        }
        KeyCode::Char('2') | KeyCode::Char('c') | KeyCode::Char('C')
            if !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(GameAction::SelectConveyor)
        }

        // Overlay
        KeyCode::Char('g') | KeyCode::Char('G') => Some(GameAction::ToggleGrid),

        // Placement at the hovered cell
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::PlaceHovered),
        KeyCode::Backspace | KeyCode::Delete | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(GameAction::RemoveHovered)
        }

        _ => None,
    }
}

/// Map a mouse button event to the action it triggers at the hovered cell.
///
/// Dragging with a button held keeps placing (or removing) along the path.
pub fn handle_mouse_event(kind: MouseEventKind) -> Option<GameAction> {
    match kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            Some(GameAction::PlaceHovered)
        }
        MouseEventKind::Down(MouseButton::Right) | MouseEventKind::Drag(MouseButton::Right) => {
            Some(GameAction::RemoveHovered)
        }
        _ => None,
    }
}

/// Map a key to the movement direction it controls, if any.
pub fn movement_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
