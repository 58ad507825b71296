//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Arrows, vi keys (`hjkl`) and `wasd` slide; `r` restarts.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let direction = match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Direction::Left,
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Direction::Right,
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Direction::Up,
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Direction::Down,
        KeyCode::Char('r' | 'R') => return Some(GameAction::Restart),
        _ => return None,
    };
    Some(GameAction::Move(direction))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
