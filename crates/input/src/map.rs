//! Key mapping from terminal events to game commands.

use crate::types::{Direction, GameCommand, Side};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game commands.
///
/// Arrows steer within the projected plane, `z`/`x` steer along the depth
/// axis, and `w`/`s`/`d` switch the projected cube face.
pub fn handle_key_event(key: KeyEvent) -> Option<GameCommand> {
    match key.code {
        // Steering
        KeyCode::Up => Some(GameCommand::Steer(Direction::Up)),
        KeyCode::Down => Some(GameCommand::Steer(Direction::Down)),
        KeyCode::Left => Some(GameCommand::Steer(Direction::Left)),
        KeyCode::Right => Some(GameCommand::Steer(Direction::Right)),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameCommand::Steer(Direction::Forward)),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(GameCommand::Steer(Direction::Backward)),

        // Projected face
        KeyCode::Char('w') | KeyCode::Char('W') => Some(GameCommand::Face(Side::TopYx)),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameCommand::Face(Side::FrontZx)),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(GameCommand::Face(Side::RightYz)),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameCommand::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
