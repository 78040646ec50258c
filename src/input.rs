//! Key mapping for terminal input.
//!
//! Stateless: every key event maps directly to at most one engine command.
//! Auto-repeat is left to the terminal; the engine treats repeated commands
//! the same as fresh ones.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Command;

/// Map a key press to an engine command (arrows or WASD).
pub fn map_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Down),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Rotate),
        _ => None,
    }
}

/// Quit keys: q, Esc, or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Restart key: r.
pub fn should_reset(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}
