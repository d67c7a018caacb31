//! Key mapping from terminal events to session commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Move;

/// A session-level command produced by the key map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Apply one named move immediately.
    Apply(Move),
    /// Apply the checkerboard pattern sequence.
    ChessPattern,
    /// Open the notation prompt for a free-form move sequence.
    OpenPrompt,
}

/// Map keyboard input to session commands.
///
/// Lowercase face keys are clockwise quarter turns, uppercase the inverse.
/// Double turns are entered through the notation prompt.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Quarter turns
        KeyCode::Char('r') => Some(Command::Apply(Move::R)),
        KeyCode::Char('l') => Some(Command::Apply(Move::L)),
        KeyCode::Char('u') => Some(Command::Apply(Move::U)),
        KeyCode::Char('d') => Some(Command::Apply(Move::D)),
        KeyCode::Char('f') => Some(Command::Apply(Move::F)),
        KeyCode::Char('b') => Some(Command::Apply(Move::B)),

        // Inverse turns
        KeyCode::Char('R') => Some(Command::Apply(Move::Ri)),
        KeyCode::Char('L') => Some(Command::Apply(Move::Li)),
        KeyCode::Char('U') => Some(Command::Apply(Move::Ui)),
        KeyCode::Char('D') => Some(Command::Apply(Move::Di)),
        KeyCode::Char('F') => Some(Command::Apply(Move::Fi)),
        KeyCode::Char('B') => Some(Command::Apply(Move::Bi)),

        // Composite / prompt
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::ChessPattern),
        KeyCode::Char(':') => Some(Command::OpenPrompt),

        _ => None,
    }
}

/// Check if key should quit the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
