use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::{Direction, Intent};

/// Translate a key press into an intent. Unbound keys map to `None`.
pub fn intent_for(key: KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Intent::Exit),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Intent::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Intent::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Intent::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Intent::Move(Direction::Right))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Restart),
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Char('q') | KeyCode::Char('Q')
        | KeyCode::Esc => Some(Intent::Exit),
        _ => None,
    }
}
