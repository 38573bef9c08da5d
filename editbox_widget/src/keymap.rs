//! Translation from input events to edit keys

use editbox_core::EditKey;
use input_types::{KeyCode, KeyEvent};

/// Map a key event onto the interpreter's vocabulary.
///
/// Releases never map. Keys with no edit meaning map to `None`.
pub fn translate(event: &KeyEvent) -> Option<EditKey> {
    if event.is_released() {
        return None;
    }

    match event.code {
        KeyCode::Escape => Some(EditKey::Escape),
        KeyCode::Enter => Some(EditKey::Enter),
        KeyCode::Backspace => Some(EditKey::Backspace),
        KeyCode::Left => Some(EditKey::Left),
        KeyCode::Right => Some(EditKey::Right),
        KeyCode::Up => Some(EditKey::Up),
        KeyCode::Down => Some(EditKey::Down),
        _ => event.printable().map(EditKey::Char),
    }
}
