//! Platform-independent key representation

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Key understood by the edit interpreter.
///
/// Hosts translate their own input events into this; anything they cannot
/// translate is simply never delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum EditKey {
    /// Printable character
    Char(char),

    // Navigation
    Left,
    Right,
    Up,
    Down,

    // Special keys
    Enter,
    Backspace,
    Escape,
}

impl EditKey {
    /// Convert an ASCII byte to a key (for byte-oriented hosts and tests)
    pub fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            0x1B => Some(EditKey::Escape),
            0x08 | 0x7F => Some(EditKey::Backspace),
            b'\r' | b'\n' => Some(EditKey::Enter),
            ch if (0x20..0x7F).contains(&ch) => Some(EditKey::Char(ch as char)),
            _ => None,
        }
    }
}
